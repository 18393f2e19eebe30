use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index argument fell outside the bounds its operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for list with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A value-equality search found no matching element, or a traversal was asked for an
/// element past the end of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSuchElement;

impl Display for NoSuchElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No such element!")
    }
}

impl Error for NoSuchElement {}

/// The backing list was structurally modified behind a cursor's back: its version no
/// longer matches the snapshot the cursor captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrentModification {
    pub expected: u64,
    pub actual: u64,
}

impl Display for ConcurrentModification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "List modified during traversal (version {}, cursor captured {})!",
            self.actual, self.expected
        )
    }
}

impl Error for ConcurrentModification {}

/// A cursor was asked to remove without an unconsumed call to `next` before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCursorState;

impl Display for InvalidCursorState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor removal requires a preceding call to next!")
    }
}

impl Error for InvalidCursorState {}

/// The requested traversal mode isn't provided by this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedOperation;

impl Display for UnsupportedOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation is not supported by this list!")
    }
}

impl Error for UnsupportedOperation {}

/// Any of the ways a cursor operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum TraversalError {
    ConcurrentModification(ConcurrentModification),
    NoSuchElement(NoSuchElement),
    InvalidCursorState(InvalidCursorState),
}
