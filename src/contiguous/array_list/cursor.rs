use std::marker::PhantomData;

use super::ArrayList;
#[doc(inline)]
pub use crate::util::error::{
    ConcurrentModification, InvalidCursorState, NoSuchElement, TraversalError,
};

/// A single forward pass over an [`ArrayList`], supporting in-place removal.
///
/// A Cursor holds no borrow of its list; instead it captures the list's modification
/// version at creation and every operation takes the list as an argument and compares
/// versions first. Any structural mutation the cursor didn't perform itself makes the
/// versions diverge, and every subsequent cursor operation fails with
/// [`ConcurrentModification`]. A cursor's own [`remove`](Cursor::remove) re-captures
/// the bumped version, so it stays valid while any *other* outstanding cursor on the
/// same list is invalidated.
///
/// A Cursor must only ever be handed the list that created it; pairing it with another
/// list is caught by the version check in the common case but is otherwise a logic
/// error (never a memory-safety one, since the position is a plain index).
///
/// # Examples
/// ```
/// # use iulist::contiguous::ArrayList;
/// let mut list: ArrayList<_> = [1, 2, 3, 4].into_iter().collect();
/// let mut cursor = list.cursor();
///
/// while cursor.has_next(&list).unwrap() {
///     if *cursor.next(&list).unwrap() % 2 == 0 {
///         cursor.remove(&mut list).unwrap();
///     }
/// }
/// assert_eq!(&*list, &[1, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    pub(crate) next_index: usize,
    pub(crate) expected_version: u64,
    pub(crate) can_remove: bool,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<T> Cursor<T> {
    /// Returns whether unvisited elements remain. Never mutates the cursor or the
    /// list.
    pub fn has_next(&self, list: &ArrayList<T>) -> Result<bool, ConcurrentModification> {
        self.check_version(list)?;
        Ok(self.next_index < list.len())
    }

    /// Returns the next element in forward order and marks it eligible for
    /// [`remove`](Cursor::remove). Fails with [`NoSuchElement`] once the pass is
    /// exhausted.
    pub fn next<'a>(&mut self, list: &'a ArrayList<T>) -> Result<&'a T, TraversalError> {
        if !self.has_next(list)? {
            return Err(NoSuchElement.into());
        }
        let value = &list[self.next_index];
        self.next_index += 1;
        self.can_remove = true;
        Ok(value)
    }

    /// Removes and returns the most-recently-returned element, repositioning the pass
    /// so the following [`next`](Cursor::next) yields the element after the removed
    /// one. Fails with [`InvalidCursorState`], without mutating the list, unless an
    /// unconsumed [`next`](Cursor::next) precedes it.
    pub fn remove(&mut self, list: &mut ArrayList<T>) -> Result<T, TraversalError> {
        self.check_version(list)?;
        if !self.can_remove {
            return Err(InvalidCursorState.into());
        }
        self.can_remove = false;
        self.next_index -= 1;
        // In bounds: next() put next_index past a live element and the version check
        // rules out any interleaved mutation.
        let value = list.remove(self.next_index);
        self.expected_version = list.version;
        Ok(value)
    }

    fn check_version(&self, list: &ArrayList<T>) -> Result<(), ConcurrentModification> {
        if self.expected_version == list.version {
            Ok(())
        } else {
            Err(ConcurrentModification {
                expected: self.expected_version,
                actual: list.version,
            })
        }
    }
}
