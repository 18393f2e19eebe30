use std::marker::PhantomData;

use super::SinglyLinkedList;
#[doc(inline)]
pub use crate::util::error::{
    ConcurrentModification, InvalidCursorState, NoSuchElement, TraversalError,
};

/// A single forward pass over a [`SinglyLinkedList`], supporting in-place removal.
///
/// The traversal contract is identical to the contiguous list's cursor: the cursor
/// captures the list's modification version at creation, takes the list as an argument
/// on every call, and fails with [`ConcurrentModification`] the moment the versions
/// diverge. Its own [`remove`](Cursor::remove) re-captures the bumped version, keeping
/// this cursor valid while invalidating every other outstanding cursor on the list.
///
/// The position is held as a plain index rather than a node pointer, which keeps the
/// cursor free of any borrow of (or alias into) the chain; the cost is a walk from the
/// head on each step, as all indexed access to this list pays.
///
/// A Cursor must only ever be handed the list that created it; pairing it with another
/// list is caught by the version check in the common case but is otherwise a logic
/// error.
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
    pub fn has_next(&self, list: &SinglyLinkedList<T>) -> Result<bool, ConcurrentModification> {
        self.check_version(list)?;
        Ok(self.next_index < list.len())
    }

    /// Returns the next element in forward order and marks it eligible for
    /// [`remove`](Cursor::remove). Fails with [`NoSuchElement`] once the pass is
    /// exhausted.
    pub fn next<'a>(&mut self, list: &'a SinglyLinkedList<T>) -> Result<&'a T, TraversalError> {
        if !self.has_next(list)? {
            return Err(NoSuchElement.into());
        }
        let node = list.seek(self.next_index).ok_or(NoSuchElement)?;
        self.next_index += 1;
        self.can_remove = true;
        Ok(&node.value)
    }

    /// Removes and returns the most-recently-returned element, repositioning the pass
    /// so the following [`next`](Cursor::next) yields the element after the removed
    /// one. Fails with [`InvalidCursorState`], without mutating the list, unless an
    /// unconsumed [`next`](Cursor::next) precedes it.
    pub fn remove(&mut self, list: &mut SinglyLinkedList<T>) -> Result<T, TraversalError> {
        self.check_version(list)?;
        if !self.can_remove {
            return Err(InvalidCursorState.into());
        }
        self.can_remove = false;
        self.next_index -= 1;
        // In bounds: next() put next_index past a live element and the version check
        // rules out any interleaved mutation. The removal re-walks from the head to
        // re-link the predecessor.
        let value = list.remove(self.next_index);
        self.expected_version = list.version;
        Ok(value)
    }

    fn check_version(&self, list: &SinglyLinkedList<T>) -> Result<(), ConcurrentModification> {
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
