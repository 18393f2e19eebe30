#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, NoSuchElement, UnsupportedOperation};

/// An ordered, mutable, unsorted sequence of elements, addressed by position.
///
/// Duplicates are permitted and no ordering is maintained beyond insertion order. The
/// two implementors - [`ArrayList`](crate::contiguous::ArrayList) and
/// [`SinglyLinkedList`](crate::linked::SinglyLinkedList) - differ only in layout and
/// therefore in the cost of each operation; every caller-observable outcome is
/// identical between them.
///
/// # Searching
/// All matching operations ([`index_of`](IndexedList::index_of),
/// [`contains`](IndexedList::contains), [`remove_item`](IndexedList::remove_item),
/// [`try_insert_after`](IndexedList::try_insert_after)) compare by value equality,
/// scanning from the front and taking the first match.
///
/// # Traversal
/// [`cursor`](IndexedList::cursor) starts a single forward pass which supports in-place
/// removal and fails fast: the cursor snapshots the list's modification version, and
/// any structural mutation the cursor didn't perform itself invalidates it. Each list
/// owns its version counter; it starts at 0 and only ever increases. Reads (`try_get`,
/// `index_of`, `contains`, rendering) never touch it.
///
/// Positioned and bidirectional traversal are deliberately not provided by either
/// implementor; [`cursor_at`](IndexedList::cursor_at) and
/// [`cursor_back`](IndexedList::cursor_back) exist so that the refusal is an error
/// value rather than a missing method.
pub trait IndexedList<T> {
    /// The fail-fast traversal handle produced by [`cursor`](IndexedList::cursor).
    type Cursor;

    /// Inserts `value` before the first element.
    fn push_front(&mut self, value: T);

    /// Inserts `value` after the last element.
    fn push_back(&mut self, value: T);

    /// Inserts `value` at `index`, shifting the element previously at `index` (and
    /// everything after it) one position towards the rear. `index == len` appends.
    fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds>;

    /// Inserts `value` immediately after the first element equal to `target`, or fails
    /// without mutating the list if no element matches.
    fn try_insert_after(&mut self, value: T, target: &T) -> Result<(), NoSuchElement>
    where
        T: PartialEq;

    /// Removes and returns the first element, or [`None`] if the list is empty.
    fn pop_front(&mut self) -> Option<T>;

    /// Removes and returns the last element, or [`None`] if the list is empty.
    fn pop_back(&mut self) -> Option<T>;

    /// Removes and returns the first element equal to `target`, or [`None`] if no
    /// element matches.
    fn remove_item(&mut self, target: &T) -> Option<T>
    where
        T: PartialEq;

    /// Removes and returns the element at `index`.
    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds>;

    /// Overwrites the element at `index` with `value`, returning the old element. This
    /// is a value overwrite, not a structural mutation: outstanding cursors stay valid
    /// and `index == len` is rejected rather than treated as an append.
    fn try_replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds>;

    /// Returns a reference to the element at `index`.
    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds>;

    /// Returns a mutable reference to the element at `index`.
    fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds>;

    /// Returns the position of the first element equal to `target`, scanning from the
    /// front, or [`None`] if no element matches.
    fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Returns true if any element equals `target`.
    fn contains(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(target).is_some()
    }

    /// Returns a reference to the first element, if it exists.
    fn front(&self) -> Option<&T>;

    /// Returns a reference to the last element, if it exists.
    fn back(&self) -> Option<&T>;

    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns true if the list contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Begins a forward traversal positioned before the first element. The cursor
    /// snapshots the list's current version; see the trait-level docs for the
    /// invalidation rules.
    fn cursor(&self) -> Self::Cursor;

    /// A traversal positioned at an arbitrary index. Neither implementor supports
    /// this; the request itself is the error.
    fn cursor_at(&self, index: usize) -> Result<Self::Cursor, UnsupportedOperation> {
        let _ = index;
        Err(UnsupportedOperation)
    }

    /// A traversal walking rear-to-front. Neither implementor supports this; the
    /// request itself is the error.
    fn cursor_back(&self) -> Result<Self::Cursor, UnsupportedOperation> {
        Err(UnsupportedOperation)
    }
}
