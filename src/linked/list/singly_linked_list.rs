use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use super::{Cursor, Iter, IterMut, Link, Node};
use crate::traits::IndexedList;
#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, NoSuchElement};
use crate::util::result::ResultExtension;

/// An indexed, unsorted list backed by a singly linked chain of nodes.
///
/// Each node is owned exclusively by its predecessor's `next` link (the head by the
/// list itself), so ownership is strictly tree-shaped. `tail` is a non-owning
/// back-reference to the last node, used only for `O(1)` rear insertion - it is never
/// an ownership source, and because the links only point forward, removing from the
/// rear still costs a full walk from the head. That asymmetry against `push_back` is
/// intrinsic to the topology.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front`/`back` | `O(1)` |
/// | `push_front`/`push_back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(n)` |
/// | `try_get` | `O(i)` |
/// | `try_insert` | `O(i)` |
/// | `try_remove` | `O(i)` |
/// | `try_replace` | `O(i)` |
/// | `index_of` | `O(n)` |
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Option<NonNull<Node<T>>>,
    pub(crate) len: usize,
    pub(crate) version: u64,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty SinglyLinkedList.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: None,
            tail: None,
            len: 0,
            version: 0,
        }
    }

    /// Returns the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` before the first element.
    pub fn push_front(&mut self, value: T) {
        let mut node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        if node.next.is_none() {
            // The new node is also the last one. Taking the pointer before moving the
            // box is fine; the heap allocation doesn't move with it.
            self.tail = Some(NonNull::from(&mut *node));
        }
        self.head = Some(node);
        self.len += 1;
        self.version += 1;
    }

    /// Inserts `value` after the last element.
    pub fn push_back(&mut self, value: T) {
        let mut node = Box::new(Node { value, next: None });
        let ptr = NonNull::from(&mut *node);
        match self.tail {
            // SAFETY: tail references the last node of the chain, which the chain
            // keeps alive, and &mut self rules out any other access to it.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(ptr);
        self.len += 1;
        self.version += 1;
    }

    /// Removes and returns the first element, or [`None`] if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = *self.head.take()?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        self.version += 1;
        Some(node.value)
    }

    /// Removes and returns the last element, or [`None`] if the list is empty.
    ///
    /// Costs a full walk from the head to find the predecessor of the tail; no
    /// backward links exist to shortcut it.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len > 1 {
            let mut prev = self.head.as_deref_mut()?;
            while prev.next.as_ref().is_some_and(|next| next.next.is_some()) {
                prev = prev.next.as_deref_mut()?;
            }
            // prev is now the second-to-last node.
            let node = *prev.next.take()?;
            self.tail = Some(NonNull::from(&mut *prev));
            self.len -= 1;
            self.version += 1;
            Some(node.value)
        } else {
            self.pop_front()
        }
    }

    /// Inserts `value` at `index`. Index 0 delegates to the front, `index == len` to
    /// the rear; anything else splices a node after a walk of `index - 1` links.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let err = IndexOutOfBounds { index, len: self.len };
        if index > self.len {
            return Err(err);
        }
        if index == 0 {
            self.push_front(value);
        } else if index == self.len {
            self.push_back(value);
        } else {
            let mut prev = self.head.as_deref_mut().ok_or(err)?;
            for _ in 1..index {
                prev = prev.next.as_deref_mut().ok_or(err)?;
            }
            // The spliced node always has a successor here, so tail is untouched.
            let node = Box::new(Node {
                value,
                next: prev.next.take(),
            });
            prev.next = Some(node);
            self.len += 1;
            self.version += 1;
        }
        Ok(())
    }

    /// Inserts `value` at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` immediately after the first element equal to `target`,
    /// reseating the tail when the target was the last node. Fails without mutating
    /// the list if no element matches.
    pub fn try_insert_after(&mut self, value: T, target: &T) -> Result<(), NoSuchElement>
    where
        T: PartialEq,
    {
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            if node.value == *target {
                let mut new = Box::new(Node {
                    value,
                    next: node.next.take(),
                });
                if new.next.is_none() {
                    self.tail = Some(NonNull::from(&mut *new));
                }
                node.next = Some(new);
                self.len += 1;
                self.version += 1;
                return Ok(());
            }
            cur = node.next.as_deref_mut();
        }
        Err(NoSuchElement)
    }

    /// Inserts `value` immediately after the first element equal to `target`,
    /// panicking on a failure.
    ///
    /// # Panics
    /// Panics if no element equals `target`.
    pub fn insert_after(&mut self, value: T, target: &T)
    where
        T: PartialEq,
    {
        self.try_insert_after(value, target).throw()
    }

    /// Removes and returns the element at `index`, re-linking its predecessor around
    /// it and reseating head or tail for the end cases.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let err = IndexOutOfBounds { index, len: self.len };
        if index >= self.len {
            return Err(err);
        }
        if index == 0 {
            return self.pop_front().ok_or(err);
        }

        let mut prev = self.head.as_deref_mut().ok_or(err)?;
        for _ in 1..index {
            prev = prev.next.as_deref_mut().ok_or(err)?;
        }
        let node = *prev.next.take().ok_or(err)?;
        prev.next = node.next;
        if prev.next.is_none() {
            // The removed node was the tail.
            self.tail = Some(NonNull::from(&mut *prev));
        }
        self.len -= 1;
        self.version += 1;
        Ok(node.value)
    }

    /// Removes and returns the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the first element equal to `target`, scanning from the
    /// front, or returns [`None`] if no element matches.
    pub fn remove_item(&mut self, target: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.index_of(target)?;
        self.try_remove(index).ok()
    }

    /// Overwrites the element at `index` with `value`, returning the old element.
    /// This is a value overwrite, not a structural mutation: the list's version is
    /// untouched and outstanding cursors stay valid.
    pub fn try_replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        let err = IndexOutOfBounds { index, len: self.len };
        match self.seek_mut(index) {
            Some(node) => Ok(mem::replace(&mut node.value, value)),
            None => Err(err),
        }
    }

    /// Overwrites the element at `index` with `value`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        self.try_replace(index, value).throw()
    }

    /// Returns a reference to the element at `index`, after a walk of `index` links.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        match self.seek(index) {
            Some(node) => Ok(&node.value),
            None => Err(IndexOutOfBounds { index, len: self.len }),
        }
    }

    /// Returns a reference to the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let err = IndexOutOfBounds { index, len: self.len };
        match self.seek_mut(index) {
            Some(node) => Ok(&mut node.value),
            None => Err(err),
        }
    }

    /// Returns a mutable reference to the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a reference to the first element, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Returns a reference to the last element, if it exists.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: tail references the last node of the chain, which the chain keeps
        // alive; &self permits shared reads.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).value })
    }

    /// Returns a mutable reference to the last element, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: As for back; &mut self guarantees exclusive access to the chain.
        self.tail.map(|tail| unsafe { &mut (*tail.as_ptr()).value })
    }

    /// Returns the position of the first element equal to `target`, scanning from the
    /// front, or [`None`] if no element matches.
    pub fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|value| value == target)
    }

    /// Returns true if any element equals `target`.
    pub fn contains(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(target).is_some()
    }

    /// Returns an iterator over the elements, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the elements, as mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Begins a fail-fast forward traversal positioned before the first element. See
    /// [`Cursor`] for the traversal and invalidation rules.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor {
            next_index: 0,
            expected_version: self.version,
            can_remove: false,
            _phantom: PhantomData,
        }
    }

    /// Walks `index` links from the head.
    pub(crate) fn seek(&self, index: usize) -> Option<&Node<T>> {
        let mut node = self.head.as_deref()?;
        for _ in 0..index {
            node = node.next.as_deref()?;
        }
        Some(node)
    }

    pub(crate) fn seek_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut node = self.head.as_deref_mut()?;
        for _ in 0..index {
            node = node.next.as_deref_mut()?;
        }
        Some(node)
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let mut count = 0;
        let mut last: Option<&Node<T>> = None;
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            count += 1;
            last = Some(n);
            node = n.next.as_deref();
        }
        assert_eq!(count, self.len, "Node count should match len.");
        match (last, self.tail) {
            (None, None) => {},
            (Some(last), Some(tail)) => assert!(
                std::ptr::eq(last, tail.as_ptr()),
                "Tail should reference the last node.",
            ),
            _ => panic!("Tail and chain disagree about emptiness."),
        }
    }
}

impl<T> IndexedList<T> for SinglyLinkedList<T> {
    type Cursor = Cursor<T>;

    fn push_front(&mut self, value: T) {
        SinglyLinkedList::push_front(self, value)
    }

    fn push_back(&mut self, value: T) {
        SinglyLinkedList::push_back(self, value)
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        SinglyLinkedList::try_insert(self, index, value)
    }

    fn try_insert_after(&mut self, value: T, target: &T) -> Result<(), NoSuchElement>
    where
        T: PartialEq,
    {
        SinglyLinkedList::try_insert_after(self, value, target)
    }

    fn pop_front(&mut self) -> Option<T> {
        SinglyLinkedList::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        SinglyLinkedList::pop_back(self)
    }

    fn remove_item(&mut self, target: &T) -> Option<T>
    where
        T: PartialEq,
    {
        SinglyLinkedList::remove_item(self, target)
    }

    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        SinglyLinkedList::try_remove(self, index)
    }

    fn try_replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        SinglyLinkedList::try_replace(self, index, value)
    }

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        SinglyLinkedList::try_get(self, index)
    }

    fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        SinglyLinkedList::try_get_mut(self, index)
    }

    fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        SinglyLinkedList::index_of(self, target)
    }

    fn front(&self) -> Option<&T> {
        SinglyLinkedList::front(self)
    }

    fn back(&self) -> Option<&T> {
        SinglyLinkedList::back(self)
    }

    fn len(&self) -> usize {
        SinglyLinkedList::len(self)
    }

    fn cursor(&self) -> Cursor<T> {
        SinglyLinkedList::cursor(self)
    }
}

// SAFETY: The tail pointer only ever aliases a node owned by the chain, and the safe
// API funnels all access through &self/&mut self, so the list may move between threads
// whenever its elements may.
unsafe impl<T: Send> Send for SinglyLinkedList<T> {}
// SAFETY: No interior mutability; shared references permit only reads.
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; letting Box drop recurse through next would overflow the
        // stack on long chains.
        let mut node = self.head.take();
        while let Some(mut boxed) = node {
            node = boxed.next.take();
        }
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = SinglyLinkedList::new();
        for value in self.iter() {
            list.push_back(value.clone());
        }
        list
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for value in iter {
                write!(f, ", {value}")?;
            }
        }
        write!(f, "]")
    }
}
