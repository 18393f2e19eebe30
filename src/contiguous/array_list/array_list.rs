use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::slice;

use super::Cursor;
use crate::traits::IndexedList;
#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, NoSuchElement};
use crate::util::result::ResultExtension;

/// The capacity an ArrayList is created with when none is requested.
pub const DEFAULT_CAPACITY: usize = 10;

const MIN_CAP: usize = 2;
const GROWTH_FACTOR: usize = 2;

/// An indexed, unsorted list backed by a growable contiguous buffer.
///
/// The buffer is a fixed-size allocation at any instant; when an insertion would
/// overflow it, a new allocation of twice the capacity replaces it wholesale. Growth is
/// lazy, order-preserving and never shrinks, and it is not observable as a structural
/// mutation in its own right - only the insertion that triggered it bumps the list's
/// version.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `try_get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_front` | `O(n)` |
/// | `push_back` | `O(1)`* |
/// | `pop_front` | `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `try_insert` | `O(n-i)` |
/// | `try_remove` | `O(n-i)` |
/// | `try_replace` | `O(1)` |
/// | `index_of` | `O(n)` |
///
/// \* When the buffer is full, the triggering insertion pays `O(n)` to reallocate.
pub struct ArrayList<T> {
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) rear: usize,
    pub(crate) version: u64,
}

impl<T> ArrayList<T> {
    /// Creates an empty ArrayList with [`DEFAULT_CAPACITY`].
    pub fn new() -> ArrayList<T> {
        ArrayList::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty ArrayList with capacity exactly equal to the provided value.
    ///
    /// # Examples
    /// ```
    /// # use iulist::contiguous::ArrayList;
    /// let list: ArrayList<u8> = ArrayList::with_capacity(5);
    /// assert_eq!(list.cap(), 5);
    /// assert!(list.is_empty());
    /// ```
    pub fn with_capacity(cap: usize) -> ArrayList<T> {
        ArrayList {
            buf: Box::new_uninit_slice(cap),
            rear: 0,
            version: 0,
        }
    }

    /// Returns the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.rear
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.rear == 0
    }

    /// Returns the current capacity of the backing buffer. The capacity only changes
    /// when an insertion finds the buffer full, and then only by doubling.
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Inserts `value` before the first element, shifting every existing element one
    /// slot towards the rear.
    pub fn push_front(&mut self, value: T) {
        if self.rear == self.cap() {
            self.grow();
        }
        self.shift_insert(0, value);
    }

    /// Inserts `value` after the last element.
    ///
    /// # Examples
    /// ```
    /// # use iulist::contiguous::ArrayList;
    /// let mut list = ArrayList::new();
    /// for i in 0..=5 {
    ///     list.push_back(i);
    /// }
    /// assert_eq!(&*list, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.rear == self.cap() {
            self.grow();
        }
        self.buf[self.rear] = MaybeUninit::new(value);
        self.rear += 1;
        self.version += 1;
    }

    /// Removes and returns the first element, shifting the remainder one slot towards
    /// the front, or returns [`None`] if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.rear == 0 {
            None
        } else {
            Some(self.shift_remove(0))
        }
    }

    /// Removes and returns the last element, or [`None`] if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.rear == 0 {
            None
        } else {
            self.rear -= 1;
            self.version += 1;
            // SAFETY: rear has just been decremented, so it names the last live slot,
            // which is initialized. Replacing it with uninit clears the slot without
            // dropping the value we're moving out.
            let value = unsafe {
                mem::replace(&mut self.buf[self.rear], MaybeUninit::uninit()).assume_init()
            };
            Some(value)
        }
    }

    /// Inserts `value` at `index`, shifting the elements at and after `index` one slot
    /// towards the rear. `index == len` appends.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.rear {
            return Err(IndexOutOfBounds { index, len: self.rear });
        }
        if self.rear == self.cap() {
            self.grow();
        }
        self.shift_insert(index, value);
        Ok(())
    }

    /// Inserts `value` at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` immediately after the first element equal to `target`. Fails
    /// without mutating the list if no element matches.
    pub fn try_insert_after(&mut self, value: T, target: &T) -> Result<(), NoSuchElement>
    where
        T: PartialEq,
    {
        let index = self.index_of(target).ok_or(NoSuchElement)?;
        if self.rear == self.cap() {
            self.grow();
        }
        self.shift_insert(index + 1, value);
        Ok(())
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

    /// Removes and returns the element at `index`, shifting the elements after it one
    /// slot towards the front.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.shift_remove(index))
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
        Some(self.shift_remove(index))
    }

    /// Overwrites the element at `index` with `value`, returning the old element.
    /// This is a value overwrite, not a structural mutation: the list's version is
    /// untouched and outstanding cursors stay valid. `index == len` is rejected, never
    /// treated as an append.
    pub fn try_replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index is < rear and all slots below rear are initialized.
        let old = unsafe {
            mem::replace(&mut self.buf[index], MaybeUninit::new(value)).assume_init()
        };
        Ok(old)
    }

    /// Overwrites the element at `index` with `value`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        self.try_replace(index, value).throw()
    }

    /// Returns a reference to the element at `index`.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index is < rear and all slots below rear are initialized.
        Ok(unsafe { self.buf[index].assume_init_ref() })
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
        self.check_index(index)?;
        // SAFETY: index is < rear and all slots below rear are initialized.
        Ok(unsafe { self.buf[index].assume_init_mut() })
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
        self.as_slice().first()
    }

    /// Returns a mutable reference to the first element, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns a reference to the last element, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a mutable reference to the last element, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
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
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over the elements, as mutable references.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
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

    /// The live elements, as a slice.
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// The live elements, as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Inserts into slot `index`, shifting `[index, rear)` one slot right. The caller
    /// ensures `index <= rear < cap`.
    fn shift_insert(&mut self, index: usize, value: T) {
        let mut prev = MaybeUninit::new(value);
        for i in index..=self.rear {
            prev = mem::replace(&mut self.buf[i], prev);
        }
        // prev now holds the uninit contents of the old rear slot; MaybeUninit never
        // drops, so discarding it is a no-op.
        self.rear += 1;
        self.version += 1;
    }

    /// Removes slot `index`, shifting `(index, rear)` one slot left and clearing the
    /// vacated rear slot. The caller ensures `index < rear`.
    fn shift_remove(&mut self, index: usize) -> T {
        let mut next = MaybeUninit::uninit();
        // Iterate backwards to index, bubbling the uninit slot down into it.
        for i in (index..self.rear).rev() {
            next = mem::replace(&mut self.buf[i], next);
        }
        self.rear -= 1;
        self.version += 1;
        // SAFETY: next holds the value that was at index, which was below rear and
        // therefore initialized.
        unsafe { next.assume_init() }
    }

    /// Replaces the backing buffer with one of at least double the capacity, moving
    /// every live element across in order. The old allocation is released entirely.
    fn grow(&mut self) {
        let new_cap = cmp::max(self.cap().saturating_mul(GROWTH_FACTOR), MIN_CAP);
        let mut new_buf = Box::new_uninit_slice(new_cap);
        for i in 0..self.rear {
            new_buf[i] = mem::replace(&mut self.buf[i], MaybeUninit::uninit());
        }
        self.buf = new_buf;
    }

    fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.rear {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.rear })
        }
    }
}

impl<T> IndexedList<T> for ArrayList<T> {
    type Cursor = Cursor<T>;

    fn push_front(&mut self, value: T) {
        ArrayList::push_front(self, value)
    }

    fn push_back(&mut self, value: T) {
        ArrayList::push_back(self, value)
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        ArrayList::try_insert(self, index, value)
    }

    fn try_insert_after(&mut self, value: T, target: &T) -> Result<(), NoSuchElement>
    where
        T: PartialEq,
    {
        ArrayList::try_insert_after(self, value, target)
    }

    fn pop_front(&mut self) -> Option<T> {
        ArrayList::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        ArrayList::pop_back(self)
    }

    fn remove_item(&mut self, target: &T) -> Option<T>
    where
        T: PartialEq,
    {
        ArrayList::remove_item(self, target)
    }

    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        ArrayList::try_remove(self, index)
    }

    fn try_replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        ArrayList::try_replace(self, index, value)
    }

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        ArrayList::try_get(self, index)
    }

    fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        ArrayList::try_get_mut(self, index)
    }

    fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        ArrayList::index_of(self, target)
    }

    fn front(&self) -> Option<&T> {
        ArrayList::front(self)
    }

    fn back(&self) -> Option<&T> {
        ArrayList::back(self)
    }

    fn len(&self) -> usize {
        ArrayList::len(self)
    }

    fn cursor(&self) -> Cursor<T> {
        ArrayList::cursor(self)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        // Drop the live prefix in place; the buffer itself follows implicitly, since
        // MaybeUninit slots drop as no-ops.
        for i in 0..self.rear {
            // SAFETY: All slots below rear are initialized and not yet dropped.
            unsafe { self.buf[i].assume_init_drop() };
        }
    }
}

impl<T> Deref for ArrayList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The buffer is valid as a slice for rear values, which are all
        // initialized. The pointer is nonnull and properly aligned, and the range is
        // entirely contained within the allocation.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast(), self.rear) }
    }
}

impl<T> DerefMut for ArrayList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for Deref; exclusive access is guaranteed by &mut self.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast(), self.rear) }
    }
}

impl<T> AsRef<[T]> for ArrayList<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for ArrayList<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for ArrayList<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for ArrayList<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = ArrayList::with_capacity(cmp::max(iter.size_hint().0, DEFAULT_CAPACITY));

        for value in iter {
            list.push_back(value);
        }

        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = ArrayList::with_capacity(self.cap());

        for value in self.iter() {
            list.push_back(value.clone());
        }

        list
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for ArrayList<T> {
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
