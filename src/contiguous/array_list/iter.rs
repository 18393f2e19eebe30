use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
use std::slice;

use super::ArrayList;

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let buf = mem::take(&mut self.buf);
        let rear = self.rear;
        // The list's Drop now sees an empty buffer and drops nothing; the iterator
        // owns the values from here.
        self.rear = 0;
        IntoIter {
            buf,
            front: 0,
            rear,
        }
    }
}

/// An owned iterator over the elements of an [`ArrayList`].
pub struct IntoIter<T> {
    buf: Box<[MaybeUninit<T>]>,
    front: usize,
    rear: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.rear {
            None
        } else {
            // SAFETY: Slots in [front, rear) are initialized; replacing with uninit
            // moves the value out without a double drop.
            let value = unsafe {
                mem::replace(&mut self.buf[self.front], MaybeUninit::uninit()).assume_init()
            };
            self.front += 1;
            Some(value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.rear {
            None
        } else {
            self.rear -= 1;
            // SAFETY: As for next; rear has just been decremented onto a live slot.
            let value = unsafe {
                mem::replace(&mut self.buf[self.rear], MaybeUninit::uninit()).assume_init()
            };
            Some(value)
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.rear - self.front
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Drop whatever the caller didn't consume.
        for i in self.front..self.rear {
            // SAFETY: Slots in [front, rear) are initialized and not yet moved out.
            unsafe { self.buf[i].assume_init_drop() };
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
