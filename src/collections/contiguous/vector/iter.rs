use std::iter::FusedIterator;
use std::mem::ManuallyDrop;
use std::ptr::{self, NonNull};
use std::slice;

use super::Vector;
use crate::alloc::{Allocator, Global};

impl<T, A: Allocator> IntoIterator for Vector<T, A> {
    type Item = T;

    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        let vec = ManuallyDrop::new(self);
        IntoIter {
            ptr: vec.ptr,
            cap: vec.cap,
            start: 0,
            end: vec.len,
            // SAFETY: vec is never dropped, so the strategy is moved out exactly once.
            alloc: unsafe { ptr::read(&vec.alloc) },
        }
    }
}

/// An owned iterator over the elements of a [`Vector`]. The block is handed back to the
/// allocation strategy once the iterator is dropped.
pub struct IntoIter<T, A: Allocator = Global> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    // Values in start..end are initialized and haven't been yielded yet.
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) alloc: A,
}

impl<T, A: Allocator> IntoIter<T, A> {
    /// Returns the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: start..end is initialized and lies within the block.
        unsafe { slice::from_raw_parts(self.ptr.add(self.start).as_ptr(), self.end - self.start) }
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: start < end, so the value is initialized. Incrementing start afterwards means it
        // is never read again.
        let value = unsafe { self.ptr.add(self.start).read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: The slot at the old end - 1 is initialized and now lies outside start..end.
        Some(unsafe { self.ptr.add(self.end).read() })
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        // SAFETY: Only start..end is still initialized. The block was allocated with a count of
        // cap by this strategy.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.add(self.start).as_ptr(),
                self.end - self.start,
            ));
            self.alloc.deallocate(self.ptr, self.cap);
        }
    }
}

// SAFETY: IntoIter uniquely owns its block, like the Vector it was created from.
unsafe impl<T: Send, A: Allocator + Send> Send for IntoIter<T, A> {}
// SAFETY: Shared access only hands out shared references to the remaining values.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for IntoIter<T, A> {}

impl<'a, T, A: Allocator> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
