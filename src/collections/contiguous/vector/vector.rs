use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut, Range};
use std::ptr::{self, NonNull};
use std::slice;

use crate::alloc::{AllocError, Allocator, CapacityOverflow, Global};
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, IndexOutOfBounds};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, storing its elements in a single block obtained from an
/// [`Allocator`].
///
/// Growing past the current capacity allocates a new block, moves every element over and releases
/// the old block. Starting from an empty Vector, the capacity goes 1, 2, 4, 8, ... so after `n`
/// pushes it is the smallest power of two that holds `n` elements. [`reserve`](Vector::reserve)
/// on the other hand allocates exactly the requested capacity.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `m`: The number of items after the erased range.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `erase` | `O(m)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push_back` will take `O(n)`.
///
/// \** If the Vector has enough capacity already, `reserve` is `O(1)`.
pub struct Vector<T, A: Allocator = Global> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) len: usize,
    pub(crate) cap: usize,
    pub(crate) alloc: A,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use cest::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector::new_in(Global)
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if the capacity can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use cest::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_capacity(5);
    /// assert_eq!(vec.capacity(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.capacity(), 5);
    /// ```
    pub fn with_capacity(cap: usize) -> Vector<T> {
        Vector::try_with_capacity_in(cap, Global).throw()
    }
}

impl<T, A: Allocator> Vector<T, A> {
    /// Creates a new, empty Vector which will obtain its storage from `alloc`.
    pub const fn new_in(alloc: A) -> Vector<T, A> {
        Vector {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            alloc,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Vector with capacity exactly `cap`, allocated from `alloc`.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if `alloc` can't provide the block.
    pub fn try_with_capacity_in(cap: usize, alloc: A) -> Result<Vector<T, A>, AllocError> {
        let mut vec = Vector::new_in(alloc);
        vec.try_reserve(cap)?;
        Ok(vec)
    }

    /// Returns a reference to the allocation strategy of this Vector.
    pub const fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns the number of elements in the Vector.
    ///
    /// # Examples
    /// ```
    /// # use cest::collections::contiguous::Vector;
    /// let vec: Vector<_> = (1_u8..=3).collect();
    /// assert_eq!(vec.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns the number of elements in the Vector. Alias of [`size`](Vector::size).
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use cest::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push_back(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is guaranteed to be
    /// exactly the value provided to [`reserve`](Vector::reserve), or a power of two if it was
    /// reached by pushing.
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the largest number of elements the allocation strategy could ever provide storage
    /// for.
    pub fn max_size(&self) -> usize {
        self.alloc.max_size::<T>()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, or [`IndexOutOfBounds`].
    ///
    /// # Examples
    /// ```
    /// # use cest::collections::contiguous::Vector;
    /// let vec: Vector<_> = ['a', 'b'].into_iter().collect();
    /// assert_eq!(vec.try_get(1), Ok(&'b'));
    /// assert!(vec.try_get(2).is_err());
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the element is initialized.
        Ok(unsafe { self.ptr.add(index).as_ref() })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, or [`IndexOutOfBounds`].
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the element is initialized. The mutable borrow of self makes the
        // reference unique.
        Ok(unsafe { self.ptr.add(index).as_mut() })
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the allocation strategy can't provide a larger block.
    ///
    /// # Examples
    /// ```
    /// # use cest::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push_back(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.capacity(), 8);
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).throw()
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required. If
    /// growing fails, the Vector is left unchanged and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        if self.len == self.cap {
            self.try_grow()?;
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value. Using this method on a Vector without enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that len < cap, so the slot is in bounds and
        // uninitialized.
        unsafe { self.alloc.construct(self.ptr.add(self.len), value) }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    ///
    /// # Examples
    /// ```
    /// # use cest::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop_back(), i);
    /// }
    /// assert!(vec.try_pop_back().is_err());
    /// ```
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().throw()
    }

    /// Pops the last value off the end of the Vector, or returns [`EmptyCollection`].
    pub fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        if self.len == 0 {
            return Err(EmptyCollection);
        }

        // Decrement len before reading.
        self.len -= 1;

        // SAFETY: The slot at the old len - 1 is initialized, and is no longer considered part of
        // the Vector, so the value is moved out exactly once.
        Ok(unsafe { self.ptr.add(self.len).read() })
    }

    /// Removes the elements in `range`, moving all following values down to fill the gap. Returns
    /// the index of the first element after the erased ones, which is `range.start`.
    ///
    /// # Panics
    /// Panics if the range isn't contained in the Vector.
    ///
    /// # Examples
    /// ```
    /// # use cest::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.erase(1..5), 1);
    /// assert_eq!(vec, "H world!".chars().collect::<Vector<_>>());
    /// ```
    pub fn erase(&mut self, range: Range<usize>) -> usize {
        self.try_erase(range).throw()
    }

    /// Removes the elements in `range`, moving all following values down to fill the gap, or
    /// returns [`IndexOutOfBounds`] if the range isn't contained in the Vector.
    pub fn try_erase(&mut self, range: Range<usize>) -> Result<usize, IndexOutOfBounds> {
        let Range { start, end } = range;
        if end > self.len {
            return Err(IndexOutOfBounds { index: end, len: self.len });
        }
        if start > end {
            return Err(IndexOutOfBounds { index: start, len: self.len });
        }

        let tail = self.len - end;
        // Forget the erased range and the tail until they are dealt with.
        self.len = start;

        // SAFETY: start..end is initialized and dropped exactly once. The tail lies within the
        // allocation, and ptr::copy handles the overlap when moving it down.
        unsafe {
            let base = self.ptr.as_ptr();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), end - start));
            ptr::copy(base.add(end), base.add(start), tail);
        }

        self.len = start + tail;
        Ok(start)
    }

    /// Drops every element, leaving the Vector empty. The capacity is kept.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        // SAFETY: The first len values were initialized and are no longer reachable.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), len)) }
    }

    /// Ensures that the Vector has a capacity of at least `cap` elements. If the current capacity
    /// is smaller, exactly `cap` elements are allocated and the existing values are moved over.
    ///
    /// # Panics
    /// Panics if the allocation strategy can't provide the new block.
    ///
    /// # Examples
    /// ```
    /// # use cest::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = [1, 2, 3].into_iter().collect();
    /// vec.reserve(10);
    /// assert_eq!(vec.capacity(), 10);
    /// vec.reserve(5);
    /// assert_eq!(vec.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, cap: usize) {
        self.try_reserve(cap).throw()
    }

    /// Ensures that the Vector has a capacity of at least `cap` elements. If allocation fails, the
    /// Vector is left unchanged.
    pub fn try_reserve(&mut self, cap: usize) -> Result<(), AllocError> {
        if cap <= self.cap {
            return Ok(());
        }
        self.try_realloc(cap)
    }

    /// Moves the elements into a new block of exactly `new_cap` values, which must be at least
    /// len, and releases the old one.
    pub(crate) fn try_realloc(&mut self, new_cap: usize) -> Result<(), AllocError> {
        let new_ptr = self.alloc.allocate::<T>(new_cap)?;

        // SAFETY: Both blocks hold at least len values and are distinct allocations. The old block
        // was allocated with a count of cap, and its values have all been moved out bitwise.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            self.alloc.deallocate(self.ptr, self.cap);
        }

        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Grows the Vector to allow for the insertion of at least one more element.
    pub(crate) fn try_grow(&mut self) -> Result<(), AllocError> {
        let new_cap = match self.cap {
            0 => MIN_CAP,
            cap => cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?,
        };
        self.try_realloc(new_cap)
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: Allocator> Drop for Vector<T, A> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: The block was allocated with a count of cap, all values have been dropped.
        unsafe { self.alloc.deallocate(self.ptr, self.cap) }
    }
}

impl<T, A: Allocator> Extend<T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a, A: Allocator> Extend<&'a T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, A: Allocator + Default> FromIterator<T> for Vector<T, A> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::new_in(A::default());
        vec.extend(iter);
        vec
    }
}

impl<T, A: Allocator> Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull and properly aligned, even when nothing was allocated yet.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T, A: Allocator> DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the mutable borrow of self makes the slice unique.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T, A: Allocator> AsRef<[T]> for Vector<T, A> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, A: Allocator> AsMut<[T]> for Vector<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, A: Allocator> Borrow<[T]> for Vector<T, A> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T, A: Allocator> BorrowMut<[T]> for Vector<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: Vectors, when used safely rely on unique pointers and are therefore safe for Send when T
// and the strategy are.
unsafe impl<T: Send, A: Allocator + Send> Send for Vector<T, A> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for Vector<T, A> {}

impl<T: Clone, A: Allocator + Clone> Clone for Vector<T, A> {
    fn clone(&self) -> Self {
        let mut vec = Vector::try_with_capacity_in(self.cap, self.alloc.clone()).throw();
        vec.extend(self.iter().cloned());
        vec
    }
}

impl<T: PartialEq, A: Allocator, B: Allocator> PartialEq<Vector<T, B>> for Vector<T, A> {
    fn eq(&self, other: &Vector<T, B>) -> bool {
        **self == **other
    }
}

impl<T: Eq, A: Allocator> Eq for Vector<T, A> {}

impl<T: Hash, A: Allocator> Hash for Vector<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug, A: Allocator> Debug for Vector<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap)
            .finish()
    }
}

impl<T: Debug, A: Allocator> Display for Vector<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!")?;
        f.debug_list().entries(self.iter()).finish()
    }
}
