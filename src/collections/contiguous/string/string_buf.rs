use std::fmt::{self, Debug, Display, Formatter, Write};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

use crate::alloc::{AllocError, Allocator, Global};
use crate::collections::contiguous::Vector;
use crate::util::error::EmptyCollection;
use crate::util::result::ResultExtension;

/// A growable buffer of characters, backed by a [`Vector`] of code units.
///
/// With the default `C = char`, every element is a whole Unicode scalar value. A `StringBuf<u8>`
/// holds raw bytes instead, which are displayed as (lossy) UTF-8. Storage is obtained from the
/// allocation strategy `A` and grows exactly like the underlying Vector.
///
/// # Examples
/// ```
/// # use cest::collections::contiguous::StringBuf;
/// let mut buf: StringBuf = StringBuf::from("Hello");
/// buf.push_back(',');
/// buf.push_str(" world");
/// assert_eq!(buf, "Hello, world");
///
/// assert_eq!(buf.pop_back(), 'd');
/// assert_eq!(buf.to_string(), "Hello, worl");
/// ```
pub struct StringBuf<C = char, A: Allocator = Global> {
    pub(crate) buf: Vector<C, A>,
}

impl<C> StringBuf<C> {
    /// Creates a new, empty StringBuf without allocating.
    pub const fn new() -> StringBuf<C> {
        StringBuf::new_in(Global)
    }
}

impl<C, A: Allocator> StringBuf<C, A> {
    /// Creates a new, empty StringBuf which will obtain its storage from `alloc`.
    pub const fn new_in(alloc: A) -> StringBuf<C, A> {
        StringBuf {
            buf: Vector::new_in(alloc),
        }
    }

    /// Returns a reference to the allocation strategy of this StringBuf.
    pub const fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Returns the number of code units in the buffer.
    pub const fn size(&self) -> usize {
        self.buf.size()
    }

    /// Returns the number of code units in the buffer. Alias of [`size`](StringBuf::size).
    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the buffer contains no code units.
    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the number of code units the buffer can hold without reallocating.
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Appends a code unit to the end of the buffer.
    ///
    /// # Panics
    /// Panics if the allocation strategy can't provide a larger block.
    pub fn push_back(&mut self, unit: C) {
        self.buf.push_back(unit);
    }

    /// Appends a code unit to the end of the buffer, leaving it unchanged if growing fails.
    pub fn try_push_back(&mut self, unit: C) -> Result<(), AllocError> {
        self.buf.try_push_back(unit)
    }

    /// Removes the last code unit and returns it.
    ///
    /// # Panics
    /// Panics if the buffer is empty.
    pub fn pop_back(&mut self) -> C {
        self.buf.pop_back()
    }

    /// Removes the last code unit and returns it, or returns [`EmptyCollection`].
    pub fn try_pop_back(&mut self) -> Result<C, EmptyCollection> {
        self.buf.try_pop_back()
    }

    /// Ensures the buffer can hold at least `cap` code units. See [`Vector::reserve`].
    ///
    /// # Panics
    /// Panics if the allocation strategy can't provide the new block.
    pub fn reserve(&mut self, cap: usize) {
        self.buf.reserve(cap);
    }

    /// Ensures the buffer can hold at least `cap` code units, leaving it unchanged on failure.
    pub fn try_reserve(&mut self, cap: usize) -> Result<(), AllocError> {
        self.buf.try_reserve(cap)
    }

    /// Removes every code unit, keeping the capacity.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Returns the code units as a slice.
    pub fn as_slice(&self) -> &[C] {
        &self.buf
    }
}

impl<A: Allocator> StringBuf<char, A> {
    /// Appends every character of `s`.
    ///
    /// # Panics
    /// Panics if the allocation strategy can't provide a larger block.
    pub fn push_str(&mut self, s: &str) {
        self.try_push_str(s).throw()
    }

    /// Appends every character of `s`. If growing fails, the characters appended so far are
    /// removed again.
    pub fn try_push_str(&mut self, s: &str) -> Result<(), AllocError> {
        let len = self.buf.len();
        for c in s.chars() {
            if let Err(error) = self.buf.try_push_back(c) {
                self.buf.erase(len..self.buf.len());
                return Err(error);
            }
        }
        Ok(())
    }
}

impl<A: Allocator> StringBuf<u8, A> {
    /// Appends the UTF-8 encoding of `s`.
    ///
    /// # Panics
    /// Panics if the allocation strategy can't provide a larger block.
    pub fn push_str(&mut self, s: &str) {
        self.try_push_str(s).throw()
    }

    /// Appends the UTF-8 encoding of `s`. Room for all of it is reserved up front, so on failure
    /// the buffer is unchanged.
    pub fn try_push_str(&mut self, s: &str) -> Result<(), AllocError> {
        let needed = self.buf.len().saturating_add(s.len());
        self.buf.try_reserve(needed)?;
        self.buf.extend(s.as_bytes());
        Ok(())
    }
}

impl<C> Default for StringBuf<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for StringBuf<char> {
    fn from(value: &str) -> Self {
        value.chars().collect()
    }
}

impl From<&str> for StringBuf<u8> {
    fn from(value: &str) -> Self {
        value.bytes().collect()
    }
}

impl<C, A: Allocator> Deref for StringBuf<C, A> {
    type Target = [C];

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<C, A: Allocator> DerefMut for StringBuf<C, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl<C, A: Allocator> Extend<C> for StringBuf<C, A> {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

impl<C, A: Allocator + Default> FromIterator<C> for StringBuf<C, A> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        StringBuf {
            buf: iter.into_iter().collect(),
        }
    }
}

impl<C: Clone, A: Allocator + Clone> Clone for StringBuf<C, A> {
    fn clone(&self) -> Self {
        StringBuf {
            buf: self.buf.clone(),
        }
    }
}

impl<C: PartialEq, A: Allocator, B: Allocator> PartialEq<StringBuf<C, B>> for StringBuf<C, A> {
    fn eq(&self, other: &StringBuf<C, B>) -> bool {
        self.buf == other.buf
    }
}

impl<C: Eq, A: Allocator> Eq for StringBuf<C, A> {}

impl<A: Allocator> PartialEq<str> for StringBuf<char, A> {
    fn eq(&self, other: &str) -> bool {
        self.iter().copied().eq(other.chars())
    }
}

impl<A: Allocator> PartialEq<&str> for StringBuf<char, A> {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl<A: Allocator> PartialEq<str> for StringBuf<u8, A> {
    fn eq(&self, other: &str) -> bool {
        **self == *other.as_bytes()
    }
}

impl<A: Allocator> PartialEq<&str> for StringBuf<u8, A> {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl<C: Hash, A: Allocator> Hash for StringBuf<C, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buf.hash(state);
    }
}

impl<A: Allocator> Display for StringBuf<char, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|c| f.write_char(*c))
    }
}

impl<A: Allocator> Display for StringBuf<u8, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self))
    }
}

impl<A: Allocator> Debug for StringBuf<char, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "StringBuf({:?})", self.to_string())
    }
}

impl<A: Allocator> Debug for StringBuf<u8, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "StringBuf(b{:?})", String::from_utf8_lossy(self))
    }
}
