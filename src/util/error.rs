use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error};

/// Raised when an index or range bound lies outside of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The length of the collection at the time of access.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// Raised when a requested capacity can't be represented in bytes.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// Raised by operations which need at least one element, like popping or reading the front of a
/// collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Operation requires a non-empty collection!")]
pub struct EmptyCollection;

/// Raised when a cursor positioned at the end sentinel is read from or erased through.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Cursor is at the end sentinel and doesn't refer to an element!")]
pub struct EndSentinel;
