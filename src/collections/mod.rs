//! Various general-purpose collection types.
//!
//! # Purpose
//! Each family of collections lives in its own module, enabled by a cargo feature of the same
//! name:
//! - [`linked`]: a doubly linked list with bidirectional cursors.
//! - [`contiguous`]: a dynamic array and a character buffer built on it.
//!
//! # Method
//! Every collection is generic over an [`Allocator`](crate::alloc::Allocator) and performs all of
//! its allocations through it.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
