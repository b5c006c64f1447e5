//! Allocation strategies for the containers in this crate.
//!
//! Every container stores an [`Allocator`] by value and routes all of its storage requests through
//! it: raw blocks are obtained with [`Allocator::allocate`], values are placed into them with
//! [`Allocator::construct`], torn down with [`Allocator::destroy`] and the blocks are finally
//! handed back with [`Allocator::deallocate`]. Strategies are interchangeable, a container behaves
//! the same regardless of which one it uses, as long as requests are satisfied.
//!
//! Included strategies:
//! - [`Global`]: the process-wide allocator from [`std::alloc`].
//! - [`Limited`]: wraps another strategy and caps the number of live blocks.
//! - [`Traced`]: wraps another strategy and reports requests through `tracing` (requires the
//!   `tracing` feature).

mod allocator;
mod error;
mod global;
mod limited;
#[cfg(feature = "tracing")]
mod traced;

pub use allocator::*;
pub use error::*;
pub use global::*;
pub use limited::*;
#[cfg(feature = "tracing")]
pub use traced::*;
