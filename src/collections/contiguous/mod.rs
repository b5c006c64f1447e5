//! Collections which store their elements in a single contiguous block.
//!
//! Both types here implement [`Deref<Target = [T]>`](std::ops::Deref), so slice methods such as
//! indexing, iteration and sorting are available on them directly.

pub mod string;
pub mod vector;

#[doc(inline)]
pub use string::StringBuf;
#[doc(inline)]
pub use vector::Vector;
