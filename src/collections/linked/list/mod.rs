//! A module containing [`LinkedList`] and its iterators.
//!
//! Borrowed iteration is provided by [`Iter`] and [`IterMut`], owned iteration by [`IntoIter`].
//! All of them are double ended. Positional access and modification go through the cursor types
//! in the sibling [`cursor`](super::cursor) module.

mod iter;
mod linked_list;
mod node;
mod tests;

pub use iter::*;
pub use linked_list::*;
pub(crate) use node::*;
