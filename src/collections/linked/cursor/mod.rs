//! Cursors over a [`LinkedList`](super::LinkedList), the bidirectional iterators of the list.
//!
//! [`Cursor`] borrows the list immutably and can be copied freely, [`CursorMut`] holds the
//! mutable borrow and is used to insert and erase elements at its position.

mod cursor;
mod cursor_mut;

pub use cursor::*;
pub use cursor_mut::*;
