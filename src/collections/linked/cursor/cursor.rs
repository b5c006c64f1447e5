use std::fmt::{self, Debug, Formatter};
use std::ptr;

use crate::alloc::{Allocator, Global};
use crate::collections::linked::list::{LinkedList, Link};
use crate::util::error::EndSentinel;
use crate::util::result::ResultExtension;

/// A read-only bidirectional cursor into a [`LinkedList`], created with
/// [`LinkedList::begin`] or [`LinkedList::end`].
///
/// A cursor either points at a node or at the end sentinel, which sits between the back and the
/// front of the list: moving forward from the last element or backward from the first one reaches
/// the sentinel, moving backward from the sentinel reaches the last element and moving forward
/// from it reaches the first.
///
/// Cursors compare by identity, two cursors are equal if they point at the same node or are both
/// at the end sentinel of the same list. The values are never compared.
///
/// # Examples
/// ```
/// # use cest::collections::linked::LinkedList;
/// let list: LinkedList<_> = [1, 2, 3].into_iter().collect();
///
/// let mut cursor = list.begin();
/// let mut forward = Vec::new();
/// while cursor != list.end() {
///     forward.push(*cursor.fetch_next().get());
/// }
/// assert_eq!(forward, [1, 2, 3]);
///
/// let mut backward = Vec::new();
/// cursor.move_prev();
/// while cursor != list.end() {
///     backward.push(*cursor.fetch_prev().get());
/// }
/// assert_eq!(backward, [3, 2, 1]);
/// ```
pub struct Cursor<'a, T, A: Allocator = Global> {
    pub(crate) node: Link<T>,
    pub(crate) list: &'a LinkedList<T, A>,
}

impl<'a, T, A: Allocator> Cursor<'a, T, A> {
    /// Returns true if the cursor is at the end sentinel.
    pub const fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns the list this cursor traverses.
    pub const fn list(&self) -> &'a LinkedList<T, A> {
        self.list
    }

    /// Returns a reference to the element under the cursor.
    ///
    /// # Panics
    /// Panics if the cursor is at the end sentinel.
    pub fn get(&self) -> &'a T {
        self.try_get().throw()
    }

    /// Returns a reference to the element under the cursor, or [`EndSentinel`] if there is none.
    pub fn try_get(&self) -> Result<&'a T, EndSentinel> {
        match self.node {
            Some(node) => Ok(node.value()),
            None => Err(EndSentinel),
        }
    }

    /// Moves the cursor to the next node, returning it for chaining.
    pub fn move_next(&mut self) -> &mut Self {
        self.node = match self.node {
            Some(node) => node.next(),
            None => self.list.front_link(),
        };
        self
    }

    /// Moves the cursor to the previous node, returning it for chaining.
    pub fn move_prev(&mut self) -> &mut Self {
        self.node = match self.node {
            Some(node) => node.prev(),
            None => self.list.back_link(),
        };
        self
    }

    /// Moves the cursor to the next node, returning a copy of its position before the move.
    pub fn fetch_next(&mut self) -> Self {
        let before = *self;
        self.move_next();
        before
    }

    /// Moves the cursor to the previous node, returning a copy of its position before the move.
    pub fn fetch_prev(&mut self) -> Self {
        let before = *self;
        self.move_prev();
        before
    }

    /// Counts how many forward steps it takes to get from this cursor to `target`. Returns
    /// [`None`] if `target` can't be reached, because it belongs to another list. This includes
    /// the end sentinel of another list.
    ///
    /// # Examples
    /// ```
    /// # use cest::collections::linked::LinkedList;
    /// let list: LinkedList<_> = ['a', 'b', 'c'].into_iter().collect();
    /// let mut second = list.begin();
    /// second.move_next();
    ///
    /// assert_eq!(list.begin().distance_to(&second), Some(1));
    /// assert_eq!(second.distance_to(&list.end()), Some(2));
    /// assert_eq!(list.end().distance_to(&second), Some(2));
    /// ```
    pub fn distance_to(&self, target: &Cursor<'_, T, A>) -> Option<usize> {
        if !ptr::eq(self.list, target.list) {
            return None;
        }

        let mut curr = *self;
        let mut count = 0;

        while curr != *target {
            curr.move_next();
            count += 1;
            // Every position lies on a single cycle through the sentinel.
            if curr == *self {
                return None;
            }
        }

        Some(count)
    }
}

impl<T, A: Allocator> Clone for Cursor<'_, T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Allocator> Copy for Cursor<'_, T, A> {}

impl<T, A: Allocator> PartialEq for Cursor<'_, T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && ptr::eq(self.list, other.list)
    }
}

impl<T, A: Allocator> Eq for Cursor<'_, T, A> {}

impl<T: Debug, A: Allocator> Debug for Cursor<'_, T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(node) => f.debug_tuple("Cursor").field(node.value()).finish(),
            None => write!(f, "Cursor(end)"),
        }
    }
}
