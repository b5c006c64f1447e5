use std::fmt::{self, Debug, Formatter};
use std::iter;

use super::Cursor;
use crate::alloc::{AllocError, Allocator, Global};
use crate::collections::linked::list::{LinkedList, Link};
use crate::util::error::EndSentinel;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A bidirectional cursor into a [`LinkedList`] which can modify the list at its position, created
/// with [`LinkedList::begin_mut`] or [`LinkedList::end_mut`].
///
/// Movement and the end sentinel behave exactly like they do for [`Cursor`]. Insertion splices new
/// nodes in before the cursor and moves the cursor onto them, erasure removes the node under the
/// cursor and moves the cursor onto its successor. Because the cursor holds the list's mutable
/// borrow, no other position can observe a node after it has been destroyed.
///
/// # Examples
/// ```
/// # use cest::collections::linked::LinkedList;
/// let mut list: LinkedList<_> = [1, 2, 4].into_iter().collect();
///
/// let mut cursor = list.begin_mut();
/// cursor.move_next().move_next();
/// cursor.insert(3);
/// assert_eq!(*cursor.get(), 3);
///
/// cursor.move_prev().move_prev().erase();
/// assert_eq!(*cursor.get(), 2);
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 3, 4]);
/// ```
pub struct CursorMut<'a, T, A: Allocator = Global> {
    pub(crate) node: Link<T>,
    pub(crate) list: &'a mut LinkedList<T, A>,
}

impl<'a, T, A: Allocator> CursorMut<'a, T, A> {
    /// Returns true if the cursor is at the end sentinel.
    pub const fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns a read-only [`Cursor`] at the same position, mostly for comparisons.
    pub const fn as_cursor(&self) -> Cursor<'_, T, A> {
        Cursor {
            node: self.node,
            list: &*self.list,
        }
    }

    /// Returns a reference to the element under the cursor.
    ///
    /// # Panics
    /// Panics if the cursor is at the end sentinel.
    pub fn get(&self) -> &T {
        self.try_get().throw()
    }

    /// Returns a reference to the element under the cursor, or [`EndSentinel`] if there is none.
    pub fn try_get(&self) -> Result<&T, EndSentinel> {
        match self.node {
            Some(node) => Ok(node.value()),
            None => Err(EndSentinel),
        }
    }

    /// Returns a mutable reference to the element under the cursor.
    ///
    /// # Panics
    /// Panics if the cursor is at the end sentinel.
    pub fn get_mut(&mut self) -> &mut T {
        self.try_get_mut().throw()
    }

    /// Returns a mutable reference to the element under the cursor, or [`EndSentinel`] if there
    /// is none.
    pub fn try_get_mut(&mut self) -> Result<&mut T, EndSentinel> {
        match self.node {
            Some(node) => Ok(node.value_mut()),
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

    /// Inserts `value` immediately before the cursor and moves the cursor onto it. At the front of
    /// the list, the new element becomes the front, at the end sentinel it becomes the back.
    ///
    /// # Panics
    /// Panics if the allocation strategy can't provide a new node.
    pub fn insert(&mut self, value: T) -> &mut Self {
        self.try_insert(value).throw()
    }

    /// Inserts `value` immediately before the cursor and moves the cursor onto it. If no node can
    /// be allocated an [`AllocError`] is returned and neither the list nor the cursor change.
    pub fn try_insert(&mut self, value: T) -> Result<&mut Self, AllocError> {
        self.try_emplace(|| value)
    }

    /// Builds an element with `make` directly inside a new node before the cursor and moves the
    /// cursor onto it.
    ///
    /// # Panics
    /// Panics if the allocation strategy can't provide a new node.
    pub fn emplace(&mut self, make: impl FnOnce() -> T) -> &mut Self {
        self.try_emplace(make).throw()
    }

    /// Builds an element with `make` directly inside a new node before the cursor and moves the
    /// cursor onto it. `make` is only invoked once the node's storage was obtained.
    pub fn try_emplace(&mut self, make: impl FnOnce() -> T) -> Result<&mut Self, AllocError> {
        let node = self.list.splice_before(self.node, make)?;
        self.node = Some(node);
        Ok(self)
    }

    /// Destroys the element under the cursor and moves the cursor onto its successor, which is the
    /// end sentinel if the element was the last one.
    ///
    /// # Panics
    /// Panics if the cursor is at the end sentinel.
    pub fn erase(&mut self) -> &mut Self {
        self.try_erase().throw()
    }

    /// Destroys the element under the cursor and moves the cursor onto its successor, or returns
    /// [`EndSentinel`] if there is no element to erase.
    pub fn try_erase(&mut self) -> Result<&mut Self, EndSentinel> {
        let node = self.node.ok_or(EndSentinel)?;
        self.node = self.list.erase_node(node);
        Ok(self)
    }

    /// Removes the element under the cursor and returns it, moving the cursor onto its successor.
    ///
    /// # Panics
    /// Panics if the cursor is at the end sentinel.
    pub fn remove(&mut self) -> T {
        self.try_remove().throw()
    }

    /// Removes the element under the cursor and returns it, moving the cursor onto its successor,
    /// or returns [`EndSentinel`] if there is no element to remove.
    pub fn try_remove(&mut self) -> Result<T, EndSentinel> {
        let node = self.node.ok_or(EndSentinel)?;
        let (value, next) = self.list.remove_node(node);
        self.node = next;
        Ok(value)
    }

    /// Inserts `count` clones of `value` before the cursor. See
    /// [`insert_iter`](CursorMut::insert_iter) for where the cursor ends up.
    ///
    /// # Panics
    /// Panics if the allocation strategy can't provide all of the new nodes, in which case none of
    /// them remain in the list.
    pub fn insert_n(&mut self, count: usize, value: T) -> &mut Self
    where
        T: Clone,
    {
        self.try_insert_n(count, value).throw()
    }

    /// Inserts `count` clones of `value` before the cursor. If any allocation fails, the elements
    /// inserted so far are erased again and the error is returned.
    pub fn try_insert_n(&mut self, count: usize, value: T) -> Result<&mut Self, AllocError>
    where
        T: Clone,
    {
        self.try_insert_iter(iter::repeat_n(value, count))
    }

    /// Inserts every element of `values` before the cursor, keeping their order. The cursor moves
    /// onto the first inserted element, or stays where it is if `values` was empty.
    ///
    /// # Panics
    /// Panics if the allocation strategy can't provide all of the new nodes, in which case none of
    /// them remain in the list.
    ///
    /// # Examples
    /// ```
    /// # use cest::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = [1, 5].into_iter().collect();
    ///
    /// let mut cursor = list.begin_mut();
    /// cursor.move_next().insert_iter(2..5);
    /// assert_eq!(*cursor.get(), 2);
    ///
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_iter<I: IntoIterator<Item = T>>(&mut self, values: I) -> &mut Self {
        self.try_insert_iter(values).throw()
    }

    /// Inserts every element of `values` before the cursor, keeping their order. If any
    /// allocation fails, the elements inserted so far are erased again and the error is returned,
    /// leaving the list and the cursor as they were.
    pub fn try_insert_iter<I: IntoIterator<Item = T>>(
        &mut self,
        values: I,
    ) -> Result<&mut Self, AllocError> {
        let mut first = None;
        let mut inserted = 0_usize;

        for value in values {
            match self.list.splice_before(self.node, || value) {
                Ok(node) => {
                    if first.is_none() {
                        first = Some(node);
                    }
                    inserted += 1;
                },
                Err(error) => {
                    let mut curr = first;
                    for _ in 0..inserted {
                        // SAFETY: The inserted nodes form a contiguous run starting at first, each
                        // erasure yields the next one.
                        curr = self.list.erase_node(unsafe { curr.unreachable() });
                    }
                    return Err(error);
                },
            }
        }

        if first.is_some() {
            self.node = first;
        }
        Ok(self)
    }

    /// Erases up to `count` elements, starting with the one under the cursor and stopping early at
    /// the end sentinel. Returns the number of elements erased. The cursor ends up on the successor
    /// of the last erased element.
    pub fn erase_n(&mut self, count: usize) -> usize {
        let mut erased = 0;
        while erased < count && self.try_erase().is_ok() {
            erased += 1;
        }
        erased
    }
}

impl<T: Debug, A: Allocator> Debug for CursorMut<'_, T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(node) => f.debug_tuple("CursorMut").field(node.value()).finish(),
            None => write!(f, "CursorMut(end)"),
        }
    }
}
