use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{Iter, IterMut, Link, Node, NodePtr};
use crate::alloc::{AllocError, Allocator, Global};
use crate::collections::linked::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, EndSentinel};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions, which manages its nodes by hand through an
/// [`Allocator`]. See also: [`Cursor`] and [`CursorMut`] for bi-directional traversal, insertion
/// and removal at arbitrary positions.
///
/// Every element lives in its own node, allocated when the element is inserted and released as
/// soon as it is removed. Existing nodes are never moved, so growing the list never touches the
/// storage of other elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(n)` |
/// | `is_empty` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `emplace_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `contains` | `O(n)` |
/// | [`CursorMut::insert`] | `O(1)` |
/// | [`CursorMut::erase`] | `O(1)` |
///
/// The length isn't stored anywhere, `size` walks the list from [`begin`](LinkedList::begin) to
/// [`end`](LinkedList::end) every time it is called.
pub struct LinkedList<T, A: Allocator = Global> {
    pub(crate) state: ListState<T>,
    pub(crate) alloc: A,
    pub(crate) _phantom: PhantomData<T>,
}

/// Both endpoints exist exactly when the list has at least one element.
#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub front: NodePtr<T>,
    pub back: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements, using the [`Global`] allocator.
    pub const fn new() -> LinkedList<T> {
        LinkedList::new_in(Global)
    }
}

impl<T, A: Allocator> LinkedList<T, A> {
    /// Creates a new LinkedList with no elements which allocates its nodes through `alloc`.
    pub const fn new_in(alloc: A) -> LinkedList<T, A> {
        LinkedList {
            state: Empty,
            alloc,
            _phantom: PhantomData,
        }
    }

    /// Returns a reference to the allocation strategy used by this list.
    pub const fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns true if the LinkedList contains no elements, that is when
    /// [`begin`](LinkedList::begin) is equal to [`end`](LinkedList::end).
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Counts the elements of the LinkedList by walking from [`begin`](LinkedList::begin) to
    /// [`end`](LinkedList::end). This is `O(n)` for every call.
    ///
    /// # Examples
    /// ```
    /// # use cest::collections::linked::LinkedList;
    /// let list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(list.size(), 3);
    /// ```
    pub fn size(&self) -> usize {
        // SAFETY: The sentinel is always reachable from the front of a well formed list.
        unsafe { self.begin().distance_to(&self.end()).unreachable() }
    }

    /// An alias for [`size`](LinkedList::size), with the same `O(n)` cost.
    pub fn len(&self) -> usize {
        self.size()
    }

    /// The largest number of elements this list could theoretically hold, which is the smaller
    /// of what the allocation strategy reports for a node and [`isize::MAX`]. This is a bound for
    /// reasoning about overflow, nothing enforces it.
    pub fn max_size(&self) -> usize {
        self.alloc.max_size::<Node<T>>().min(isize::MAX as usize)
    }

    /// Returns a reference to the first element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    /// Returns a reference to the first element in the list, or [`EmptyCollection`] if there is
    /// none.
    pub fn try_front(&self) -> Result<&T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { front, .. }) => Ok(front.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn front_mut(&mut self) -> &mut T {
        self.try_front_mut().throw()
    }

    /// Returns a mutable reference to the first element in the list, or [`EmptyCollection`] if
    /// there is none.
    pub fn try_front_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { front, .. }) => Ok(front.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    /// Returns a reference to the last element in the list, or [`EmptyCollection`] if there is
    /// none.
    pub fn try_back(&self) -> Result<&T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { back, .. }) => Ok(back.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn back_mut(&mut self) -> &mut T {
        self.try_back_mut().throw()
    }

    /// Returns a mutable reference to the last element in the list, or [`EmptyCollection`] if
    /// there is none.
    pub fn try_back_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { back, .. }) => Ok(back.value_mut()),
        }
    }

    /// Returns a [`Cursor`] at the first element, or at the end sentinel if the list is empty.
    pub fn begin(&self) -> Cursor<'_, T, A> {
        Cursor {
            node: self.front_link(),
            list: self,
        }
    }

    /// Returns a [`Cursor`] at the end sentinel.
    pub const fn end(&self) -> Cursor<'_, T, A> {
        Cursor {
            node: None,
            list: self,
        }
    }

    /// Returns a [`CursorMut`] at the first element, or at the end sentinel if the list is empty.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T, A> {
        CursorMut {
            node: self.front_link(),
            list: self,
        }
    }

    /// Returns a [`CursorMut`] at the end sentinel. Inserting through it appends to the list.
    pub const fn end_mut(&mut self) -> CursorMut<'_, T, A> {
        CursorMut {
            node: None,
            list: self,
        }
    }

    /// Add the provided element to the back of the LinkedList.
    ///
    /// # Panics
    /// Panics if the allocation strategy can't provide a new node.
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).throw()
    }

    /// Add the provided element to the back of the LinkedList, returning an [`AllocError`] if no
    /// node could be allocated for it. The list is unchanged in that case.
    pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        self.splice_before(None, || value).map(|_| ())
    }

    /// Add the provided element to the front of the LinkedList.
    ///
    /// # Panics
    /// Panics if the allocation strategy can't provide a new node.
    pub fn push_front(&mut self, value: T) {
        self.try_push_front(value).throw()
    }

    /// Add the provided element to the front of the LinkedList, returning an [`AllocError`] if no
    /// node could be allocated for it. The list is unchanged in that case.
    pub fn try_push_front(&mut self, value: T) -> Result<(), AllocError> {
        self.splice_before(self.front_link(), || value).map(|_| ())
    }

    /// Appends an element built by `make` directly inside a new node at the back of the list and
    /// returns a reference to it.
    ///
    /// # Panics
    /// Panics if the allocation strategy can't provide a new node.
    ///
    /// # Examples
    /// ```
    /// # use cest::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.emplace_back(|| String::from("a")).push('b');
    /// assert_eq!(list.back(), "ab");
    /// ```
    pub fn emplace_back(&mut self, make: impl FnOnce() -> T) -> &mut T {
        self.try_emplace_back(make).throw()
    }

    /// Appends an element built by `make` directly inside a new node at the back of the list.
    ///
    /// Storage is requested first, `make` is never invoked if that fails.
    pub fn try_emplace_back(&mut self, make: impl FnOnce() -> T) -> Result<&mut T, AllocError> {
        Ok(self.splice_before(None, make)?.value_mut())
    }

    /// Prepends an element built by `make` directly inside a new node at the front of the list and
    /// returns a reference to it.
    ///
    /// # Panics
    /// Panics if the allocation strategy can't provide a new node.
    pub fn emplace_front(&mut self, make: impl FnOnce() -> T) -> &mut T {
        self.try_emplace_front(make).throw()
    }

    /// Prepends an element built by `make` directly inside a new node at the front of the list.
    ///
    /// Storage is requested first, `make` is never invoked if that fails.
    pub fn try_emplace_front(&mut self, make: impl FnOnce() -> T) -> Result<&mut T, AllocError> {
        Ok(self.splice_before(self.front_link(), make)?.value_mut())
    }

    /// Removes the last element from the list and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().throw()
    }

    /// Removes the last element from the list and returns it, or [`EmptyCollection`] if the list
    /// is empty.
    pub fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        match self.back_link() {
            None => Err(EmptyCollection),
            Some(back) => Ok(self.remove_node(back).0),
        }
    }

    /// Removes the first element from the list and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().throw()
    }

    /// Removes the first element from the list and returns it, or [`EmptyCollection`] if the list
    /// is empty.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        match self.front_link() {
            None => Err(EmptyCollection),
            Some(front) => Ok(self.remove_node(front).0),
        }
    }

    /// Destroys and releases every node, leaving the list empty. Does nothing for an empty list.
    pub fn clear(&mut self) {
        let mut curr = match mem::replace(&mut self.state, Empty) {
            Empty => None,
            Full(ListContents { front, .. }) => Some(front),
        };

        while let Some(node) = curr {
            curr = node.next();
            // SAFETY: The list no longer refers to any node, each one is destroyed exactly once.
            unsafe { node.destroy(&mut self.alloc) };
        }
    }

    /// Exchanges the contents (and allocators) of two lists without touching any node.
    pub fn swap(&mut self, other: &mut LinkedList<T, A>) {
        mem::swap(self, other);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq, A: Allocator> LinkedList<T, A> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T, A: Allocator> LinkedList<T, A> {
    pub(crate) const fn front_link(&self) -> Link<T> {
        match self.state {
            Empty => None,
            Full(ListContents { front, .. }) => Some(front),
        }
    }

    pub(crate) const fn back_link(&self) -> Link<T> {
        match self.state {
            Empty => None,
            Full(ListContents { back, .. }) => Some(back),
        }
    }

    /// Creates a node holding the value produced by `make` and links it in immediately before
    /// `next`. A `next` of [`None`] denotes the end sentinel, which appends.
    ///
    /// If allocation fails, the list is left untouched.
    pub(crate) fn splice_before(
        &mut self,
        next: Link<T>,
        make: impl FnOnce() -> T,
    ) -> Result<NodePtr<T>, AllocError> {
        let prev = match next {
            Some(next_node) => next_node.prev(),
            None => self.back_link(),
        };

        let node = NodePtr::create(&mut self.alloc, prev, next, make)?;

        match &mut self.state {
            Empty => self.state = Full(ListContents { front: node, back: node }),
            Full(contents) => {
                match prev {
                    Some(prev_node) => prev_node.set_next(Some(node)),
                    None => contents.front = node,
                }
                match next {
                    Some(next_node) => next_node.set_prev(Some(node)),
                    None => contents.back = node,
                }
            },
        }

        Ok(node)
    }

    /// Detaches `node` from the chain, relinking its former neighbours, and returns its successor.
    /// The node itself is left untouched and still needs to be destroyed or taken.
    pub(crate) fn unlink(&mut self, node: NodePtr<T>) -> Link<T> {
        let prev = node.prev();
        let next = node.next();

        match (&mut self.state, prev, next) {
            // Interior node.
            (Full(_), Some(prev_node), Some(next_node)) => {
                prev_node.set_next(Some(next_node));
                next_node.set_prev(Some(prev_node));
            },
            // Last node.
            (Full(contents), Some(prev_node), None) => {
                prev_node.set_next(None);
                contents.back = prev_node;
            },
            // First node.
            (Full(contents), None, Some(next_node)) => {
                next_node.set_prev(None);
                contents.front = next_node;
            },
            // Sole node.
            (state, None, None) => *state = Empty,
            (Empty, ..) => unreachable!("a linked node can't belong to an empty list"),
        }

        next
    }

    /// Unlinks, destroys and releases `node`, returning its successor.
    pub(crate) fn erase_node(&mut self, node: NodePtr<T>) -> Link<T> {
        let next = self.unlink(node);
        // SAFETY: The node belongs to this list and was just unlinked.
        unsafe { node.destroy(&mut self.alloc) };
        next
    }

    /// Unlinks `node` and moves its value out, returning the value and the node's successor.
    pub(crate) fn remove_node(&mut self, node: NodePtr<T>) -> (T, Link<T>) {
        let next = self.unlink(node);
        // SAFETY: The node belongs to this list and was just unlinked.
        (unsafe { node.take(&mut self.alloc) }, next)
    }

    /// Walks the chain in both directions, checking every invariant on the endpoints and links.
    /// Returns the number of elements.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) -> usize {
        match self.state {
            Empty => 0,
            Full(ListContents { front, back }) => {
                assert!(front.prev().is_none(), "Front node shouldn't have a predecessor.");
                assert!(back.next().is_none(), "Back node shouldn't have a successor.");

                let mut forward = 1;
                let mut curr = front;
                while let Some(next) = curr.next() {
                    assert!(next.prev() == Some(curr), "Links should agree in both directions.");
                    curr = next;
                    forward += 1;
                }
                assert!(curr == back, "Following next links from the front should reach back.");

                let mut backward = 1;
                let mut curr = back;
                while let Some(prev) = curr.prev() {
                    curr = prev;
                    backward += 1;
                }
                assert!(curr == front, "Following prev links from the back should reach front.");
                assert_eq!(forward, backward, "Both directions should see the same nodes.");

                forward
            },
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: Allocator> Drop for LinkedList<T, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, A: Allocator + Default> FromIterator<T> for LinkedList<T, A> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new_in(A::default());
        list.extend(iter);
        list
    }
}

impl<T, A: Allocator> Extend<T> for LinkedList<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a, A: Allocator> Extend<&'a T> for LinkedList<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for LinkedList<T, A> {
    fn clone(&self) -> Self {
        let mut list = LinkedList::new_in(self.alloc.clone());
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: PartialEq, A: Allocator, B: Allocator> PartialEq<LinkedList<T, B>> for LinkedList<T, A> {
    fn eq(&self, other: &LinkedList<T, B>) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq, A: Allocator> Eq for LinkedList<T, A> {}

impl<T: Hash, A: Allocator> Hash for LinkedList<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut count = 0_usize;
        for value in self.iter() {
            value.hash(state);
            count += 1;
        }

        // Terminate variable length hashing sequence.
        count.hash(state);
    }
}

// SAFETY: The list owns all of its nodes exclusively, so it can be sent whenever its elements and
// its allocator can.
unsafe impl<T: Send, A: Allocator + Send> Send for LinkedList<T, A> {}
// SAFETY: Shared access to a list only ever gives out shared references to elements.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for LinkedList<T, A> {}

impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListContents<T> {}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListState<T> {}

impl<T: Debug, A: Allocator> Debug for LinkedList<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "LinkedList ")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug, A: Allocator> Display for LinkedList<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}
