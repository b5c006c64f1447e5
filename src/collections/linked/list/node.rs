use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ptr::{self, NonNull};

use crate::alloc::{AllocError, Allocator};

pub(crate) type Link<T> = Option<NodePtr<T>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

/// A non-owning pointer to a live node. Ownership of every node rests with the list that created
/// it, so a NodePtr is only valid while that list hasn't destroyed the node.
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

/// Hands a freshly allocated node block back to the strategy if building the value panics.
struct ReleaseOnUnwind<'a, T, A: Allocator> {
    alloc: &'a mut A,
    ptr: NonNull<Node<T>>,
}

impl<T, A: Allocator> Drop for ReleaseOnUnwind<'_, T, A> {
    fn drop(&mut self) {
        // SAFETY: The block was allocated with a count of one and hasn't been constructed yet.
        unsafe { self.alloc.deallocate(self.ptr, 1) }
    }
}

impl<T> NodePtr<T> {
    /// Allocates a single node block through `alloc` and constructs the node in place with the
    /// provided links. `value` is only invoked once storage was obtained.
    pub fn create<A: Allocator>(
        alloc: &mut A,
        prev: Link<T>,
        next: Link<T>,
        value: impl FnOnce() -> T,
    ) -> Result<NodePtr<T>, AllocError> {
        let ptr = alloc.allocate::<Node<T>>(1)?;

        let guard = ReleaseOnUnwind { alloc: &mut *alloc, ptr };
        let node = Node {
            value: value(),
            prev,
            next,
        };
        mem::forget(guard);

        // SAFETY: ptr was just allocated for exactly one node.
        unsafe { alloc.construct(ptr, node) };
        Ok(NodePtr(ptr))
    }

    /// Destroys the node in place and then releases its storage.
    ///
    /// # Safety
    /// The node must have been created by `alloc`, be unlinked from its list and never be used
    /// again.
    pub unsafe fn destroy<A: Allocator>(self, alloc: &mut A) {
        // SAFETY: Upheld by the caller.
        unsafe {
            alloc.destroy(self.0);
            alloc.deallocate(self.0, 1);
        }
    }

    /// Moves the value out of the node and releases its storage without destroying anything.
    ///
    /// # Safety
    /// Same as [`NodePtr::destroy`].
    pub unsafe fn take<A: Allocator>(self, alloc: &mut A) -> T {
        // SAFETY: Upheld by the caller, the node is live and read exactly once.
        unsafe {
            let node = ptr::read(self.0.as_ptr());
            alloc.deallocate(self.0, 1);
            node.value
        }
    }

    pub fn value<'a>(self) -> &'a T {
        // SAFETY: NodePtrs only exist for live nodes. The list hands out references with
        // lifetimes bound to its own borrow.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: As for value, with exclusivity guaranteed by the mutable borrow of the list.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev(self) -> Link<T> {
        // SAFETY: NodePtrs only exist for live nodes.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn next(self) -> Link<T> {
        // SAFETY: NodePtrs only exist for live nodes.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_prev(self, link: Link<T>) {
        // SAFETY: NodePtrs only exist for live nodes, links are plain pointers.
        unsafe { (*self.0.as_ptr()).prev = link }
    }

    pub fn set_next(self, link: Link<T>) {
        // SAFETY: NodePtrs only exist for live nodes, links are plain pointers.
        unsafe { (*self.0.as_ptr()).next = link }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

impl<T> Debug for NodePtr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodePtr").field(&self.0).finish()
    }
}
