use std::alloc::Layout;
use std::ptr::NonNull;

use super::{AllocError, Allocator, Global};

/// A strategy which forwards to another one, but refuses to hold more than a fixed number of live
/// blocks at once.
///
/// Besides simulating memory exhaustion, it keeps count of the blocks it handed out, which makes
/// leaks visible: once a container is empty, [`live`](Limited::live) should be back to zero.
///
/// # Examples
/// ```
/// # use cest::alloc::Limited;
/// # use cest::collections::linked::LinkedList;
/// let mut list = LinkedList::new_in(Limited::new(2));
/// list.push_back(1);
/// list.push_back(2);
/// assert!(list.try_push_back(3).is_err());
/// assert_eq!(list.allocator().live(), 2);
///
/// list.clear();
/// assert_eq!(list.allocator().live(), 0);
/// ```
#[derive(Debug)]
pub struct Limited<A: Allocator = Global> {
    inner: A,
    limit: usize,
    live: usize,
    total: usize,
}

impl Limited<Global> {
    /// Creates a strategy backed by [`Global`] which allows at most `limit` live blocks.
    pub const fn new(limit: usize) -> Limited<Global> {
        Limited::wrap(Global, limit)
    }
}

impl<A: Allocator> Limited<A> {
    /// Wraps `inner`, allowing at most `limit` live blocks.
    pub const fn wrap(inner: A, limit: usize) -> Limited<A> {
        Limited {
            inner,
            limit,
            live: 0,
            total: 0,
        }
    }

    /// The maximum number of blocks that can be live at once.
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Changes the limit. Blocks that are already live are unaffected, even if they exceed it.
    pub const fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }

    /// The number of blocks currently allocated and not yet released.
    pub const fn live(&self) -> usize {
        self.live
    }

    /// The number of successful allocations over the lifetime of this strategy.
    pub const fn total(&self) -> usize {
        self.total
    }

    /// The strategy that actually provides the blocks.
    pub const fn inner(&self) -> &A {
        &self.inner
    }
}

// SAFETY: Every block comes from the inner strategy, which upholds the guarantees itself.
unsafe impl<A: Allocator> Allocator for Limited<A> {
    fn allocate_bytes(&mut self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if self.live >= self.limit {
            return Err(AllocError::out_of_memory(layout));
        }
        let ptr = self.inner.allocate_bytes(layout)?;
        self.live += 1;
        self.total += 1;
        Ok(ptr)
    }

    unsafe fn deallocate_bytes(&mut self, ptr: NonNull<u8>, layout: Layout) {
        self.live -= 1;
        // SAFETY: The block was allocated by inner, as all of our blocks are.
        unsafe { self.inner.deallocate_bytes(ptr, layout) }
    }

    fn max_bytes(&self) -> usize {
        self.inner.max_bytes()
    }
}

impl Default for Limited<Global> {
    /// A limit of [`usize::MAX`], in effect only counting blocks.
    fn default() -> Self {
        Limited::new(usize::MAX)
    }
}

impl<A: Allocator + Clone> Clone for Limited<A> {
    /// Clones the limit and the inner strategy. The counters start from zero because the clone
    /// doesn't own any of the original's blocks.
    fn clone(&self) -> Self {
        Limited::wrap(self.inner.clone(), self.limit)
    }
}
