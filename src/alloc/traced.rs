use std::alloc::Layout;
use std::ptr::NonNull;

use tracing::{trace, warn};

use super::{AllocError, Allocator, Global};

/// A strategy which forwards to another one and emits a `tracing` event for every request.
///
/// Allocations and releases are reported at `TRACE` level, refused requests at `WARN`. Events are
/// emitted under the `cest::alloc` target, with the block's size and alignment as fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Traced<A: Allocator = Global> {
    inner: A,
}

impl<A: Allocator> Traced<A> {
    /// Wraps `inner`, reporting every request made through it.
    pub const fn wrap(inner: A) -> Traced<A> {
        Traced { inner }
    }

    /// The strategy that actually provides the blocks.
    pub const fn inner(&self) -> &A {
        &self.inner
    }
}

// SAFETY: Every block comes from the inner strategy, which upholds the guarantees itself.
unsafe impl<A: Allocator> Allocator for Traced<A> {
    fn allocate_bytes(&mut self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        match self.inner.allocate_bytes(layout) {
            Ok(ptr) => {
                trace!(
                    target: "cest::alloc",
                    size = layout.size(),
                    align = layout.align(),
                    ptr = ?ptr,
                    "allocate"
                );
                Ok(ptr)
            },
            Err(error) => {
                warn!(
                    target: "cest::alloc",
                    size = layout.size(),
                    align = layout.align(),
                    %error,
                    "allocation refused"
                );
                Err(error)
            },
        }
    }

    unsafe fn deallocate_bytes(&mut self, ptr: NonNull<u8>, layout: Layout) {
        trace!(
            target: "cest::alloc",
            size = layout.size(),
            align = layout.align(),
            ptr = ?ptr,
            "deallocate"
        );
        // SAFETY: The block was allocated by inner, as all of our blocks are.
        unsafe { self.inner.deallocate_bytes(ptr, layout) }
    }

    fn max_bytes(&self) -> usize {
        self.inner.max_bytes()
    }
}
