use std::alloc::{self, Layout};
use std::ptr::{self, NonNull};

use super::{AllocError, Allocator};

/// The global allocator, as used by [`Box`] and friends.
///
/// Unlike the standard collections, a failed allocation isn't routed to
/// [`handle_alloc_error`](alloc::handle_alloc_error), it is returned to the container as an
/// [`AllocError`] so that the caller can decide what to do.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Global;

// SAFETY: Blocks come straight from the global allocator, which upholds the same guarantees.
unsafe impl Allocator for Global {
    fn allocate_bytes(&mut self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if layout.size() == 0 {
            // Containers never ask for this, but the method is public.
            return NonNull::new(ptr::without_provenance_mut(layout.align()))
                .ok_or(AllocError::out_of_memory(layout));
        }
        // SAFETY: Zero-sized layouts have been guarded against.
        NonNull::new(unsafe { alloc::alloc(layout) }).ok_or(AllocError::out_of_memory(layout))
    }

    unsafe fn deallocate_bytes(&mut self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() != 0 {
            // SAFETY: The caller guarantees that ptr was allocated here with this layout.
            unsafe { alloc::dealloc(ptr.as_ptr(), layout) }
        }
    }
}
