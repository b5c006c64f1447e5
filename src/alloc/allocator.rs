use std::alloc::Layout;
use std::ptr::NonNull;

use super::{AllocError, CapacityOverflow};

pub(crate) const MAX_BYTES: usize = isize::MAX as usize;

/// A pluggable allocation strategy.
///
/// Implementors only provide the untyped primitives, [`allocate_bytes`](Allocator::allocate_bytes)
/// and [`deallocate_bytes`](Allocator::deallocate_bytes). The typed operations containers actually
/// use are provided on top of them: [`allocate`](Allocator::allocate) and
/// [`deallocate`](Allocator::deallocate) handle blocks of `count` values of `T`,
/// [`construct`](Allocator::construct) and [`destroy`](Allocator::destroy) manage the lifetime of a
/// value in place.
///
/// The typed methods are generic, so the trait is meant for static dispatch through a type
/// parameter rather than a trait object.
///
/// # Safety
/// A block returned by `allocate_bytes` must be valid for reads and writes of `layout.size()`
/// bytes, aligned to `layout.align()` and must not overlap any other live block. It must stay valid
/// until it is passed back to `deallocate_bytes` of the same strategy. Requests with a zero-sized
/// layout are never forwarded to a strategy.
pub unsafe trait Allocator {
    /// Allocates a raw block fitting `layout`, which is never zero-sized.
    fn allocate_bytes(&mut self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Releases a block previously returned by [`allocate_bytes`](Allocator::allocate_bytes).
    ///
    /// # Safety
    /// `ptr` must have been allocated by this strategy with the same `layout` and not yet been
    /// released.
    unsafe fn deallocate_bytes(&mut self, ptr: NonNull<u8>, layout: Layout);

    /// The size of the largest block this strategy could ever provide, in bytes.
    fn max_bytes(&self) -> usize {
        MAX_BYTES
    }

    /// The largest number of values of `T` that could fit in a single block.
    fn max_size<T>(&self) -> usize {
        match size_of::<T>() {
            0 => usize::MAX,
            size => self.max_bytes() / size,
        }
    }

    /// Allocates uninitialized storage for `count` values of `T`.
    ///
    /// Zero-sized requests don't reach the strategy, they produce a dangling pointer instead.
    ///
    /// # Errors
    /// Returns [`AllocError::CapacityOverflow`] if the total size can't be represented and
    /// [`AllocError::OutOfMemory`] if the strategy can't satisfy the request.
    fn allocate<T>(&mut self, count: usize) -> Result<NonNull<T>, AllocError> {
        let layout = Layout::array::<T>(count).map_err(|_| CapacityOverflow)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        Ok(self.allocate_bytes(layout)?.cast())
    }

    /// Releases storage for `count` values of `T`. The values themselves aren't dropped.
    ///
    /// # Safety
    /// `ptr` must have been returned by [`allocate`](Allocator::allocate) on this strategy with the
    /// same `count`, and must not be used afterwards.
    unsafe fn deallocate<T>(&mut self, ptr: NonNull<T>, count: usize) {
        // The layout was valid when the block was allocated, so it still is.
        let Ok(layout) = Layout::array::<T>(count) else { return };
        if layout.size() != 0 {
            // SAFETY: Non-zero layouts were allocated by allocate_bytes with this exact layout.
            unsafe { self.deallocate_bytes(ptr.cast(), layout) }
        }
    }

    /// Moves `value` into previously allocated storage, without dropping whatever was there.
    ///
    /// # Safety
    /// `ptr` must be valid for writes and properly aligned for `T`.
    unsafe fn construct<T>(&mut self, ptr: NonNull<T>, value: T) {
        // SAFETY: Upheld by the caller.
        unsafe { ptr.write(value) }
    }

    /// Runs the destructor of the value at `ptr`, leaving the storage allocated.
    ///
    /// # Safety
    /// `ptr` must point to an initialized value which isn't used again until it is reconstructed.
    unsafe fn destroy<T>(&mut self, ptr: NonNull<T>) {
        // SAFETY: Upheld by the caller.
        unsafe { ptr.drop_in_place() }
    }
}
