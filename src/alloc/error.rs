use std::alloc::Layout;

use derive_more::{Display, Error, From, IsVariant, TryInto};

pub use crate::util::error::CapacityOverflow;

/// The allocation strategy was unable to provide a block for the contained [`Layout`].
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Out of memory: failed to allocate {} bytes (align {})!", layout.size(), layout.align())]
pub struct OutOfMemory {
    #[error(not(source))]
    pub layout: Layout,
}

/// Resource exhaustion, returned by every operation that needs new storage.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The requested size can't be represented as a valid [`Layout`].
    CapacityOverflow(CapacityOverflow),
    /// The strategy refused or failed to satisfy the request.
    OutOfMemory(OutOfMemory),
}

impl AllocError {
    pub(crate) const fn out_of_memory(layout: Layout) -> AllocError {
        AllocError::OutOfMemory(OutOfMemory { layout })
    }
}
