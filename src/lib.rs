//! A small family of allocator-aware containers, modelled on the sequence containers of a standard
//! library: a doubly linked list, a dynamic array and a growable character buffer.
//!
//! # Purpose
//! The interesting part of this crate is [`LinkedList`](collections::linked::LinkedList). It
//! manages its own nodes by hand: every node is allocated, constructed, destroyed and released
//! through a pluggable [`Allocator`](alloc::Allocator), and linked to its neighbours with raw,
//! non-owning pointers. [`Vector`](collections::contiguous::Vector) and
//! [`StringBuf`](collections::contiguous::StringBuf) go through the same allocation contract but
//! grow contiguously, which makes them a useful cross-check.
//!
//! # Allocation
//! All containers take an allocation strategy as a type parameter, defaulting to
//! [`Global`](alloc::Global). Dispatch is static, strategies are stored by value inside the
//! container and can be inspected with `allocator()`. [`Limited`](alloc::Limited) caps the number
//! of live blocks, which is handy for exercising out-of-memory paths and checking for leaks.
//!
//! # Error Handling
//! Operations that can fail come in two flavours. The `try_` form returns a [`Result`] with a
//! strongly typed error, the plain form panics with the message of that error. Failures fall into
//! two classes:
//! - Resource exhaustion ([`AllocError`](alloc::AllocError)), raised by anything that allocates.
//! - Precondition violations ([`EmptyCollection`], [`EndSentinel`], [`IndexOutOfBounds`]), such as
//!   popping from an empty list or dereferencing the end of a list.
//!
//! A failed operation never leaves a container half modified.
//!
//! # Features
//! - `linked` / `contiguous`: the two collection families, both enabled by `collections-all`
//!   (default).
//! - `tracing`: enables [`Traced`](alloc::Traced), an allocation strategy that reports every
//!   request through [`tracing`](https://docs.rs/tracing).
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod alloc;
#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error::{CapacityOverflow, EmptyCollection, EndSentinel, IndexOutOfBounds};
