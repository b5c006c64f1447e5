//! A module containing [`StringBuf`], a growable character buffer built on
//! [`Vector`](super::Vector).

mod string_buf;

pub use string_buf::*;
