//! Internal buffer management for read staging.
//!
//! This module provides a thread-local buffer pool to minimize allocations
//! when dumping many small inputs in sequence. It is an implementation detail
//! and not part of the public API.

mod pool;

pub(crate) use pool::Buffer;
