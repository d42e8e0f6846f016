//! Dump engine for processing byte streams.
//!
//! - [`Dumper`] - Configures and initiates dump operations
//! - [`ChunkIter`] - Iterator that yields chunks from a [`std::io::Read`] source

mod iter;

pub use iter::{ChunkIter, Dumper};
