//! dumprs
//!
//! Streaming hex dump for Rust.
//!
//! `dumprs` transforms a byte stream into `hexdump`-style text lines: an
//! offset column, a fixed-width column of hex byte values, and a
//! printable-ASCII column. It is designed as a small, composable primitive
//! for:
//!
//! - inspecting binary file headers
//! - debugging wire protocols and codecs
//! - embedding a dump view in larger tools
//!
//! The crate intentionally:
//! - does NOT interpret file contents or formats
//! - does NOT parse command lines
//! - does NOT manage concurrency
//! - does NOT buffer more than one read block
//!
//! It only does one thing: **Read bytes → yield dump lines**
//!
//! ```text
//! 00000000: 00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F  ................
//! 00000010: 10 11 12 13                                       ....
//! ```
//!
//! # Sync
//!
//! ```no_run
//! use dumprs::{DumpConfig, DumpError, Dumper};
//!
//! fn main() -> Result<(), DumpError> {
//!     // First 1024 bytes of a file, 16 bytes per line, to stdout.
//!     let dumper = Dumper::new(DumpConfig::default().with_limit(1024));
//!     dumper.dump_path("data.bin")?;
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use dumprs::{dump_async, format_line, DumpConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead>(reader: R) -> Result<(), dumprs::DumpError> {
//!     let config = DumpConfig::default();
//!     let mut stream = dump_async(reader, config);
//!
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         println!("{}", format_line(&chunk, config.bytes_per_line()));
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod config;
mod dumper;
mod error;
mod render;

mod buffer; // internal (thread-local reuse)

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface (intentionally tiny)
//

pub use chunk::Chunk;
pub use config::DumpConfig;
pub use dumper::{ChunkIter, Dumper};
pub use error::DumpError;
pub use render::{ascii_cell, format_line};

#[cfg(feature = "async-io")]
pub use async_stream::{DumpStream, dump_async};
