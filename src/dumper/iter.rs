//! Core dump engine - Dumper and ChunkIter.
//!
//! This module implements the synchronous dump API. It provides two main
//! types:
//!
//! - [`Dumper`] - Configures and initiates dump operations
//! - [`ChunkIter`] - Iterator that yields chunks from a [`std::io::Read`] source
//!
//! # Example
//!
//! ```no_run
//! use dumprs::{Dumper, DumpConfig};
//!
//! let dumper = Dumper::new(DumpConfig::default().with_limit(1024));
//! dumper.dump_path("data.bin")?;
//! # Ok::<(), dumprs::DumpError>(())
//! ```

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use bytes::Bytes;

use crate::buffer::Buffer;
use crate::chunk::Chunk;
use crate::config::DumpConfig;
use crate::error::DumpError;
use crate::render::format_line;

/// Bytes requested per read from the underlying source.
const READ_BLOCK: usize = 8 * 1024;

/// A dumper that renders byte streams as hex-dump lines.
///
/// `Dumper` is the high-level API for synchronous dumping. It holds a
/// configuration and provides methods to dump data from various sources.
///
/// # Example
///
/// ```
/// use dumprs::{Dumper, DumpConfig};
///
/// let dumper = Dumper::new(DumpConfig::default());
/// let text = dumper.dump_string(&b"hello world"[..]);
/// assert!(text.starts_with("00000000: 68 65 6C 6C 6F"));
/// ```
#[derive(Debug, Clone)]
pub struct Dumper {
    config: DumpConfig,
}

impl Dumper {
    /// Creates a new dumper with the given configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use dumprs::{Dumper, DumpConfig};
    ///
    /// let config = DumpConfig::default();
    /// let dumper = Dumper::new(config);
    /// ```
    pub fn new(config: DumpConfig) -> Self {
        Self { config }
    }

    /// Creates a chunking iterator from a reader.
    ///
    /// This method returns an iterator that lazily reads from the reader and
    /// yields one chunk per output line, honoring the configured byte limit.
    /// Every chunk except possibly the last has exactly `bytes_per_line`
    /// bytes. If the configuration is invalid, the iterator yields a single
    /// [`DumpError::InvalidConfig`] and stops.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Cursor;
    /// use dumprs::{Dumper, DumpConfig};
    ///
    /// let data: Vec<u8> = (0..40).collect();
    /// let dumper = Dumper::new(DumpConfig::default());
    ///
    /// let chunks: Vec<_> = dumper
    ///     .chunk(Cursor::new(data))
    ///     .collect::<Result<_, _>>()?;
    /// assert_eq!(chunks.len(), 3);
    /// # Ok::<(), dumprs::DumpError>(())
    /// ```
    pub fn chunk<R: Read>(self, reader: R) -> ChunkIter<R> {
        ChunkIter::new(reader, self.config)
    }

    /// Chunks an in-memory buffer.
    ///
    /// This is a convenience method for data that is already in memory. The
    /// returned chunks are zero-copy slices of the input, truncated to the
    /// configured byte limit.
    ///
    /// An invalid configuration produces no chunks; use
    /// [`DumpConfig::validate`] to check beforehand.
    ///
    /// # Example
    ///
    /// ```
    /// use dumprs::{Dumper, DumpConfig};
    ///
    /// let dumper = Dumper::new(DumpConfig::default());
    /// let chunks = dumper.chunk_bytes(&b"hello world"[..]);
    ///
    /// assert_eq!(chunks.len(), 1);
    /// assert_eq!(chunks[0].offset(), 0);
    /// ```
    pub fn chunk_bytes(&self, data: impl Into<Bytes>) -> Vec<Chunk> {
        if self.config.validate().is_err() {
            return Vec::new();
        }

        let data = data.into();
        let dumped = match self.config.limit() {
            Some(limit) => {
                let end = (limit as usize).min(data.len());
                data.slice(..end)
            }
            None => data,
        };

        let bytes_per_line = self.config.bytes_per_line();
        let mut chunks = Vec::with_capacity(dumped.len().div_ceil(bytes_per_line));
        let mut start = 0usize;

        while start < dumped.len() {
            let end = (start + bytes_per_line).min(dumped.len());
            chunks.push(Chunk {
                data: dumped.slice(start..end),
                offset: start as u64,
            });
            start = end;
        }

        chunks
    }

    /// Dumps a reader to a writer, one formatted line per chunk.
    ///
    /// This is the generic form of the classic "hexdump to stdout" routine:
    /// reads at most the configured limit from `reader` and writes lines in
    /// order of increasing offset to `writer`.
    ///
    /// # Errors
    ///
    /// Propagates the first read or write failure; nothing is retried.
    pub fn dump_to<R: Read, W: Write>(&self, reader: R, mut writer: W) -> Result<(), DumpError> {
        self.config.validate()?;

        let bytes_per_line = self.config.bytes_per_line();
        for chunk in self.clone().chunk(reader) {
            let chunk = chunk?;
            writeln!(writer, "{}", format_line(&chunk, bytes_per_line))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Dumps the beginning of a file to standard output.
    ///
    /// Opens `path` for reading in binary mode, reads at most the configured
    /// limit, and writes one line per chunk to stdout. The file handle is
    /// scoped to this call and released on every exit path.
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::FileNotFound`] if the path does not exist,
    /// [`DumpError::PermissionDenied`] if it is unreadable, and
    /// [`DumpError::Io`] for any other read or write failure.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dumprs::{Dumper, DumpConfig};
    ///
    /// let dumper = Dumper::new(DumpConfig::default().with_limit(1024));
    /// dumper.dump_path("data.bin")?;
    /// # Ok::<(), dumprs::DumpError>(())
    /// ```
    pub fn dump_path(&self, path: impl AsRef<Path>) -> Result<(), DumpError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DumpError::from_open(path, e))?;
        let stdout = io::stdout();
        self.dump_to(file, stdout.lock())
    }

    /// Renders an in-memory buffer as a newline-terminated dump string.
    ///
    /// An invalid configuration produces an empty string; use
    /// [`DumpConfig::validate`] to check beforehand.
    ///
    /// # Example
    ///
    /// ```
    /// use dumprs::{Dumper, DumpConfig};
    ///
    /// let dumper = Dumper::new(DumpConfig::default());
    /// let text = dumper.dump_string(vec![0u8, 1, 2]);
    /// assert_eq!(text, format!("00000000: {:<48} {}\n", "00 01 02", "..."));
    /// ```
    pub fn dump_string(&self, data: impl Into<Bytes>) -> String {
        let bytes_per_line = self.config.bytes_per_line();
        let mut out = String::new();
        for chunk in self.chunk_bytes(data) {
            out.push_str(&format_line(&chunk, bytes_per_line));
            out.push('\n');
        }
        out
    }

    /// Returns the dumper's configuration.
    pub fn config(&self) -> &DumpConfig {
        &self.config
    }
}

impl Default for Dumper {
    fn default() -> Self {
        Self::new(DumpConfig::default())
    }
}

/// An iterator that yields chunks from a reader.
///
/// `ChunkIter` reads data from a [`std::io::Read`] source in blocks and
/// carves fixed-width chunks out of the staged bytes, stopping once the
/// configured byte limit is reached. The final chunk may be shorter than
/// `bytes_per_line`; it is never empty.
///
/// The iterator finishes after yielding the first error.
pub struct ChunkIter<R> {
    reader: R,
    bytes_per_line: usize,
    remaining: Option<u64>,
    buffer: Buffer,
    pending: Vec<u8>,
    offset: u64,
    invalid: Option<DumpError>,
    finished: bool,
}

impl<R: Read> ChunkIter<R> {
    fn new(reader: R, config: DumpConfig) -> Self {
        let invalid = config.validate().err();

        Self {
            reader,
            bytes_per_line: config.bytes_per_line(),
            remaining: config.limit(),
            buffer: Buffer::take(),
            pending: Vec::with_capacity(config.bytes_per_line().max(READ_BLOCK)),
            offset: 0,
            invalid,
            finished: false,
        }
    }

    /// Extracts `len` bytes from the front of the staging buffer as a chunk
    /// and advances the offset.
    fn emit_chunk(&mut self, len: usize) -> Chunk {
        let data = Bytes::copy_from_slice(&self.pending[..len]);
        let chunk_offset = self.offset;

        // Keep any remaining data
        if len < self.pending.len() {
            self.pending.copy_within(len.., 0);
            self.pending.truncate(self.pending.len() - len);
        } else {
            self.pending.clear();
        }

        self.offset += len as u64;

        Chunk {
            data,
            offset: chunk_offset,
        }
    }
}

impl<R: Read> Iterator for ChunkIter<R> {
    type Item = Result<Chunk, DumpError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if let Some(e) = self.invalid.take() {
            self.finished = true;
            return Some(Err(e));
        }

        loop {
            // A full line's worth of staged bytes is a chunk
            if self.pending.len() >= self.bytes_per_line {
                let len = self.bytes_per_line;
                return Some(Ok(self.emit_chunk(len)));
            }

            let max = match self.remaining {
                Some(r) => r.min(READ_BLOCK as u64) as usize,
                None => READ_BLOCK,
            };

            if max == 0 {
                // Limit reached - emit the short final chunk if any
                self.finished = true;
                if self.pending.is_empty() {
                    return None;
                }
                let len = self.pending.len();
                return Some(Ok(self.emit_chunk(len)));
            }

            match self.buffer.fill_from(&mut self.reader, max) {
                Ok([]) => {
                    // End of stream - emit the short final chunk if any
                    self.finished = true;
                    if self.pending.is_empty() {
                        return None;
                    }
                    let len = self.pending.len();
                    return Some(Ok(self.emit_chunk(len)));
                }
                Ok(block) => {
                    if let Some(r) = self.remaining.as_mut() {
                        *r -= block.len() as u64;
                    }
                    self.pending.extend_from_slice(block);
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}
