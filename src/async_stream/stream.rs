//! Async stream adapter for dumping.
//!
//! This module provides asynchronous chunking using the `futures-io::AsyncRead`
//! trait, making it runtime-agnostic and compatible with tokio, async-std,
//! smol, and other async runtimes.
//!
//! # Example
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

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::chunk::Chunk;
use crate::config::DumpConfig;
use crate::error::DumpError;

/// Bytes requested per read from the underlying source.
const READ_BLOCK: usize = 8 * 1024;

pin_project! {
    /// A stream that yields chunks from an async reader.
    ///
    /// This uses `futures_io::AsyncRead` which is runtime-agnostic.
    /// Works with tokio, async-std, smol, or any futures-compatible runtime.
    ///
    /// Same semantics as the sync [`ChunkIter`](crate::ChunkIter): fixed-width
    /// chunks, a short final chunk, the configured byte limit, and termination
    /// after the first error.
    pub struct DumpStream<R> {
        #[pin]
        reader: R,
        bytes_per_line: usize,
        remaining: Option<u64>,
        buffer: Vec<u8>,
        pending: Vec<u8>,
        offset: u64,
        invalid: Option<DumpError>,
        finished: bool,
    }
}

impl<R> DumpStream<R> {
    /// Creates a new dump stream from an async reader.
    pub fn new(reader: R, config: DumpConfig) -> Self {
        Self {
            reader,
            bytes_per_line: config.bytes_per_line(),
            remaining: config.limit(),
            buffer: Vec::new(),
            pending: Vec::with_capacity(config.bytes_per_line().max(READ_BLOCK)),
            offset: 0,
            invalid: config.validate().err(),
            finished: false,
        }
    }
}

impl<R: AsyncRead> Stream for DumpStream<R> {
    type Item = Result<Chunk, DumpError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }
        if let Some(e) = this.invalid.take() {
            *this.finished = true;
            return Poll::Ready(Some(Err(e)));
        }

        loop {
            // A full line's worth of staged bytes is a chunk
            if this.pending.len() >= *this.bytes_per_line {
                let len = *this.bytes_per_line;
                return Poll::Ready(Some(Ok(take_chunk(this.pending, this.offset, len))));
            }

            let max = match this.remaining {
                Some(r) => (*r).min(READ_BLOCK as u64) as usize,
                None => READ_BLOCK,
            };

            if max == 0 {
                // Limit reached - emit the short final chunk if any
                *this.finished = true;
                if this.pending.is_empty() {
                    return Poll::Ready(None);
                }
                let len = this.pending.len();
                return Poll::Ready(Some(Ok(take_chunk(this.pending, this.offset, len))));
            }

            if this.buffer.len() < max {
                this.buffer.resize(max, 0);
            }
            match this.reader.as_mut().poll_read(cx, &mut this.buffer[..max]) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(DumpError::Io(e))));
                }
                Poll::Ready(Ok(0)) => {
                    // End of stream - emit the short final chunk if any
                    *this.finished = true;
                    if this.pending.is_empty() {
                        return Poll::Ready(None);
                    }
                    let len = this.pending.len();
                    return Poll::Ready(Some(Ok(take_chunk(this.pending, this.offset, len))));
                }
                Poll::Ready(Ok(n)) => {
                    if let Some(r) = this.remaining.as_mut() {
                        *r -= n as u64;
                    }
                    this.pending.extend_from_slice(&this.buffer[..n]);
                }
            }
        }
    }
}

/// Extracts `len` bytes from the front of the staging buffer as a chunk and
/// advances the offset.
fn take_chunk(pending: &mut Vec<u8>, offset: &mut u64, len: usize) -> Chunk {
    let data = Bytes::copy_from_slice(&pending[..len]);
    let chunk_offset = *offset;

    // Keep any remaining data
    if len < pending.len() {
        pending.copy_within(len.., 0);
        pending.truncate(pending.len() - len);
    } else {
        pending.clear();
    }

    *offset += len as u64;

    Chunk {
        data,
        offset: chunk_offset,
    }
}

/// Creates a dump stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
/// This works with any async runtime (tokio, async-std, smol, etc.).
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use dumprs::{dump_async, DumpConfig};
///
/// let tokio_reader = tokio::fs::File::open("file").await?;
/// let stream = dump_async(tokio_reader.compat(), DumpConfig::default());
/// ```
///
/// # Returns
///
/// A [`DumpStream`] that implements `Stream<Item = Result<Chunk, DumpError>>`
pub fn dump_async<R: AsyncRead>(reader: R, config: DumpConfig) -> DumpStream<R> {
    DumpStream::new(reader, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dumper::Dumper;
    use futures_util::StreamExt;

    #[tokio::test]
    async fn test_dump_stream_empty() {
        let reader: &[u8] = &[];
        let stream = dump_async(reader, DumpConfig::default());
        let chunks: Vec<_> = stream.collect().await;
        assert!(chunks.is_empty());
    }

    #[tokio::test]
    async fn test_dump_stream_applies_limit() {
        let data = vec![0xAAu8; 1000];
        let reader: &[u8] = &data;
        let stream = dump_async(reader, DumpConfig::default().with_limit(100));

        let chunks: Vec<_> = stream
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        let total: usize = chunks.iter().map(|c| c.len()).sum();
        assert_eq!(total, 100);
    }

    #[tokio::test]
    async fn test_dump_stream_matches_sync() {
        let data: Vec<u8> = (0..500).map(|i| (i % 256) as u8).collect();
        let config = DumpConfig::default().unlimited();

        let reader: &[u8] = &data;
        let from_stream: Vec<_> = dump_async(reader, config)
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let from_bytes = Dumper::new(config).chunk_bytes(data);

        assert_eq!(from_stream, from_bytes);
    }

    #[tokio::test]
    async fn test_dump_stream_invalid_config() {
        let reader: &[u8] = &[1, 2, 3];
        let mut stream = dump_async(reader, DumpConfig::default().with_bytes_per_line(0));

        let first = stream.next().await.unwrap();
        assert!(matches!(first, Err(DumpError::InvalidConfig { .. })));
        assert!(stream.next().await.is_none());
    }
}
