//! The Chunk type - represents one dump line's worth of bytes.

use bytes::Bytes;
use std::fmt;

/// A run of consecutive bytes corresponding to one dump line.
///
/// Every chunk produced by a dump has at most `bytes_per_line` bytes and
/// carries the offset of its first byte within the input stream. Only the
/// final chunk of a dump may be shorter than `bytes_per_line`; no chunk is
/// ever empty.
///
/// # Example
///
/// ```
/// use dumprs::Chunk;
/// use bytes::Bytes;
///
/// let chunk = Chunk::new(Bytes::from_static(b"hello world"), 16);
///
/// assert_eq!(chunk.len(), 11);
/// assert_eq!(chunk.offset(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk data (may be owned or borrowed).
    pub data: Bytes,

    /// The offset of the first byte in the input stream.
    pub offset: u64,
}

impl Chunk {
    /// Creates a new chunk with the given data and offset.
    pub fn new(data: impl Into<Bytes>, offset: u64) -> Self {
        Self {
            data: data.into(),
            offset,
        }
    }

    /// Returns the length of the chunk data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the chunk data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the offset of the first byte.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the chunk as a byte range of the input stream.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.offset..self.end()
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({} bytes @ {})", self.len(), self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let chunk = Chunk::new(&b"hello"[..], 0);
        assert_eq!(chunk.len(), 5);
        assert!(!chunk.is_empty());
    }

    #[test]
    fn test_offset() {
        let chunk = Chunk::new(&b"hello"[..], 100);
        assert_eq!(chunk.offset(), 100);
    }

    #[test]
    fn test_end() {
        let chunk = Chunk::new(&b"hello"[..], 100);
        assert_eq!(chunk.end(), 105);
    }

    #[test]
    fn test_range() {
        let chunk = Chunk::new(&b"hello"[..], 100);
        assert_eq!(chunk.range(), 100..105);
    }

    #[test]
    fn test_into_data() {
        let chunk = Chunk::new(Bytes::from_static(b"test"), 0);
        assert_eq!(chunk.into_data(), Bytes::from_static(b"test"));
    }

    #[test]
    fn test_display() {
        let chunk = Chunk::new(&b"hello"[..], 100);
        let s = format!("{}", chunk);
        assert!(s.contains("5 bytes"));
        assert!(s.contains("@ 100"));
    }
}
