//! Text rendering of a chunk as one hexdump line.

use std::fmt::Write;

use crate::chunk::Chunk;

// Printable range rendered as-is in the ASCII column
const PRINTABLE_MIN: u8 = 0x20;
const PRINTABLE_MAX: u8 = 0x7E;

/// Renders one chunk as a `hexdump`-style text line (no trailing newline).
///
/// The line has three columns:
///
/// - the chunk offset as 8-digit zero-padded uppercase hex, followed by `": "`
/// - each byte as 2-digit uppercase hex, space-separated, left-justified in a
///   field of `3 * bytes_per_line` characters
/// - after a single space, one ASCII cell per byte: the character itself for
///   printable values (32..=126), `.` otherwise
///
/// The hex field is padded to the full width even when the chunk is shorter
/// than `bytes_per_line`, so the ASCII column starts at the same character
/// offset on every line of a dump.
///
/// # Example
///
/// ```
/// use dumprs::{format_line, Chunk};
///
/// let chunk = Chunk::new(&b"\x00\x01Hi"[..], 16);
/// assert_eq!(
///     format_line(&chunk, 4),
///     "00000010: 00 01 48 69  ..Hi",
/// );
/// ```
pub fn format_line(chunk: &Chunk, bytes_per_line: usize) -> String {
    // 2 hex digits plus a separator per byte, minus the final separator,
    // plus one column of padding: 3 * bytes_per_line total.
    let field_width = bytes_per_line * 3;

    let mut hex = String::with_capacity(field_width);
    for (i, b) in chunk.data().iter().enumerate() {
        if i > 0 {
            hex.push(' ');
        }
        let _ = write!(hex, "{:02X}", b);
    }

    let mut line = String::with_capacity(10 + field_width + 1 + chunk.len());
    let _ = write!(line, "{:08X}: {:<width$} ", chunk.offset(), hex, width = field_width);
    for &b in chunk.data() {
        line.push(ascii_cell(b));
    }

    line
}

/// Maps a byte to its ASCII column cell.
///
/// Printable values (32..=126) map to their own character, everything else
/// to `.`.
pub fn ascii_cell(b: u8) -> char {
    if (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&b) {
        b as char
    } else {
        '.'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_line() {
        let data: Vec<u8> = (0u8..16).collect();
        let chunk = Chunk::new(data, 0);
        assert_eq!(
            format_line(&chunk, 16),
            "00000000: 00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F  ................",
        );
    }

    #[test]
    fn test_short_line_is_padded() {
        let chunk = Chunk::new(&b"\x10\x11\x12\x13"[..], 16);
        let line = format_line(&chunk, 16);
        assert_eq!(line, format!("00000010: {:<48} {}", "10 11 12 13", "...."));
    }

    #[test]
    fn test_offset_is_uppercase_hex() {
        let chunk = Chunk::new(&b"\xAB"[..], 0xDEAD);
        let line = format_line(&chunk, 16);
        assert!(line.starts_with("0000DEAD: AB"));
    }

    #[test]
    fn test_printable_bytes_render_as_themselves() {
        let chunk = Chunk::new(&b"Hi~ "[..], 0);
        let line = format_line(&chunk, 4);
        assert!(line.ends_with(" Hi~ "));
    }

    #[test]
    fn test_ascii_cell_boundaries() {
        assert_eq!(ascii_cell(0x1F), '.');
        assert_eq!(ascii_cell(0x20), ' ');
        assert_eq!(ascii_cell(0x7E), '~');
        assert_eq!(ascii_cell(0x7F), '.');
        assert_eq!(ascii_cell(0x00), '.');
        assert_eq!(ascii_cell(0xFF), '.');
    }

    #[test]
    fn test_ascii_cell_matches_char_for_printable_range() {
        for b in 0u8..=255 {
            let cell = ascii_cell(b);
            if (32..=126).contains(&b) {
                assert_eq!(cell, b as char);
            } else {
                assert_eq!(cell, '.');
            }
        }
    }

    #[test]
    fn test_ascii_column_alignment() {
        // ASCII column starts at index 59 for the default width, for every
        // chunk length in 1..=16.
        for len in 1..=16usize {
            let data = vec![0x41u8; len];
            let chunk = Chunk::new(data, 0);
            let line = format_line(&chunk, 16);
            assert_eq!(line.len(), 59 + len, "chunk len {}", len);
            assert_eq!(&line[59..], "A".repeat(len), "chunk len {}", len);
        }
    }
}
