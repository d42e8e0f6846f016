//! Line rendering.
//!
//! - [`format_line`] - Renders one chunk as an offset/hex/ASCII text line
//! - [`ascii_cell`] - The printable-ASCII column mapping for one byte

mod line;

pub use line::{ascii_cell, format_line};
