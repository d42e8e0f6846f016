//! File dump example: the first 1 KiB of a file, hexdump-style.
//!
//! Run with:
//!     cargo run --example dump_file -- /path/to/file

use std::env;
use std::fs;

use dumprs::{DumpConfig, Dumper};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Dumping file: {}\n", path);

    let metadata = fs::metadata(&path)?;
    println!("File size: {} bytes\n", metadata.len());

    let dumper = Dumper::new(DumpConfig::default().with_limit(1024));
    dumper.dump_path(&path)?;

    Ok(())
}
