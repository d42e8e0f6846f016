//! Basic synchronous dump example with in-memory data.
//!
//! Run with:
//!     cargo run --example sync_basic

use dumprs::{DumpConfig, Dumper};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Every byte value once, so both columns get exercised
    let data: Vec<u8> = (0u8..=255).collect();

    println!("Dumping {} bytes of data...\n", data.len());

    let dumper = Dumper::new(DumpConfig::default());
    let text = dumper.dump_string(data);

    print!("{}", text);

    println!("\nTotal: {} lines", text.lines().count());

    Ok(())
}
