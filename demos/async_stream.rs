//! Async streaming dump example.
//!
//! Demonstrates the runtime-agnostic stream API over an in-memory reader,
//! with a custom line width.
//!
//! Run with:
//!     cargo run --example async_stream --features async-io

use futures_util::StreamExt;

use dumprs::{DumpConfig, dump_async, format_line};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create some test data
    let data: Vec<u8> = (0..200).map(|i| (i % 256) as u8).collect();

    println!("Async dumping {} bytes of data...\n", data.len());

    // Custom config: whole input, 8 bytes per line
    let config = DumpConfig::default().unlimited().with_bytes_per_line(8);

    let reader: &[u8] = &data;
    let mut stream = dump_async(reader, config);

    let mut total_lines = 0;
    let mut total_bytes = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        total_lines += 1;
        total_bytes += chunk.len();

        println!("{}", format_line(&chunk, config.bytes_per_line()));
    }

    println!("\nTotal: {} lines, {} bytes", total_lines, total_bytes);

    Ok(())
}
