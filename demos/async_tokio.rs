//! Async file dump example using tokio.
//!
//! Demonstrates driving the dump stream from a `tokio::fs::File` through
//! `tokio_util::compat`.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io -- /path/to/file

use std::env;

use futures_util::StreamExt;
use tokio_util::compat::TokioAsyncReadCompatExt;

use dumprs::{DumpConfig, dump_async, format_line};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Dumping file: {}\n", path);

    let file = tokio::fs::File::open(&path).await?;

    let config = DumpConfig::default().with_limit(1024);
    let mut stream = dump_async(file.compat(), config);

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
