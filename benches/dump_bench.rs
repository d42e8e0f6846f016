//! Benchmarks for dumprs.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use dumprs::{DumpConfig, Dumper};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    // Different data sizes
    for size in [64 * 1024, 1024 * 1024] {
        // Deterministic pseudo-random data
        let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            format!("random_{}kb", size / 1024),
            &data,
            |b, data| {
                b.iter(|| {
                    let dumper = Dumper::new(DumpConfig::default().unlimited());
                    let text = dumper.dump_string(black_box(data.clone()));
                    black_box(text.len())
                });
            },
        );

        // All zeros (every ASCII cell is a dot)
        let zeros = vec![0u8; size];
        group.bench_with_input(
            format!("zeros_{}kb", size / 1024),
            &zeros,
            |b, data| {
                b.iter(|| {
                    let dumper = Dumper::new(DumpConfig::default().unlimited());
                    let text = dumper.dump_string(black_box(data.clone()));
                    black_box(text.len())
                });
            },
        );
    }

    group.finish();
}

fn bench_configs(c: &mut Criterion) {
    let mut group = c.benchmark_group("configs");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

    // Narrow lines
    group.bench_function("narrow_lines", |b| {
        let config = DumpConfig::default().unlimited().with_bytes_per_line(8);
        b.iter(|| {
            let dumper = Dumper::new(config);
            let text = dumper.dump_string(black_box(data.clone()));
            black_box(text.len())
        });
    });

    // Default lines
    group.bench_function("default_lines", |b| {
        let config = DumpConfig::default().unlimited();
        b.iter(|| {
            let dumper = Dumper::new(config);
            let text = dumper.dump_string(black_box(data.clone()));
            black_box(text.len())
        });
    });

    // Wide lines
    group.bench_function("wide_lines", |b| {
        let config = DumpConfig::default().unlimited().with_bytes_per_line(32);
        b.iter(|| {
            let dumper = Dumper::new(config);
            let text = dumper.dump_string(black_box(data.clone()));
            black_box(text.len())
        });
    });

    // Chunking only, no rendering
    group.bench_function("chunks_only", |b| {
        let config = DumpConfig::default().unlimited();
        b.iter(|| {
            let dumper = Dumper::new(config);
            let chunks = dumper.chunk_bytes(black_box(data.clone()));
            black_box(chunks.len())
        });
    });

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    use std::io::Read;

    let mut group = c.benchmark_group("streaming");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("iterator", |b| {
        b.iter(|| {
            let cursor = std::io::Cursor::new(black_box(&data));
            let dumper = Dumper::new(DumpConfig::default().unlimited());
            let mut count = 0;
            for chunk in dumper.chunk(cursor) {
                let _ = chunk.unwrap();
                count += 1;
            }
            black_box(count)
        });
    });

    group.bench_function("buffered", |b| {
        b.iter(|| {
            let mut cursor = std::io::Cursor::new(black_box(&data));
            let mut buf = vec![0u8; 64 * 1024];
            let mut total = 0usize;
            loop {
                let n = cursor.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                total += n;
            }
            black_box(total)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_configs, bench_streaming);
criterion_main!(benches);
