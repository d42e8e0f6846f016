#![no_main]

use libfuzzer_sys::fuzz_target;
use dumprs::{DumpConfig, Dumper, format_line};

fuzz_target!(|data: Vec<u8>| {
    // Test with various dump configurations
    let configs = vec![
        // Narrow lines
        DumpConfig::new(64, 1).unwrap(),
        // Odd width
        DumpConfig::new(1024, 7).unwrap(),
        // Default config
        DumpConfig::default(),
        // Whole input
        DumpConfig::default().unlimited(),
    ];

    for config in configs {
        let dumper = Dumper::new(config);
        let chunks = dumper.chunk_bytes(data.clone());
        let bytes_per_line = config.bytes_per_line();

        // Verify: total bytes match input, capped by the limit
        let expected_total = match config.limit() {
            Some(limit) => (limit as usize).min(data.len()),
            None => data.len(),
        };
        let total_bytes: usize = chunks.iter().map(|c| c.len()).sum();
        assert_eq!(total_bytes, expected_total);

        // Verify: line count is ceil(total / bytes_per_line)
        assert_eq!(chunks.len(), expected_total.div_ceil(bytes_per_line));

        // Verify: every chunk except the last is exactly one line wide,
        // no chunk is empty, offsets advance by bytes_per_line
        let mut expected_offset = 0u64;
        for (i, chunk) in chunks.iter().enumerate() {
            assert!(!chunk.is_empty());
            assert!(chunk.len() <= bytes_per_line);
            if i < chunks.len() - 1 {
                assert_eq!(chunk.len(), bytes_per_line);
            }
            assert_eq!(chunk.offset(), expected_offset);
            expected_offset += chunk.len() as u64;
        }

        // Verify: rendered lines have a fixed-width hex field and one ASCII
        // cell per byte
        for chunk in &chunks {
            let line = format_line(chunk, bytes_per_line);
            assert_eq!(line.len(), 10 + 3 * bytes_per_line + 1 + chunk.len());
            assert!(line.is_ascii());
            let ascii_start = 10 + 3 * bytes_per_line + 1;
            for cell in line[ascii_start..].chars() {
                assert!(matches!(cell, ' '..='~'));
            }
        }

        // Verify: determinism - same input produces same chunks and text
        let dumper2 = Dumper::new(config);
        let chunks2 = dumper2.chunk_bytes(data.clone());
        assert_eq!(chunks, chunks2);
        assert_eq!(dumper.dump_string(data.clone()), dumper2.dump_string(data.clone()));
    }
});
