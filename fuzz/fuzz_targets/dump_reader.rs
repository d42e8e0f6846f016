#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use dumprs::{DumpConfig, Dumper};

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
        // The streaming reader path must agree with the in-memory path
        let from_reader: Vec<_> = Dumper::new(config)
            .chunk(Cursor::new(data.clone()))
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let from_memory = Dumper::new(config).chunk_bytes(data.clone());

        assert_eq!(from_reader, from_memory);

        // The writer path must agree with the string path
        let mut out = Vec::new();
        Dumper::new(config)
            .dump_to(Cursor::new(data.clone()), &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            Dumper::new(config).dump_string(data.clone())
        );
    }
});
