//! Fuzzing harness for config parsing and validation
//!
//! Run with: cargo fuzz run config_parser

#![no_main]
use jaigurudev_config::Config;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = toml::from_str::<Config>(s) {
            // Validation must report problems, never panic
            let _ = config.validate();
            let _ = config.catalog.clamp_limit(usize::MAX);
        }
    }
});
