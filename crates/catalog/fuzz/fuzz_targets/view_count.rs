//! Fuzzing harness for view-count parsing
//!
//! Run with: cargo fuzz run view_count

#![no_main]
use jaigurudev_catalog::parse_view_count;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let count = parse_view_count(s);
        // Plain digit strings parse exactly
        if s.trim().chars().all(|c| c.is_ascii_digit()) && !s.trim().is_empty() {
            if let Ok(exact) = s.trim().parse::<u64>() {
                assert_eq!(count, exact);
            }
        }
    }
});
