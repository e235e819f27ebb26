//! Fuzz target for configuration parsing.
//!
//! Goal: The parser should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only test valid UTF-8 strings (indentguard.toml must be UTF-8)
    if let Ok(text) = std::str::from_utf8(data) {
        // Raw parsing - should never panic
        let _ = indentguard_settings::parse_config_toml(text);

        // Silent-fallback resolution - should never panic either
        let _ = indentguard_settings::effective_or_default(Some(text));
    }
});
