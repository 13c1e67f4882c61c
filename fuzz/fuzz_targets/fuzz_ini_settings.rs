//! Fuzz target for INI settings parsing.
//!
//! Tests that config-file parsing handles arbitrary input without
//! panicking. The parser is lenient by design, so any input must
//! produce some settings map, never a crash.

#![no_main]

use cf_core::collect::parse_ini_settings;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = parse_ini_settings(data);
});
