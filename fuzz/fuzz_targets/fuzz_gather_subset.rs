//! Fuzz target for gather-subset resolution.
//!
//! Tests that arbitrary token lists either resolve to a category set or
//! return a validation error, without panicking. Also checks the core
//! invariant: a resolved subset only ever contains known categories.

#![no_main]

use cf_common::{resolve_subset, Category};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|tokens: Vec<String>| {
    if let Ok(subset) = resolve_subset(&tokens) {
        assert!(subset.iter().all(|c| Category::all().contains(c)));
    }
});
