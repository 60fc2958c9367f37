//! Fuzz target for ANSI stripping and printing width.
//!
//! Tests that strip and printing_width handle arbitrary strings without
//! panicking, and that their basic bounds hold.

#![no_main]

use ansi_text::{has_control_codes, printing_width, strip};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let stripped = strip(data);
    assert!(stripped.len() <= data.len());
    assert!(!stripped.contains('\r'));
    assert_eq!(has_control_codes(data), stripped != data);

    let width = printing_width(data);
    assert!(width <= data.chars().count());

    // Slices at char boundaries exercise sequences cut in half.
    for (i, _) in data.char_indices().take(16) {
        let _ = strip(&data[i..]);
        let _ = printing_width(&data[..i]);
    }
});
