// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for component masking.
//!
//! Every raw string under every delimiter must survive mask then unmask, and a
//! masked component must never split into more than one piece.

#![no_main]

use arbitrary::Arbitrary;
use hiername::codec::split_masked;
use hiername::{mask, unmask};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MaskInput {
    raw: String,
    delimiter: char,
}

fuzz_target!(|input: MaskInput| {
    if input.delimiter == hiername::ESCAPE_CHARACTER {
        return;
    }

    let masked = mask(&input.raw, input.delimiter);
    assert_eq!(unmask(&masked), input.raw, "mask/unmask round trip failed");
    assert_eq!(
        split_masked(&masked, input.delimiter).len(),
        1,
        "masked component {:?} contains an unescaped delimiter",
        masked
    );
});
