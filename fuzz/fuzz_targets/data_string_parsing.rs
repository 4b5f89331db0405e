// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for parsing untrusted data strings.
//!
//! Parsing must never panic, both representations must agree on the result,
//! and rendering the parsed name must reproduce its components.

#![no_main]

use hiername::{Name, StringArrayName, StringName};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let array = StringArrayName::from_data_string(data);
    let string = StringName::from_data_string(data);

    assert!(array.no_components() >= 1);
    assert!(array.is_equal(&string), "representations disagree on {:?}", data);
    assert!(string.check_invariant().is_ok());

    // Re-rendering is canonical, so a second parse is a fixed point.
    let rendered = array.as_data_string();
    let reparsed = StringArrayName::from_data_string(&rendered);
    assert_eq!(reparsed.components(), array.components());
    assert_eq!(reparsed.as_data_string(), rendered);
});
