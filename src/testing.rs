// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::name::{Name, StringArrayName, StringName};

/// Components that exercise every masking rule with the default delimiter.
pub const TRICKY_COMPONENTS: &[&str] = &[
    "oss.cs",
    ".oss",
    "de.",
    r"fa\u",
    r"fa\\u",
    "\\",
    ".",
    "",
    r"\.",
    "#",
];

/// Build a name of any representation from raw components and a delimiter.
///
/// Panics on an invalid delimiter; tests pass valid ones.
pub fn make_name<N: Name>(components: &[&str], delimiter: char) -> N {
    N::from_parts(
        components.iter().map(|c| (*c).to_string()).collect(),
        delimiter,
    )
    .expect("test delimiter must be valid")
}

/// Array-backed name with the default delimiter.
pub fn make_array(components: &[&str]) -> StringArrayName {
    make_name(components, crate::DEFAULT_DELIMITER)
}

/// String-backed name with the default delimiter.
pub fn make_string(components: &[&str]) -> StringName {
    make_name(components, crate::DEFAULT_DELIMITER)
}

/// `count` components of the form `c0`, `c1`, ...
pub fn numbered_components(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("c{}", i)).collect()
}
