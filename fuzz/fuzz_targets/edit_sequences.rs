// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for structural edits.
//!
//! Drives both representations through the same edits. They must accept and
//! reject the same edits and stay equal after every step.

#![no_main]

use arbitrary::Arbitrary;
use hiername::{Name, StringArrayName, StringName};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Edit {
    Set(u8, String),
    Insert(u8, String),
    Append(String),
    Remove(u8),
}

#[derive(Debug, Arbitrary)]
struct EditInput {
    delimiter: char,
    start: Vec<String>,
    edits: Vec<Edit>,
}

fn apply<N: Name>(name: &N, edit: &Edit) -> hiername::Result<N> {
    match edit {
        Edit::Set(i, c) => name.set_component(usize::from(*i), c),
        Edit::Insert(i, c) => name.insert(usize::from(*i), c),
        Edit::Append(c) => name.append(c),
        Edit::Remove(i) => name.remove(usize::from(*i)),
    }
}

fuzz_target!(|input: EditInput| {
    let Ok(mut array) = StringArrayName::from_parts(input.start.clone(), input.delimiter) else {
        return;
    };
    let mut string = StringName::from_parts(input.start, input.delimiter)
        .expect("both representations validate delimiters alike");

    for edit in &input.edits {
        match (apply(&array, edit), apply(&string, edit)) {
            (Ok(a), Ok(s)) => {
                array = a;
                string = s;
            }
            (Err(a), Err(s)) => assert_eq!(a, s),
            (a, s) => panic!("representations disagree on {:?}: {:?} vs {:?}", edit, a, s),
        }
        assert!(array.is_equal(&string));
        assert_eq!(array.as_data_string(), string.as_data_string());
    }
});
