//! Escape sequences at the edges of components and data strings.
//!
//! Each case here pins down behavior that an earlier, naive split on the
//! delimiter got wrong.

use super::common::{assert_equivalent, make_array, make_string, TRICKY_COMPONENTS};
use hiername::codec::split_masked;
use hiername::{split, unmask, Name, StringArrayName, StringName};

#[test]
fn regression_trailing_escape_before_delimiter() {
    // `a\\` is an escaped backslash, so the next `.` is a real delimiter.
    assert_eq!(split(r"a\\.b", '.'), vec![r"a\", "b"]);
    assert_eq!(split(r"a\.b", '.'), vec!["a.b"]);
}

#[test]
fn regression_run_of_escapes_pairs_left_to_right() {
    assert_eq!(split(r"\\\\.x", '.'), vec![r"\\", "x"]);
    assert_eq!(split(r"\\\.x", '.'), vec![r"\.x"]);
}

#[test]
fn regression_dangling_escape_kept_literally() {
    assert_eq!(unmask("ab\\"), "ab\\");
    assert_eq!(split("a.b\\", '.'), vec!["a", "b\\"]);
    assert_eq!(split_masked("\\", '.'), vec!["\\"]);
}

#[test]
fn regression_component_that_is_only_a_delimiter() {
    let array = make_array(&[".", "."]);
    let string = make_string(&[".", "."]);

    assert_eq!(array.as_data_string(), r"\..\.");
    assert_eq!(string.no_components(), 2);
    assert_equivalent(&array, &string);
}

#[test]
fn regression_component_that_is_only_an_escape() {
    let string = make_string(&["\\"]).append("x").unwrap();
    assert_eq!(string.as_masked(), r"\\.x");
    assert_eq!(string.component(0).unwrap(), "\\");
}

#[test]
fn regression_tricky_components_survive_every_edit() {
    let mut array = StringArrayName::empty(None).unwrap();
    let mut string = StringName::empty(Some("#")).unwrap();

    for (i, component) in TRICKY_COMPONENTS.iter().enumerate() {
        array = array.insert(i / 2, component).unwrap();
        string = string.insert(i / 2, component).unwrap();
        assert!(array.is_equal(&string), "diverged after inserting {:?}", component);
    }

    let parsed = StringName::from_data_string(&string.as_data_string());
    assert!(parsed.is_equal(&array));

    for i in 0..TRICKY_COMPONENTS.len() {
        let replacement = TRICKY_COMPONENTS[TRICKY_COMPONENTS.len() - 1 - i];
        array = array.set_component(i, replacement).unwrap();
        string = string.set_component(i, replacement).unwrap();
    }
    assert!(array.is_equal(&string));
}

#[test]
fn regression_other_delimiter_in_masked_storage() {
    // Under `#`, a dot is ordinary text in the stored string.
    let name = StringName::new(r"a.b#c\#d\\", Some("#")).unwrap();
    assert_eq!(name.components(), vec!["a.b", r"c#d\"]);
    assert_eq!(name.as_data_string(), r"a\.b.c#d\\");
}
