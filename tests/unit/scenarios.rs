//! End-to-end scenarios run against both representations.

use super::common::{assert_components, assert_equivalent, make_array, make_string};
use hiername::{Name, StringArrayName, StringName};

// ============================================================================
// EDITS
// ============================================================================

#[test]
fn test_insert_into_middle() {
    let array = make_array(&["oss", "fau", "de"]).insert(1, "cs").unwrap();
    let string = make_string(&["oss", "fau", "de"]).insert(1, "cs").unwrap();

    assert_eq!(array.as_string(), "oss.cs.fau.de");
    assert_eq!(string.as_string(), "oss.cs.fau.de");
    assert_equivalent(&array, &string);
}

#[test]
fn test_append_under_hash_delimiter() {
    let string = StringName::new("oss.cs.fau.de", Some("#")).unwrap();
    assert_eq!(string.no_components(), 1);

    let appended = string.append("people").unwrap();
    assert_eq!(appended.as_string(), "oss.cs.fau.de#people");
    assert_components(&appended, &["oss.cs.fau.de", "people"]);

    let array = StringArrayName::new(["oss.cs.fau.de"], Some("#")).unwrap();
    assert_equivalent(&array.append("people").unwrap(), &appended);
}

#[test]
fn test_set_and_remove() {
    let name = make_string(&["oss", "cs", "fau", "de"]);

    let renamed = name.set_component(0, "www").unwrap();
    assert_eq!(renamed.as_string(), "www.cs.fau.de");

    let shortened = renamed.remove(3).unwrap().remove(0).unwrap();
    assert_eq!(shortened.as_string(), "cs.fau");
    assert_eq!(name.as_string(), "oss.cs.fau.de");
}

#[test]
fn test_edit_chain_from_empty() {
    let array = StringArrayName::empty(None).unwrap();
    let string = StringName::empty(None).unwrap();
    assert!(array.is_empty() && string.is_empty());
    assert_equivalent(&array, &string);

    let array = array.insert(0, "b").unwrap().insert(0, "a").unwrap().append("").unwrap();
    let string = string.insert(0, "b").unwrap().insert(0, "a").unwrap().append("").unwrap();
    assert_components(&array, &["a", "b", ""]);
    assert_equivalent(&array, &string);
    assert_eq!(string.as_data_string(), "a.b.");

    let string = string.remove(0).unwrap().remove(0).unwrap().remove(0).unwrap();
    assert!(string.is_empty());
    assert_eq!(string.as_data_string(), "");
}

// ============================================================================
// EMPTY COMPONENTS
// ============================================================================

#[test]
fn test_empty_name_and_single_empty_component_differ() {
    let empty = StringName::empty(None).unwrap();
    let single = StringName::new("", None).unwrap();

    assert_eq!(empty.no_components(), 0);
    assert_eq!(single.no_components(), 1);
    assert_eq!(empty.as_data_string(), single.as_data_string());
    assert!(!empty.is_equal(&single));
}

#[test]
fn test_data_string_of_empty_name_parses_to_one_component() {
    let empty = StringArrayName::empty(None).unwrap();
    let parsed = StringArrayName::from_data_string(&empty.as_data_string());
    assert_eq!(parsed.components(), vec![""]);
}

#[test]
fn test_consecutive_delimiters_make_empty_components() {
    let name = StringName::new("a..b.", None).unwrap();
    assert_components(&name, &["a", "", "b", ""]);
}

// ============================================================================
// EQUALITY, HASHING, CONCAT
// ============================================================================

#[test]
fn test_equality_ignores_delimiter_and_representation() {
    let dotted = make_array(&["a", "b"]);
    let hashed = StringName::new("a#b", Some("#")).unwrap();

    assert!(dotted.is_equal(&hashed));
    assert_eq!(dotted, hashed);
    assert_eq!(dotted.hash_code(), hashed.hash_code());
    assert_ne!(dotted.as_string(), hashed.as_string());
}

#[test]
fn test_hash_code_is_character_sum() {
    let name = make_string(&["ab"]);
    assert_eq!(name.hash_code(), u64::from('a') + u64::from('b'));
}

#[test]
fn test_concat_mixed_representations() {
    let left = StringName::new("oss.cs", None).unwrap();
    let right = StringArrayName::new(["fau", "de"], Some("/")).unwrap();

    let joined = left.concat(&right).unwrap();
    assert_eq!(joined.as_string(), "oss.cs.fau.de");
    assert_eq!(joined.delimiter(), '.');

    let joined = right.concat(&left).unwrap();
    assert_eq!(joined.as_string(), "fau/de/oss/cs");
}

#[test]
fn test_as_string_with_other_delimiter() {
    let name = make_array(&["usr", "bin"]);
    assert_eq!(name.as_string_with("/").unwrap(), "usr/bin");
    assert_eq!(name.as_string(), "usr.bin");
}
