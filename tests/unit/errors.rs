//! Precondition failures and their error variants.

use super::common::{make_array, make_string};
use hiername::{Name, NameError, StringArrayName, StringName};

#[test]
fn test_index_errors_are_illegal_arguments() {
    let array = make_array(&["a", "b"]);
    let string = make_string(&["a", "b"]);

    for result in [array.component(2).map(drop), array.remove(2).map(drop)] {
        assert!(matches!(result, Err(NameError::IllegalArgument(_))));
    }
    for result in [string.set_component(2, "x").map(drop), string.insert(3, "x").map(drop)] {
        assert!(matches!(result, Err(NameError::IllegalArgument(_))));
    }
}

#[test]
fn test_delimiter_must_be_single_character() {
    for bad in ["", "ab", "\\"] {
        assert!(StringArrayName::new(["a"], Some(bad)).is_err(), "{:?}", bad);
        assert!(StringName::new("a", Some(bad)).is_err(), "{:?}", bad);
    }
    for bad in ["", "ab"] {
        assert!(make_array(&["a"]).as_string_with(bad).is_err(), "{:?}", bad);
    }
    assert!(StringName::empty(Some("é")).is_ok());
}

#[test]
fn test_as_string_with_accepts_escape_character() {
    let array = make_array(&["a", "b"]);
    let string = make_string(&["a", "b"]);
    assert_eq!(array.as_string_with("\\").unwrap(), r"a\b");
    assert_eq!(string.as_string_with("\\").unwrap(), r"a\b");
}

#[test]
fn test_failed_edit_leaves_receiver_usable() {
    let name = make_string(&["a"]);
    assert!(name.remove(1).is_err());
    assert_eq!(name.append("b").unwrap().as_string(), "a.b");
}

#[test]
fn test_error_display() {
    let err = make_array(&[]).component(0).unwrap_err();
    assert!(err.is_caller_error());
    assert!(err.to_string().starts_with("Illegal argument"));
}

#[test]
fn test_serde_rejects_escape_delimiter() {
    let json = r#"{"delimiter":"\\","components":["a"]}"#;
    assert!(serde_json::from_str::<StringName>(json).is_err());
    assert!(serde_json::from_str::<StringArrayName>(json).is_err());
}
