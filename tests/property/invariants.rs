//! Contract properties: immutability, length changes and index boundaries.

use super::common::{apply, components_strategy, delimiter_strategy, op_strategy, Op};
use hiername::{Name, StringArrayName, StringName};
use proptest::prelude::*;

/// Expected change in component count for an accepted edit.
fn length_delta(op: &Op) -> isize {
    match op {
        Op::Set(..) => 0,
        Op::Insert(..) | Op::Append(_) => 1,
        Op::Remove(_) => -1,
    }
}

fn check_edit_contract<N: Name>(name: &N, op: &Op) -> Result<(), TestCaseError> {
    let before = name.components();
    let result = apply(name, op);

    // The receiver is never written, whatever the outcome.
    prop_assert_eq!(name.components(), before.clone());

    if let Ok(edited) = result {
        let expected = before.len() as isize + length_delta(op);
        prop_assert_eq!(edited.no_components() as isize, expected);
        prop_assert_eq!(edited.delimiter(), name.delimiter());
        prop_assert!(edited.check_invariant().is_ok());

        match op {
            Op::Set(i, c) | Op::Insert(i, c) => prop_assert_eq!(&edited.component(*i).unwrap(), c),
            Op::Append(c) => prop_assert_eq!(&edited.component(before.len()).unwrap(), c),
            Op::Remove(_) => {}
        }
    }
    Ok(())
}

fn check_boundaries<N: Name>(name: &N) -> Result<(), TestCaseError> {
    let n = name.no_components();

    prop_assert!(name.component(n).is_err());
    prop_assert!(name.set_component(n, "x").is_err());
    prop_assert!(name.remove(n).is_err());
    prop_assert!(name.insert(n + 1, "x").is_err());
    prop_assert!(name.insert(n, "x").is_ok());
    prop_assert!(name.insert(0, "x").is_ok());

    if n > 0 {
        prop_assert!(name.component(n - 1).is_ok());
        prop_assert!(name.remove(n - 1).is_ok());
    }
    Ok(())
}

proptest! {
    /// Property: edits never touch the receiver and change the length by the
    /// documented amount.
    #[test]
    fn prop_edits_follow_contract(
        components in components_strategy(),
        delimiter in delimiter_strategy(),
        op in op_strategy(),
    ) {
        let array = StringArrayName::from_parts(components.clone(), delimiter).unwrap();
        let string = StringName::from_parts(components, delimiter).unwrap();

        check_edit_contract(&array, &op)?;
        check_edit_contract(&string, &op)?;
    }

    /// Property: indices are accepted exactly within their documented ranges.
    #[test]
    fn prop_index_boundaries(
        components in prop::collection::vec("[a-z.]{0,3}", 0..5),
        delimiter in delimiter_strategy(),
    ) {
        check_boundaries(&StringArrayName::from_parts(components.clone(), delimiter).unwrap())?;
        check_boundaries(&StringName::from_parts(components, delimiter).unwrap())?;
    }

    /// Property: as_string joins raw components with the instance delimiter.
    #[test]
    fn prop_as_string_joins_raw_components(
        components in components_strategy(),
        delimiter in delimiter_strategy(),
    ) {
        let name = StringName::from_parts(components.clone(), delimiter).unwrap();
        prop_assert_eq!(name.as_string(), components.join(&delimiter.to_string()));
    }

    /// Property: inserting then removing at the same index restores the name.
    #[test]
    fn prop_insert_remove_cancel(
        components in components_strategy(),
        raw_index in 0usize..8,
        component in "[a-z.\\\\]{0,4}",
    ) {
        let name = StringName::from_parts(components, '.').unwrap();
        let i = raw_index % (name.no_components() + 1);
        let restored = name.insert(i, &component).unwrap().remove(i).unwrap();
        prop_assert_eq!(restored, name);
    }
}
