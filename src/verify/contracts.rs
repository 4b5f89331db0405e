// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for name operations.
//!
//! Every public operation on a name runs a subset of these checks. They are
//! the same for both representations, so they live here instead of being
//! repeated in each `impl`.
//!
//! | Contract                     | Kind          | Error on failure       |
//! |------------------------------|---------------|------------------------|
//! | `check_single_char`          | precondition  | `IllegalArgument`      |
//! | `check_delimiter`            | precondition  | `IllegalArgument`      |
//! | `check_index_in_range`       | precondition  | `IllegalArgument`      |
//! | `check_insert_index`         | precondition  | `IllegalArgument`      |
//! | `check_length_delta`         | postcondition | `PostconditionFailed`  |
//! | `check_component_at`         | postcondition | `PostconditionFailed`  |
//! | `check_stored_delimiter`     | invariant     | `InvariantViolated`    |
//! | `check_component_count`      | invariant     | `InvariantViolated`    |
//!
//! Unlike debug assertions these run in release builds too. A contract
//! violation is reported to the caller as a `NameError`, never as a panic.

use tracing::warn;

use crate::codec::ESCAPE_CHARACTER;
use crate::error::{NameError, Result};
use crate::name::Name;

// ============================================================================
// PRECONDITIONS
// ============================================================================

/// Check that `delimiter` is exactly one character.
///
/// Enough for a delimiter that is only rendered and never masked against.
pub fn check_single_char(delimiter: &str) -> Result<char> {
    let mut chars = delimiter.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(NameError::illegal_argument(format!(
            "delimiter must be a single character, got {:?}",
            delimiter
        )));
    };
    Ok(ch)
}

/// Check that `delimiter` is exactly one character and not the escape character.
///
/// Returns the delimiter as a `char` so callers never handle the string form again.
pub fn check_delimiter(delimiter: &str) -> Result<char> {
    let ch = check_single_char(delimiter)?;
    check_delimiter_char(ch)?;
    Ok(ch)
}

/// Check a delimiter that is already a single character.
pub fn check_delimiter_char(delimiter: char) -> Result<()> {
    if delimiter == ESCAPE_CHARACTER {
        return Err(NameError::illegal_argument(format!(
            "delimiter must differ from the escape character {:?}",
            ESCAPE_CHARACTER
        )));
    }
    Ok(())
}

/// Check `0 <= i < len` for reads, replacement and removal.
#[inline]
pub fn check_index_in_range(i: usize, len: usize) -> Result<()> {
    if i >= len {
        return Err(NameError::illegal_argument(format!(
            "index {} out of range [0, {})",
            i, len
        )));
    }
    Ok(())
}

/// Check `0 <= i <= len` for insertion. Inserting at `len` appends.
#[inline]
pub fn check_insert_index(i: usize, len: usize) -> Result<()> {
    if i > len {
        return Err(NameError::illegal_argument(format!(
            "insert index {} out of range [0, {}]",
            i, len
        )));
    }
    Ok(())
}

// ============================================================================
// POSTCONDITIONS
// ============================================================================

/// Check that `result` has exactly `before + delta` components.
pub fn check_length_delta(op: &str, before: usize, delta: isize, result: &dyn Name) -> Result<()> {
    let expected = before.checked_add_signed(delta);
    let actual = result.no_components();

    if expected != Some(actual) {
        warn!(op, before, delta, actual, "length postcondition failed");
        return Err(NameError::postcondition_failed(format!(
            "{} failed: expected {:?} components, found {}",
            op, expected, actual
        )));
    }
    Ok(())
}

/// Check that `result` holds `expected` at position `i`.
pub fn check_component_at(op: &str, result: &dyn Name, i: usize, expected: &str) -> Result<()> {
    match result.component(i) {
        Ok(actual) if actual == expected => Ok(()),
        Ok(actual) => {
            warn!(op, i, expected, actual = %actual, "component postcondition failed");
            Err(NameError::postcondition_failed(format!(
                "{} failed: component {} is {:?}, expected {:?}",
                op, i, actual, expected
            )))
        }
        Err(_) => {
            warn!(op, i, "component postcondition failed: index vanished");
            Err(NameError::postcondition_failed(format!(
                "{} failed: component {} missing",
                op, i
            )))
        }
    }
}

// ============================================================================
// CLASS INVARIANT
// ============================================================================

/// Check that a stored delimiter is one a constructor would have accepted.
pub fn check_stored_delimiter(delimiter: char) -> Result<()> {
    if delimiter == ESCAPE_CHARACTER {
        warn!(?delimiter, "delimiter invariant violated");
        return Err(NameError::invariant_violated(format!(
            "stored delimiter {:?} is the escape character",
            delimiter
        )));
    }
    Ok(())
}

/// Check that a maintained component count agrees with the stored components.
pub fn check_component_count(stored: usize, derived: usize) -> Result<()> {
    if stored != derived {
        warn!(stored, derived, "component count invariant violated");
        return Err(NameError::invariant_violated(format!(
            "stored component count {} disagrees with {} derived components",
            stored, derived
        )));
    }
    Ok(())
}
