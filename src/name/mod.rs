// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The name contract and the operations written once against it.
//!
//! A name is an ordered sequence of raw components plus one delimiter. Two
//! representations implement the contract:
//!
//! ```text
//!                     ┌──────────────────┐
//!                     │   trait Name     │  as_string, as_data_string,
//!                     │ (this module)    │  is_equal, hash_code, concat
//!                     └────────┬─────────┘
//!               ┌──────────────┴──────────────┐
//!               ▼                             ▼
//!      ┌──────────────────┐          ┌──────────────────┐
//!      │ StringArrayName  │          │   StringName     │
//!      │ Vec<String>      │          │ masked String +  │
//!      │ (array.rs)       │          │ count (string.rs)│
//!      └──────────────────┘          └──────────────────┘
//! ```
//!
//! Names are values. `set_component`, `insert`, `append`, `remove` and
//! `concat` borrow the receiver and return a new name; the receiver is never
//! written. Postconditions are checked on the new name before it is handed
//! out, so a failed check simply drops it.
//!
//! Equality ignores the delimiter: `a.b` with `.` equals `a#b` with `#`.

mod array;
mod string;

pub use array::StringArrayName;
pub use string::StringName;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::codec::{self, DEFAULT_DELIMITER};
use crate::error::Result;
use crate::verify::contracts;

/// Operations every name representation supports.
///
/// Implementors provide storage access and the four structural edits. The
/// conversions, equality, hashing and concatenation come for free and behave
/// identically for every representation.
pub trait Name: fmt::Debug {
    /// The instance delimiter.
    fn delimiter(&self) -> char;

    fn no_components(&self) -> usize;

    /// Raw component at `i`. Fails with `IllegalArgument` unless `i < no_components()`.
    fn component(&self, i: usize) -> Result<String>;

    /// All raw components, in order.
    fn components(&self) -> Vec<String>;

    /// Build a name of this representation from raw components.
    fn from_parts(components: Vec<String>, delimiter: char) -> Result<Self>
    where
        Self: Sized;

    /// New name with component `i` replaced by `c`.
    fn set_component(&self, i: usize, c: &str) -> Result<Self>
    where
        Self: Sized;

    /// New name with `c` inserted before position `i`. `i == no_components()` appends.
    fn insert(&self, i: usize, c: &str) -> Result<Self>
    where
        Self: Sized;

    /// New name with `c` added at the end.
    fn append(&self, c: &str) -> Result<Self>
    where
        Self: Sized;

    /// New name without component `i`.
    fn remove(&self, i: usize) -> Result<Self>
    where
        Self: Sized;

    /// Check the class invariant. Representations with derived state override this.
    fn check_invariant(&self) -> Result<()> {
        contracts::check_stored_delimiter(self.delimiter())
    }

    // ========================================================================
    // PROVIDED OPERATIONS
    // ========================================================================

    /// Human-readable form: raw components joined by the instance delimiter.
    ///
    /// Nothing is escaped, so the result is ambiguous when a component
    /// contains the delimiter. Use [`Name::as_data_string`] to round-trip.
    fn as_string(&self) -> String {
        self.components().join(&self.delimiter().to_string())
    }

    /// Human-readable form joined by `delimiter` instead of the instance delimiter.
    ///
    /// Nothing is masked, so any single character works, `\` included.
    fn as_string_with(&self, delimiter: &str) -> Result<String> {
        let delimiter = contracts::check_single_char(delimiter)?;
        Ok(self.components().join(&delimiter.to_string()))
    }

    /// Machine-readable form: components masked and joined with the default
    /// delimiter, regardless of the instance delimiter.
    fn as_data_string(&self) -> String {
        codec::join_masked(self.components(), DEFAULT_DELIMITER)
    }

    /// Same component count and pairwise-equal raw components.
    fn is_equal(&self, other: &dyn Name) -> bool {
        self.no_components() == other.no_components() && self.components() == other.components()
    }

    /// Sum of the character codes of [`Name::as_data_string`].
    ///
    /// Consistent with [`Name::is_equal`] but weak: names whose data strings
    /// are permutations of each other collide.
    fn hash_code(&self) -> u64 {
        self.as_data_string().chars().map(u64::from).sum()
    }

    fn is_empty(&self) -> bool {
        self.no_components() == 0
    }

    /// New name holding this name's components followed by `other`'s.
    ///
    /// The result keeps this name's representation and delimiter.
    fn concat(&self, other: &dyn Name) -> Result<Self>
    where
        Self: Sized,
    {
        let before = self.no_components();
        let mut components = self.components();
        components.extend(other.components());

        let result = Self::from_parts(components, self.delimiter())?;
        contracts::check_length_delta("concat", before, other.no_components() as isize, &result)?;
        result.check_invariant()?;

        trace!(before, added = other.no_components(), "concat");
        Ok(result)
    }
}

impl PartialEq for dyn Name + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

/// Wire shape of a name: `{ "delimiter": ".", "components": [...] }`.
///
/// Both representations serialize through this, so a name written by one can
/// be read back as the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameParts {
    pub delimiter: char,
    pub components: Vec<String>,
}
