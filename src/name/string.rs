// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String-backed names: one masked string plus a component count.
//!
//! The components are never stored on their own. Every access splits the
//! stored string at unescaped delimiters, and every edit splits, edits the
//! list, then masks and joins it again. That makes every operation O(n) in
//! the length of the name, reads included.
//!
//! The count is kept alongside the string because `""` alone cannot tell the
//! empty name apart from a name with one empty component.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{Name, NameParts, StringArrayName};
use crate::codec::{self, DEFAULT_DELIMITER};
use crate::error::{NameError, Result};
use crate::verify::contracts;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "NameParts", into = "NameParts")]
pub struct StringName {
    delimiter: char,
    name: String,
    no_components: usize,
}

impl StringName {
    /// Build a name from a string masked against `delimiter` (default `.`).
    ///
    /// `"a\.b.c"` has two components, `a.b` and `c`. `""` has one empty component.
    ///
    /// `source` must already be masked: every `\x` reads as `x`, so an
    /// unescaped backslash is dropped (`"fa\u"` gives `fau`).
    pub fn new(source: &str, delimiter: Option<&str>) -> Result<Self> {
        let delimiter = match delimiter {
            Some(delimiter) => contracts::check_delimiter(delimiter)?,
            None => DEFAULT_DELIMITER,
        };
        let no_components = codec::split_masked(source, delimiter).len();
        Ok(Self {
            delimiter,
            name: source.to_owned(),
            no_components,
        })
    }

    /// A name with no components.
    pub fn empty(delimiter: Option<&str>) -> Result<Self> {
        let delimiter = match delimiter {
            Some(delimiter) => contracts::check_delimiter(delimiter)?,
            None => DEFAULT_DELIMITER,
        };
        Ok(Self::build(Vec::new(), delimiter))
    }

    /// Parse the output of [`Name::as_data_string`].
    pub fn from_data_string(data: &str) -> Self {
        Self::build(codec::split(data, DEFAULT_DELIMITER), DEFAULT_DELIMITER)
    }

    /// The stored string, masked against the instance delimiter.
    pub fn as_masked(&self) -> &str {
        &self.name
    }

    pub(crate) fn build(components: Vec<String>, delimiter: char) -> Self {
        Self {
            delimiter,
            name: codec::join_masked(&components, delimiter),
            no_components: components.len(),
        }
    }

    fn split(&self) -> Vec<String> {
        if self.no_components == 0 {
            return Vec::new();
        }
        codec::split(&self.name, self.delimiter)
    }

    /// Split and confirm the maintained count before indexing into the result.
    fn checked_split(&self) -> Result<Vec<String>> {
        let components = self.split();
        contracts::check_component_count(self.no_components, components.len())?;
        Ok(components)
    }
}

impl Name for StringName {
    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn no_components(&self) -> usize {
        self.no_components
    }

    fn component(&self, i: usize) -> Result<String> {
        contracts::check_index_in_range(i, self.no_components)?;
        let mut components = self.checked_split()?;
        Ok(components.swap_remove(i))
    }

    fn components(&self) -> Vec<String> {
        self.split()
    }

    fn from_parts(components: Vec<String>, delimiter: char) -> Result<Self> {
        contracts::check_delimiter_char(delimiter)?;
        Ok(Self::build(components, delimiter))
    }

    fn set_component(&self, i: usize, c: &str) -> Result<Self> {
        let before = self.no_components;
        contracts::check_index_in_range(i, before)?;

        let mut components = self.checked_split()?;
        components[i] = c.to_owned();
        let result = Self::build(components, self.delimiter);

        result.check_invariant()?;
        contracts::check_length_delta("set_component", before, 0, &result)?;
        contracts::check_component_at("set_component", &result, i, c)?;
        trace!(i, component = c, "set_component");
        Ok(result)
    }

    fn insert(&self, i: usize, c: &str) -> Result<Self> {
        let before = self.no_components;
        contracts::check_insert_index(i, before)?;

        let mut components = self.checked_split()?;
        components.insert(i, c.to_owned());
        let result = Self::build(components, self.delimiter);

        result.check_invariant()?;
        contracts::check_length_delta("insert", before, 1, &result)?;
        contracts::check_component_at("insert", &result, i, c)?;
        trace!(i, component = c, "insert");
        Ok(result)
    }

    fn append(&self, c: &str) -> Result<Self> {
        let before = self.no_components;

        let mut components = self.checked_split()?;
        components.push(c.to_owned());
        let result = Self::build(components, self.delimiter);

        result.check_invariant()?;
        contracts::check_length_delta("append", before, 1, &result)?;
        contracts::check_component_at("append", &result, before, c)?;
        trace!(component = c, "append");
        Ok(result)
    }

    fn remove(&self, i: usize) -> Result<Self> {
        let before = self.no_components;
        contracts::check_index_in_range(i, before)?;

        let mut components = self.checked_split()?;
        components.remove(i);
        let result = Self::build(components, self.delimiter);

        result.check_invariant()?;
        contracts::check_length_delta("remove", before, -1, &result)?;
        trace!(i, "remove");
        Ok(result)
    }

    fn check_invariant(&self) -> Result<()> {
        contracts::check_stored_delimiter(self.delimiter)?;
        let derived = if self.no_components == 0 {
            if !self.name.is_empty() {
                return Err(NameError::invariant_violated(format!(
                    "empty name stores non-empty string {:?}",
                    self.name
                )));
            }
            0
        } else {
            codec::split_masked(&self.name, self.delimiter).len()
        };
        contracts::check_component_count(self.no_components, derived)
    }
}

impl fmt::Display for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_data_string())
    }
}

impl FromStr for StringName {
    type Err = NameError;

    fn from_str(data: &str) -> Result<Self> {
        Ok(Self::from_data_string(data))
    }
}

impl PartialEq for StringName {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for StringName {}

impl PartialEq<StringArrayName> for StringName {
    fn eq(&self, other: &StringArrayName) -> bool {
        self.is_equal(other)
    }
}

impl Hash for StringName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.split().hash(state);
    }
}

impl From<&StringArrayName> for StringName {
    fn from(name: &StringArrayName) -> Self {
        Self::build(name.components(), name.delimiter())
    }
}

impl TryFrom<NameParts> for StringName {
    type Error = NameError;

    fn try_from(parts: NameParts) -> Result<Self> {
        Self::from_parts(parts.components, parts.delimiter)
    }
}

impl From<StringName> for NameParts {
    fn from(name: StringName) -> Self {
        NameParts {
            delimiter: name.delimiter,
            components: name.split(),
        }
    }
}
