// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Array-backed names: one `String` per component.
//!
//! Components are stored raw. Masking only happens when a data string is
//! produced, so no operation here ever looks at the escape character.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{Name, NameParts, StringName};
use crate::codec::{self, DEFAULT_DELIMITER};
use crate::error::{NameError, Result};
use crate::verify::contracts;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "NameParts", into = "NameParts")]
pub struct StringArrayName {
    delimiter: char,
    components: Vec<String>,
}

impl StringArrayName {
    /// Build a name from raw components. `delimiter` defaults to `.`.
    pub fn new<I, S>(components: I, delimiter: Option<&str>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let delimiter = match delimiter {
            Some(delimiter) => contracts::check_delimiter(delimiter)?,
            None => DEFAULT_DELIMITER,
        };
        Ok(Self::build(
            components.into_iter().map(Into::into).collect(),
            delimiter,
        ))
    }

    /// A name with no components.
    pub fn empty(delimiter: Option<&str>) -> Result<Self> {
        Self::new(Vec::<String>::new(), delimiter)
    }

    /// Parse the output of [`Name::as_data_string`].
    pub fn from_data_string(data: &str) -> Self {
        Self::build(codec::split(data, DEFAULT_DELIMITER), DEFAULT_DELIMITER)
    }

    /// Borrow the components without copying.
    pub fn as_slice(&self) -> &[String] {
        &self.components
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(String::as_str)
    }

    pub(crate) fn build(components: Vec<String>, delimiter: char) -> Self {
        Self {
            delimiter,
            components,
        }
    }
}

impl Name for StringArrayName {
    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn no_components(&self) -> usize {
        self.components.len()
    }

    fn component(&self, i: usize) -> Result<String> {
        contracts::check_index_in_range(i, self.components.len())?;
        Ok(self.components[i].clone())
    }

    fn components(&self) -> Vec<String> {
        self.components.clone()
    }

    fn from_parts(components: Vec<String>, delimiter: char) -> Result<Self> {
        contracts::check_delimiter_char(delimiter)?;
        Ok(Self::build(components, delimiter))
    }

    fn set_component(&self, i: usize, c: &str) -> Result<Self> {
        let before = self.no_components();
        contracts::check_index_in_range(i, before)?;

        let mut components = self.components.clone();
        components[i] = c.to_owned();
        let result = Self::build(components, self.delimiter);

        result.check_invariant()?;
        contracts::check_length_delta("set_component", before, 0, &result)?;
        contracts::check_component_at("set_component", &result, i, c)?;
        trace!(i, component = c, "set_component");
        Ok(result)
    }

    fn insert(&self, i: usize, c: &str) -> Result<Self> {
        let before = self.no_components();
        contracts::check_insert_index(i, before)?;

        let mut components = self.components.clone();
        components.insert(i, c.to_owned());
        let result = Self::build(components, self.delimiter);

        result.check_invariant()?;
        contracts::check_length_delta("insert", before, 1, &result)?;
        contracts::check_component_at("insert", &result, i, c)?;
        trace!(i, component = c, "insert");
        Ok(result)
    }

    fn append(&self, c: &str) -> Result<Self> {
        let before = self.no_components();

        let mut components = self.components.clone();
        components.push(c.to_owned());
        let result = Self::build(components, self.delimiter);

        result.check_invariant()?;
        contracts::check_length_delta("append", before, 1, &result)?;
        contracts::check_component_at("append", &result, before, c)?;
        trace!(component = c, "append");
        Ok(result)
    }

    fn remove(&self, i: usize) -> Result<Self> {
        let before = self.no_components();
        contracts::check_index_in_range(i, before)?;

        let mut components = self.components.clone();
        components.remove(i);
        let result = Self::build(components, self.delimiter);

        result.check_invariant()?;
        contracts::check_length_delta("remove", before, -1, &result)?;
        trace!(i, "remove");
        Ok(result)
    }
}

impl fmt::Display for StringArrayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_data_string())
    }
}

impl FromStr for StringArrayName {
    type Err = NameError;

    fn from_str(data: &str) -> Result<Self> {
        Ok(Self::from_data_string(data))
    }
}

impl PartialEq for StringArrayName {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for StringArrayName {}

impl PartialEq<StringName> for StringArrayName {
    fn eq(&self, other: &StringName) -> bool {
        self.is_equal(other)
    }
}

impl Hash for StringArrayName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.components.hash(state);
    }
}

impl From<&StringName> for StringArrayName {
    fn from(name: &StringName) -> Self {
        Self::build(name.components(), name.delimiter())
    }
}

impl TryFrom<NameParts> for StringArrayName {
    type Error = NameError;

    fn try_from(parts: NameParts) -> Result<Self> {
        Self::from_parts(parts.components, parts.delimiter)
    }
}

impl From<StringArrayName> for NameParts {
    fn from(name: StringArrayName) -> Self {
        NameParts {
            delimiter: name.delimiter,
            components: name.components,
        }
    }
}
