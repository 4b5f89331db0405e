// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Escaping codec for name components.
//!
//! Two characters are special: the delimiter (configurable, `.` by default) and
//! the escape character (always `\`). Masking puts one escape character in
//! front of every special character. Unmasking drops an escape character and
//! keeps whatever follows it verbatim.
//!
//! ```text
//! raw        masked ('.')
//! oss.cs     oss\.cs
//! fa\u       fa\\u
//! .oss       \.oss
//! ```
//!
//! # Boundary rules
//!
//! - Consecutive escape characters pair up left to right, so `\\\\` unmasks to
//!   `\\` (two escaped escapes).
//! - An escape character with nothing after it is kept as a literal `\`.
//! - A delimiter at the start or end of a component is masked like any other.

use tracing::debug;

/// Delimiter used when the caller does not pick one, and by data strings.
pub const DEFAULT_DELIMITER: char = '.';

/// The only escape character. Not configurable.
pub const ESCAPE_CHARACTER: char = '\\';

/// Mask a raw component against `delimiter`.
pub fn mask(raw: &str, delimiter: char) -> String {
    let mut result = String::with_capacity(raw.len() * 2);

    for ch in raw.chars() {
        if ch == delimiter || ch == ESCAPE_CHARACTER {
            result.push(ESCAPE_CHARACTER);
        }
        result.push(ch);
    }

    result
}

/// Unmask a single masked component.
///
/// The input is expected to hold no unescaped delimiter. If it does, the
/// delimiter is copied through unchanged.
pub fn unmask(encoded: &str) -> String {
    let mut result = String::with_capacity(encoded.len());
    let mut chars = encoded.chars();

    while let Some(ch) = chars.next() {
        if ch != ESCAPE_CHARACTER {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some(escaped) => result.push(escaped),
            None => {
                debug!(encoded, "dangling escape character kept as literal");
                result.push(ESCAPE_CHARACTER);
            }
        }
    }

    result
}

/// Split a masked string at every unescaped `delimiter`.
///
/// The pieces are returned still masked. An empty input yields one empty
/// piece, just as `"a."` yields `["a", ""]`.
pub fn split_masked(data: &str, delimiter: char) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut chars = data.chars();

    while let Some(ch) = chars.next() {
        if ch == ESCAPE_CHARACTER {
            current.push(ch);
            if let Some(escaped) = chars.next() {
                current.push(escaped);
            }
        } else if ch == delimiter {
            pieces.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    pieces.push(current);

    pieces
}

/// Split a masked string into raw components.
pub fn split(data: &str, delimiter: char) -> Vec<String> {
    split_masked(data, delimiter)
        .iter()
        .map(|piece| unmask(piece))
        .collect()
}

/// Mask every component against `delimiter` and join them with it.
pub fn join_masked<I, S>(components: I, delimiter: char) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();

    for (i, component) in components.into_iter().enumerate() {
        if i > 0 {
            result.push(delimiter);
        }
        result.push_str(&mask(component.as_ref(), delimiter));
    }

    result
}
