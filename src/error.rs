// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by every name operation.
//!
//! Three kinds, matching who broke the contract:
//!
//! | Variant               | Who is at fault | Example                               |
//! |-----------------------|-----------------|---------------------------------------|
//! | `IllegalArgument`     | the caller      | index out of range, `"ab"` delimiter  |
//! | `PostconditionFailed` | the operation   | `append` did not grow the name by one |
//! | `InvariantViolated`   | the value       | stored delimiter is not one character |
//!
//! All three are returned immediately. Nothing is retried, nothing is swallowed.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    #[error("Postcondition failed: {0}")]
    PostconditionFailed(String),

    #[error("Invariant violated: {0}")]
    InvariantViolated(String),
}

impl NameError {
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        NameError::IllegalArgument(message.into())
    }

    pub fn postcondition_failed(message: impl Into<String>) -> Self {
        NameError::PostconditionFailed(message.into())
    }

    pub fn invariant_violated(message: impl Into<String>) -> Self {
        NameError::InvariantViolated(message.into())
    }

    /// True when the caller passed something the contract forbids.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, NameError::IllegalArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, NameError>;
