// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts shared by both name representations.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Types** that make some states unrepresentable. Indices are `usize`, so
//!    there is no negative index to reject. A delimiter is stored as a `char`,
//!    so "exactly one character" holds for every constructed name.
//!
//! 2. **Runtime contracts** for what the types cannot express: index bounds,
//!    the length and content of a freshly built name, and the agreement between
//!    a stored count and the stored string.
//!
//! Use both. The types remove whole classes of misuse. The contracts report the
//! rest as `NameError` values.

pub mod contracts;

pub use contracts::*;
