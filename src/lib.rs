//! Hierarchical names: ordered components joined by a configurable delimiter.
//!
//! A name like `oss.cs.fau.de` is four components and the delimiter `.`.
//! Components may contain the delimiter or the escape character `\`; the
//! machine-readable form masks them so it can always be parsed back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │  codec.rs   │────▶│   name/mod.rs    │────▶│   tree.rs    │
//! │ (mask,      │     │  (trait Name:    │     │ (full names  │
//! │  unmask,    │     │   as_data_string,│     │  via append) │
//! │  split)     │     │   concat, eq)    │     │              │
//! └─────────────┘     └────────┬─────────┘     └──────────────┘
//!                              │
//!               ┌──────────────┴──────────────┐
//!               ▼                             ▼
//!      ┌──────────────────┐          ┌──────────────────┐
//!      │  name/array.rs   │          │  name/string.rs  │
//!      │ StringArrayName  │          │   StringName     │
//!      └──────────────────┘          └──────────────────┘
//!               │                             │
//!               ▼                             ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                 verify/contracts.rs                  │
//! │  (index bounds, delimiter, length and component      │
//! │   postconditions, stored-count invariant)            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Value semantics
//!
//! Every edit returns a new name and leaves the receiver alone:
//!
//! ```
//! use hiername::{Name, StringArrayName};
//!
//! let name = StringArrayName::new(["oss", "fau", "de"], None).unwrap();
//! let edited = name.insert(1, "cs").unwrap();
//!
//! assert_eq!(edited.as_string(), "oss.cs.fau.de");
//! assert_eq!(name.as_string(), "oss.fau.de");
//! ```
//!
//! # Round trip
//!
//! ```
//! use hiername::{Name, StringName};
//!
//! let name = StringName::new("oss.cs.fau.de", Some("#")).unwrap();
//! let data = name.append("people").unwrap().as_data_string();
//! assert_eq!(data, r"oss\.cs\.fau\.de.people");
//!
//! let parsed = StringName::from_data_string(&data);
//! assert_eq!(parsed.components(), vec!["oss.cs.fau.de", "people"]);
//! ```

pub mod codec;
mod error;
mod name;
pub mod testing;
pub mod tree;
pub mod verify;

// Re-exports for public API
pub use codec::{mask, split, unmask, DEFAULT_DELIMITER, ESCAPE_CHARACTER};
pub use error::{NameError, Result};
pub use name::{Name, NameParts, StringArrayName, StringName};
pub use tree::{FileSystem, NodeId, NodeKind};
