// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the hiername command-line interface.
//!
//! Subcommands map one-to-one onto library operations: `mask`/`unmask` for the
//! codec, `parse` and `render` for the two serializations, and `edit` for a
//! chain of structural edits applied to a data string.

pub mod display;

use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "hiername",
    about = "Inspect, escape and edit hierarchical names",
    version
)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error). HIERNAME_LOG overrides it.
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mask a raw component
    Mask {
        component: String,

        /// Delimiter to mask against
        #[arg(short, long, default_value = ".")]
        delimiter: String,
    },

    /// Unmask a masked component
    Unmask { encoded: String },

    /// Parse a data string and list its components
    Parse {
        data: String,

        /// Delimiter of the parsed name, used by its human-readable form
        #[arg(short, long, default_value = ".")]
        delimiter: String,

        #[arg(long, value_enum, default_value_t = Representation::Array)]
        representation: Representation,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Build a name from raw components and print both serializations
    Render {
        #[arg(required = true)]
        components: Vec<String>,

        #[arg(short, long, default_value = ".")]
        delimiter: String,
    },

    /// Apply edits to a data string, printing the name after each step
    ///
    /// Edits: set:<i>:<c>, insert:<i>:<c>, append:<c>, remove:<i>
    Edit {
        data: String,

        #[arg(required = true)]
        edits: Vec<Edit>,

        #[arg(long, value_enum, default_value_t = Representation::Array)]
        representation: Representation,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Representation {
    Array,
    String,
}

/// One structural edit, parsed from `op:args`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Set(usize, String),
    Insert(usize, String),
    Append(String),
    Remove(usize),
}

impl FromStr for Edit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (op, rest) = s
            .split_once(':')
            .ok_or_else(|| format!("edit {:?} must look like op:args", s))?;

        let index_and_component = |rest: &str| -> Result<(usize, String), String> {
            let (index, component) = rest
                .split_once(':')
                .ok_or_else(|| format!("edit {:?} needs <index>:<component>", s))?;
            let index = index
                .parse()
                .map_err(|_| format!("edit {:?} has a bad index {:?}", s, index))?;
            Ok((index, component.to_string()))
        };

        match op {
            "set" => index_and_component(rest).map(|(i, c)| Edit::Set(i, c)),
            "insert" => index_and_component(rest).map(|(i, c)| Edit::Insert(i, c)),
            "append" => Ok(Edit::Append(rest.to_string())),
            "remove" => rest
                .parse()
                .map(Edit::Remove)
                .map_err(|_| format!("edit {:?} has a bad index {:?}", s, rest)),
            other => Err(format!("unknown edit {:?}", other)),
        }
    }
}
