//! dagmatch - Hierarchical wildcard pattern matching for scene-graph nodes
//!
//! This library validates and matches the identifiers a 3D scene graph uses
//! to address its nodes, at four nested levels:
//!
//! - **name**: `lightShape`
//! - **full name**: `awesome:lightShape` (namespaces joined with `:`)
//! - **path**: `|master|awesome:light` (full names prefixed with `|`)
//! - **full path**: `|textures|uv->|pCube` (paths joined with `->`)
//!
//! Patterns may contain four wildcard characters, each a quantifier over
//! whole units of the level it appears at: `*` (any number), `+` (at least
//! one), `?` (at most one), `.` (exactly one). What a wildcard quantifies
//! over depends on the delimiters around it: `*` next to `|` stands for
//! path segments, next to `:` for namespace segments, and between plain
//! characters for characters of a single name.
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **lib.rs** (this file): Pure logic, no CLI concerns
//! - **bin/dagmatch.rs**: Thin wrapper that calls the library
//!
//! # Example
//!
//! ```
//! use dagmatch::{make_match_path_function, match_name};
//!
//! let matcher = make_match_path_function("*|child_*").unwrap();
//! assert!(matcher.is_match("|master|root_1|child_1"));
//! assert!(!matcher.is_match("|master|root_1"));
//!
//! assert!(match_name("node*", "node_awesome").unwrap());
//! ```

pub mod core;

pub use crate::core::compiler::{has_wildcards, Matcher};
pub use crate::core::error::{MatchError, Result};
pub use crate::core::grammar::{
    is_valid, is_valid_full_name, is_valid_full_path, is_valid_name, is_valid_path, AddressLevel,
};
pub use crate::core::matching::{
    make_match_full_name_function, make_match_full_path_function, make_match_name_function,
    make_match_path_function, match_full_name, match_full_path, match_name, match_path,
};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
