//! Core module for the dagmatch pattern engine
//!
//! This module provides the grammar, context, and compilation stages behind
//! the public matching API. It follows a modular architecture for
//! testability: each stage of the pipeline lives in its own module.
//!
//! # Architecture
//!
//! - `grammar`: Addressing levels, identifier grammars, validity predicates
//! - `context`: Wildcard context resolution (boundary table + min rule)
//! - `quantifier`: Occurrence arithmetic for wildcard runs
//! - `compiler`: Wildcard pattern to matcher compilation
//! - `matching`: Matcher factories and one-shot helpers
//! - `error`: Error types using thiserror

pub mod compiler;
mod context;
pub mod error;
pub mod grammar;
pub mod matching;
mod quantifier;

// Re-export commonly used types
pub use compiler::{has_wildcards, Matcher};
pub use error::{MatchError, Result};
pub use grammar::{
    is_valid, is_valid_full_name, is_valid_full_path, is_valid_name, is_valid_path, AddressLevel,
};
pub use matching::{
    make_match_full_name_function, make_match_full_path_function, make_match_name_function,
    make_match_path_function, match_full_name, match_full_path, match_name, match_path,
};
