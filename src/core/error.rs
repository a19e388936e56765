//! Error types for pattern validation and matcher construction.
//!
//! This module provides structured error handling using thiserror.

use thiserror::Error;

use crate::core::grammar::AddressLevel;

/// Result type alias for matcher construction and matching.
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors raised when a pattern or candidate fails grammar validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The string is not well-formed at the addressing level it was given
    /// for.
    #[error("the {level} pattern '{pattern}' is not valid")]
    InvalidPattern {
        level: AddressLevel,
        pattern: String,
    },
}

impl MatchError {
    /// Create an invalid pattern error
    pub(crate) fn invalid_pattern(level: AddressLevel, pattern: impl Into<String>) -> Self {
        MatchError::InvalidPattern {
            level,
            pattern: pattern.into(),
        }
    }
}
