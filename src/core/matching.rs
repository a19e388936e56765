//! Matcher construction facade.
//!
//! Each factory validates its pattern against the wildcard-permissive
//! grammar of its addressing level, then hands it to the compiler. The
//! one-shot helpers additionally validate the candidate against the strict
//! grammar before matching, so a malformed candidate surfaces as an error
//! instead of a silent non-match.

use crate::core::compiler::{self, Matcher};
use crate::core::error::{MatchError, Result};
use crate::core::grammar::{self, AddressLevel};

/// Build a matcher for a name pattern.
pub fn make_match_name_function(pattern: &str) -> Result<Matcher> {
    if !grammar::is_valid_name(pattern, true) {
        return Err(MatchError::invalid_pattern(AddressLevel::Name, pattern));
    }
    Ok(compiler::make_match_function(
        pattern,
        AddressLevel::Name,
        false,
    ))
}

/// Build a matcher for a full name pattern.
///
/// With `match_relative`, the pattern may carry one leading `:` delimiter
/// and the matcher also accepts relative candidates.
pub fn make_match_full_name_function(pattern: &str, match_relative: bool) -> Result<Matcher> {
    if !grammar::is_valid_full_name(pattern, true, match_relative) {
        return Err(MatchError::invalid_pattern(AddressLevel::FullName, pattern));
    }
    Ok(compiler::make_match_function(
        pattern,
        AddressLevel::FullName,
        match_relative,
    ))
}

/// Build a matcher for a path pattern.
pub fn make_match_path_function(pattern: &str) -> Result<Matcher> {
    if !grammar::is_valid_path(pattern, true) {
        return Err(MatchError::invalid_pattern(AddressLevel::Path, pattern));
    }
    Ok(compiler::make_match_function(
        pattern,
        AddressLevel::Path,
        false,
    ))
}

/// Build a matcher for a full path pattern.
///
/// With `match_relative`, the pattern may carry one leading `->` delimiter
/// and the matcher also accepts relative candidates, including the bare
/// underworld root `->`.
pub fn make_match_full_path_function(pattern: &str, match_relative: bool) -> Result<Matcher> {
    if !grammar::is_valid_full_path(pattern, true, match_relative) {
        return Err(MatchError::invalid_pattern(AddressLevel::FullPath, pattern));
    }
    Ok(compiler::make_match_function(
        pattern,
        AddressLevel::FullPath,
        match_relative,
    ))
}

/// Match one name against a pattern.
///
/// For repeated matching against many candidates, build a matcher once with
/// [`make_match_name_function`] instead.
pub fn match_name(pattern: &str, name: &str) -> Result<bool> {
    if !grammar::is_valid_name(name, false) {
        return Err(MatchError::invalid_pattern(AddressLevel::Name, name));
    }
    Ok(make_match_name_function(pattern)?.is_match(name))
}

/// Match one full name against a pattern.
pub fn match_full_name(pattern: &str, name: &str, match_relative: bool) -> Result<bool> {
    if !grammar::is_valid_full_name(name, false, match_relative) {
        return Err(MatchError::invalid_pattern(AddressLevel::FullName, name));
    }
    Ok(make_match_full_name_function(pattern, match_relative)?.is_match(name))
}

/// Match one path against a pattern.
pub fn match_path(pattern: &str, path: &str) -> Result<bool> {
    if !grammar::is_valid_path(path, false) {
        return Err(MatchError::invalid_pattern(AddressLevel::Path, path));
    }
    Ok(make_match_path_function(pattern)?.is_match(path))
}

/// Match one full path against a pattern.
pub fn match_full_path(pattern: &str, path: &str, match_relative: bool) -> Result<bool> {
    if !grammar::is_valid_full_path(path, false, match_relative) {
        return Err(MatchError::invalid_pattern(AddressLevel::FullPath, path));
    }
    Ok(make_match_full_path_function(pattern, match_relative)?.is_match(path))
}
