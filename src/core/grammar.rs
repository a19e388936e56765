//! Identifier grammars and validity predicates.
//!
//! Scene nodes are addressed at four nested levels:
//!
//! - **name**: a bare identifier, e.g. `lightShape`
//! - **full name**: names joined with the namespace delimiter `:`,
//!   e.g. `awesome:lightShape`
//! - **path**: full names each preceded by the hierarchy delimiter `|`,
//!   e.g. `|master|awesome:light`
//! - **full path**: paths joined with the underworld delimiter `->`, with an
//!   optional trailing `->`, e.g. `|textures|uv->|pCube`
//!
//! Each level exists in a strict flavor and a wildcard-permissive flavor
//! (adding the `*`, `+`, `?` and `.` wildcard characters), and the full name
//! and full path levels additionally have relative flavors that accept one
//! leading delimiter. All validators are whole-string anchored.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

// ============================================================================
// Addressing Levels
// ============================================================================

/// Addressing level of an identifier or pattern.
///
/// Levels are ordered from innermost to outermost, with `Any` last, so the
/// more restrictive of two levels is their minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddressLevel {
    /// A bare node name with no namespace or hierarchy information.
    Name,
    /// A namespaced name: names joined with `:`.
    FullName,
    /// A scene-graph path: full names each preceded by `|`.
    Path,
    /// A path possibly crossing into nested scene graphs through `->`.
    FullPath,
    /// Not determined; narrowed by surrounding delimiters.
    Any,
}

impl fmt::Display for AddressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AddressLevel::Name => "name",
            AddressLevel::FullName => "full name",
            AddressLevel::Path => "path",
            AddressLevel::FullPath => "full path",
            AddressLevel::Any => "any",
        };
        f.write_str(label)
    }
}

// ============================================================================
// Grammar Fragments
// ============================================================================

/// One identifier character.
pub(crate) const CHARACTER: &str = "[a-zA-Z0-9_]";

/// A single name. The first character cannot be a digit.
pub(crate) const NAME: &str = "[a-zA-Z_][a-zA-Z0-9_]*";

/// Name fragment also accepting wildcard characters.
pub(crate) const NAME_WCARD: &str = "[a-zA-Z_*+?.][a-zA-Z0-9_*+?.]*";

lazy_static! {
    static ref FULL_NAME: String = format!("(?:{0}:)*{0}", NAME);
    static ref RELATIVE_FULL_NAME: String = format!(":?{}", *FULL_NAME);
    static ref PATH: String = format!(r"(?:\|{})+", *FULL_NAME);
    static ref FULL_PATH: String = format!("{0}(?:->{0})*(?:->)?", *PATH);
    static ref RELATIVE_FULL_PATH: String = format!("(?:(?:->)|(?:(?:->)?{}))", *FULL_PATH);

    // Wildcard flavors. A full name may start with a bare `:` when wildcards
    // directly follow it, and a whole path element may be a lone wildcard run.
    static ref FULL_NAME_WCARD: String =
        format!("(?:(?::[*+?.]+)|(?:{0}))(?::{0})*", NAME_WCARD);
    static ref RELATIVE_FULL_NAME_WCARD: String = format!(":?{}", *FULL_NAME_WCARD);
    static ref PATH_WCARD: String = format!(r"(?:(?:\|{})|(?:[*+?.]))+", *FULL_NAME_WCARD);
    static ref FULL_PATH_WCARD: String = format!("{0}(?:->{0})*(?:->)?", *PATH_WCARD);
    static ref RELATIVE_FULL_PATH_WCARD: String =
        format!("(?:(?:->)|(?:(?:->)?{}))", *FULL_PATH_WCARD);
}

// ============================================================================
// Compiled Validators
// ============================================================================

fn anchored(fragment: &str) -> Regex {
    Regex::new(&format!("^{fragment}$")).expect("grammar fragments always compile")
}

lazy_static! {
    static ref NAME_RE: Regex = anchored(NAME);
    static ref NAME_WCARD_RE: Regex = anchored(NAME_WCARD);
    static ref FULL_NAME_RE: Regex = anchored(&FULL_NAME);
    static ref FULL_NAME_WCARD_RE: Regex = anchored(&FULL_NAME_WCARD);
    static ref RELATIVE_FULL_NAME_RE: Regex = anchored(&RELATIVE_FULL_NAME);
    static ref RELATIVE_FULL_NAME_WCARD_RE: Regex = anchored(&RELATIVE_FULL_NAME_WCARD);
    static ref PATH_RE: Regex = anchored(&PATH);
    static ref PATH_WCARD_RE: Regex = anchored(&PATH_WCARD);
    static ref FULL_PATH_RE: Regex = anchored(&FULL_PATH);
    static ref FULL_PATH_WCARD_RE: Regex = anchored(&FULL_PATH_WCARD);
    static ref RELATIVE_FULL_PATH_RE: Regex = anchored(&RELATIVE_FULL_PATH);
    static ref RELATIVE_FULL_PATH_WCARD_RE: Regex = anchored(&RELATIVE_FULL_PATH_WCARD);
}

/// Uncompiled full name fragment, used as the repeated unit of path-level
/// wildcard expressions.
pub(crate) fn full_name_fragment() -> &'static str {
    FULL_NAME.as_str()
}

/// Uncompiled path fragment, used as the repeated unit of full-path-level
/// wildcard expressions.
pub(crate) fn path_fragment() -> &'static str {
    PATH.as_str()
}

// ============================================================================
// Validity Predicates
// ============================================================================

/// Check if a string is a well-formed node name.
pub fn is_valid_name(name: &str, allow_wildcards: bool) -> bool {
    if allow_wildcards {
        NAME_WCARD_RE.is_match(name)
    } else {
        NAME_RE.is_match(name)
    }
}

/// Check if a string is a well-formed full name.
///
/// With `match_relative`, one leading `:` delimiter is accepted, denoting a
/// name relative to the current namespace.
pub fn is_valid_full_name(name: &str, allow_wildcards: bool, match_relative: bool) -> bool {
    match (allow_wildcards, match_relative) {
        (true, true) => RELATIVE_FULL_NAME_WCARD_RE.is_match(name),
        (true, false) => FULL_NAME_WCARD_RE.is_match(name),
        (false, true) => RELATIVE_FULL_NAME_RE.is_match(name),
        (false, false) => FULL_NAME_RE.is_match(name),
    }
}

/// Check if a string is a well-formed path.
pub fn is_valid_path(path: &str, allow_wildcards: bool) -> bool {
    if allow_wildcards {
        PATH_WCARD_RE.is_match(path)
    } else {
        PATH_RE.is_match(path)
    }
}

/// Check if a string is a well-formed full path.
///
/// With `match_relative`, one leading `->` delimiter is accepted, denoting a
/// path relative to an enclosing underworld, and a lone `->` addresses the
/// underworld root itself.
pub fn is_valid_full_path(path: &str, allow_wildcards: bool, match_relative: bool) -> bool {
    match (allow_wildcards, match_relative) {
        (true, true) => RELATIVE_FULL_PATH_WCARD_RE.is_match(path),
        (true, false) => FULL_PATH_WCARD_RE.is_match(path),
        (false, true) => RELATIVE_FULL_PATH_RE.is_match(path),
        (false, false) => FULL_PATH_RE.is_match(path),
    }
}

/// Level-dispatched validity check.
///
/// `AddressLevel::Any` accepts a string that is well-formed at any of the
/// four concrete levels.
pub fn is_valid(
    candidate: &str,
    level: AddressLevel,
    allow_wildcards: bool,
    match_relative: bool,
) -> bool {
    match level {
        AddressLevel::Name => is_valid_name(candidate, allow_wildcards),
        AddressLevel::FullName => is_valid_full_name(candidate, allow_wildcards, match_relative),
        AddressLevel::Path => is_valid_path(candidate, allow_wildcards),
        AddressLevel::FullPath => is_valid_full_path(candidate, allow_wildcards, match_relative),
        AddressLevel::Any => {
            is_valid_name(candidate, allow_wildcards)
                || is_valid_full_name(candidate, allow_wildcards, match_relative)
                || is_valid_path(candidate, allow_wildcards)
                || is_valid_full_path(candidate, allow_wildcards, match_relative)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(AddressLevel::Name < AddressLevel::FullName);
        assert!(AddressLevel::FullName < AddressLevel::Path);
        assert!(AddressLevel::Path < AddressLevel::FullPath);
        assert!(AddressLevel::FullPath < AddressLevel::Any);
        assert_eq!(
            AddressLevel::Path.min(AddressLevel::Any),
            AddressLevel::Path
        );
    }

    #[test]
    fn test_level_display() {
        assert_eq!(AddressLevel::Name.to_string(), "name");
        assert_eq!(AddressLevel::FullName.to_string(), "full name");
        assert_eq!(AddressLevel::Path.to_string(), "path");
        assert_eq!(AddressLevel::FullPath.to_string(), "full path");
    }

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("node", false));
        assert!(is_valid_name("_node_1", false));
        assert!(is_valid_name("N", false));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_name("", false));
        assert!(!is_valid_name("1node", false));
        assert!(!is_valid_name("node-1", false));
        assert!(!is_valid_name("ns:node", false));
        assert!(!is_valid_name("|node", false));
        assert!(!is_valid_name("node*", false));
    }

    #[test]
    fn test_wildcard_names() {
        assert!(is_valid_name("*", true));
        assert!(is_valid_name("node*", true));
        assert!(is_valid_name("*+?.", true));
        assert!(is_valid_name("no?de", true));
        assert!(!is_valid_name("1node*", true));
        assert!(!is_valid_name("no|de*", true));
    }

    #[test]
    fn test_valid_full_names() {
        assert!(is_valid_full_name("node", false, false));
        assert!(is_valid_full_name("ns:node", false, false));
        assert!(is_valid_full_name("a:b:c", false, false));
    }

    #[test]
    fn test_invalid_full_names() {
        assert!(!is_valid_full_name("", false, false));
        assert!(!is_valid_full_name(":node", false, false));
        assert!(!is_valid_full_name("ns:", false, false));
        assert!(!is_valid_full_name("ns::node", false, false));
        assert!(!is_valid_full_name("|node", false, false));
    }

    #[test]
    fn test_relative_full_names() {
        assert!(is_valid_full_name(":node", false, true));
        assert!(is_valid_full_name(":ns:node", false, true));
        assert!(is_valid_full_name("node", false, true));
        assert!(!is_valid_full_name("::node", false, true));
        assert!(!is_valid_full_name(":", false, true));
    }

    #[test]
    fn test_wildcard_full_names() {
        assert!(is_valid_full_name("*:*Shape*", true, false));
        assert!(is_valid_full_name(":*", true, false));
        assert!(is_valid_full_name(":*:node", true, false));
        assert!(is_valid_full_name("?:node", true, false));
        assert!(!is_valid_full_name(":node", true, false));
        assert!(!is_valid_full_name(":*name", true, false));
    }

    #[test]
    fn test_valid_paths() {
        assert!(is_valid_path("|node", false));
        assert!(is_valid_path("|master|root_1|child_1", false));
        assert!(is_valid_path("|master|awesome:light", false));
    }

    #[test]
    fn test_invalid_paths() {
        assert!(!is_valid_path("", false));
        assert!(!is_valid_path("node", false));
        assert!(!is_valid_path("||node", false));
        assert!(!is_valid_path("|node|", false));
        assert!(!is_valid_path("|node->|child", false));
    }

    #[test]
    fn test_wildcard_paths() {
        assert!(is_valid_path("*", true));
        assert!(is_valid_path("*|child_*", true));
        assert!(is_valid_path("|*|node", true));
        assert!(is_valid_path("*|awesome:*", true));
        assert!(!is_valid_path("||node", true));
        assert!(!is_valid_path("|", true));
    }

    #[test]
    fn test_valid_full_paths() {
        assert!(is_valid_full_path("|node", false, false));
        assert!(is_valid_full_path("|a|b->|c", false, false));
        assert!(is_valid_full_path("|a->", false, false));
        assert!(is_valid_full_path("|a->|b->|c", false, false));
    }

    #[test]
    fn test_invalid_full_paths() {
        assert!(!is_valid_full_path("", false, false));
        assert!(!is_valid_full_path("->", false, false));
        assert!(!is_valid_full_path("->|node", false, false));
        assert!(!is_valid_full_path("|a->->|b", false, false));
    }

    #[test]
    fn test_relative_full_paths() {
        assert!(is_valid_full_path("->", false, true));
        assert!(is_valid_full_path("->|node", false, true));
        assert!(is_valid_full_path("|node", false, true));
        assert!(!is_valid_full_path("->->", false, true));
    }

    #[test]
    fn test_wildcard_full_paths() {
        assert!(is_valid_full_path("*->", true, false));
        assert!(is_valid_full_path("*|sphereShape->|*", true, false));
        assert!(is_valid_full_path("|master|sphere|sphereShape->*", true, false));
        assert!(is_valid_full_path("->|*", true, true));
        assert!(!is_valid_full_path("->|*", true, false));
    }

    #[test]
    fn test_any_level_dispatch() {
        assert!(is_valid("node", AddressLevel::Any, false, false));
        assert!(is_valid("|a|b->|c", AddressLevel::Any, false, false));
        assert!(!is_valid("||node", AddressLevel::Any, true, false));
        assert!(!is_valid("node", AddressLevel::Path, false, false));
    }
}
