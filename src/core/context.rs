//! Context resolution for wildcard runs.
//!
//! A wildcard run takes its meaning from the delimiters around it: `*` next
//! to a `|` stands for path segments, next to a `:` for namespace segments,
//! and next to plain characters for characters of a single name. The rules
//! live in a flat boundary table plus a min-of-two-sides rule, so adding or
//! auditing a delimiter is a one-line change.

use crate::core::grammar::AddressLevel;

/// Boundary token adjoining a wildcard run inside an escaped, anchored
/// pattern string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Boundary {
    /// Start-of-pattern anchor `^`.
    Start,
    /// End-of-pattern anchor `$`.
    End,
    /// Namespace delimiter `:`.
    Namespace,
    /// Hierarchy delimiter in its escaped form `\|`.
    Hierarchy,
    /// Underworld delimiter `->`.
    Underworld,
    /// Any other single character.
    Other,
}

impl Boundary {
    /// Addressing level implied by this boundary token.
    pub(crate) fn implied_level(self) -> AddressLevel {
        match self {
            Boundary::Start | Boundary::End => AddressLevel::Any,
            Boundary::Namespace => AddressLevel::FullName,
            Boundary::Hierarchy => AddressLevel::Path,
            Boundary::Underworld => AddressLevel::FullPath,
            Boundary::Other => AddressLevel::Name,
        }
    }
}

/// Boundary pairs whose right-hand delimiter folds into the optional group
/// when the run allows an empty match, so that an empty match does not leave
/// a dangling delimiter the candidate cannot account for.
///
/// `(Start, Namespace)` is deliberately absent: a wildcard-led namespace
/// pattern such as `*:node` keeps its `:` mandatory and only matches
/// namespaced candidates. The lenient form stays expressible as `:*:node`.
const COLLAPSIBLE_PAIRS: [(Boundary, Boundary); 5] = [
    (Boundary::Start, Boundary::Underworld),
    (Boundary::Namespace, Boundary::Namespace),
    (Boundary::Hierarchy, Boundary::Namespace),
    (Boundary::Hierarchy, Boundary::Hierarchy),
    (Boundary::Underworld, Boundary::Underworld),
];

/// Check if the delimiter after a run folds into its optional group when the
/// run's minimum occurrence count is zero.
pub(crate) fn collapses_when_empty(before: Boundary, after: Boundary) -> bool {
    COLLAPSIBLE_PAIRS.contains(&(before, after))
}

/// Resolve the addressing level a wildcard run binds to.
///
/// The effective level is the more restrictive of the two boundary levels.
/// A run spanning the whole pattern is the exception: it keeps the level the
/// caller asked for, so an all-wildcard path pattern keeps matching paths
/// instead of narrowing down to bare names.
pub(crate) fn resolve(before: Boundary, after: Boundary, global: AddressLevel) -> AddressLevel {
    if before == Boundary::Start && after == Boundary::End {
        return global;
    }
    before.implied_level().min(after.implied_level())
}
