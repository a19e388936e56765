//! Wildcard pattern compiler.
//!
//! Turns a validated wildcard pattern into a [`Matcher`]. Patterns without
//! wildcards short-circuit to plain string equality. Patterns with wildcards
//! are escaped, anchored, scanned for consecutive wildcard runs, and each
//! run is replaced by a matching expression derived from its resolved
//! context and combined quantifier. A final cleanup pass removes namespace
//! delimiters stranded by the leading-`:` pattern construct.
//!
//! Emitted expressions only use repetition, grouping, and character classes,
//! so the whole result stays within the `regex` crate's supported syntax.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::core::context::{self, Boundary};
use crate::core::grammar::{self, AddressLevel};
use crate::core::quantifier::Quantifier;

lazy_static! {
    /// A `:` stranded right after the `^` anchor or after a `\|`, left over
    /// from the leading-namespace pattern construct (e.g. `:*:node`).
    static ref STRANDED_NAMESPACE_RE: Regex =
        Regex::new(r"(\^|(?:\\\|)):").expect("cleanup expression always compiles");
}

// ============================================================================
// Matcher
// ============================================================================

/// A matching predicate bound to one pattern.
///
/// Produced by the `make_match_*_function` factories. Cheap to invoke
/// repeatedly against many candidates.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: String,
    kind: MatcherKind,
}

#[derive(Debug, Clone)]
enum MatcherKind {
    /// Wildcard-free pattern: plain string equality.
    Exact,
    /// Wildcard pattern compiled to an anchored expression.
    Compiled(Regex),
}

impl Matcher {
    /// Test a candidate against the pattern.
    ///
    /// The candidate is assumed to be strictly well-formed at the matcher's
    /// addressing level; the one-shot helpers enforce this.
    pub fn is_match(&self, candidate: &str) -> bool {
        match &self.kind {
            MatcherKind::Exact => self.pattern == candidate,
            MatcherKind::Compiled(regex) => regex.is_match(candidate),
        }
    }

    /// The original pattern this matcher was built from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Check if a pattern contains any wildcard character.
pub fn has_wildcards(pattern: &str) -> bool {
    pattern.chars().any(|c| matches!(c, '*' | '+' | '?' | '.'))
}

// ============================================================================
// Tokenizer
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    kind: Boundary,
    text: &'a str,
}

impl Token<'_> {
    fn is_wildcard(&self) -> bool {
        self.kind == Boundary::Other && matches!(self.text, "*" | "+" | "?" | ".")
    }
}

/// Split an escaped, anchored pattern into boundary-sized tokens. The
/// two-character delimiters `\|` and `->` each form one token.
fn tokenize(anchored: &str) -> Vec<Token<'_>> {
    let bytes = anchored.as_bytes();
    let mut tokens = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let (kind, len) = match bytes[i] {
            b'^' if i == 0 => (Boundary::Start, 1),
            b'$' if i == bytes.len() - 1 => (Boundary::End, 1),
            b'\\' if bytes.get(i + 1) == Some(&b'|') => (Boundary::Hierarchy, 2),
            b'-' if bytes.get(i + 1) == Some(&b'>') => (Boundary::Underworld, 2),
            b':' => (Boundary::Namespace, 1),
            _ => (Boundary::Other, 1),
        };
        tokens.push(Token {
            kind,
            text: &anchored[i..i + len],
        });
        i += len;
    }
    tokens
}

// ============================================================================
// Compilation
// ============================================================================

/// Compile a validated pattern into a matcher for the given addressing
/// level. Validation happens in the factory functions; this stage assumes a
/// well-formed pattern.
pub(crate) fn make_match_function(
    pattern: &str,
    level: AddressLevel,
    match_relative: bool,
) -> Matcher {
    if !has_wildcards(pattern) {
        return Matcher {
            pattern: pattern.to_owned(),
            kind: MatcherKind::Exact,
        };
    }

    let anchored = format!("^{}$", pattern.replace('|', r"\|"));
    let tokens = tokenize(&anchored);

    let mut expression = String::with_capacity(anchored.len() * 4);
    let mut next = 0;
    let mut i = 1;
    while i < tokens.len() {
        if !tokens[i].is_wildcard() {
            i += 1;
            continue;
        }
        // Maximal run of consecutive wildcards. The `$` token terminates it.
        let mut j = i + 1;
        while tokens[j].is_wildcard() {
            j += 1;
        }
        let before = tokens[i - 1];
        let after = tokens[j];

        let run: String = tokens[i..j].iter().map(|t| t.text).collect();
        let resolved = context::resolve(before.kind, after.kind, level);
        let quantifier = Quantifier::from_run(&run);

        // Literal text up to and including the run's left boundary. When two
        // runs share a boundary token it was already folded into the
        // previous run's expression and this slice is empty.
        for token in &tokens[next..i] {
            expression.push_str(token.text);
        }
        expression.push_str(&emit_run(resolved, quantifier, before, after, match_relative));

        next = j + 1;
        i = j + 1;
    }
    for token in &tokens[next..] {
        expression.push_str(token.text);
    }

    let expression = strip_stranded_namespaces(&expression, match_relative);
    let regex =
        Regex::new(&expression).expect("emitted matcher expressions stay within regex syntax");
    Matcher {
        pattern: pattern.to_owned(),
        kind: MatcherKind::Compiled(regex),
    }
}

/// Base unit and joining delimiter of the matching expression for a run
/// bound to the given level.
fn expression_parts(level: AddressLevel) -> (&'static str, &'static str) {
    match level {
        AddressLevel::Name => (grammar::CHARACTER, ""),
        AddressLevel::FullName => (grammar::NAME, ":"),
        AddressLevel::Path => (grammar::full_name_fragment(), r"\|"),
        AddressLevel::FullPath => (grammar::path_fragment(), "->"),
        // Full-span runs resolve to the caller's level, which is concrete.
        AddressLevel::Any => unreachable!("wildcard runs never bind to the any level"),
    }
}

/// Emit the matching expression for one wildcard run, with the run's right
/// boundary token folded in.
fn emit_run(
    level: AddressLevel,
    quantifier: Quantifier,
    before: Token<'_>,
    after: Token<'_>,
    match_relative: bool,
) -> String {
    let (base, delimiter) = expression_parts(level);

    let mut expression = if quantifier.is_single() {
        // At most one occurrence: the bare base unit is equivalent to a
        // repetition wrapper and cheaper to evaluate.
        base.to_owned()
    } else if level == AddressLevel::FullPath && after.kind == Boundary::End {
        // Run against the end of a full path: a full path may end with a
        // bare `->`, so the last repetition makes the path after the
        // delimiter optional as well.
        let o = quantifier.min.saturating_sub(1).min(1);
        let p = quantifier.max.map_or(1, |max| max.saturating_sub(1).min(1));
        if quantifier.max == Some(2) {
            format!("{base}(?:->(?:{base})?){{{o},{p}}}")
        } else {
            let m = quantifier.min.saturating_sub(2);
            let n = quantifier
                .max
                .map_or_else(String::new, |max| max.saturating_sub(2).to_string());
            format!("{base}(?:->{base}){{{m},{n}}}(?:->(?:{base})?){{{o},{p}}}")
        }
    } else {
        let m = quantifier.min.saturating_sub(1);
        let n = quantifier
            .max
            .map_or_else(String::new, |max| max.saturating_sub(1).to_string());
        format!("{base}(?:{delimiter}{base}){{{m},{n}}}")
    };

    // Paths are delimiter-prefixed: a run standing in for whole path
    // segments must produce the leading `|` itself unless one precedes it.
    if level == AddressLevel::Path && before.kind != Boundary::Hierarchy {
        expression = format!(r"\|{expression}");
    }

    // At the start of a relative pattern, a full name or full path run may
    // also consume the leading delimiter of a relative candidate, or be
    // satisfied by the bare delimiter alone.
    if before.kind == Boundary::Start
        && match_relative
        && matches!(level, AddressLevel::FullName | AddressLevel::FullPath)
    {
        if quantifier.min <= 1 {
            let optional = if quantifier.min == 0 { "?" } else { "" };
            expression =
                format!("(?:(?:{delimiter}){optional}|(?:(?:{delimiter})?{expression}))");
        } else {
            expression = format!("(?:{delimiter})?{expression}");
        }
    }

    if quantifier.min == 0 {
        if context::collapses_when_empty(before.kind, after.kind) {
            expression = format!("(?:{expression}{})?", after.text);
        } else {
            expression = format!("(?:{expression})?{}", after.text);
        }
    } else {
        expression.push_str(after.text);
    }

    expression
}

/// Remove namespace delimiters stranded at the start of the expression or
/// after a hierarchy delimiter. With `match_relative`, the one at the start
/// becomes optional instead so relative candidates keep matching.
fn strip_stranded_namespaces(expression: &str, match_relative: bool) -> String {
    if match_relative {
        STRANDED_NAMESPACE_RE
            .replace_all(expression, |caps: &Captures<'_>| {
                if &caps[1] == "^" {
                    "^:?".to_owned()
                } else {
                    caps[1].to_owned()
                }
            })
            .into_owned()
    } else {
        STRANDED_NAMESPACE_RE
            .replace_all(expression, "$1")
            .into_owned()
    }
}
