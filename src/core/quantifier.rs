//! Occurrence arithmetic for wildcard runs.

/// Combined occurrence range of a consecutive wildcard run.
///
/// Adjacent wildcards compose additively: `?.` allows one or two
/// occurrences, `*+` one or more, `..` exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Quantifier {
    pub min: usize,
    /// `None` when unbounded.
    pub max: Option<usize>,
}

impl Quantifier {
    /// Occurrence range of a single wildcard character.
    fn of_char(wildcard: char) -> (usize, Option<usize>) {
        match wildcard {
            '*' => (0, None),
            '+' => (1, None),
            '?' => (0, Some(1)),
            '.' => (1, Some(1)),
            other => unreachable!("not a wildcard character: {other:?}"),
        }
    }

    /// Fold a whole wildcard run into one combined range.
    pub fn from_run(run: &str) -> Self {
        let mut min = 0;
        let mut max = Some(0);
        for wildcard in run.chars() {
            let (lo, hi) = Self::of_char(wildcard);
            min += lo;
            max = match (max, hi) {
                (Some(a), Some(b)) => Some(a + b),
                _ => None,
            };
        }
        Self { min, max }
    }

    /// Check if the run is satisfied by at most one occurrence, in which
    /// case the bare base unit replaces a repetition wrapper.
    pub fn is_single(self) -> bool {
        matches!((self.min, self.max), (0, Some(1)) | (1, Some(1)))
    }
}
