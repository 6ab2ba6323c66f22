use diffmatch::{DiffError, Difference, Expected, Options, Value};

/// Outcome of checking a value against an expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matching {
    /// The value matches.
    Match,
    /// The value does not match; contains the rendered report.
    Mismatch(String),
    /// The comparison could not be carried out.
    Failed(DiffError),
}

impl Matching {
    /// Returns true for [`Matching::Match`].
    pub const fn is_match(&self) -> bool {
        matches!(self, Matching::Match)
    }
}

/// Check `actual` against `expected` with default options.
pub fn check_matching<'a>(expected: impl Into<Expected<'a>>, actual: &Value) -> Matching {
    check_matching_with(expected, actual, &Options::default())
}

/// Check `actual` against `expected` with custom options.
///
/// ```
/// use diffmatch_assert::{Matching, Options, check_matching_with, map};
///
/// let options = Options::new().ignore_additional(true);
/// let outcome = check_matching_with(&map! { "a" => 1 }, &map! { "a" => 1, "b" => 2 }, &options);
/// assert_eq!(outcome, Matching::Match);
/// ```
pub fn check_matching_with<'a>(
    expected: impl Into<Expected<'a>>,
    actual: &Value,
    options: &Options,
) -> Matching {
    match Difference::new(expected, actual, options) {
        Ok(difference) if difference.is_match() => Matching::Match,
        Ok(difference) => Matching::Mismatch(difference.render()),
        Err(err) => Matching::Failed(err),
    }
}
