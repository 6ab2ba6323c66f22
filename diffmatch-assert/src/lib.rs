#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

//! Unlike `assert_eq!`, which stops at "not equal", `assert_matching!`
//! accepts matchers anywhere in the expected value and reports every
//! difference at once.

mod matching;

pub use diffmatch::*;
pub use matching::{Matching, check_matching, check_matching_with};

/// Asserts that a value matches an expectation.
///
/// `expected` can be an [`Expectation`] or a plain [`Value`]; `actual` is a
/// [`Value`]. Both are taken by reference.
///
/// # Panics
///
/// Panics with the rendered report if the value does not match, or with the
/// error if the comparison could not be carried out.
///
/// # Example
///
/// ```
/// use diffmatch_assert::{Expectation, assert_matching, expect_seq, seq};
///
/// assert_matching!(expect_seq![1, Expectation::interval(2, 4)], seq![1, 3]);
/// ```
#[macro_export]
macro_rules! assert_matching {
    ($expected:expr, $actual:expr $(,)?) => {
        match $crate::check_matching(&$expected, &$actual) {
            $crate::Matching::Match => {}
            $crate::Matching::Mismatch(report) => {
                panic!("assertion `assert_matching!(expected, actual)` failed\n\n{report}\n");
            }
            $crate::Matching::Failed(err) => {
                panic!("assertion `assert_matching!(expected, actual)` could not compare: {err}");
            }
        }
    };
    ($expected:expr, $actual:expr, $($arg:tt)+) => {
        match $crate::check_matching(&$expected, &$actual) {
            $crate::Matching::Match => {}
            $crate::Matching::Mismatch(report) => {
                panic!(
                    "assertion `assert_matching!(expected, actual)` failed: {}\n\n{report}\n",
                    format_args!($($arg)+)
                );
            }
            $crate::Matching::Failed(err) => {
                panic!(
                    "assertion `assert_matching!(expected, actual)` failed: {}: could not compare: {err}",
                    format_args!($($arg)+)
                );
            }
        }
    };
}

/// Asserts that a value matches an expectation under custom [`Options`].
///
/// # Example
///
/// ```
/// use diffmatch_assert::{Options, assert_matching_with, map};
///
/// let options = Options::new().optional_key("updated_at");
/// assert_matching_with!(
///     map! { "id" => 1 },
///     map! { "id" => 1, "updated_at" => "2024-01-01" },
///     &options
/// );
/// ```
#[macro_export]
macro_rules! assert_matching_with {
    ($expected:expr, $actual:expr, $options:expr $(,)?) => {
        match $crate::check_matching_with(&$expected, &$actual, $options) {
            $crate::Matching::Match => {}
            $crate::Matching::Mismatch(report) => {
                panic!(
                    "assertion `assert_matching_with!(expected, actual, options)` failed\n\n{report}\n"
                );
            }
            $crate::Matching::Failed(err) => {
                panic!(
                    "assertion `assert_matching_with!(expected, actual, options)` could not compare: {err}"
                );
            }
        }
    };
    ($expected:expr, $actual:expr, $options:expr, $($arg:tt)+) => {
        match $crate::check_matching_with(&$expected, &$actual, $options) {
            $crate::Matching::Match => {}
            $crate::Matching::Mismatch(report) => {
                panic!(
                    "assertion `assert_matching_with!(expected, actual, options)` failed: {}\n\n{report}\n",
                    format_args!($($arg)+)
                );
            }
            $crate::Matching::Failed(err) => {
                panic!(
                    "assertion `assert_matching_with!(expected, actual, options)` failed: {}: could not compare: {err}",
                    format_args!($($arg)+)
                );
            }
        }
    };
}

/// Asserts that a value matches an expectation (debug builds only).
///
/// Like [`assert_matching!`], but only enabled in debug builds.
#[macro_export]
macro_rules! debug_assert_matching {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::assert_matching!($($arg)*);
        }
    };
}

/// Asserts that a value matches an expectation under custom options (debug builds only).
///
/// Like [`assert_matching_with!`], but only enabled in debug builds.
#[macro_export]
macro_rules! debug_assert_matching_with {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::assert_matching_with!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_values_pass() {
        diffmatch_testhelpers::setup();
        assert_matching!(map! { "name" => "Ada" }, map! { "name" => "Ada" });
        assert_matching!(
            expect_seq![Expectation::of_type(Tag::TEXT)],
            seq!["x"],
            "a single {} element",
            "text"
        );
        debug_assert_matching!(seq![1], seq![1]);
    }

    #[test]
    fn options_are_honored() {
        diffmatch_testhelpers::setup();
        let options = Options::new().ignore_additional(true);
        assert_matching_with!(seq![1], seq![1, 2], &options);
        debug_assert_matching_with!(seq![1], seq![1, 2], &options, "extras ignored");
    }

    #[test]
    #[should_panic(expected = "Where, - 1 missing")]
    fn mismatch_panics_with_the_report() {
        diffmatch_testhelpers::setup();
        assert_matching!(seq![1, 2], seq![1]);
    }

    #[test]
    #[should_panic(expected = "while loading fixtures")]
    fn custom_message_is_included() {
        diffmatch_testhelpers::setup();
        assert_matching!(seq![1], seq![2], "while loading {}", "fixtures");
    }

    #[test]
    #[should_panic(expected = "could not compare")]
    fn errors_panic_too() {
        diffmatch_testhelpers::setup();
        assert_matching!(Expectation::all(Tag::TEXT, 1_usize..), Value::from(3));
    }

    #[test]
    fn check_matching_reports_instead_of_panicking() {
        diffmatch_testhelpers::setup();
        assert!(check_matching(&seq![1], &seq![1]).is_match());
        assert_eq!(
            check_matching(&seq![1], &seq![2]),
            Matching::Mismatch("[\n  - 1+ 2\n]\nWhere, - 1 missing, + 1 additional".into())
        );
        assert_eq!(
            check_matching(&Expectation::all(Tag::TEXT, 0_usize..), &Value::Null),
            Matching::Failed(DiffError::NotASequence { found: Tag::NULL })
        );
    }

    #[test]
    fn mismatch_report_lists_keys() {
        diffmatch_testhelpers::setup();
        let Matching::Mismatch(report) =
            check_matching(&map! { "a" => 1, "b" => 2 }, &map! { "a" => 1, "c" => 3 })
        else {
            panic!("expected a mismatch");
        };
        insta::assert_snapshot!(report, @r#"
        {
          - "b": 2,
          + "c": 3
        }
        Where, - 1 missing, + 1 additional
        "#);
    }
}
