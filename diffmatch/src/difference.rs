//! The comparison entry points.

use diffmatch_core::{
    AnsiBackend, ColorBackend, Counts, DiffError, DiffTree, Expectation, HtmlBackend, Options,
    PlainBackend, StyleTable, Value,
};

use crate::diff::{CycleGuard, Differ, Expected};
use crate::report::render_tree;
use crate::verdict::Verdict;

/// A computed comparison: the diff tree, its verdict, and the options and
/// style table it renders with.
///
/// The tree is computed once; every `render_*` call walks the same tree, so
/// rendering is repeatable and byte-identical across calls.
///
/// # Example
///
/// ```
/// use diffmatch::{Difference, Expectation, Options, Tag, Value, expect_seq, seq};
///
/// let expected = expect_seq![1, Expectation::of_type(Tag::TEXT)];
/// let actual = seq![1, 2];
///
/// let difference = Difference::new(&expected, &actual, &Options::new()).unwrap();
/// assert!(!difference.is_match());
/// assert_eq!(difference.render_plain(), "[\n  - text+ 2\n]\nWhere, - 1 missing, + 1 additional");
/// ```
#[derive(Debug, Clone)]
pub struct Difference {
    tree: DiffTree,
    verdict: Verdict,
    options: Options,
    styles: StyleTable,
}

impl Difference {
    /// Compare `expected` against `actual`.
    ///
    /// Fails when a repeat meets a non-sequence or has inverted bounds, when a
    /// shared value is re-entered along the current path, or when the chosen
    /// color scheme is unknown.
    pub fn new<'a>(
        expected: impl Into<Expected<'a>>,
        actual: &Value,
        options: &Options,
    ) -> Result<Self, DiffError> {
        let styles = options.style_table()?;
        let mut guard = CycleGuard::default();
        let tree = Differ::new(options, &mut guard).compare(expected.into(), actual)?;
        let verdict = Verdict::from_counts(tree.counts(), options);
        debug!(?verdict, counts = ?tree.counts(), "comparison finished");
        Ok(Self {
            tree,
            verdict,
            options: options.clone(),
            styles,
        })
    }

    /// The diff tree.
    pub const fn tree(&self) -> &DiffTree {
        &self.tree
    }

    /// Per-category counts of the whole tree.
    pub const fn counts(&self) -> Counts {
        self.tree.counts()
    }

    /// The verdict.
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Returns true if the actual value matched.
    pub const fn is_match(&self) -> bool {
        self.verdict.is_match()
    }

    /// Render with a specific backend.
    pub fn render_with<B: ColorBackend>(&self, backend: &B) -> String {
        render_tree(&self.tree, &self.options, &self.styles, backend)
    }

    /// Render without markup.
    pub fn render_plain(&self) -> String {
        self.render_with(&PlainBackend)
    }

    /// Render with ANSI escapes.
    pub fn render_ansi(&self) -> String {
        self.render_with(&AnsiBackend)
    }

    /// Render with HTML spans.
    pub fn render_html(&self) -> String {
        self.render_with(&HtmlBackend)
    }

    /// Render the way the options ask for: HTML, then ANSI if color is
    /// enabled, otherwise plain.
    pub fn render(&self) -> String {
        if self.options.is_html_output() {
            self.render_html()
        } else if self.options.is_color_enabled() {
            self.render_ansi()
        } else {
            self.render_plain()
        }
    }

    /// `None` on a match, the rendered report otherwise.
    pub fn into_report(self) -> Option<String> {
        (!self.is_match()).then(|| self.render())
    }
}

/// Compare `expected` against `actual`: `None` when it matches, the rendered
/// report when it does not.
///
/// ```
/// use diffmatch::{Options, difference, seq};
///
/// let report = difference(&seq![1, 2], &seq![0, 2, 3], &Options::new()).unwrap();
/// assert_eq!(
///     report.as_deref(),
///     Some("[\n  - 1+ 0,\n  + 3\n]\nWhere, - 1 missing, + 2 additional")
/// );
/// ```
pub fn difference<'a>(
    expected: impl Into<Expected<'a>>,
    actual: &Value,
    options: &Options,
) -> Result<Option<String>, DiffError> {
    Difference::new(expected, actual, options).map(Difference::into_report)
}

/// `matcher.diff(actual)` on expectations and values.
pub trait MatchDiff {
    /// Compare with default options.
    fn diff(&self, actual: &Value) -> Result<Option<String>, DiffError> {
        self.diff_with(actual, &Options::default())
    }

    /// Compare with the given options.
    fn diff_with(&self, actual: &Value, options: &Options) -> Result<Option<String>, DiffError>;
}

impl MatchDiff for Expectation {
    fn diff_with(&self, actual: &Value, options: &Options) -> Result<Option<String>, DiffError> {
        difference(self, actual, options)
    }
}

impl MatchDiff for Value {
    fn diff_with(&self, actual: &Value, options: &Options) -> Result<Option<String>, DiffError> {
        difference(self, actual, options)
    }
}
