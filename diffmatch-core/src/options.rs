//! Comparison and rendering options.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::{Category, DiffError, Key, StyleTable, TypeRegistry};

/// Which style table a report uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemeChoice {
    /// A built-in scheme, looked up by name when rendering
    Named(Cow<'static, str>),
    /// A caller-supplied table
    Custom(StyleTable),
}

/// Options for one comparison.
///
/// Use the builder methods to configure:
///
/// ```
/// use diffmatch_core::Options;
///
/// let options = Options::new()
///     .ignore_additional(true)
///     .optional_key("nickname");
/// assert!(options.ignores_additional());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    ignore_additional: bool,
    quiet: bool,
    verbose: bool,
    char_diff: bool,
    optional_keys: BTreeSet<Key>,
    color_scheme: Option<SchemeChoice>,
    color_enabled: bool,
    html_output: bool,
    type_registry: Arc<TypeRegistry>,
}

impl Options {
    /// Default options: everything reported, plain text output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not report (or count) values that are only present in the actual value.
    pub fn ignore_additional(mut self, ignore: bool) -> Self {
        self.ignore_additional = ignore;
        self
    }

    /// Hide all matches and unpaired sequence additions.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Show plain value matches as well.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Diff mismatched multi-character texts character by character.
    pub fn char_diff(mut self, enabled: bool) -> Self {
        self.char_diff = enabled;
        self
    }

    /// Exempt a mapping key from being reported as missing or additional.
    pub fn optional_key(mut self, key: impl Into<Key>) -> Self {
        self.optional_keys.insert(key.into());
        self
    }

    /// Exempt several mapping keys at once.
    pub fn optional_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        self.optional_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Use a built-in color scheme by name. Also enables color.
    ///
    /// Unknown names are reported when the report is rendered.
    pub fn color_scheme_named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.color_scheme = Some(SchemeChoice::Named(name.into()));
        self.color_enabled = true;
        self
    }

    /// Use a custom style table. Also enables color.
    pub fn color_scheme(mut self, table: StyleTable) -> Self {
        self.color_scheme = Some(SchemeChoice::Custom(table));
        self.color_enabled = true;
        self
    }

    /// Force ANSI color on or off.
    pub fn color_enabled(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    /// Render HTML spans instead of ANSI escapes.
    pub fn html_output(mut self, html: bool) -> Self {
        self.html_output = html;
        self
    }

    /// Use a custom type registry for type expectations.
    pub fn type_registry(mut self, registry: TypeRegistry) -> Self {
        self.type_registry = Arc::new(registry);
        self
    }

    /// Whether additional values are ignored.
    pub const fn ignores_additional(&self) -> bool {
        self.ignore_additional
    }

    /// Whether quiet mode is on.
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Whether verbose mode is on.
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Whether character-level text diffs are enabled.
    pub const fn char_diff_enabled(&self) -> bool {
        self.char_diff
    }

    /// Whether color output is enabled.
    pub const fn is_color_enabled(&self) -> bool {
        self.color_enabled
    }

    /// Whether HTML output is requested.
    pub const fn is_html_output(&self) -> bool {
        self.html_output
    }

    /// Returns true if `key` is declared optional.
    pub fn is_optional(&self, key: &Key) -> bool {
        self.optional_keys.contains(key)
    }

    /// The registry used by type expectations.
    pub fn registry(&self) -> &TypeRegistry {
        &self.type_registry
    }

    /// The chosen color scheme, if any.
    pub const fn scheme_choice(&self) -> Option<&SchemeChoice> {
        self.color_scheme.as_ref()
    }

    /// Resolve the style table: the chosen scheme, or the process-wide default.
    pub fn style_table(&self) -> Result<StyleTable, DiffError> {
        match &self.color_scheme {
            Some(SchemeChoice::Named(name)) => StyleTable::named(name),
            Some(SchemeChoice::Custom(table)) => Ok(table.clone()),
            None => Ok(StyleTable::global_default().clone()),
        }
    }

    /// Whether entries of `category` appear in reports.
    ///
    /// Missing and additional entries always do. Quiet hides every match;
    /// plain value matches need verbose.
    pub const fn shows(&self, category: Category) -> bool {
        match category {
            Category::Missing | Category::Additional => true,
            Category::MatchValue => !self.quiet && self.verbose,
            _ => !self.quiet,
        }
    }

    /// These options with one composite alternative's overrides applied.
    pub fn merged(&self, overrides: &AlternativeOptions) -> Options {
        let mut merged = self.clone();
        if let Some(ignore) = overrides.ignore_additional {
            merged.ignore_additional = ignore;
        }
        merged
            .optional_keys
            .extend(overrides.optional_keys.iter().cloned());
        merged
    }
}

/// Overrides applied to [`Options`] while evaluating one composite alternative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlternativeOptions {
    ignore_additional: Option<bool>,
    optional_keys: BTreeSet<Key>,
}

impl AlternativeOptions {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override `ignore_additional` for this alternative.
    pub fn ignore_additional(mut self, ignore: bool) -> Self {
        self.ignore_additional = Some(ignore);
        self
    }

    /// Add an optional key for this alternative.
    pub fn optional_key(mut self, key: impl Into<Key>) -> Self {
        self.optional_keys.insert(key.into());
        self
    }

    /// Returns true if nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.ignore_additional.is_none() && self.optional_keys.is_empty()
    }
}
