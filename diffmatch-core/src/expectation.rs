//! Expectations: the pattern side of a comparison.

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::ops::{BitOr, Range, RangeFrom, RangeInclusive};
use std::sync::Arc;

use indexmap::IndexMap;
use regex::Regex;

use crate::{AlternativeOptions, DiffError, Key, Tag, Value};

/// What an actual value is expected to look like.
#[derive(Debug, Clone)]
pub enum Expectation {
    /// Exact value equality. Collection literals are compared structurally.
    Literal(Value),
    /// The actual value's runtime tag must be this tag or a registered subtype.
    Type(Tag),
    /// The actual value must be text matching this pattern.
    Pattern(TextPattern),
    /// The actual value must satisfy this predicate.
    Predicate(Predicate),
    /// The actual value must lie within this inclusive interval.
    Interval(Interval),
    /// At least one of several alternatives must match.
    Composite(Composite),
    /// Every element of a sequence must match one element expectation.
    Repeat(Repeat),
    /// A sequence whose elements are expectations.
    Seq(Vec<Expectation>),
    /// A mapping whose values are expectations.
    Map(IndexMap<Key, Expectation>),
}

impl Expectation {
    /// Require exact equality with a value.
    pub fn literal(value: impl Into<Value>) -> Self {
        Expectation::Literal(value.into())
    }

    /// Require a runtime type.
    pub const fn of_type(tag: Tag) -> Self {
        Expectation::Type(tag)
    }

    /// Require text matching a regular expression.
    pub fn pattern(pattern: &str) -> Result<Self, DiffError> {
        TextPattern::new(pattern).map(Expectation::Pattern)
    }

    /// Require a predicate to hold. The label is what reports show.
    pub fn predicate<F>(label: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Expectation::Predicate(Predicate::new(label, check))
    }

    /// Require a value within `low..=high`.
    pub fn interval(low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Expectation::Interval(Interval::new(low, high))
    }

    /// A composite of several alternatives, first one preferred on ties.
    pub fn any_of<I, E>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expectation>,
    {
        let mut composite = Composite::new();
        for alternative in alternatives {
            composite = composite.or(alternative);
        }
        Expectation::Composite(composite)
    }

    /// Apply `element` to every item of a sequence whose size is in `size`.
    pub fn all(element: impl Into<Expectation>, size: impl Into<SizeBound>) -> Self {
        Repeat::new(element).size(size).into()
    }

    /// A sequence of expectations.
    pub fn seq<I, E>(items: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expectation>,
    {
        Expectation::Seq(items.into_iter().map(Into::into).collect())
    }

    /// A mapping of expectations.
    pub fn map<I, K, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, E)>,
        K: Into<Key>,
        E: Into<Expectation>,
    {
        Expectation::Map(
            entries
                .into_iter()
                .map(|(k, e)| (k.into(), e.into()))
                .collect(),
        )
    }

    /// Returns true for the variants evaluated by the matcher rather than by
    /// structural descent.
    pub const fn is_matcher(&self) -> bool {
        !matches!(
            self,
            Expectation::Literal(_) | Expectation::Seq(_) | Expectation::Map(_)
        )
    }
}

impl Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Literal(value) => write!(f, "{value}"),
            Expectation::Type(tag) => write!(f, "{tag}"),
            Expectation::Pattern(pattern) => write!(f, "{pattern}"),
            Expectation::Predicate(predicate) => f.write_str(predicate.label()),
            Expectation::Interval(interval) => write!(f, "{interval}"),
            Expectation::Composite(composite) => write!(f, "{composite}"),
            Expectation::Repeat(repeat) => write!(f, "{repeat}"),
            Expectation::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Expectation::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl BitOr for Expectation {
    type Output = Expectation;

    /// Combine two expectations into one composite, flattening nested composites.
    fn bitor(self, rhs: Expectation) -> Expectation {
        let composite = match self {
            Expectation::Composite(composite) => composite,
            other => Composite::new().or(other),
        };
        Expectation::Composite(composite.or(rhs))
    }
}

/// A compiled text pattern.
#[derive(Debug, Clone)]
pub struct TextPattern(Regex);

impl TextPattern {
    /// Compile a regular expression.
    pub fn new(pattern: &str) -> Result<Self, DiffError> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|err| DiffError::InvalidPattern {
                pattern: pattern.to_owned(),
                message: err.to_string(),
            })
    }

    /// The byte range of the first match in `text`.
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.0.find(text).map(|m| m.range())
    }

    /// The pattern source.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Regex> for TextPattern {
    fn from(value: Regex) -> Self {
        Self(value)
    }
}

impl Display for TextPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.0.as_str())
    }
}

/// A caller-supplied check over values, with a label for reports.
#[derive(Clone)]
pub struct Predicate {
    label: Cow<'static, str>,
    check: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl Predicate {
    /// Wrap a closure.
    pub fn new<F>(label: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            check: Arc::new(check),
        }
    }

    /// Run the check.
    pub fn test(&self, value: &Value) -> bool {
        (self.check)(value)
    }

    /// The label shown in reports.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.label).finish()
    }
}

/// An inclusive interval over numbers, text or booleans.
#[derive(Debug, Clone)]
pub struct Interval {
    low: Value,
    high: Value,
}

impl Interval {
    /// The interval `low..=high`.
    pub fn new(low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Self {
            low: low.into(),
            high: high.into(),
        }
    }

    /// Returns true if `value` is comparable with both bounds and lies between them.
    pub fn contains(&self, value: &Value) -> bool {
        let above = self.low.scalar_cmp(value).is_some_and(|o| o.is_le());
        let below = value.scalar_cmp(&self.high).is_some_and(|o| o.is_le());
        above && below
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.low, self.high)
    }
}

/// One alternative of a [`Composite`], with its own option overrides.
#[derive(Debug, Clone)]
pub struct Alternative {
    /// The expectation tried for this alternative.
    pub expectation: Expectation,
    /// Overrides applied while evaluating it.
    pub options: AlternativeOptions,
}

/// An ordered set of alternatives; the first registered wins ties.
#[derive(Debug, Clone, Default)]
pub struct Composite {
    alternatives: Vec<Alternative>,
}

impl Composite {
    /// A composite without alternatives (never matches anything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alternative. A composite without overrides is flattened.
    pub fn or(self, expectation: impl Into<Expectation>) -> Self {
        self.or_with(expectation, AlternativeOptions::default())
    }

    /// Append an alternative with its own option overrides.
    ///
    /// A nested composite is flattened into this one when no overrides are
    /// given; with overrides it stays a single alternative so the overrides
    /// apply to all of it.
    pub fn or_with(
        mut self,
        expectation: impl Into<Expectation>,
        options: AlternativeOptions,
    ) -> Self {
        match expectation.into() {
            Expectation::Composite(nested) if options.is_empty() => {
                self.alternatives.extend(nested.alternatives);
            }
            expectation => self.alternatives.push(Alternative {
                expectation,
                options,
            }),
        }
        self
    }

    /// The alternatives in registration order.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }
}

impl Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alternatives.is_empty() {
            return f.write_str("<none>");
        }
        for (i, alternative) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}", alternative.expectation)?;
        }
        Ok(())
    }
}

impl From<Composite> for Expectation {
    fn from(value: Composite) -> Self {
        Expectation::Composite(value)
    }
}

/// Size constraint for a [`Repeat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeBound {
    /// Exactly this many elements
    Exact(usize),
    /// Between `min` and `max` elements, inclusive
    Between(usize, usize),
    /// At least this many elements
    AtLeast(usize),
}

impl SizeBound {
    fn bounds(self) -> (usize, Option<usize>) {
        match self {
            SizeBound::Exact(n) => (n, Some(n)),
            SizeBound::Between(min, max) => (min, Some(max)),
            SizeBound::AtLeast(min) => (min, None),
        }
    }
}

impl From<usize> for SizeBound {
    fn from(value: usize) -> Self {
        SizeBound::Exact(value)
    }
}

impl From<RangeInclusive<usize>> for SizeBound {
    fn from(value: RangeInclusive<usize>) -> Self {
        SizeBound::Between(*value.start(), *value.end())
    }
}

impl From<RangeFrom<usize>> for SizeBound {
    fn from(value: RangeFrom<usize>) -> Self {
        SizeBound::AtLeast(value.start)
    }
}

/// Apply one element expectation to every item of a sequence.
#[derive(Debug, Clone)]
pub struct Repeat {
    element: Box<Expectation>,
    min: usize,
    max: Option<usize>,
    size: Option<SizeBound>,
}

impl Repeat {
    /// Any number of elements, each matching `element`.
    pub fn new(element: impl Into<Expectation>) -> Self {
        Self {
            element: Box::new(element.into()),
            min: 0,
            max: None,
            size: None,
        }
    }

    /// Require at least `min` elements.
    pub fn min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    /// Allow at most `max` elements.
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Constrain the size; takes precedence over [`Repeat::min`] and [`Repeat::max`].
    pub fn size(mut self, size: impl Into<SizeBound>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// The element expectation.
    pub fn element(&self) -> &Expectation {
        &self.element
    }

    /// Effective `(min, max)` bounds; `None` means unbounded.
    pub fn bounds(&self) -> (usize, Option<usize>) {
        self.size.map_or((self.min, self.max), SizeBound::bounds)
    }
}

impl Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds() {
            (min, Some(max)) => write!(f, "[{}; {min}..={max}]", self.element),
            (min, None) => write!(f, "[{}; {min}..]", self.element),
        }
    }
}

impl From<Repeat> for Expectation {
    fn from(value: Repeat) -> Self {
        Expectation::Repeat(value)
    }
}

impl From<Value> for Expectation {
    fn from(value: Value) -> Self {
        Expectation::Literal(value)
    }
}

impl From<Tag> for Expectation {
    fn from(value: Tag) -> Self {
        Expectation::Type(value)
    }
}

impl From<TextPattern> for Expectation {
    fn from(value: TextPattern) -> Self {
        Expectation::Pattern(value)
    }
}

impl From<Regex> for Expectation {
    fn from(value: Regex) -> Self {
        Expectation::Pattern(value.into())
    }
}

impl From<Predicate> for Expectation {
    fn from(value: Predicate) -> Self {
        Expectation::Predicate(value)
    }
}

impl From<Interval> for Expectation {
    fn from(value: Interval) -> Self {
        Expectation::Interval(value)
    }
}

impl From<RangeInclusive<i64>> for Expectation {
    fn from(value: RangeInclusive<i64>) -> Self {
        let (low, high) = value.into_inner();
        Expectation::interval(low, high)
    }
}

impl From<RangeInclusive<f64>> for Expectation {
    fn from(value: RangeInclusive<f64>) -> Self {
        let (low, high) = value.into_inner();
        Expectation::interval(low, high)
    }
}

impl From<Vec<Expectation>> for Expectation {
    fn from(value: Vec<Expectation>) -> Self {
        Expectation::Seq(value)
    }
}

macro_rules! impl_literal_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Expectation {
                fn from(value: $ty) -> Self {
                    Expectation::Literal(value.into())
                }
            }
        )*
    };
}

impl_literal_from!(bool, i8, i16, i32, i64, u8, u16, u32, f32, f64, &str, String, ());
