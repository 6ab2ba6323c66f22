//! The diff tree produced by one comparison.
//!
//! Nodes are immutable once built. Every node carries the [`Counts`] of the
//! entries beneath it, computed bottom-up by the constructors.

use std::ops::Range;

use crate::{Category, Counts, Key, MatchKind};

/// The shape of a nested node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `{ key: value, ... }`
    Mapping,
    /// `[ value, ... ]`
    Sequence,
}

/// A run of characters in a character-level text diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextChunk {
    /// Present on both sides
    Same(String),
    /// Only in the expected text
    Missing(String),
    /// Only in the actual text
    Additional(String),
}

/// One child of a nested node.
#[derive(Debug, Clone)]
pub struct Child {
    /// The mapping key, `None` inside sequences.
    pub key: Option<Key>,
    /// True when the key was present on both sides and the node is their diff.
    pub paired: bool,
    /// The child's diff.
    pub node: DiffTree,
}

/// What a diff tree node says.
#[derive(Debug, Clone)]
pub enum DiffKind {
    /// The actual value satisfied its expectation.
    Match {
        /// How it matched.
        kind: MatchKind,
        /// The actual value, rendered.
        rendered: String,
        /// Byte range of `rendered` to highlight (text pattern matches).
        highlight: Option<Range<usize>>,
    },
    /// An expected value with no counterpart.
    Missing {
        /// The expectation, rendered.
        rendered: String,
    },
    /// An actual value with no counterpart.
    Additional {
        /// The actual value, rendered.
        rendered: String,
    },
    /// A missing expectation followed by the additional value found in its place.
    Mismatch {
        /// The expectation, rendered.
        expected: String,
        /// The actual value, rendered.
        actual: String,
    },
    /// A character-level diff between two texts.
    Text(Vec<TextChunk>),
    /// A mapping or sequence with per-entry diffs.
    Nested {
        /// Mapping or sequence.
        shape: Shape,
        /// The entries, in report order.
        children: Vec<Child>,
    },
}

/// An immutable diff tree node.
#[derive(Debug, Clone)]
pub struct DiffTree {
    kind: DiffKind,
    counts: Counts,
    alternative: Option<usize>,
}

impl DiffTree {
    /// A match.
    pub fn matched(kind: MatchKind, rendered: impl Into<String>) -> Self {
        Self::leaf(DiffKind::Match {
            kind,
            rendered: rendered.into(),
            highlight: None,
        })
    }

    /// A text pattern match highlighting `span` of the rendered text.
    pub fn matched_span(rendered: impl Into<String>, span: Range<usize>) -> Self {
        Self::leaf(DiffKind::Match {
            kind: MatchKind::Pattern,
            rendered: rendered.into(),
            highlight: Some(span),
        })
    }

    /// A missing entry.
    pub fn missing(rendered: impl Into<String>) -> Self {
        Self::leaf(DiffKind::Missing {
            rendered: rendered.into(),
        })
    }

    /// An additional entry.
    pub fn additional(rendered: impl Into<String>) -> Self {
        Self::leaf(DiffKind::Additional {
            rendered: rendered.into(),
        })
    }

    /// A missing expectation paired with the actual value found instead.
    pub fn mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::leaf(DiffKind::Mismatch {
            expected: expected.into(),
            actual: actual.into(),
        })
    }

    /// A character-level text diff.
    pub fn text(chunks: Vec<TextChunk>) -> Self {
        Self::leaf(DiffKind::Text(chunks))
    }

    /// A nested node; its counts are the sum of its children's.
    pub fn nested(shape: Shape, children: Vec<Child>) -> Self {
        let counts = children.iter().map(|c| c.node.counts).sum();
        Self {
            kind: DiffKind::Nested { shape, children },
            counts,
            alternative: None,
        }
    }

    fn leaf(kind: DiffKind) -> Self {
        let counts = match &kind {
            DiffKind::Match { kind, .. } => Counts::one(kind.category()),
            DiffKind::Missing { .. } => Counts::one(Category::Missing),
            DiffKind::Additional { .. } => Counts::one(Category::Additional),
            DiffKind::Mismatch { .. } => {
                Counts::one(Category::Missing) + Counts::one(Category::Additional)
            }
            DiffKind::Text(chunks) => chunks
                .iter()
                .map(|chunk| match chunk {
                    TextChunk::Same(_) => Counts::default(),
                    TextChunk::Missing(_) => Counts::one(Category::Missing),
                    TextChunk::Additional(_) => Counts::one(Category::Additional),
                })
                .sum(),
            DiffKind::Nested { .. } => unreachable!("nested nodes are built by DiffTree::nested"),
        };
        Self {
            kind,
            counts,
            alternative: None,
        }
    }

    /// Record which composite alternative produced this node.
    pub fn with_alternative(mut self, index: usize) -> Self {
        self.alternative = Some(index);
        self
    }

    /// What this node says.
    pub const fn kind(&self) -> &DiffKind {
        &self.kind
    }

    /// Counts of every entry beneath (and including) this node.
    pub const fn counts(&self) -> Counts {
        self.counts
    }

    /// Index of the composite alternative this node came from, if any.
    pub const fn alternative(&self) -> Option<usize> {
        self.alternative
    }

    /// Returns true if nothing beneath this node is missing or additional.
    pub const fn is_clean(&self) -> bool {
        self.counts.mismatches() == 0
    }
}
