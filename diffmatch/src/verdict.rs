//! Match/no-match from the counts gathered while diffing.

use diffmatch_core::{Counts, Options};

/// The outcome of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing missing, and nothing additional unless additional values are ignored.
    Match,
    /// At least one discrepancy counts against the match.
    Mismatch,
}

impl Verdict {
    /// Derive the verdict from a tree's counts.
    pub fn from_counts(counts: Counts, options: &Options) -> Self {
        if counts.missing() == 0 && (counts.additional() == 0 || options.ignores_additional()) {
            Verdict::Match
        } else {
            Verdict::Mismatch
        }
    }

    /// Returns true for [`Verdict::Match`].
    pub const fn is_match(self) -> bool {
        matches!(self, Verdict::Match)
    }
}
