//! Report categories and the per-category counters carried by diff trees.

use std::fmt;

/// The kind of entry a diff report can contain.
///
/// [`Category::ALL`] is the fixed order used by the report summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Expected but not found
    Missing,
    /// Found but not expected
    Additional,
    /// Matched by plain value equality
    MatchValue,
    /// Matched a text pattern
    MatchPattern,
    /// Matched a runtime type
    MatchType,
    /// Satisfied a predicate
    MatchPredicate,
    /// Fell inside an interval
    MatchInterval,
    /// Matched one alternative of a composite
    MatchAlternative,
}

impl Category {
    /// Every category, in summary order.
    pub const ALL: [Category; 8] = [
        Category::Missing,
        Category::Additional,
        Category::MatchValue,
        Category::MatchPattern,
        Category::MatchType,
        Category::MatchPredicate,
        Category::MatchInterval,
        Category::MatchAlternative,
    ];

    /// Name used in the report summary.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Missing => "missing",
            Category::Additional => "additional",
            Category::MatchValue => "match_value",
            Category::MatchPattern => "match_pattern",
            Category::MatchType => "match_type",
            Category::MatchPredicate => "match_predicate",
            Category::MatchInterval => "match_interval",
            Category::MatchAlternative => "match_alternative",
        }
    }

    /// Position of this category in [`Category::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the match categories.
    pub const fn is_match(self) -> bool {
        !matches!(self, Category::Missing | Category::Additional)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How an actual value satisfied its expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Exact value equality
    Value,
    /// Runtime type check
    Type,
    /// Text pattern
    Pattern,
    /// Caller-supplied predicate
    Predicate,
    /// Numeric or textual interval
    Interval,
    /// One alternative of a composite matched exactly
    Alternative,
}

impl MatchKind {
    /// The report category for this kind of match.
    pub const fn category(self) -> Category {
        match self {
            MatchKind::Value => Category::MatchValue,
            MatchKind::Type => Category::MatchType,
            MatchKind::Pattern => Category::MatchPattern,
            MatchKind::Predicate => Category::MatchPredicate,
            MatchKind::Interval => Category::MatchInterval,
            MatchKind::Alternative => Category::MatchAlternative,
        }
    }
}

/// Number of entries per [`Category`] beneath a diff tree node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts([usize; Category::ALL.len()]);

impl Counts {
    /// Counts with a single entry in `category`.
    pub const fn one(category: Category) -> Self {
        let mut counts = [0; Category::ALL.len()];
        counts[category.index()] = 1;
        Self(counts)
    }

    /// The count for one category.
    pub const fn get(&self, category: Category) -> usize {
        self.0[category.index()]
    }

    /// Number of missing entries.
    pub const fn missing(&self) -> usize {
        self.get(Category::Missing)
    }

    /// Number of additional entries.
    pub const fn additional(&self) -> usize {
        self.get(Category::Additional)
    }

    /// Missing plus additional entries.
    pub const fn mismatches(&self) -> usize {
        self.missing() + self.additional()
    }

    /// Non-zero categories in summary order.
    pub fn nonzero(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
            .filter(|(_, count)| *count > 0)
    }
}

impl std::ops::Add for Counts {
    type Output = Counts;

    fn add(mut self, rhs: Counts) -> Counts {
        self += rhs;
        self
    }
}

impl std::ops::AddAssign for Counts {
    fn add_assign(&mut self, rhs: Counts) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
    }
}

impl std::iter::Sum for Counts {
    fn sum<I: Iterator<Item = Counts>>(iter: I) -> Self {
        iter.fold(Counts::default(), |acc, c| acc + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position() {
        for (i, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn sums() {
        let counts: Counts = [
            Counts::one(Category::Missing),
            Counts::one(Category::Additional),
            Counts::one(Category::Missing),
            Counts::one(Category::MatchType),
        ]
        .into_iter()
        .sum();
        assert_eq!(counts.missing(), 2);
        assert_eq!(counts.additional(), 1);
        assert_eq!(counts.mismatches(), 3);
        assert_eq!(
            counts.nonzero().collect::<Vec<_>>(),
            vec![
                (Category::Missing, 2),
                (Category::Additional, 1),
                (Category::MatchType, 1)
            ]
        );
    }
}
