//! Evaluation of matcher expectations: type, pattern, predicate, interval,
//! composite and repeat.

use diffmatch_core::{
    Child, Composite, DiffError, DiffTree, Expectation, MatchKind, Repeat, Shape, Value,
};

use crate::diff::{Differ, Expected};

impl Differ<'_, '_> {
    /// Evaluate a matcher. `actual` has already been resolved through any
    /// shared handle.
    pub(crate) fn evaluate(
        &mut self,
        expectation: &Expectation,
        actual: &Value,
    ) -> Result<DiffTree, DiffError> {
        let expected = Expected::Expectation(expectation);
        let tree = match expectation {
            Expectation::Type(tag) => {
                let found = actual.tag();
                if self.options.registry().is_a(&found, tag) {
                    DiffTree::matched(MatchKind::Type, actual.to_string())
                } else {
                    self.mismatch(expected, actual)
                }
            }
            Expectation::Pattern(pattern) => {
                match actual.as_text().and_then(|text| Some((text, pattern.find(text)?))) {
                    Some((text, span)) => DiffTree::matched_span(text, span),
                    None => self.mismatch(expected, actual),
                }
            }
            Expectation::Predicate(predicate) => {
                if predicate.test(actual) {
                    DiffTree::matched(MatchKind::Predicate, actual.to_string())
                } else {
                    self.mismatch(expected, actual)
                }
            }
            Expectation::Interval(interval) => {
                if interval.contains(actual) {
                    DiffTree::matched(MatchKind::Interval, actual.to_string())
                } else {
                    self.mismatch(expected, actual)
                }
            }
            Expectation::Composite(composite) => self.evaluate_composite(composite, actual)?,
            Expectation::Repeat(repeat) => self.evaluate_repeat(repeat, actual)?,
            Expectation::Literal(_) | Expectation::Seq(_) | Expectation::Map(_) => {
                self.compare(expected, actual)?
            }
        };
        Ok(tree)
    }

    /// Try every alternative; the first one without mismatches wins outright,
    /// otherwise the one with the fewest mismatches (earliest on ties) is reported.
    ///
    /// A `NotASequence` failure only aborts the composite when no alternative
    /// could be compared at all.
    fn evaluate_composite(
        &mut self,
        composite: &Composite,
        actual: &Value,
    ) -> Result<DiffTree, DiffError> {
        let mut best: Option<(usize, DiffTree)> = None;
        let mut first_error = None;
        let mut evaluated = false;

        for (index, alternative) in composite.alternatives().iter().enumerate() {
            let options = self.options.merged(&alternative.options);
            let expected = Expected::Expectation(&alternative.expectation);
            let tree = match Differ::new(&options, self.guard).compare(expected, actual) {
                Ok(tree) => {
                    evaluated = true;
                    tree
                }
                // An alternative of the wrong shape is scored as a whole-value mismatch.
                Err(err @ DiffError::NotASequence { .. }) => {
                    debug!(index, %err, "composite alternative does not apply");
                    first_error.get_or_insert(err);
                    self.mismatch(expected, actual)
                }
                Err(err) => return Err(err),
            };
            let score = tree.counts().mismatches();
            debug!(index, score, "composite alternative");

            if score == 0 {
                return Ok(
                    DiffTree::matched(MatchKind::Alternative, actual.to_string())
                        .with_alternative(index),
                );
            }
            if best
                .as_ref()
                .is_none_or(|(_, current)| score < current.counts().mismatches())
            {
                best = Some((index, tree));
            }
        }

        if !evaluated && let Some(err) = first_error {
            return Err(err);
        }

        Ok(match best {
            Some((index, tree)) => tree.with_alternative(index),
            None => {
                let empty = Expectation::Composite(composite.clone());
                self.mismatch(Expected::Expectation(&empty), actual)
            }
        })
    }

    /// Compare each element positionally against the repeated expectation,
    /// padding up to the minimum size and flagging elements past the maximum.
    fn evaluate_repeat(&mut self, repeat: &Repeat, actual: &Value) -> Result<DiffTree, DiffError> {
        let Value::Seq(items) = actual else {
            return Err(DiffError::NotASequence {
                found: actual.tag(),
            });
        };

        let (min, max) = repeat.bounds();
        if let Some(max) = max
            && min > max
        {
            return Err(DiffError::InvalidSizeBounds { min, max });
        }

        let len = items.len();
        let checked = len.max(min).min(max.unwrap_or(usize::MAX));
        trace!(len, min, ?max, checked, "repeat");

        let element = Expected::Expectation(repeat.element());
        let mut children = Vec::with_capacity(len.max(checked));
        for item in items.iter().take(checked) {
            children.push(Child {
                key: None,
                paired: true,
                node: self.compare(element, item)?,
            });
        }
        for _ in len..checked {
            children.push(Child {
                key: None,
                paired: false,
                node: DiffTree::missing(element.to_string()),
            });
        }
        if !self.hides_unpaired_additions() {
            for item in items.iter().skip(checked) {
                children.push(Child {
                    key: None,
                    paired: false,
                    node: DiffTree::additional(item.to_string()),
                });
            }
        }

        Ok(DiffTree::nested(Shape::Sequence, children))
    }
}
