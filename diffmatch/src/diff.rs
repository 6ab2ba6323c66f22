//! Structural comparison of an expectation against an actual value.

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};

use diffmatch_core::{
    Child, DiffError, DiffTree, Expectation, Key, MatchKind, Options, Shape, SharedValue,
    TextChunk, Value,
};
use indexmap::IndexMap;

use crate::sequences::{self, Step};

/// The expected side of a comparison: a full expectation, or a plain value
/// compared literally.
#[derive(Debug, Clone, Copy)]
pub enum Expected<'a> {
    /// An expectation, which may contain matchers.
    Expectation(&'a Expectation),
    /// A literal value.
    Value(&'a Value),
}

impl<'a> From<&'a Expectation> for Expected<'a> {
    fn from(value: &'a Expectation) -> Self {
        Expected::Expectation(value)
    }
}

impl<'a> From<&'a Value> for Expected<'a> {
    fn from(value: &'a Value) -> Self {
        Expected::Value(value)
    }
}

impl Display for Expected<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Expectation(expectation) => write!(f, "{expectation}"),
            Expected::Value(value) => write!(f, "{value}"),
        }
    }
}

/// Shared handles entered along the current path, one stack per side.
#[derive(Debug, Default)]
pub(crate) struct CycleGuard {
    expected: Vec<usize>,
    actual: Vec<usize>,
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Expected,
    Actual,
}

impl CycleGuard {
    fn stack(&mut self, side: Side) -> &mut Vec<usize> {
        match side {
            Side::Expected => &mut self.expected,
            Side::Actual => &mut self.actual,
        }
    }

    /// Enter a shared handle, cloning its target out of the lock.
    fn enter(&mut self, side: Side, shared: &SharedValue) -> Result<Value, DiffError> {
        let id = shared.id();
        let stack = self.stack(side);
        if stack.contains(&id) {
            debug!(?side, id, depth = stack.len(), "shared value re-entered");
            return Err(DiffError::CyclicStructure);
        }
        stack.push(id);
        Ok(shared.read().clone())
    }

    fn leave(&mut self, side: Side) {
        self.stack(side).pop();
    }
}

/// Walks an expectation and an actual value together and builds the diff tree.
pub(crate) struct Differ<'o, 'g> {
    pub(crate) options: &'o Options,
    pub(crate) guard: &'g mut CycleGuard,
}

impl<'o, 'g> Differ<'o, 'g> {
    pub(crate) fn new(options: &'o Options, guard: &'g mut CycleGuard) -> Self {
        Self { options, guard }
    }

    /// Compare one expected node against one actual node.
    pub(crate) fn compare(
        &mut self,
        expected: Expected<'_>,
        actual: &Value,
    ) -> Result<DiffTree, DiffError> {
        if let Value::Shared(shared) = actual {
            let target = self.guard.enter(Side::Actual, shared)?;
            let result = self.compare(expected, &target);
            self.guard.leave(Side::Actual);
            return result;
        }

        match expected {
            Expected::Value(Value::Shared(shared)) => {
                let target = self.guard.enter(Side::Expected, shared)?;
                let result = self.compare(Expected::Value(&target), actual);
                self.guard.leave(Side::Expected);
                result
            }
            Expected::Value(value) => self.compare_value(value, actual),
            Expected::Expectation(Expectation::Literal(value)) => {
                self.compare(Expected::Value(value), actual)
            }
            Expected::Expectation(Expectation::Seq(items)) => match actual {
                Value::Seq(elements) => {
                    let items: Vec<_> = items.iter().map(Expected::Expectation).collect();
                    self.compare_sequences(&items, elements)
                }
                _ => Ok(self.mismatch(expected, actual)),
            },
            Expected::Expectation(Expectation::Map(entries)) => match actual {
                Value::Map(found) => {
                    let entries: Vec<_> =
                        entries.iter().map(|(k, e)| (k, Expected::Expectation(e))).collect();
                    self.compare_mappings(&entries, found)
                }
                _ => Ok(self.mismatch(expected, actual)),
            },
            Expected::Expectation(matcher) => self.evaluate(matcher, actual),
        }
    }

    fn compare_value(&mut self, expected: &Value, actual: &Value) -> Result<DiffTree, DiffError> {
        match (expected, actual) {
            (Value::Seq(items), Value::Seq(elements)) => {
                let items: Vec<_> = items.iter().map(Expected::Value).collect();
                self.compare_sequences(&items, elements)
            }
            (Value::Map(entries), Value::Map(found)) => {
                let entries: Vec<_> =
                    entries.iter().map(|(k, v)| (k, Expected::Value(v))).collect();
                self.compare_mappings(&entries, found)
            }
            (Value::Tagged(expected_tag, inner), Value::Tagged(actual_tag, found))
                if expected_tag == actual_tag =>
            {
                self.compare(Expected::Value(inner), found)
            }
            (Value::Text(e), Value::Text(a))
                if self.options.char_diff_enabled()
                    && e != a
                    && e.chars().nth(1).is_some()
                    && a.chars().nth(1).is_some() =>
            {
                Ok(compare_chars(e, a))
            }
            _ if expected.scalar_eq(actual) => {
                Ok(DiffTree::matched(MatchKind::Value, actual.to_string()))
            }
            _ => Ok(self.mismatch(Expected::Value(expected), actual)),
        }
    }

    pub(crate) fn mismatch(&self, expected: Expected<'_>, actual: &Value) -> DiffTree {
        DiffTree::mismatch(expected.to_string(), actual.to_string())
    }

    /// Unpaired additions in sequences are hidden (and not counted) when
    /// additional values are ignored or the report is quiet.
    pub(crate) fn hides_unpaired_additions(&self) -> bool {
        self.options.ignores_additional() || self.options.is_quiet()
    }

    fn compare_mappings(
        &mut self,
        expected: &[(&Key, Expected<'_>)],
        actual: &IndexMap<Key, Value>,
    ) -> Result<DiffTree, DiffError> {
        let mut children = Vec::with_capacity(expected.len().max(actual.len()));

        for &(key, item) in expected {
            match actual.get(key) {
                Some(found) => children.push(Child {
                    key: Some(key.clone()),
                    paired: true,
                    node: self.compare(item, found)?,
                }),
                None if self.options.is_optional(key) => {
                    trace!(%key, "optional key absent");
                }
                None => children.push(Child {
                    key: Some(key.clone()),
                    paired: false,
                    node: DiffTree::missing(item.to_string()),
                }),
            }
        }

        if !self.options.ignores_additional() {
            let expected_keys: HashSet<&Key> = expected.iter().map(|&(key, _)| key).collect();
            for (key, found) in actual {
                if expected_keys.contains(key) || self.options.is_optional(key) {
                    continue;
                }
                children.push(Child {
                    key: Some(key.clone()),
                    paired: false,
                    node: DiffTree::additional(found.to_string()),
                });
            }
        }

        Ok(DiffTree::nested(Shape::Mapping, children))
    }

    fn compare_sequences(
        &mut self,
        expected: &[Expected<'_>],
        actual: &[Value],
    ) -> Result<DiffTree, DiffError> {
        // Trees of equal pairs, kept so retained elements are not diffed twice.
        let mut matched: HashMap<(usize, usize), DiffTree> = HashMap::new();
        let edits = sequences::align(expected.len(), actual.len(), |i, j| {
            // A trial pair that can never match is just unequal. The error
            // resurfaces if the final alignment still pairs the two.
            let tree = match self.compare(expected[i], &actual[j]) {
                Ok(tree) => tree,
                Err(DiffError::NotASequence { .. }) => {
                    trace!(i, j, "trial pair is not a sequence");
                    return Ok(false);
                }
                Err(err) => return Err(err),
            };
            let clean = tree.is_clean();
            if clean {
                matched.insert((i, j), tree);
            }
            Ok(clean)
        })?;

        let mut children = Vec::with_capacity(edits.len());
        for step in sequences::pair_changes(&edits) {
            let (node, paired) = match step {
                Step::Same(i, j) => match matched.remove(&(i, j)) {
                    Some(tree) => (tree, true),
                    None => (self.compare(expected[i], &actual[j])?, true),
                },
                Step::Changed(i, j) => (self.compare(expected[i], &actual[j])?, true),
                Step::Missing(i) => (DiffTree::missing(expected[i].to_string()), false),
                Step::Additional(j) => {
                    if self.hides_unpaired_additions() {
                        continue;
                    }
                    (DiffTree::additional(actual[j].to_string()), false)
                }
            };
            children.push(Child {
                key: None,
                paired,
                node,
            });
        }

        Ok(DiffTree::nested(Shape::Sequence, children))
    }
}

/// Character-level diff of two texts. Within each gap between common runs,
/// the missing run comes before the additional run.
fn compare_chars(expected: &str, actual: &str) -> DiffTree {
    let e: Vec<char> = expected.chars().collect();
    let a: Vec<char> = actual.chars().collect();
    let Ok(edits) =
        sequences::align::<core::convert::Infallible>(e.len(), a.len(), |i, j| Ok(e[i] == a[j]));

    let mut chunks = Vec::new();
    let mut missing = String::new();
    let mut additional = String::new();

    let flush = |chunks: &mut Vec<TextChunk>, missing: &mut String, additional: &mut String| {
        if !missing.is_empty() {
            chunks.push(TextChunk::Missing(std::mem::take(missing)));
        }
        if !additional.is_empty() {
            chunks.push(TextChunk::Additional(std::mem::take(additional)));
        }
    };

    for edit in edits {
        match edit {
            sequences::Edit::Retain(i, _) => {
                flush(&mut chunks, &mut missing, &mut additional);
                match chunks.last_mut() {
                    Some(TextChunk::Same(run)) => run.push(e[i]),
                    _ => chunks.push(TextChunk::Same(e[i].to_string())),
                }
            }
            sequences::Edit::Delete(i) => missing.push(e[i]),
            sequences::Edit::Insert(j) => additional.push(a[j]),
        }
    }
    flush(&mut chunks, &mut missing, &mut additional);

    DiffTree::text(chunks)
}
