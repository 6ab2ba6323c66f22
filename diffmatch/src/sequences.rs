//! Sequence alignment by longest common subsequence.
//!
//! The aligner fills an `(n + 1) × (m + 1)` table of suffix LCS lengths and
//! walks it forward, so among all optimal alignments it picks the one that
//! retains the earliest pairs. Time and memory are O(n·m), and the equality
//! callback runs once per pair.

/// One step of an alignment between an expected and an actual sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// `expected[i]` and `actual[j]` are equal and kept.
    Retain(usize, usize),
    /// `expected[i]` has no counterpart.
    Delete(usize),
    /// `actual[j]` has no counterpart.
    Insert(usize),
}

/// A reconciled alignment step, after pairing deletions with insertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The pair was equal.
    Same(usize, usize),
    /// A deletion and an insertion in the same gap, diffed against each other.
    Changed(usize, usize),
    /// An expected element with nothing left to pair with.
    Missing(usize),
    /// An actual element with nothing left to pair with.
    Additional(usize),
}

/// Align `expected_len` elements against `actual_len` elements.
///
/// `equal(i, j)` decides whether `expected[i]` and `actual[j]` match; its
/// first error aborts the alignment.
pub fn align<E>(
    expected_len: usize,
    actual_len: usize,
    mut equal: impl FnMut(usize, usize) -> Result<bool, E>,
) -> Result<Vec<Edit>, E> {
    let (n, m) = (expected_len, actual_len);

    let mut eq = vec![false; n * m];
    for i in 0..n {
        for j in 0..m {
            eq[i * m + j] = equal(i, j)?;
        }
    }

    // lcs[i][j] = LCS length of expected[i..] and actual[j..]
    let width = m + 1;
    let mut lcs = vec![0usize; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i * width + j] = if eq[i * m + j] {
                lcs[(i + 1) * width + j + 1] + 1
            } else {
                lcs[(i + 1) * width + j].max(lcs[i * width + j + 1])
            };
        }
    }

    let mut edits = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if eq[i * m + j] {
            edits.push(Edit::Retain(i, j));
            i += 1;
            j += 1;
        } else if lcs[(i + 1) * width + j] >= lcs[i * width + j + 1] {
            edits.push(Edit::Delete(i));
            i += 1;
        } else {
            edits.push(Edit::Insert(j));
            j += 1;
        }
    }
    edits.extend((i..n).map(Edit::Delete));
    edits.extend((j..m).map(Edit::Insert));

    trace!(
        expected = n,
        actual = m,
        common = lcs[0],
        "aligned sequences"
    );
    Ok(edits)
}

/// Pair the deletions and insertions of each gap between retained elements.
///
/// Within a gap, the k-th deletion is paired with the k-th insertion; the
/// pairs come first, then unpaired deletions, then unpaired insertions.
pub fn pair_changes(edits: &[Edit]) -> Vec<Step> {
    let mut steps = Vec::with_capacity(edits.len());
    let mut deleted = Vec::new();
    let mut inserted = Vec::new();

    let flush = |steps: &mut Vec<Step>, deleted: &mut Vec<usize>, inserted: &mut Vec<usize>| {
        let paired = deleted.len().min(inserted.len());
        steps.extend(
            deleted
                .iter()
                .zip(inserted.iter())
                .map(|(&i, &j)| Step::Changed(i, j)),
        );
        steps.extend(deleted[paired..].iter().map(|&i| Step::Missing(i)));
        steps.extend(inserted[paired..].iter().map(|&j| Step::Additional(j)));
        deleted.clear();
        inserted.clear();
    };

    for edit in edits {
        match *edit {
            Edit::Retain(i, j) => {
                flush(&mut steps, &mut deleted, &mut inserted);
                steps.push(Step::Same(i, j));
            }
            Edit::Delete(i) => deleted.push(i),
            Edit::Insert(j) => inserted.push(j),
        }
    }
    flush(&mut steps, &mut deleted, &mut inserted);
    steps
}
