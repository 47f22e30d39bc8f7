use crate::{
    alignment::traceback::TracedPath,
    data::{
        alphabet::{Alphabet, GAP},
        sequence::Sequence,
    },
};
use std::{collections::BTreeMap, fmt, ops::Range};

// For `PairwiseAlignedSequence`, both ranges are 0-based and end-exclusive.
// For a global alignment, the ranges each encompass the full length of the
// sequences. For local and overlap alignment, they cover only the aligned
// region.

/// One optimal alignment of two sequences: the gapped sequences, their
/// consensus, the score, and where the alignment lies in each input.
#[non_exhaustive]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PairwiseAlignedSequence {
    /// The score of the alignment
    pub score:         i32,
    /// The aligned region of the first sequence, with gaps inserted
    pub first:         Vec<u8>,
    /// The aligned region of the second sequence, with gaps inserted
    pub second:        Vec<u8>,
    /// Column-wise consensus of the two aligned sequences
    pub consensus:     Vec<u8>,
    /// Number of leading positions to shift the first aligned sequence by so
    /// that the two aligned regions line up in their original coordinates
    pub first_offset:  usize,
    /// Number of leading positions to shift the second aligned sequence by
    pub second_offset: usize,
    /// The indices of the first sequence included in the alignment
    pub first_range:   Range<usize>,
    /// The indices of the second sequence included in the alignment
    pub second_range:  Range<usize>,
    /// The number of gaps inserted into the first and second aligned
    /// sequences, respectively
    pub insertions:    [usize; 2],
    /// Free-form annotations, such as a description of the aligner used
    pub metadata:      BTreeMap<String, String>,
}

impl PairwiseAlignedSequence {
    /// Builds the result for a traced path, deriving the consensus, offsets,
    /// ranges, and gap counts.
    pub(crate) fn from_path(path: TracedPath, score: i32, alphabet: &Alphabet) -> Self {
        let TracedPath {
            first,
            second,
            start: (first_start, second_start),
            end: (first_end, second_end),
        } = path;

        let consensus = make_consensus(&first, &second, alphabet);
        let insertions = [count_gaps(&first), count_gaps(&second)];

        PairwiseAlignedSequence {
            score,
            first,
            second,
            consensus,
            first_offset: second_start.saturating_sub(first_start),
            second_offset: first_start.saturating_sub(second_start),
            first_range: first_start..first_end,
            second_range: second_start..second_end,
            insertions,
            metadata: BTreeMap::new(),
        }
    }

    /// The number of alignment columns.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.first.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// The number of columns where both sequences hold the same symbol.
    #[must_use]
    pub fn identities(&self) -> usize {
        self.first
            .iter()
            .zip(&self.second)
            .filter(|(a, b)| a == b && **a != GAP)
            .count()
    }
}

impl fmt::Display for PairwiseAlignedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let markers: String = self
            .first
            .iter()
            .zip(&self.second)
            .map(|(a, b)| if a == b && *a != GAP { '|' } else { ' ' })
            .collect();
        writeln!(f, "score {}", self.score)?;
        writeln!(f, "{}", String::from_utf8_lossy(&self.first))?;
        writeln!(f, "{markers}")?;
        writeln!(f, "{}", String::from_utf8_lossy(&self.second))
    }
}

/// Builds the column-wise consensus of two aligned sequences. Equal symbols
/// give that symbol, a symbol against a gap gives the symbol, and differing
/// symbols give the alphabet's ambiguity symbol.
///
/// ## Example
/// ```
/// # use pairalign::{alignment::make_consensus, prelude::*};
/// assert_eq!(make_consensus(b"AC-T", b"AGGT", &DNA), b"ANGT");
/// ```
#[must_use]
pub fn make_consensus(first: &[u8], second: &[u8], alphabet: &Alphabet) -> Vec<u8> {
    first
        .iter()
        .zip(second)
        .map(|(&a, &b)| match (a, b) {
            (GAP, other) | (other, GAP) => other,
            (a, b) if a == b => a,
            _ => alphabet.ambiguity(),
        })
        .collect()
}

#[inline]
fn count_gaps(aligned: &[u8]) -> usize {
    aligned.iter().filter(|&&b| b == GAP).count()
}

/// All co-optimal alignments of one pair of sequences, along with the
/// sequences themselves. Every aligned sequence shares the same score.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PairwiseSequenceAlignment<'a> {
    first_sequence:  Sequence<'a>,
    second_sequence: Sequence<'a>,
    aligned:         Vec<PairwiseAlignedSequence>,
}

impl<'a> PairwiseSequenceAlignment<'a> {
    pub(crate) fn new(first_sequence: Sequence<'a>, second_sequence: Sequence<'a>) -> Self {
        PairwiseSequenceAlignment {
            first_sequence,
            second_sequence,
            aligned: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, aligned: PairwiseAlignedSequence) {
        debug_assert!(self.aligned.first().is_none_or(|first| first.score == aligned.score));
        self.aligned.push(aligned);
    }

    #[inline]
    #[must_use]
    pub fn first_sequence(&self) -> &Sequence<'a> {
        &self.first_sequence
    }

    #[inline]
    #[must_use]
    pub fn second_sequence(&self) -> &Sequence<'a> {
        &self.second_sequence
    }

    /// The shared optimal score, or [`None`] if there are no alignments.
    #[inline]
    #[must_use]
    pub fn score(&self) -> Option<i32> {
        self.aligned.first().map(|aligned| aligned.score)
    }

    #[inline]
    #[must_use]
    pub fn aligned_sequences(&self) -> &[PairwiseAlignedSequence] {
        &self.aligned
    }

    /// The number of co-optimal alignments.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.aligned.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aligned.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, PairwiseAlignedSequence> {
        self.aligned.iter()
    }

    /// Mutable access to the aligned sequences, for attaching metadata.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, PairwiseAlignedSequence> {
        self.aligned.iter_mut()
    }
}

impl<'a> IntoIterator for PairwiseSequenceAlignment<'a> {
    type Item = PairwiseAlignedSequence;
    type IntoIter = std::vec::IntoIter<PairwiseAlignedSequence>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.aligned.into_iter()
    }
}

impl<'s> IntoIterator for &'s PairwiseSequenceAlignment<'_> {
    type Item = &'s PairwiseAlignedSequence;
    type IntoIter = std::slice::Iter<'s, PairwiseAlignedSequence>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.aligned.iter()
    }
}
