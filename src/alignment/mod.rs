//! ## Optimal pairwise alignment of sequences.
//!
//! Three variants are provided through [`PairwiseAligner`], each selected by an
//! [`AlignmentMode`]:
//!
//! - [Needleman-Wunsch]: global alignment of both sequences end to end.
//! - [Smith-Waterman]: local alignment of the best scoring pair of
//!   subsequences.
//! - Overlap: alignment without penalties for leading or trailing gaps, for
//!   overlapping or contained sequences.
//!
//! ### Gap Costs
//!
//! With linear gaps, every gap position costs the gap open cost. With affine
//! gaps, a run of $k$ gap positions costs $v + u(k-1)$, where $v$ is the gap
//! open cost and $u$ is the gap extension cost. Affine alignment keeps three
//! score layers per cell following Gotoh: one for alignments ending in a match
//! or mismatch, and one for each direction of gap.
//!
//! ### Co-optimal Alignments
//!
//! Every traceback pointer achieving the optimum is recorded, and all optimal
//! paths are returned, explored diagonal first, then up, then left. Local
//! alignment starts from every cell holding the maximal score, and overlap
//! alignment from every maximal cell of the last row or column. A pair of
//! aligned sequences found at more than one position is reported once, at the
//! position discovered first.
//!
//! ### Usage Note
//!
//! 1. Build [`Sequence`] values over an [`Alphabet`] such as [`DNA`].
//! 2. Choose a [`SimilarityMatrix`], for example a [`DiagonalMatrix`] or a
//!    [`WeightMatrix`].
//! 3. Configure an aligner with the matrix and gap costs, then call
//!    [`align_simple`] (linear gaps) or [`align`] (affine gaps).
//!
//! ```
//! # use pairalign::prelude::*;
//! let matrix = DiagonalMatrix::new(1, -1, MoleculeType::Dna);
//! let aligner = PairwiseAligner::needleman_wunsch()
//!     .with_similarity_matrix(&matrix)
//!     .with_gap_open_cost(-2);
//!
//! let first = Sequence::with_id("a", &DNA, b"AC").unwrap();
//! let second = Sequence::with_id("b", &DNA, b"AGC").unwrap();
//! let result = aligner.align_simple(&first, &second).unwrap();
//!
//! assert_eq!(result.score(), Some(0));
//! assert_eq!(result.len(), 1);
//! assert_eq!(result.aligned_sequences()[0].first, b"A-C");
//! assert_eq!(result.aligned_sequences()[0].second, b"AGC");
//! ```
//!
//! [Needleman-Wunsch]: https://en.wikipedia.org/wiki/Needleman%E2%80%93Wunsch_algorithm
//! [Smith-Waterman]: https://en.wikipedia.org/wiki/Smith%E2%80%93Waterman_algorithm
//! [`Sequence`]: crate::data::sequence::Sequence
//! [`Alphabet`]: crate::data::alphabet::Alphabet
//! [`DNA`]: crate::data::alphabet::DNA
//! [`SimilarityMatrix`]: crate::data::matrices::SimilarityMatrix
//! [`DiagonalMatrix`]: crate::data::matrices::DiagonalMatrix
//! [`WeightMatrix`]: crate::data::matrices::WeightMatrix
//! [`align_simple`]: PairwiseAligner::align_simple
//! [`align`]: PairwiseAligner::align

mod aligner;
mod errors;
mod matrix;
mod mode;
mod scoring;
mod traceback;
mod types;

pub use aligner::*;
pub use errors::*;
pub use matrix::FillStrategy;
pub use mode::AlignmentMode;
pub use scoring::{GapCosts, GapModel};
pub use types::*;

#[cfg(test)]
mod test;
