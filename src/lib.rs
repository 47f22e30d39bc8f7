#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]

/// Pairwise alignment: global, local, and overlap.
pub mod alignment;
/// Alphabets, sequences, similarity matrices, and alignment records.
pub mod data;

/// Generate sequences and other data.
#[cfg(feature = "rand")]
pub(crate) mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::alignment::{
        AlignmentError, AlignmentMode, FillStrategy, GapCosts, PairwiseAlignedSequence, PairwiseAligner,
        PairwiseSequenceAlignment,
    };
    pub use crate::data::{
        alphabet::{Alphabet, DNA, GAP, PROTEIN, RNA},
        matrices::{DiagonalMatrix, MoleculeType, SimilarityMatrix, WeightMatrix},
        records::{PairwiseRecordReader, PairwiseRecordWriter},
        sequence::Sequence,
    };
    #[cfg(feature = "rand")]
    pub use crate::generate::rand_sequence;
}
