//! ## Data types for alignment: alphabets, sequences, scoring, and records.
//!
//! Every [`Sequence`] is tied to an [`Alphabet`], which fixes the symbols it
//! may contain, the ambiguity symbol used when two aligned symbols disagree,
//! and whether lowercase input is accepted. Symbols are stored in their
//! canonical (uppercase) form, and the gap symbol `-` is never part of an
//! alphabet.
//!
//! Scoring is supplied through the [`SimilarityMatrix`] trait. Two
//! implementations are provided: [`DiagonalMatrix`] for simple match/mismatch
//! scoring, and [`WeightMatrix`] for a full table of weights over an
//! alphabet.
//!
//! ```
//! # use pairalign::prelude::*;
//! let seq = Sequence::with_id("read", &DNA, b"acgtn").unwrap();
//! assert_eq!(seq.as_bytes(), b"ACGTN");
//!
//! let matrix = DiagonalMatrix::new(1, -1, MoleculeType::Dna);
//! assert_eq!(matrix.score(b'A', b'A'), 1);
//! assert_eq!(matrix.score(b'A', b'C'), -1);
//! ```
//!
//! ## IO Errors
//!
//! For working with files and record types, *pairalign* uses
//! [`std::io::Error`], allowing system IO errors to be propagated and
//! format-specific error messages to be represented with
//! [`ErrorKind::InvalidData`]. The file path is added to the error message
//! when a file cannot be opened or created, and the original error remains
//! accessible using [`Error::source`]. Each error type also reports a
//! process exit code through [`GetCode`].
//!
//! [`Sequence`]: sequence::Sequence
//! [`Alphabet`]: alphabet::Alphabet
//! [`SimilarityMatrix`]: matrices::SimilarityMatrix
//! [`DiagonalMatrix`]: matrices::DiagonalMatrix
//! [`WeightMatrix`]: matrices::WeightMatrix
//! [`ErrorKind::InvalidData`]: std::io::ErrorKind::InvalidData
//! [`Error::source`]: std::error::Error::source
//! [`GetCode`]: err::GetCode

pub mod alphabet;
#[cfg(feature = "fuzzing")]
pub mod arbitrary;
/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
pub mod matrices;
/// A module for reading and writing alignment records.
pub mod records;
pub mod sequence;
