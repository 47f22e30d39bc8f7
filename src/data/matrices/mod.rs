//! ## Similarity Matrices for Alignment
//!
//! A similarity matrix assigns a score to every ordered pair of symbols drawn
//! from an [`Alphabet`]. Positive scores reward aligning the pair, and negative
//! scores penalize it. Two kinds are provided:
//!
//! - [`WeightMatrix`]: a dense table over an alphabet, built from fixed
//!   match/mismatch scores, an explicit table, or a closure.
//! - [`DiagonalMatrix`]: a constant score on the diagonal and another off of
//!   it, for a given [`MoleculeType`].
//!
//! Custom scoring schemes implement [`SimilarityMatrix`] directly.

use crate::data::alphabet::{Alphabet, DNA, PROTEIN, RNA};
use std::fmt::Display;

/// Scores pairs of symbols for alignment.
///
/// Implementations must be [`Sync`] so that one matrix can be shared by
/// alignments running on several threads.
pub trait SimilarityMatrix: Sync {
    /// The score for aligning `first` (from the first sequence) against
    /// `second` (from the second sequence).
    fn score(&self, first: u8, second: u8) -> i32;

    /// A human-readable name for the matrix.
    fn name(&self) -> String;

    /// Whether the matrix defines scores for every symbol of `alphabet`.
    fn supports(&self, alphabet: &Alphabet) -> bool;
}

impl<T: SimilarityMatrix + ?Sized> SimilarityMatrix for &T {
    #[inline]
    fn score(&self, first: u8, second: u8) -> i32 {
        (**self).score(first, second)
    }

    #[inline]
    fn name(&self) -> String {
        (**self).name()
    }

    #[inline]
    fn supports(&self, alphabet: &Alphabet) -> bool {
        (**self).supports(alphabet)
    }
}

/// The kind of molecule a [`DiagonalMatrix`] scores.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum MoleculeType {
    Dna,
    Rna,
    Protein,
}

impl MoleculeType {
    /// The alphabet associated with the molecule.
    #[inline]
    #[must_use]
    pub const fn alphabet(self) -> &'static Alphabet {
        match self {
            MoleculeType::Dna => &DNA,
            MoleculeType::Rna => &RNA,
            MoleculeType::Protein => &PROTEIN,
        }
    }
}

impl Display for MoleculeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.alphabet().name())
    }
}

/// A similarity matrix scoring identical symbols with `matching` and all
/// other pairs with `mismatch`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct DiagonalMatrix {
    pub matching: i32,
    pub mismatch: i32,
    pub molecule: MoleculeType,
}

impl DiagonalMatrix {
    #[inline]
    #[must_use]
    pub const fn new(matching: i32, mismatch: i32, molecule: MoleculeType) -> Self {
        DiagonalMatrix {
            matching,
            mismatch,
            molecule,
        }
    }
}

impl Default for DiagonalMatrix {
    /// A protein matrix scoring matches with 2 and mismatches with -2.
    fn default() -> Self {
        DiagonalMatrix::new(2, -2, MoleculeType::Protein)
    }
}

impl SimilarityMatrix for DiagonalMatrix {
    #[inline]
    fn score(&self, first: u8, second: u8) -> i32 {
        let alphabet = self.molecule.alphabet();
        if alphabet.to_index(first) == alphabet.to_index(second) {
            self.matching
        } else {
            self.mismatch
        }
    }

    fn name(&self) -> String {
        format!("Diagonal({}, {}, {})", self.matching, self.mismatch, self.molecule)
    }

    #[inline]
    fn supports(&self, alphabet: &Alphabet) -> bool {
        self.molecule.alphabet().is_compatible(alphabet)
    }
}

/// A dense weight matrix representing the scores for matches and mismatches
/// over the `S` symbols of an [`Alphabet`].
///
/// Rows are indexed by the symbol of the first sequence, and columns by the
/// symbol of the second. Bytes outside of the alphabet are scored as the
/// alphabet's ambiguity symbol.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct WeightMatrix<'a, const S: usize> {
    pub weights:  [[i32; S]; S],
    pub alphabet: &'a Alphabet,
}

impl<'a, const S: usize> WeightMatrix<'a, S> {
    /// Creates a new [`WeightMatrix`] for `alphabet`, with a fixed `matching`
    /// score and `mismatch` score, and an optionally ignored symbol. A pair
    /// where either symbol is the ignored one always scores 0.
    ///
    /// If working with DNA, consider using [`new_dna_matrix`]. For more
    /// flexibility, use [`new_custom`].
    ///
    /// [`new_dna_matrix`]: WeightMatrix::new_dna_matrix
    /// [`new_custom`]: WeightMatrix::new_custom
    ///
    /// ## Panics
    /// Panics if `S` differs from the size of the alphabet, or if an invalid
    /// byte was specified for the `ignoring` field.
    #[must_use]
    pub const fn new(alphabet: &'a Alphabet, matching: i32, mismatch: i32, ignoring: Option<u8>) -> Self {
        assert!(alphabet.len() == S, "The matrix size must match the alphabet size.");
        let mut weights = [[0i32; S]; S];

        let skip_index = match ignoring {
            Some(ignoring) => {
                if alphabet.contains(ignoring) {
                    Some(alphabet.to_index(ignoring))
                } else {
                    panic!("An invalid byte was specified for the ignoring field.")
                }
            }
            None => None,
        };

        let mut i = 0;
        while i < S {
            let mut j = 0;
            while j < S {
                if let Some(k) = skip_index
                    && (k == i || k == j)
                {
                    j += 1;
                    continue;
                }

                weights[i][j] = if i == j { matching } else { mismatch };
                j += 1;
            }
            i += 1;
        }

        WeightMatrix { weights, alphabet }
    }

    /// Creates a new [`WeightMatrix`] for `alphabet` from an explicit table,
    /// where the rows are indexed by the first sequence's symbol and the
    /// columns by the second's.
    ///
    /// ## Panics
    /// Panics if `S` differs from the size of the alphabet.
    #[must_use]
    pub const fn new_custom(alphabet: &'a Alphabet, weights: [[i32; S]; S]) -> Self {
        assert!(alphabet.len() == S, "The matrix size must match the alphabet size.");
        WeightMatrix { weights, alphabet }
    }

    /// Creates a new [`WeightMatrix`] from a closure, which receives the first
    /// sequence's symbol followed by the second's.
    ///
    /// ## Panics
    /// Panics if `S` differs from the size of the alphabet.
    pub fn new_from_fn<F>(alphabet: &'a Alphabet, weight_fn: F) -> Self
    where
        F: Fn(u8, u8) -> i32, {
        let mut out = WeightMatrix::new(alphabet, 0, 0, None);
        for (i, &first) in alphabet.symbols().iter().enumerate() {
            for (j, &second) in alphabet.symbols().iter().enumerate() {
                out.weights[i][j] = weight_fn(first, second);
            }
        }
        out
    }

    /// For a given pair of symbols, retrieves the weight stored in the matrix.
    #[inline]
    #[must_use]
    pub const fn get_weight(&self, first: u8, second: u8) -> i32 {
        self.weights[self.alphabet.to_index(first)][self.alphabet.to_index(second)]
    }
}

impl WeightMatrix<'_, 5> {
    /// Creates a new DNA [`WeightMatrix`] with a fixed `matching` score,
    /// `mismatch` score, and optionally ignoring a base. A pair of bases where
    /// either is the ignored base will always have a score of 0.
    #[must_use]
    pub const fn new_dna_matrix(matching: i32, mismatch: i32, ignoring: Option<u8>) -> Self {
        WeightMatrix::new(&DNA, matching, mismatch, ignoring)
    }
}

impl<const S: usize> SimilarityMatrix for WeightMatrix<'_, S> {
    #[inline]
    fn score(&self, first: u8, second: u8) -> i32 {
        self.get_weight(first, second)
    }

    fn name(&self) -> String {
        format!("Weight({})", self.alphabet)
    }

    #[inline]
    fn supports(&self, alphabet: &Alphabet) -> bool {
        self.alphabet.is_compatible(alphabet)
    }
}

impl<const S: usize> Display for WeightMatrix<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut col_widths = [0; S];
        for row in &self.weights {
            for (width, val) in col_widths.iter_mut().zip(row) {
                *width = (*width).max(val.to_string().len());
            }
        }
        for width in col_widths.iter_mut().skip(1) {
            *width += 1;
        }

        let residues = self.alphabet.symbols();

        write!(f, "   ")?;
        for (residue, width) in residues.iter().zip(&col_widths) {
            write!(f, "{residue:>width$}", residue = *residue as char)?;
        }
        writeln!(f)?;

        for (row, residue) in self.weights.iter().zip(residues) {
            write!(f, "{residue}  ", residue = *residue as char)?;
            for (val, width) in row.iter().zip(&col_widths) {
                write!(f, "{val:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
