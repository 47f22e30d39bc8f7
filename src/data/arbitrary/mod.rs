//! A module providing implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for the alignment configuration types, as well as wrapper types to provide
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! implementations with stronger assumptions.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::prelude::*;
use arbitrary::{Arbitrary, Error, Result, Unstructured};

macro_rules! impl_deref {
    ($wrapper:ty, $inner:ty $(, $($generics:tt)*)?) => {
        impl$($($generics)*)? ::std::ops::Deref for $wrapper {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl$($($generics)*)? ::std::ops::DerefMut for $wrapper {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}

impl<'a> Arbitrary<'a> for AlignmentMode {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(*u.choose(&[AlignmentMode::Global, AlignmentMode::Local, AlignmentMode::Overlap])?)
    }
}

/// Gap costs are kept non-positive and small enough that no score can
/// overflow for sequences of reasonable length. Linear and affine costs are
/// both generated.
impl<'a> Arbitrary<'a> for GapCosts {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let open = u.int_in_range(-20..=0)?;
        Ok(if bool::arbitrary(u)? {
            GapCosts::affine(open, u.int_in_range(-20..=0)?)
        } else {
            GapCosts::linear(open)
        })
    }
}

/// A wrapper around a [`Sequence`] over [`DNA`] such that the implementation
/// of [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// only generates between 1 and `MAX` unambiguous bases, in mixed case.
#[derive(Debug, Clone)]
pub struct DnaSequence<const MAX: usize>(pub Sequence<'static>);

impl_deref! {DnaSequence<MAX>, Sequence<'static>, <const MAX: usize>}

impl<'a, const MAX: usize> Arbitrary<'a> for DnaSequence<MAX> {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        const ALPHA: &[u8] = b"ACGTacgt";
        let len = u.int_in_range(1..=MAX.max(1))?;
        let mut bytes = Vec::with_capacity(len);
        for _ in 0..len {
            bytes.push(*u.choose(ALPHA)?);
        }
        Sequence::new(&DNA, bytes)
            .map(DnaSequence)
            .map_err(|_| Error::IncorrectFormat)
    }
}

/// Everything needed to run one DNA alignment: the mode, the gap costs, a
/// diagonal match/mismatch pair, and two sequences of at most `MAX` bases.
#[derive(Debug, Clone)]
pub struct DnaAlignmentCase<const MAX: usize> {
    pub mode:   AlignmentMode,
    pub gaps:   GapCosts,
    pub matrix: DiagonalMatrix,
    pub first:  DnaSequence<MAX>,
    pub second: DnaSequence<MAX>,
    pub earth:  bool,
}

impl<'a, const MAX: usize> Arbitrary<'a> for DnaAlignmentCase<MAX> {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(DnaAlignmentCase {
            mode:   AlignmentMode::arbitrary(u)?,
            gaps:   GapCosts::arbitrary(u)?,
            matrix: DiagonalMatrix::new(u.int_in_range(0..=10)?, u.int_in_range(-10..=0)?, MoleculeType::Dna),
            first:  DnaSequence::arbitrary(u)?,
            second: DnaSequence::arbitrary(u)?,
            earth:  bool::arbitrary(u)?,
        })
    }
}

impl<const MAX: usize> DnaAlignmentCase<MAX> {
    /// Aligns the two sequences with the generated configuration.
    ///
    /// ## Errors
    ///
    /// Alignment of generated cases should not fail; any error is returned
    /// as-is so that a fuzz target can report it.
    pub fn align(&self) -> std::result::Result<PairwiseSequenceAlignment<'static>, AlignmentError> {
        let aligner = PairwiseAligner::new(self.mode).with_earth_fill(self.earth);
        match self.gaps.extension {
            Some(extension) => aligner.align_with(&self.matrix, self.gaps.open, extension, &self.first, &self.second),
            None => aligner.align_simple_with(&self.matrix, self.gaps.open, &self.first, &self.second),
        }
    }
}
