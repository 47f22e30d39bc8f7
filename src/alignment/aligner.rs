use crate::{
    alignment::{
        AlignmentError, AlignmentMode, ConfigurationError, FillStrategy, GapCosts, InputError, PairwiseAlignedSequence,
        PairwiseSequenceAlignment, Which,
        matrix::{DpMatrix, Kernel},
        scoring::ScoringModel,
        traceback::Traceback,
    },
    data::{
        matrices::{DiagonalMatrix, MoleculeType, SimilarityMatrix},
        sequence::Sequence,
    },
};
use rayon::prelude::*;
use std::fmt;

/// The similarity matrix installed by [`PairwiseAligner::with_default_scoring`].
pub static DEFAULT_SIMILARITY_MATRIX: DiagonalMatrix = DiagonalMatrix::new(2, -2, MoleculeType::Protein);
/// The gap open cost installed by [`PairwiseAligner::with_default_scoring`].
pub const DEFAULT_GAP_OPEN_COST: i32 = -8;
/// The gap extension cost installed by
/// [`PairwiseAligner::with_default_scoring`].
pub const DEFAULT_GAP_EXTENSION_COST: i32 = -1;

/// A configurable pairwise aligner for one [`AlignmentMode`].
///
/// The similarity matrix and gap costs are set with the `with_` methods, and
/// must be present before aligning. The `align_simple` entry points use linear
/// gaps (the open cost charged per gap position), while the `align` entry
/// points use affine gaps and also require an extension cost. The `_with`
/// variants take the scoring explicitly and ignore the configured scoring.
///
/// Every entry point returns all co-optimal alignments. Local and overlap
/// alignments without any positive scoring cell return no alignments.
///
/// ## Example
/// ```
/// # use pairalign::prelude::*;
/// let matrix = DiagonalMatrix::new(2, -1, MoleculeType::Dna);
/// let aligner = PairwiseAligner::smith_waterman()
///     .with_similarity_matrix(&matrix)
///     .with_gap_open_cost(-1);
///
/// let first = Sequence::new(&DNA, b"AAGC").unwrap();
/// let second = Sequence::new(&DNA, b"AGC").unwrap();
/// let result = aligner.align_simple(&first, &second).unwrap();
///
/// assert_eq!(result.score(), Some(6));
/// assert_eq!(result.aligned_sequences()[0].first, b"AGC");
/// ```
#[derive(Clone, Copy)]
pub struct PairwiseAligner<'m> {
    mode:                      AlignmentMode,
    similarity_matrix:         Option<&'m dyn SimilarityMatrix>,
    gap_open_cost:             Option<i32>,
    gap_extension_cost:        Option<i32>,
    fill:                      FillStrategy,
    reject_positive_gap_costs: bool,
}

impl<'m> PairwiseAligner<'m> {
    /// An unconfigured aligner for `mode`.
    #[must_use]
    pub const fn new(mode: AlignmentMode) -> Self {
        PairwiseAligner {
            mode,
            similarity_matrix: None,
            gap_open_cost: None,
            gap_extension_cost: None,
            fill: FillStrategy::RowMajor,
            reject_positive_gap_costs: false,
        }
    }

    /// An unconfigured global (Needleman-Wunsch) aligner.
    #[must_use]
    pub const fn needleman_wunsch() -> Self {
        Self::new(AlignmentMode::Global)
    }

    /// An unconfigured local (Smith-Waterman) aligner.
    #[must_use]
    pub const fn smith_waterman() -> Self {
        Self::new(AlignmentMode::Local)
    }

    /// An unconfigured overlap aligner.
    #[must_use]
    pub const fn pairwise_overlap() -> Self {
        Self::new(AlignmentMode::Overlap)
    }

    #[must_use]
    pub fn with_similarity_matrix(mut self, matrix: &'m dyn SimilarityMatrix) -> Self {
        self.similarity_matrix = Some(matrix);
        self
    }

    #[must_use]
    pub const fn with_gap_open_cost(mut self, cost: i32) -> Self {
        self.gap_open_cost = Some(cost);
        self
    }

    #[must_use]
    pub const fn with_gap_extension_cost(mut self, cost: i32) -> Self {
        self.gap_extension_cost = Some(cost);
        self
    }

    /// Installs a protein [`DiagonalMatrix`] scoring 2 and -2, a gap open cost
    /// of -8, and a gap extension cost of -1.
    #[must_use]
    pub fn with_default_scoring(self) -> Self {
        self.with_similarity_matrix(&DEFAULT_SIMILARITY_MATRIX)
            .with_gap_open_cost(DEFAULT_GAP_OPEN_COST)
            .with_gap_extension_cost(DEFAULT_GAP_EXTENSION_COST)
    }

    /// Selects the parallel anti-diagonal fill ([`FillStrategy::Wavefront`])
    /// when `enabled`, or the row-major fill otherwise. Results are identical.
    #[must_use]
    pub const fn with_earth_fill(mut self, enabled: bool) -> Self {
        self.fill = if enabled {
            FillStrategy::Wavefront
        } else {
            FillStrategy::RowMajor
        };
        self
    }

    #[must_use]
    pub const fn with_fill_strategy(mut self, fill: FillStrategy) -> Self {
        self.fill = fill;
        self
    }

    /// When `reject` is set, positive gap costs fail with
    /// [`ConfigurationError::PositiveGapCost`] instead of only logging a
    /// warning.
    #[must_use]
    pub const fn with_positive_gap_costs_rejected(mut self, reject: bool) -> Self {
        self.reject_positive_gap_costs = reject;
        self
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> AlignmentMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.mode.name()
    }

    #[inline]
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.mode.description()
    }

    #[inline]
    #[must_use]
    pub fn similarity_matrix(&self) -> Option<&'m dyn SimilarityMatrix> {
        self.similarity_matrix
    }

    #[inline]
    #[must_use]
    pub const fn gap_open_cost(&self) -> Option<i32> {
        self.gap_open_cost
    }

    #[inline]
    #[must_use]
    pub const fn gap_extension_cost(&self) -> Option<i32> {
        self.gap_extension_cost
    }

    #[inline]
    #[must_use]
    pub const fn fill_strategy(&self) -> FillStrategy {
        self.fill
    }

    #[inline]
    #[must_use]
    pub const fn uses_earth_fill(&self) -> bool {
        matches!(self.fill, FillStrategy::Wavefront)
    }

    /// Aligns two sequences with linear gaps, using the configured similarity
    /// matrix and gap open cost.
    ///
    /// ## Errors
    /// Fails if the similarity matrix or gap open cost is missing, or if the
    /// sequences cannot be aligned (see [`InputError`]).
    pub fn align_simple<'a>(
        &self, first: &Sequence<'a>, second: &Sequence<'a>,
    ) -> Result<PairwiseSequenceAlignment<'a>, AlignmentError> {
        let (matrix, open) = self.configured_linear()?;
        self.run(matrix, GapCosts::linear(open), first, second)
    }

    /// Aligns two sequences with affine gaps, using the configured similarity
    /// matrix, gap open cost, and gap extension cost.
    ///
    /// ## Errors
    /// Fails if any part of the scoring is missing, or if the sequences cannot
    /// be aligned (see [`InputError`]).
    pub fn align<'a>(
        &self, first: &Sequence<'a>, second: &Sequence<'a>,
    ) -> Result<PairwiseSequenceAlignment<'a>, AlignmentError> {
        let (matrix, open) = self.configured_linear()?;
        let extension = self
            .gap_extension_cost
            .ok_or(ConfigurationError::MissingGapExtensionCost)?;
        self.run(matrix, GapCosts::affine(open, extension), first, second)
    }

    /// Aligns two sequences with linear gaps and the given scoring, ignoring
    /// the configured scoring.
    ///
    /// ## Errors
    /// Fails if the sequences cannot be aligned (see [`InputError`]).
    pub fn align_simple_with<'a>(
        &self, matrix: &dyn SimilarityMatrix, gap_open_cost: i32, first: &Sequence<'a>, second: &Sequence<'a>,
    ) -> Result<PairwiseSequenceAlignment<'a>, AlignmentError> {
        self.run(matrix, GapCosts::linear(gap_open_cost), first, second)
    }

    /// Aligns two sequences with affine gaps and the given scoring, ignoring
    /// the configured scoring.
    ///
    /// ## Errors
    /// Fails if the sequences cannot be aligned (see [`InputError`]).
    pub fn align_with<'a>(
        &self, matrix: &dyn SimilarityMatrix, gap_open_cost: i32, gap_extension_cost: i32, first: &Sequence<'a>,
        second: &Sequence<'a>,
    ) -> Result<PairwiseSequenceAlignment<'a>, AlignmentError> {
        self.run(matrix, GapCosts::affine(gap_open_cost, gap_extension_cost), first, second)
    }

    /// Like [`align_simple`], for a list which must hold exactly two sequences.
    ///
    /// ## Errors
    /// Fails with [`InputError::WrongSequenceCount`] for any other number of
    /// sequences, and otherwise as [`align_simple`].
    ///
    /// [`align_simple`]: PairwiseAligner::align_simple
    pub fn align_simple_list<'a>(
        &self, sequences: &[Sequence<'a>],
    ) -> Result<PairwiseSequenceAlignment<'a>, AlignmentError> {
        let [first, second] = as_pair(sequences)?;
        self.align_simple(first, second)
    }

    /// Like [`align`], for a list which must hold exactly two sequences.
    ///
    /// ## Errors
    /// Fails with [`InputError::WrongSequenceCount`] for any other number of
    /// sequences, and otherwise as [`align`].
    ///
    /// [`align`]: PairwiseAligner::align
    pub fn align_list<'a>(&self, sequences: &[Sequence<'a>]) -> Result<PairwiseSequenceAlignment<'a>, AlignmentError> {
        let [first, second] = as_pair(sequences)?;
        self.align(first, second)
    }

    /// Aligns many independent pairs in parallel, returning the results in
    /// input order. Affine gaps are used when a gap extension cost is
    /// configured, and linear gaps otherwise.
    ///
    /// ## Errors
    /// Fails if the scoring is missing, or if any pair fails to align.
    pub fn align_pairs<'a>(
        &self, pairs: &[(Sequence<'a>, Sequence<'a>)],
    ) -> Result<Vec<PairwiseSequenceAlignment<'a>>, AlignmentError> {
        let (matrix, open) = self.configured_linear()?;
        let gaps = GapCosts {
            open,
            extension: self.gap_extension_cost,
        };
        log::debug!("{} aligning {} pairs with {gaps}", self.name(), pairs.len());

        pairs
            .par_iter()
            .map(|(first, second)| self.run(matrix, gaps, first, second))
            .collect()
    }

    fn configured_linear(&self) -> Result<(&'m dyn SimilarityMatrix, i32), ConfigurationError> {
        let matrix = self
            .similarity_matrix
            .ok_or(ConfigurationError::MissingSimilarityMatrix)?;
        let open = self.gap_open_cost.ok_or(ConfigurationError::MissingGapOpenCost)?;
        Ok((matrix, open))
    }

    fn validate(
        &self, matrix: &dyn SimilarityMatrix, gaps: GapCosts, first: &Sequence<'_>, second: &Sequence<'_>,
    ) -> Result<(), AlignmentError> {
        if first.is_empty() {
            return Err(InputError::EmptySequence(Which::First).into());
        }
        if second.is_empty() {
            return Err(InputError::EmptySequence(Which::Second).into());
        }
        if !first.alphabet().is_compatible(second.alphabet()) {
            return Err(InputError::AlphabetMismatch {
                first:  first.alphabet().name(),
                second: second.alphabet().name(),
            }
            .into());
        }
        for (which, sequence) in [(Which::First, first), (Which::Second, second)] {
            if !matrix.supports(sequence.alphabet()) {
                return Err(ConfigurationError::UnsupportedAlphabet {
                    which,
                    alphabet: sequence.alphabet().name(),
                }
                .into());
            }
        }

        if let Some(cost) = gaps.positive_cost() {
            if self.reject_positive_gap_costs {
                return Err(ConfigurationError::PositiveGapCost(cost).into());
            }
            log::warn!("Gap costs are expected to be negative, but {gaps} contains {cost}");
        }
        Ok(())
    }

    fn run<'a>(
        &self, matrix: &dyn SimilarityMatrix, gaps: GapCosts, first: &Sequence<'a>, second: &Sequence<'a>,
    ) -> Result<PairwiseSequenceAlignment<'a>, AlignmentError> {
        self.validate(matrix, gaps, first, second)?;

        let kernel = Kernel {
            mode:    self.mode,
            scoring: ScoringModel { matrix, gaps },
            first:   first.as_bytes(),
            second:  second.as_bytes(),
        };
        let dp = DpMatrix::filled(&kernel, self.fill);
        let (starts, score) = dp.start_cells(self.mode);

        let mut result = PairwiseSequenceAlignment::new(first.clone(), second.clone());
        if starts.is_empty() {
            log::debug!(
                "{}: no positive scoring cell for '{}' and '{}'",
                self.name(),
                first.id(),
                second.id()
            );
            return Ok(result);
        }

        let paths = Traceback {
            matrix: &dp,
            mode:   self.mode,
            first:  first.as_bytes(),
            second: second.as_bytes(),
        }
        .enumerate(&starts);
        log::debug!(
            "{}: {} optimal alignment(s) scoring {score} from {} start cell(s)",
            self.name(),
            paths.len(),
            starts.len()
        );

        let matrix_name = matrix.name();
        for path in paths {
            let mut aligned = PairwiseAlignedSequence::from_path(path, score, first.alphabet());
            aligned.metadata.insert("aligner".into(), self.name().into());
            aligned.metadata.insert("matrix".into(), matrix_name.clone());
            aligned.metadata.insert("gaps".into(), gaps.to_string());
            result.push(aligned);
        }
        Ok(result)
    }
}

impl fmt::Debug for PairwiseAligner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairwiseAligner")
            .field("mode", &self.mode)
            .field("similarity_matrix", &self.similarity_matrix.map(|matrix| matrix.name()))
            .field("gap_open_cost", &self.gap_open_cost)
            .field("gap_extension_cost", &self.gap_extension_cost)
            .field("fill", &self.fill)
            .field("reject_positive_gap_costs", &self.reject_positive_gap_costs)
            .finish()
    }
}

fn as_pair<'s, 'a>(sequences: &'s [Sequence<'a>]) -> Result<[&'s Sequence<'a>; 2], InputError> {
    match sequences {
        [first, second] => Ok([first, second]),
        _ => Err(InputError::WrongSequenceCount(sequences.len())),
    }
}
