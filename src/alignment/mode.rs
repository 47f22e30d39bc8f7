use std::fmt;

/// The alignment variant, which decides how the matrix boundaries are
/// initialized, whether cell scores are floored at zero, where traceback may
/// start, and where it stops.
///
/// | Variant   | Boundaries        | Floor | Traceback start          | Stop          |
/// |-----------|-------------------|-------|--------------------------|---------------|
/// | `Global`  | cumulative gaps   | none  | bottom-right cell        | origin        |
/// | `Local`   | zero              | zero  | every maximal cell       | zero cell     |
/// | `Overlap` | zero              | none  | maximal last row/column  | first row/col |
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum AlignmentMode {
    /// Needleman-Wunsch: both sequences are aligned end to end
    Global,
    /// Smith-Waterman: the best scoring pair of subsequences is aligned
    Local,
    /// End-gap free alignment: a suffix of one sequence overlaps a prefix of
    /// the other, or one sequence is contained in the other
    Overlap,
}

impl AlignmentMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AlignmentMode::Global => "Needleman-Wunsch",
            AlignmentMode::Local => "Smith-Waterman",
            AlignmentMode::Overlap => "Pairwise-Overlap",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            AlignmentMode::Global => "Optimal global alignment of two sequences over their full lengths",
            AlignmentMode::Local => "Optimal local alignment of the best scoring pair of subsequences",
            AlignmentMode::Overlap => "Optimal overlap alignment without penalties for end gaps",
        }
    }

    /// Whether boundary cells hold cumulative gap costs rather than zero.
    #[inline]
    pub(crate) const fn penalizes_end_gaps(self) -> bool {
        matches!(self, AlignmentMode::Global)
    }

    /// Whether cell scores are floored at zero, which restarts the alignment.
    #[inline]
    pub(crate) const fn floors_at_zero(self) -> bool {
        matches!(self, AlignmentMode::Local)
    }

    /// Whether the interior cell `(i, j)` of a matrix with `n + 1` rows and
    /// `m + 1` columns may begin a traceback.
    #[inline]
    pub(crate) const fn is_start_candidate(self, i: usize, j: usize, n: usize, m: usize) -> bool {
        match self {
            AlignmentMode::Global => i == n && j == m,
            AlignmentMode::Local => true,
            AlignmentMode::Overlap => i == n || j == m,
        }
    }

    /// Whether a traceback arriving at `(i, j)` is complete. For local
    /// alignment, `restart` reports that the cell was floored to zero.
    #[inline]
    pub(crate) const fn is_traceback_end(self, i: usize, j: usize, restart: bool) -> bool {
        match self {
            AlignmentMode::Global => i == 0 && j == 0,
            AlignmentMode::Local => i == 0 || j == 0 || restart,
            AlignmentMode::Overlap => i == 0 || j == 0,
        }
    }
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
