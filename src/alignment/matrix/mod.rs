//! ## Dynamic programming matrices
//!
//! A [`DpMatrix`] holds one score layer for linear gaps, or three layers for
//! affine gaps, plus a backtrack flag per cell. It has `n + 1` rows and `m + 1`
//! columns for a first sequence of length `n` and a second of length `m`; row
//! and column 0 are the boundary.
//!
//! Two fill strategies are provided. [`FillStrategy::RowMajor`] visits cells
//! row by row. [`FillStrategy::Wavefront`] splits the matrix into tiles and
//! computes all tiles on the same anti-diagonal in parallel. Both use the same
//! [`Kernel`] and produce identical matrices.

use crate::alignment::{
    AlignmentMode, GapModel,
    scoring::ScoringModel,
    types::{BacktrackCell, BacktrackMatrix},
};

mod wavefront;

#[cfg(test)]
mod test;

/// A score low enough that it never wins a maximization, with room to add
/// costs without overflowing.
pub(crate) const NEG_INF: i32 = i32::MIN / 2;

/// How the cells of the matrix are visited while filling.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum FillStrategy {
    /// Cells are computed one row at a time
    #[default]
    RowMajor,
    /// Cells are computed in tiles along anti-diagonals, in parallel
    Wavefront,
}

/// The score layer a traceback is in.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub(crate) enum Layer {
    /// Alignments ending with a match or mismatch (every alignment, for linear
    /// gaps)
    M,
    /// Alignments ending with a gap in the second sequence
    Ix,
    /// Alignments ending with a gap in the first sequence
    Iy,
}

/// The scores of one cell across the layers. For linear gaps, `ix` and `iy`
/// are always [`NEG_INF`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub(crate) struct Cell {
    pub m:  i32,
    pub ix: i32,
    pub iy: i32,
}

impl Cell {
    #[inline]
    pub(crate) const fn only_m(m: i32) -> Self {
        Cell {
            m,
            ix: NEG_INF,
            iy: NEG_INF,
        }
    }

    /// The best score of the cell over all layers.
    #[inline]
    pub(crate) fn best(self) -> i32 {
        self.m.max(self.ix).max(self.iy)
    }

    #[inline]
    pub(crate) fn layer(self, layer: Layer) -> i32 {
        match layer {
            Layer::M => self.m,
            Layer::Ix => self.ix,
            Layer::Iy => self.iy,
        }
    }
}

/// Computes single cells of the matrix.
///
/// Definitions, for a first sequence `A` (rows) and second sequence `B`
/// (columns):
/// * `W[i,j]` = similarity score of `A[i-1]` and `B[j-1]`
/// * `M[i,j]` = best score of `A[..i]` against `B[..j]` ending with `A[i-1]`
///   aligned to `B[j-1]`
/// * `Ix[i,j]` = best score ending with `A[i-1]` against a gap
/// * `Iy[i,j]` = best score ending with `B[j-1]` against a gap
///
/// For linear gaps a single layer `S` plays the role of `M`.
pub(crate) struct Kernel<'k> {
    pub mode:    AlignmentMode,
    pub scoring: ScoringModel<'k>,
    pub first:   &'k [u8],
    pub second:  &'k [u8],
}

impl Kernel<'_> {
    #[inline]
    pub(crate) fn gap_model(&self) -> GapModel {
        self.scoring.gaps.model()
    }

    /// Computes a cell of row 0 or column 0.
    pub(crate) fn boundary(&self, i: usize, j: usize) -> (Cell, BacktrackCell) {
        let mut flags = BacktrackCell::default();
        if i == 0 && j == 0 {
            return (Cell::only_m(0), flags);
        }

        if !self.mode.penalizes_end_gaps() {
            if self.mode.floors_at_zero() {
                flags.stop();
            }
            return (Cell::only_m(0), flags);
        }

        // Global: the boundary consumes a prefix of one sequence via one gap
        let run = i.max(j);
        let cost = self.scoring.gap_cost(run);
        let cell = match (self.gap_model(), j == 0) {
            (GapModel::Linear, true) => {
                flags.set(BacktrackCell::UP, true);
                Cell::only_m(cost)
            }
            (GapModel::Linear, false) => {
                flags.set(BacktrackCell::LEFT, true);
                Cell::only_m(cost)
            }
            (GapModel::Affine, true) => {
                flags.set(if run == 1 { BacktrackCell::UP } else { BacktrackCell::UP_EXTENDING }, true);
                Cell {
                    m:  NEG_INF,
                    ix: cost,
                    iy: NEG_INF,
                }
            }
            (GapModel::Affine, false) => {
                flags.set(if run == 1 { BacktrackCell::LEFT } else { BacktrackCell::LEFT_EXTENDING }, true);
                Cell {
                    m:  NEG_INF,
                    ix: NEG_INF,
                    iy: cost,
                }
            }
        };
        (cell, flags)
    }

    /// Computes an interior cell from its diagonal, upper, and left neighbors.
    #[inline]
    pub(crate) fn interior(&self, i: usize, j: usize, diag: Cell, up: Cell, left: Cell) -> (Cell, BacktrackCell) {
        let w = self.scoring.substitution(self.first[i - 1], self.second[j - 1]);
        let open = self.scoring.gaps.open;
        let mut flags = BacktrackCell::default();

        match self.gap_model() {
            GapModel::Linear => {
                // S[i,j] = max(S[i-1,j-1] + W[i,j], S[i-1,j] + open, S[i,j-1] + open)
                let from_diag = diag.m.saturating_add(w);
                let from_up = up.m.saturating_add(open);
                let from_left = left.m.saturating_add(open);
                let mut s = from_diag.max(from_up).max(from_left);

                if self.mode.floors_at_zero() && s <= 0 {
                    s = 0;
                    flags.stop();
                }
                flags.set(BacktrackCell::MATCH, from_diag == s);
                flags.set(BacktrackCell::UP, from_up == s);
                flags.set(BacktrackCell::LEFT, from_left == s);

                (Cell::only_m(s), flags)
            }
            GapModel::Affine => {
                let extend = self.scoring.gaps.extension_or_open();

                // M[i,j] = W[i,j] + max(M[i-1,j-1], Ix[i-1,j-1], Iy[i-1,j-1])
                let best_diag = diag.best();
                let mut m = best_diag.saturating_add(w);
                if self.mode.floors_at_zero() && m <= 0 {
                    m = 0;
                    flags.stop();
                } else {
                    flags.set(BacktrackCell::MATCH, diag.m == best_diag);
                    flags.set(BacktrackCell::MATCH_FROM_UP, diag.ix == best_diag);
                    flags.set(BacktrackCell::MATCH_FROM_LEFT, diag.iy == best_diag);
                }

                // Ix[i,j] = max(M[i-1,j] + open, Ix[i-1,j] + extend)
                let ix_open = up.m.saturating_add(open);
                let ix_extend = up.ix.saturating_add(extend);
                let ix = ix_open.max(ix_extend);
                flags.set(BacktrackCell::UP, ix_open == ix);
                flags.set(BacktrackCell::UP_EXTENDING, ix_extend == ix);

                // Iy[i,j] = max(M[i,j-1] + open, Iy[i,j-1] + extend)
                let iy_open = left.m.saturating_add(open);
                let iy_extend = left.iy.saturating_add(extend);
                let iy = iy_open.max(iy_extend);
                flags.set(BacktrackCell::LEFT, iy_open == iy);
                flags.set(BacktrackCell::LEFT_EXTENDING, iy_extend == iy);

                (Cell { m, ix, iy }, flags)
            }
        }
    }
}

/// The filled matrix for one alignment call.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct DpMatrix {
    rows:          usize,
    cols:          usize,
    m:             Vec<i32>,
    ix:            Vec<i32>,
    iy:            Vec<i32>,
    pub backtrack: BacktrackMatrix,
}

impl DpMatrix {
    /// Allocates a matrix for sequences of length `n` and `m`, with the gap
    /// layers only when `model` is affine.
    pub(crate) fn new(n: usize, m: usize, model: GapModel) -> Self {
        let (rows, cols) = (n + 1, m + 1);
        let gap_layer = || match model {
            GapModel::Linear => Vec::new(),
            GapModel::Affine => vec![NEG_INF; rows * cols],
        };

        DpMatrix {
            rows,
            cols,
            m: vec![NEG_INF; rows * cols],
            ix: gap_layer(),
            iy: gap_layer(),
            backtrack: BacktrackMatrix::new(rows, cols),
        }
    }

    /// Allocates and fills a matrix with the given strategy.
    pub(crate) fn filled(kernel: &Kernel, strategy: FillStrategy) -> Self {
        let mut matrix = DpMatrix::new(kernel.first.len(), kernel.second.len(), kernel.gap_model());
        match strategy {
            FillStrategy::RowMajor => matrix.fill_row_major(kernel),
            FillStrategy::Wavefront => matrix.fill_wavefront(kernel),
        }
        log::trace!("Filled {}x{} matrix:\n{}", matrix.rows, matrix.cols, matrix.backtrack);
        matrix
    }

    #[inline]
    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub(crate) fn is_affine(&self) -> bool {
        !self.ix.is_empty()
    }

    #[inline]
    pub(crate) fn cell(&self, i: usize, j: usize) -> Cell {
        let k = self.cols * i + j;
        if self.is_affine() {
            Cell {
                m:  self.m[k],
                ix: self.ix[k],
                iy: self.iy[k],
            }
        } else {
            Cell::only_m(self.m[k])
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, cell: Cell, flags: BacktrackCell) {
        let k = self.cols * i + j;
        self.m[k] = cell.m;
        if self.is_affine() {
            self.ix[k] = cell.ix;
            self.iy[k] = cell.iy;
        }
        self.backtrack.set(i, j, flags);
    }

    /// The best score of cell `(i, j)` across the layers.
    #[inline]
    pub(crate) fn score(&self, i: usize, j: usize) -> i32 {
        self.cell(i, j).best()
    }

    /// Computes one cell from its already-computed neighbors, read through
    /// `lookup`.
    #[inline]
    pub(crate) fn compute<F>(kernel: &Kernel, i: usize, j: usize, lookup: F) -> (Cell, BacktrackCell)
    where
        F: Fn(usize, usize) -> Cell, {
        if i == 0 || j == 0 {
            kernel.boundary(i, j)
        } else {
            kernel.interior(i, j, lookup(i - 1, j - 1), lookup(i - 1, j), lookup(i, j - 1))
        }
    }

    fn fill_row_major(&mut self, kernel: &Kernel) {
        for i in 0..self.rows {
            for j in 0..self.cols {
                let (cell, flags) = Self::compute(kernel, i, j, |r, c| self.cell(r, c));
                self.set(i, j, cell, flags);
            }
        }
    }

    /// The cells where traceback begins, in row-major order, along with their
    /// shared score. Local and overlap alignments only start from positive
    /// scores, so they may have no start cells.
    pub(crate) fn start_cells(&self, mode: AlignmentMode) -> (Vec<(usize, usize)>, i32) {
        let (n, m) = (self.rows - 1, self.cols - 1);
        if mode == AlignmentMode::Global {
            return (vec![(n, m)], self.score(n, m));
        }

        let mut best = 0;
        let mut starts = Vec::new();
        for i in 1..self.rows {
            for j in 1..self.cols {
                if !mode.is_start_candidate(i, j, n, m) {
                    continue;
                }
                let score = self.score(i, j);
                if score > best {
                    best = score;
                    starts.clear();
                }
                if score == best && score > 0 {
                    starts.push((i, j));
                }
            }
        }
        (starts, best)
    }
}
