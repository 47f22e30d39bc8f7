use crate::data::matrices::SimilarityMatrix;
use std::fmt;

/// Whether gaps of every length cost the same per position, or whether
/// opening a gap costs differently from extending one.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum GapModel {
    Linear,
    Affine,
}

/// Gap costs for alignment. Costs are expected to be non-positive.
///
/// With only an opening cost, every gap position costs `open` (linear gaps).
/// With an extension cost as well, a run of `L` gap positions costs `open +
/// (L - 1) * extension` (affine gaps).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct GapCosts {
    pub open:      i32,
    pub extension: Option<i32>,
}

impl GapCosts {
    /// Gap costs for the linear model.
    #[inline]
    #[must_use]
    pub const fn linear(open: i32) -> Self {
        GapCosts { open, extension: None }
    }

    /// Gap costs for the affine model.
    #[inline]
    #[must_use]
    pub const fn affine(open: i32, extension: i32) -> Self {
        GapCosts {
            open,
            extension: Some(extension),
        }
    }

    #[inline]
    #[must_use]
    pub const fn model(&self) -> GapModel {
        match self.extension {
            Some(_) => GapModel::Affine,
            None => GapModel::Linear,
        }
    }

    /// The cost of continuing a gap run by one position.
    #[inline]
    #[must_use]
    pub const fn extension_or_open(&self) -> i32 {
        match self.extension {
            Some(extension) => extension,
            None => self.open,
        }
    }

    /// The cost of a gap run of length `run`. A run of length 0 costs nothing.
    ///
    /// ## Example
    /// ```
    /// # use pairalign::prelude::*;
    /// assert_eq!(GapCosts::linear(-2).run_cost(3), -6);
    /// assert_eq!(GapCosts::affine(-10, -1).run_cost(3), -12);
    /// assert_eq!(GapCosts::affine(-10, -1).run_cost(0), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn run_cost(&self, run: usize) -> i32 {
        match run {
            0 => 0,
            _ => {
                let extensions = i32::try_from(run - 1).unwrap_or(i32::MAX);
                match self.extension {
                    Some(extension) => self.open.saturating_add(extension.saturating_mul(extensions)),
                    None => self.open.saturating_mul(extensions.saturating_add(1)),
                }
            }
        }
    }

    /// The first positive cost, if any.
    #[inline]
    #[must_use]
    pub(crate) fn positive_cost(&self) -> Option<i32> {
        [Some(self.open), self.extension].into_iter().flatten().find(|cost| *cost > 0)
    }
}

impl fmt::Display for GapCosts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.extension {
            Some(extension) => write!(f, "affine({}, {extension})", self.open),
            None => write!(f, "linear({})", self.open),
        }
    }
}

/// A similarity matrix paired with gap costs.
#[derive(Clone, Copy)]
pub(crate) struct ScoringModel<'m> {
    pub matrix: &'m dyn SimilarityMatrix,
    pub gaps:   GapCosts,
}

impl ScoringModel<'_> {
    #[inline]
    pub(crate) fn substitution(&self, first: u8, second: u8) -> i32 {
        self.matrix.score(first, second)
    }

    #[inline]
    pub(crate) fn gap_cost(&self, run: usize) -> i32 {
        self.gaps.run_cost(run)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn run_costs() {
        let linear = GapCosts::linear(-3);
        assert_eq!(linear.model(), GapModel::Linear);
        assert_eq!(linear.run_cost(1), -3);
        assert_eq!(linear.run_cost(4), -12);
        assert_eq!(linear.extension_or_open(), -3);

        let affine = GapCosts::affine(-8, -1);
        assert_eq!(affine.model(), GapModel::Affine);
        assert_eq!(affine.run_cost(1), -8);
        assert_eq!(affine.run_cost(5), -12);
        assert_eq!(affine.extension_or_open(), -1);
    }

    #[test]
    fn affine_with_equal_costs_matches_linear() {
        let linear = GapCosts::linear(-2);
        let affine = GapCosts::affine(-2, -2);
        for run in 0..10 {
            assert_eq!(linear.run_cost(run), affine.run_cost(run));
        }
    }

    #[test]
    fn positive_costs_are_found() {
        assert_eq!(GapCosts::affine(-2, 1).positive_cost(), Some(1));
        assert_eq!(GapCosts::linear(3).positive_cost(), Some(3));
        assert_eq!(GapCosts::affine(-2, 0).positive_cost(), None);
    }

    #[test]
    fn display() {
        assert_eq!(GapCosts::linear(-2).to_string(), "linear(-2)");
        assert_eq!(GapCosts::affine(-8, -1).to_string(), "affine(-8, -1)");
    }
}
