use crate::{
    alignment::{
        AlignmentMode,
        matrix::{DpMatrix, Layer},
        types::BacktrackCell,
    },
    data::alphabet::GAP,
};
use std::collections::HashSet;

/// One optimal path through the matrix, as aligned columns.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct TracedPath {
    pub first:  Vec<u8>,
    pub second: Vec<u8>,
    /// The cell where the traceback stopped, which is the number of symbols of
    /// each sequence preceding the aligned region
    pub start:  (usize, usize),
    /// The cell where the traceback began
    pub end:    (usize, usize),
}

/// A pending state of the depth-first traceback.
#[derive(Clone, Copy, Debug)]
struct Step {
    i:      usize,
    j:      usize,
    layer:  Layer,
    /// The number of columns on the path when this step was reached
    depth:  usize,
    /// The column emitted by the move into this step
    column: Option<(u8, u8)>,
}

/// Enumerates every co-optimal alignment recorded in a filled matrix.
pub(crate) struct Traceback<'t> {
    pub matrix: &'t DpMatrix,
    pub mode:   AlignmentMode,
    pub first:  &'t [u8],
    pub second: &'t [u8],
}

impl Traceback<'_> {
    /// Follows every recorded pointer from each start cell, yielding paths in
    /// discovery order. Moves are explored diagonal first, then up, then left.
    /// Paths spelling the same pair of aligned sequences are kept once, at
    /// their first discovery.
    pub(crate) fn enumerate(&self, starts: &[(usize, usize)]) -> Vec<TracedPath> {
        let mut seen = HashSet::new();
        let mut paths = Vec::new();

        for &(i, j) in starts {
            for layer in self.start_layers(i, j) {
                for path in self.trace_from(i, j, layer) {
                    let key = (path.first.clone(), path.second.clone());
                    if seen.insert(key) {
                        paths.push(path);
                    }
                }
            }
        }
        paths
    }

    /// The layers of cell `(i, j)` which hold its best score.
    fn start_layers(&self, i: usize, j: usize) -> Vec<Layer> {
        let cell = self.matrix.cell(i, j);
        if !self.matrix.is_affine() {
            return vec![Layer::M];
        }
        let best = cell.best();
        [Layer::M, Layer::Ix, Layer::Iy]
            .into_iter()
            .filter(|&layer| cell.layer(layer) == best)
            .collect()
    }

    fn trace_from(&self, i: usize, j: usize, layer: Layer) -> Vec<TracedPath> {
        let mut out = Vec::new();
        let mut columns: Vec<(u8, u8)> = Vec::new();
        let mut stack = vec![Step {
            i,
            j,
            layer,
            depth: 0,
            column: None,
        }];

        while let Some(step) = stack.pop() {
            columns.truncate(step.depth);
            if let Some(column) = step.column {
                columns.push(column);
            }

            let flags = self.matrix.backtrack.get(step.i, step.j);
            let restart = step.layer == Layer::M && flags.is_stop();
            if self.mode.is_traceback_end(step.i, step.j, restart) {
                out.push(Self::to_path(&columns, (step.i, step.j), (i, j)));
                continue;
            }

            let before = stack.len();
            self.push_moves(step, flags, columns.len(), &mut stack);
            if stack.len() == before {
                log::warn!("Traceback reached ({}, {}) without a recorded predecessor", step.i, step.j);
            }
        }
        out
    }

    /// Pushes the predecessors of `step`, lowest priority first, so that the
    /// diagonal move is explored first.
    fn push_moves(&self, step: Step, flags: BacktrackCell, depth: usize, stack: &mut Vec<Step>) {
        let Step { i, j, layer, .. } = step;
        let mut push = |i, j, layer, column| {
            stack.push(Step {
                i,
                j,
                layer,
                depth,
                column: Some(column),
            });
        };

        if self.matrix.is_affine() {
            match layer {
                Layer::M if i > 0 && j > 0 => {
                    let column = (self.first[i - 1], self.second[j - 1]);
                    for (flag, from) in [
                        (BacktrackCell::MATCH_FROM_LEFT, Layer::Iy),
                        (BacktrackCell::MATCH_FROM_UP, Layer::Ix),
                        (BacktrackCell::MATCH, Layer::M),
                    ] {
                        if flags.has(flag) {
                            push(i - 1, j - 1, from, column);
                        }
                    }
                }
                Layer::Ix if i > 0 => {
                    let column = (self.first[i - 1], GAP);
                    if flags.has(BacktrackCell::UP_EXTENDING) {
                        push(i - 1, j, Layer::Ix, column);
                    }
                    if flags.has(BacktrackCell::UP) {
                        push(i - 1, j, Layer::M, column);
                    }
                }
                Layer::Iy if j > 0 => {
                    let column = (GAP, self.second[j - 1]);
                    if flags.has(BacktrackCell::LEFT_EXTENDING) {
                        push(i, j - 1, Layer::Iy, column);
                    }
                    if flags.has(BacktrackCell::LEFT) {
                        push(i, j - 1, Layer::M, column);
                    }
                }
                _ => {}
            }
        } else {
            if j > 0 && flags.has(BacktrackCell::LEFT) {
                push(i, j - 1, Layer::M, (GAP, self.second[j - 1]));
            }
            if i > 0 && flags.has(BacktrackCell::UP) {
                push(i - 1, j, Layer::M, (self.first[i - 1], GAP));
            }
            if i > 0 && j > 0 && flags.has(BacktrackCell::MATCH) {
                push(i - 1, j - 1, Layer::M, (self.first[i - 1], self.second[j - 1]));
            }
        }
    }

    fn to_path(columns: &[(u8, u8)], start: (usize, usize), end: (usize, usize)) -> TracedPath {
        let (first, second) = columns.iter().rev().copied().unzip();
        TracedPath {
            first,
            second,
            start,
            end,
        }
    }
}
