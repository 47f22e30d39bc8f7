use super::{BacktrackCell, Cell, DpMatrix, Kernel};
use rayon::prelude::*;
use std::ops::Range;

/// A rectangular block of cells computed into a private buffer.
struct Tile {
    rows:  Range<usize>,
    cols:  Range<usize>,
    cells: Vec<(Cell, BacktrackCell)>,
}

impl Tile {
    #[inline]
    fn cell(&self, i: usize, j: usize) -> Cell {
        let width = self.cols.len();
        self.cells[(i - self.rows.start) * width + (j - self.cols.start)].0
    }

    #[inline]
    fn contains(&self, i: usize, j: usize) -> bool {
        self.rows.contains(&i) && self.cols.contains(&j)
    }
}

impl DpMatrix {
    /// Fills the matrix tile by tile along anti-diagonals of tiles.
    ///
    /// A tile only depends on the tiles above, to the left, and diagonally
    /// above-left of it, all of which lie on earlier anti-diagonals. The tiles
    /// of one anti-diagonal are therefore independent, and are computed in
    /// parallel before being written back.
    pub(super) fn fill_wavefront(&mut self, kernel: &Kernel) {
        let threads = rayon::current_num_threads().max(1);
        let tile_rows = (self.rows() / threads).max(1);
        let tile_cols = (self.cols() / threads).max(1);
        let tiles_down = self.rows().div_ceil(tile_rows);
        let tiles_across = self.cols().div_ceil(tile_cols);

        log::debug!(
            "Wavefront fill of {}x{} cells using {tiles_down}x{tiles_across} tiles on {threads} threads",
            self.rows(),
            self.cols()
        );

        for diagonal in 0..tiles_down + tiles_across - 1 {
            let first = diagonal.saturating_sub(tiles_across - 1);
            let last = diagonal.min(tiles_down - 1);

            let tiles: Vec<Tile> = (first..=last)
                .into_par_iter()
                .map(|tile_row| {
                    let tile_col = diagonal - tile_row;
                    let rows = tile_row * tile_rows..((tile_row + 1) * tile_rows).min(self.rows());
                    let cols = tile_col * tile_cols..((tile_col + 1) * tile_cols).min(self.cols());
                    self.compute_tile(kernel, rows, cols)
                })
                .collect();

            for tile in tiles {
                self.write_tile(tile);
            }
        }
    }

    /// Computes the cells of one tile in row-major order, reading neighbors
    /// outside of the tile from the matrix.
    fn compute_tile(&self, kernel: &Kernel, rows: Range<usize>, cols: Range<usize>) -> Tile {
        let mut tile = Tile {
            cells: Vec::with_capacity(rows.len() * cols.len()),
            rows,
            cols,
        };

        for i in tile.rows.clone() {
            for j in tile.cols.clone() {
                let computed = Self::compute(kernel, i, j, |r, c| {
                    if tile.contains(r, c) {
                        tile.cell(r, c)
                    } else {
                        self.cell(r, c)
                    }
                });
                tile.cells.push(computed);
            }
        }
        tile
    }

    fn write_tile(&mut self, tile: Tile) {
        let Tile { rows, cols, cells } = tile;
        let width = cols.len();
        for (k, (cell, flags)) in cells.into_iter().enumerate() {
            self.set(rows.start + k / width, cols.start + k % width, cell, flags);
        }
    }
}
