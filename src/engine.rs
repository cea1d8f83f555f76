use crate::{Config, Grid};
use std::borrow::Cow;
use tracing::debug;

/// One-generation stepper. Holds only the rule constants, so `step` is a
/// pure function of the grid it is given.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    edge_margin: usize,
    expansion_step: usize,
}

impl Engine {
    pub fn new(config: &Config) -> Self {
        config.assert_valid();
        Self {
            edge_margin: config.edge_margin,
            expansion_step: config.expansion_step,
        }
    }

    /// Produces the next generation: expansion check, centered copy into a
    /// larger store when live cells approach an edge, then rule evaluation.
    pub fn step(&self, grid: &Grid) -> Grid {
        let source: Cow<'_, Grid> = if self.needs_expansion(grid) {
            Cow::Owned(self.expanded(grid))
        } else {
            Cow::Borrowed(grid)
        };
        self.evolve(&source)
    }

    /// True when any live cell sits within `edge_margin` cells of any of
    /// the four grid edges. A hit on either axis triggers expansion of
    /// both axes.
    pub fn needs_expansion(&self, grid: &Grid) -> bool {
        let (w, h) = (grid.width(), grid.height());
        let band_cols = self.edge_margin.min(w);
        let band_rows = self.edge_margin.min(h);

        for row in 0..h {
            for col in 0..band_cols {
                if grid.cell(row, col) || grid.cell(row, w - 1 - col) {
                    return true;
                }
            }
        }
        for col in 0..w {
            for row in 0..band_rows {
                if grid.cell(row, col) || grid.cell(h - 1 - row, col) {
                    return true;
                }
            }
        }
        false
    }

    /// Allocates a grid grown by `expansion_step` in both dimensions and
    /// copies the old content centered, i.e. offset by half the step.
    pub fn expanded(&self, grid: &Grid) -> Grid {
        let offset = self.expansion_step / 2;
        let (old_w, old_h) = (grid.width(), grid.height());
        let new_w = old_w + self.expansion_step;
        let new_h = old_h + self.expansion_step;

        let mut cells = vec![false; new_w * new_h];
        for (row, old_row) in grid.cells().chunks_exact(old_w).enumerate() {
            let start = (row + offset) * new_w + offset;
            cells[start..start + old_w].copy_from_slice(old_row);
        }

        debug!(
            old_width = old_w,
            old_height = old_h,
            new_width = new_w,
            new_height = new_h,
            "expanding grid"
        );
        Grid::from_cells(new_w, new_h, cells)
    }

    /// Evaluates the life rules over the interior of `source`. The
    /// outermost ring is never evaluated and therefore always comes out
    /// dead; the expansion scan fires well before live cells reach it.
    fn evolve(&self, source: &Grid) -> Grid {
        let (w, h) = (source.width(), source.height());
        let prev = source.cells();
        let mut next = vec![false; w * h];

        for row in 1..h.saturating_sub(1) {
            for col in 1..w - 1 {
                let above = (row - 1) * w + col;
                let here = row * w + col;
                let below = (row + 1) * w + col;
                let neighbours = prev[above - 1] as u8
                    + prev[above] as u8
                    + prev[above + 1] as u8
                    + prev[here - 1] as u8
                    + prev[here + 1] as u8
                    + prev[below - 1] as u8
                    + prev[below] as u8
                    + prev[below + 1] as u8;

                next[here] = if prev[here] {
                    neighbours == 2 || neighbours == 3
                } else {
                    neighbours == 3
                };
            }
        }
        Grid::from_cells(w, h, next)
    }
}
