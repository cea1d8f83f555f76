use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

/// Finite 2D boolean backing store for the conceptually infinite plane.
///
/// A dumb bounded store: it knows nothing about the life rules or about
/// expansion. Centering old content into a larger grid is the engine's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>, // row-major, len == width * height
}

impl Grid {
    /// Allocates an all-dead grid of the requested size.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.height && col < self.width {
            Ok(row * self.width + col)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<(), GridError> {
        let i = self.index(row, col)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Flips one cell and returns its new state. Toggling the same
    /// coordinate twice restores the original state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let i = self.index(row, col)?;
        self.cells[i] = !self.cells[i];
        Ok(self.cells[i])
    }

    /// Row-major view of the cells, for renderers and the engine's inner
    /// loops.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Read for hot loops; coordinates must be in range. An out-of-range
    /// index here is a scan/copy bug and panics rather than being masked.
    pub(crate) fn cell(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }

    /// Seeds a sub-rectangle with the given live probability. The ranges
    /// are clipped to the grid, so callers may pass the visible window
    /// as-is. `None` falls back to a fixed seed for reproducibility.
    pub fn randomize_region(
        &mut self,
        rows: Range<usize>,
        cols: Range<usize>,
        fill_rate: f64,
        seed: Option<u64>,
    ) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        const DEFAULT_SEED: u64 = 42;

        assert!(
            (0.0..=1.0).contains(&fill_rate),
            "fill rate must be in [0, 1]"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(seed.unwrap_or(DEFAULT_SEED));
        for row in rows.start..rows.end.min(self.height) {
            for col in cols.start..cols.end.min(self.width) {
                self.cells[row * self.width + col] = rng.gen_bool(fill_rate);
            }
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}
