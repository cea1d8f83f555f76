use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable constants of the core. External hosts construct (or deserialize)
/// one and hand it to [`crate::World::new`]; nothing in here is read from
/// global state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Starting dimensions of the backing grid, in cells.
    pub initial_width: usize,
    pub initial_height: usize,
    /// Probability that a seeded cell starts alive.
    pub fill_rate: f64,
    /// Live cells this close to a grid edge trigger expansion on the next step.
    pub edge_margin: usize,
    /// Cells added to each dimension when expansion triggers.
    pub expansion_step: usize,
    /// Magnification lookup table; cell pixel size is `4 * zoom_increments[level]`.
    pub zoom_increments: [u32; 8],
    /// Logical side length of the square rendering surface, in pixels.
    pub surface_px: u32,
    /// Period the external scheduler should use for automatic stepping.
    pub tick_period: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_width: 200,
            initial_height: 200,
            fill_rate: 0.15,
            edge_margin: 5,
            expansion_step: 16,
            zoom_increments: [1, 2, 4, 5, 8, 10, 20, 40],
            surface_px: 800,
            tick_period: Duration::from_millis(50),
        }
    }
}

impl Config {
    /// Structural sanity checks; a config violating these is a programming
    /// error on the host's side, so constructors assert rather than return.
    pub(crate) fn assert_valid(&self) {
        assert!(
            self.initial_width > 0 && self.initial_height > 0,
            "grid dimensions must be positive"
        );
        assert!(
            (0.0..=1.0).contains(&self.fill_rate),
            "fill rate must be in [0, 1]"
        );
        assert!(self.expansion_step % 2 == 0, "expansion step must be even");
        assert!(
            self.zoom_increments.iter().all(|&inc| inc > 0),
            "zoom increments must be positive"
        );
        assert!(self.surface_px > 0, "surface size must be positive");
    }
}
