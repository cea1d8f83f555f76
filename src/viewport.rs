use crate::Config;

/// Smallest rendered cell is 4x4 pixels; the zoom table scales up from there.
const CELL_PX_BASE: u32 = 4;
/// Navigation button pan stride and guard margin, in cells.
const PAN_STRIDE: i64 = 4;
/// Mouse-drag pan stride and guard margin, in cells.
const DRAG_STRIDE: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Visible sub-rectangle of the grid, in half-open cell ranges, plus the
/// pixel size each cell renders at. Everything a renderer needs to draw a
/// frame, and enough to map a click back onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start_row: usize,
    pub end_row: usize,
    pub start_col: usize,
    pub end_col: usize,
    pub cell_size_px: u32,
}

impl Window {
    /// Maps surface pixel coordinates to the grid cell under them, or
    /// `None` when the pixel falls outside the visible rectangle.
    pub fn cell_at(&self, x_px: u32, y_px: u32) -> Option<(usize, usize)> {
        let row = self.start_row + (y_px / self.cell_size_px) as usize;
        let col = self.start_col + (x_px / self.cell_size_px) as usize;
        (row < self.end_row && col < self.end_col).then_some((row, col))
    }
}

/// Movable, zoomable view onto the grid. Holds no grid data; the current
/// grid dimensions are threaded in on every query, so the viewport stays
/// valid across expansions.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom_level: usize,
    pan_x: i64,
    pan_y: i64,
    recenter: bool,
    zoom_increments: [u32; 8],
    surface_px: u32,
}

impl Viewport {
    /// Starting magnification, middle of the zoom table.
    const INITIAL_ZOOM: usize = 5;

    pub fn new(config: &Config) -> Self {
        config.assert_valid();
        Self {
            zoom_level: Self::INITIAL_ZOOM,
            pan_x: 0,
            pan_y: 0,
            recenter: false,
            zoom_increments: config.zoom_increments,
            surface_px: config.surface_px,
        }
    }

    pub fn zoom_level(&self) -> usize {
        self.zoom_level
    }

    pub fn pan_offset(&self) -> (i64, i64) {
        (self.pan_x, self.pan_y)
    }

    pub fn cell_size_px(&self) -> u32 {
        CELL_PX_BASE * self.zoom_increments[self.zoom_level]
    }

    /// Cells that fit on the surface at the current magnification.
    fn visible_cells(&self) -> i64 {
        (self.surface_px / self.cell_size_px()) as i64
    }

    /// Computes the visible rectangle: centered on the grid midpoint,
    /// shifted by the pan offset, clamped into the grid. Consumes the
    /// one-shot recenter request armed by zooming out to the floor.
    pub fn window(&mut self, grid_width: usize, grid_height: usize) -> Window {
        if self.recenter && self.zoom_level == 0 {
            self.pan_x = 0;
            self.pan_y = 0;
            self.recenter = false;
        }
        let (start_col, end_col) = Self::axis_span(grid_width, self.visible_cells(), self.pan_x);
        let (start_row, end_row) = Self::axis_span(grid_height, self.visible_cells(), self.pan_y);
        Window {
            start_row,
            end_row,
            start_col,
            end_col,
            cell_size_px: self.cell_size_px(),
        }
    }

    fn axis_span(dim: usize, visible: i64, pan: i64) -> (usize, usize) {
        let dim = dim as i64;
        let visible = visible.min(dim);
        let start = (dim / 2 - visible / 2 + pan).clamp(0, dim - visible);
        (start as usize, (start + visible) as usize)
    }

    /// Button navigation: moves the view one stride in `direction`.
    /// Returns whether the move was applied; a move whose window would
    /// come within the guard margin of the backing store is rejected,
    /// not clipped.
    pub fn pan(&mut self, direction: Direction, grid_width: usize, grid_height: usize) -> bool {
        self.shift(direction, PAN_STRIDE, grid_width, grid_height)
    }

    /// Continuous drag navigation: half the stride and half the guard of
    /// button panning.
    pub fn drag(&mut self, direction: Direction, grid_width: usize, grid_height: usize) -> bool {
        self.shift(direction, DRAG_STRIDE, grid_width, grid_height)
    }

    fn shift(
        &mut self,
        direction: Direction,
        stride: i64,
        grid_width: usize,
        grid_height: usize,
    ) -> bool {
        let (dx, dy) = match direction {
            Direction::Up => (0, -stride),
            Direction::Down => (0, stride),
            Direction::Left => (-stride, 0),
            Direction::Right => (stride, 0),
        };
        // guard margin equals the stride: button moves keep 4 cells clear,
        // drag moves 2
        let guard = stride;
        let visible = self.visible_cells();
        if dx != 0 && !Self::axis_allows(grid_width, visible, self.pan_x + dx, guard) {
            return false;
        }
        if dy != 0 && !Self::axis_allows(grid_height, visible, self.pan_y + dy, guard) {
            return false;
        }
        self.pan_x += dx;
        self.pan_y += dy;
        true
    }

    /// True when the unclamped window for `pan` stays at least `guard`
    /// cells away from both edges of the axis.
    fn axis_allows(dim: usize, visible: i64, pan: i64, guard: i64) -> bool {
        let dim = dim as i64;
        let start = dim / 2 - visible / 2 + pan;
        start >= guard && start + visible <= dim - guard
    }

    /// Adjusts magnification. Zooming out (negative delta) floors at the
    /// widest level and resets the pan; hitting the floor arms a one-shot
    /// recenter consumed by the next `window` call. Zooming in (positive
    /// delta) ceils at the narrowest level and keeps the pan.
    pub fn set_zoom(&mut self, delta: i32) {
        if delta == 0 {
            return;
        }
        let levels = self.zoom_increments.len() as i64 - 1;
        let level = (self.zoom_level as i64 + delta as i64).clamp(0, levels) as usize;
        if delta < 0 {
            self.pan_x = 0;
            self.pan_y = 0;
            if level == 0 {
                self.recenter = true;
            }
        }
        self.zoom_level = level;
    }
}
