use crate::{Config, Direction, Engine, Grid, GridError, Viewport, Window};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// The closed set of actions external hosts can drive the core with.
/// Button handlers, key bindings and click translation all funnel into
/// this one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Advance one generation.
    Step,
    /// Flip one cell between generations.
    ToggleCell { row: usize, col: usize },
    /// Button navigation, stride 4.
    Pan(Direction),
    /// Mouse-drag navigation, stride 2.
    Drag(Direction),
    /// Positive zooms in, negative zooms out.
    Zoom(i32),
}

/// Shared handle for the two external cadences (tick and render). The
/// mutex is the serialization rule: a step's grid replacement and a manual
/// toggle can never interleave, and readers always observe a complete
/// generation.
pub type SharedWorld = Arc<Mutex<World>>;

/// Explicit simulation context: grid, stepper, viewport and generation
/// counter in one owned value. External tick and render loops thread this
/// through; there is no process-wide state.
#[derive(Debug, Clone)]
pub struct World {
    config: Config,
    engine: Engine,
    grid: Grid,
    viewport: Viewport,
    generation: u64,
}

impl World {
    /// A world with an all-dead grid at the configured dimensions.
    pub fn new(config: Config) -> Self {
        config.assert_valid();
        let grid = Grid::new(config.initial_width, config.initial_height);
        Self {
            engine: Engine::new(&config),
            viewport: Viewport::new(&config),
            grid,
            generation: 0,
            config,
        }
    }

    /// A world seeded the way the game starts: the initially visible
    /// window, inset by two cells on each side, randomized at the
    /// configured fill rate.
    pub fn seeded(config: Config, seed: Option<u64>) -> Self {
        let mut world = Self::new(config);
        let window = world.viewport.window(world.grid.width(), world.grid.height());
        world.grid.randomize_region(
            window.start_row + 2..window.end_row.saturating_sub(2),
            window.start_col + 2..window.end_col.saturating_sub(2),
            world.config.fill_rate,
            seed,
        );
        world
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Dispatches one command. Pan and zoom moves that the clamp policy
    /// rejects are absorbed silently; only a toggle outside the grid
    /// surfaces an error.
    pub fn apply(&mut self, command: Command) -> Result<(), GridError> {
        debug!(?command, generation = self.generation, "applying command");
        match command {
            Command::Step => {
                self.step();
            }
            Command::ToggleCell { row, col } => {
                self.grid.toggle(row, col)?;
            }
            Command::Pan(direction) => {
                self.viewport
                    .pan(direction, self.grid.width(), self.grid.height());
            }
            Command::Drag(direction) => {
                self.viewport
                    .drag(direction, self.grid.width(), self.grid.height());
            }
            Command::Zoom(delta) => {
                self.viewport.set_zoom(delta);
            }
        }
        Ok(())
    }

    /// Advances one generation. The new grid replaces the old one
    /// wholesale, so a caller holding `&self` between steps never sees a
    /// partially copied generation.
    pub fn step(&mut self) {
        self.grid = self.engine.step(&self.grid);
        self.generation += 1;
    }

    /// Current visible rectangle for the renderer. Takes `&mut self`
    /// because reaching the widest zoom arms a one-shot recenter that
    /// this call consumes.
    pub fn window(&mut self) -> Window {
        self.viewport.window(self.grid.width(), self.grid.height())
    }

    /// Wraps the world for use from separate tick and render loops.
    pub fn into_shared(self) -> SharedWorld {
        Arc::new(Mutex::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_covers_only_the_inset_visible_window() {
        let world = World::seeded(Config::default(), Some(9));
        let grid = world.grid();
        assert!(grid.population() > 0);
        // visible window is 90..110 at the initial zoom; seeding insets by 2
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                if !(92..108).contains(&row) || !(92..108).contains(&col) {
                    assert_eq!(grid.get(row, col), Ok(false), "({row}, {col}) seeded");
                }
            }
        }
    }

    #[test]
    fn toggle_out_of_bounds_is_an_error_and_changes_nothing() {
        let mut world = World::new(Config::default());
        let before = world.grid().clone();
        assert!(world.apply(Command::ToggleCell { row: 200, col: 0 }).is_err());
        assert_eq!(world.grid(), &before);
    }

    #[test]
    fn step_command_advances_the_generation_counter() {
        let mut world = World::new(Config::default());
        world.apply(Command::Step).unwrap();
        world.apply(Command::Step).unwrap();
        assert_eq!(world.generation(), 2);
    }

    #[test]
    fn rejected_pan_is_absorbed_silently() {
        let mut world = World::new(Config::default());
        world.apply(Command::Zoom(-10)).unwrap();
        let before = world.window();
        assert!(world.apply(Command::Pan(Direction::Left)).is_ok());
        assert_eq!(world.window(), before);
    }
}
