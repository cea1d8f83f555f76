use gol_world::{Command, Config, Engine, Grid, World};

const SEED: u64 = 42;

fn engine() -> Engine {
    Engine::new(&Config::default())
}

fn assert_only_alive(grid: &Grid, alive: &[(usize, usize)]) {
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let expected = alive.contains(&(row, col));
            assert_eq!(
                grid.get(row, col),
                Ok(expected),
                "cell ({row}, {col}) wrong"
            );
        }
    }
}

#[test]
fn step_keeps_dimensions_while_activity_stays_interior() {
    let mut grid = Grid::new(50, 50);
    // random activity at least 10 cells away from every edge
    grid.randomize_region(10..40, 10..40, 0.3, Some(SEED));
    assert!(grid.population() > 0);

    let next = engine().step(&grid);
    assert_eq!(next.width(), 50);
    assert_eq!(next.height(), 50);
}

#[test]
fn expanded_grid_shifts_every_cell_by_half_the_step() {
    let mut grid = Grid::new(40, 40);
    grid.randomize_region(0..40, 0..40, 0.3, Some(SEED));

    let bigger = engine().expanded(&grid);
    assert_eq!(bigger.width(), 56);
    assert_eq!(bigger.height(), 56);
    for row in 0..40 {
        for col in 0..40 {
            assert_eq!(grid.get(row, col), bigger.get(row + 8, col + 8));
        }
    }
    assert_eq!(grid.population(), bigger.population());
}

#[test]
fn step_expands_when_a_still_life_sits_near_an_edge() {
    // a block with its top edge 2 cells from the grid edge, well inside
    // the 5-cell proximity band
    let mut grid = Grid::new(40, 40);
    for (row, col) in [(2, 18), (2, 19), (3, 18), (3, 19)] {
        grid.set(row, col, true).unwrap();
    }

    let next = engine().step(&grid);
    assert_eq!(next.width(), 56);
    assert_eq!(next.height(), 56);
    // centered copy put the block at +8, where it is stable
    assert_only_alive(&next, &[(10, 26), (10, 27), (11, 26), (11, 27)]);

    // far from any edge now, so the next step neither expands nor mutates
    let after = engine().step(&next);
    assert_eq!(after.width(), 56);
    assert_only_alive(&after, &[(10, 26), (10, 27), (11, 26), (11, 27)]);
}

#[test]
fn blinker_oscillates() {
    let mut grid = Grid::new(30, 30);
    for col in 14..17 {
        grid.set(15, col, true).unwrap();
    }

    let next = engine().step(&grid);
    assert_only_alive(&next, &[(14, 15), (15, 15), (16, 15)]);

    let back = engine().step(&next);
    assert_eq!(back, grid);
}

#[test]
fn dead_grids_stay_dead_at_their_size() {
    for (w, h) in [(3, 3), (1, 1), (200, 100)] {
        let grid = Grid::new(w, h);
        let next = engine().step(&grid);
        assert_eq!(next.width(), w);
        assert_eq!(next.height(), h);
        assert_eq!(next.population(), 0);
    }
}

#[test]
fn block_still_life_is_stable_and_never_expands() {
    let mut world = World::new(Config::default());
    for (row, col) in [(100, 100), (100, 101), (101, 100), (101, 101)] {
        world
            .apply(Command::ToggleCell { row, col })
            .expect("block cell in bounds");
    }
    let reference = world.grid().clone();

    for generation in 1..=64 {
        world.apply(Command::Step).unwrap();
        assert_eq!(world.grid(), &reference, "changed at generation {generation}");
    }
    assert_eq!(world.grid().width(), 200);
    assert_eq!(world.grid().height(), 200);
    assert_eq!(world.generation(), 64);
}

#[test]
fn toggle_round_trip_restores_the_seeded_world() {
    let mut world = World::seeded(Config::default(), Some(SEED));
    let before = world.grid().clone();

    world.apply(Command::ToggleCell { row: 95, col: 95 }).unwrap();
    assert_ne!(world.grid(), &before);
    world.apply(Command::ToggleCell { row: 95, col: 95 }).unwrap();
    assert_eq!(world.grid(), &before);
}
