#![warn(clippy::all)]

//! Conway's Game of Life on an effectively unbounded plane.
//!
//! The backing grid grows symmetrically whenever live activity approaches
//! its edge, and a pannable, zoomable viewport maps a fixed logical
//! rendering surface onto grid coordinates. Window creation, input wiring
//! and drawing live in the host; they drive this core through [`Command`]
//! and read back through [`World::window`] and [`Grid::get`].

mod config;
mod engine;
mod grid;
mod viewport;
mod world;

pub use config::Config;
pub use engine::Engine;
pub use grid::{Grid, GridError};
pub use viewport::{Direction, Viewport, Window};
pub use world::{Command, SharedWorld, World};
