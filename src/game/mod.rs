//! Core game logic module for Snake
//!
//! This module contains all the simulation logic without any I/O or rendering
//! dependencies. Everything here is deterministic given an RNG, which makes
//! it directly testable.

pub mod config;
pub mod food;
pub mod grid;
pub mod heading;
pub mod snake;
pub mod world;

// Re-export commonly used types
pub use config::GameConfig;
pub use food::{FoodItem, FoodKind, FoodSpawner};
pub use grid::{Cell, CellKind, Grid};
pub use heading::{Heading, InputSnapshot};
pub use snake::Snake;
pub use world::World;
