use serde::{Deserialize, Serialize};

use super::grid::Cell;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the playfield canvas in pixels
    pub canvas_width: u32,
    /// Height of the playfield canvas in pixels
    pub canvas_height: u32,
    /// Side length of one square tile in pixels
    pub tile_size: u32,
    /// Maximum number of food items active at once
    pub max_food: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 800,
            tile_size: 20,
            max_food: 3,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom canvas size
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            ..Default::default()
        }
    }

    /// Create a small playfield for testing
    pub fn small() -> Self {
        Self::new(160, 160)
    }

    /// Number of grid columns the canvas holds
    pub fn grid_cols(&self) -> i32 {
        (self.canvas_width / self.tile_size) as i32
    }

    /// Number of grid rows the canvas holds
    pub fn grid_rows(&self) -> i32 {
        (self.canvas_height / self.tile_size) as i32
    }

    /// Cell the snake starts on, one tile in from the top-left corner
    pub fn snake_start(&self) -> Cell {
        Cell::new(1, 1)
    }
}
