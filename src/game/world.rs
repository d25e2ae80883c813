use rand::Rng;
use rand::rngs::ThreadRng;

use super::config::GameConfig;
use super::food::{FoodItem, FoodSpawner};
use super::grid::Grid;
use super::heading::{Heading, InputSnapshot};
use super::snake::Snake;

/// The world: grid, snake, active food set, and the terminal flag
///
/// Owns every mutable piece of the simulation. The grid is built once and
/// only ever read after that; the RNG is threaded through explicitly so a
/// seeded world replays the same spawn sequence.
#[derive(Debug)]
pub struct World<R = ThreadRng> {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Vec<FoodItem>,
    spawner: FoodSpawner,
    is_game_over: bool,
    rng: R,
}

impl World<ThreadRng> {
    /// Create a world from `config` using the thread-local RNG
    pub fn new(config: GameConfig) -> Self {
        World::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> World<R> {
    /// Create a world from `config` with an explicit RNG
    pub fn with_rng(config: GameConfig, rng: R) -> World<R> {
        let grid = Grid::new(config.grid_cols(), config.grid_rows());
        let snake = Snake::new(config.snake_start(), Heading::Right);
        let spawner = FoodSpawner::new(config.max_food);
        World {
            config,
            grid,
            snake,
            food: Vec::new(),
            spawner,
            is_game_over: false,
            rng,
        }
    }

    /// Advance the simulation by one tick. Does nothing once the terminal
    /// flag is set; `reset` is the only way out of that state.
    pub fn tick(&mut self, input: InputSnapshot) {
        if self.is_game_over {
            return;
        }

        self.snake
            .advance(input.requested_heading(), &self.grid, &mut self.food);

        if self.snake.is_dead() {
            self.is_game_over = true;
        }
    }

    /// Run one spawn attempt, returning the item if one was placed. At most
    /// one item is added per call. Driven by its own timer, so it keeps
    /// firing even while the game-over screen is up.
    pub fn spawn_food(&mut self) -> Option<FoodItem> {
        let item = self.spawner.try_spawn(&mut self.rng, &self.grid, &self.food)?;
        self.food.push(item);
        Some(item)
    }

    /// Rebuild the snake and food set from scratch; the RNG keeps its state
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.config.snake_start(), Heading::Right);
        self.food.clear();
        self.is_game_over = false;
    }
}

// Read-only views, usable without an RNG bound (the renderer relies on this)
impl<R> World<R> {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Active food items, in spawn order
    pub fn food(&self) -> &[FoodItem] {
        &self.food
    }

    /// Current score, projected from the snake (-1 once dead)
    pub fn score(&self) -> i32 {
        self.snake.score()
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }
}
