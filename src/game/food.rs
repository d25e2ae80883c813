use rand::Rng;
use rand::seq::SliceRandom;

use super::grid::{Cell, CellKind, Grid};

/// The four food varieties
///
/// Each kind carries a point value and a relative sampling weight; weights do
/// not need to sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodKind {
    Red,
    Yellow,
    Orange,
    Cyan,
}

impl FoodKind {
    pub const ALL: [FoodKind; 4] = [
        FoodKind::Red,
        FoodKind::Yellow,
        FoodKind::Orange,
        FoodKind::Cyan,
    ];

    /// Points awarded when the snake consumes this kind
    pub fn score(self) -> i32 {
        match self {
            FoodKind::Red => 1,
            FoodKind::Yellow => 2,
            FoodKind::Orange => 5,
            FoodKind::Cyan => 10,
        }
    }

    /// Relative sampling weight
    pub fn weight(self) -> f64 {
        match self {
            FoodKind::Red => 0.5,
            FoodKind::Yellow => 0.3,
            FoodKind::Orange => 0.1,
            FoodKind::Cyan => 0.05,
        }
    }

    /// Draw one kind at random, weighted by `weight`
    pub fn sample<R: Rng>(rng: &mut R) -> FoodKind {
        *FoodKind::ALL
            .choose_weighted(rng, |kind| kind.weight())
            .expect("food weights are valid")
    }
}

/// One food item placed on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodItem {
    pub cell: Cell,
    pub kind: FoodKind,
}

/// Weighted-random spawn policy
///
/// Stateless apart from the food cap; the caller owns the active set and the
/// RNG handle.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    max_food: usize,
}

impl FoodSpawner {
    pub fn new(max_food: usize) -> Self {
        Self { max_food }
    }

    /// Attempt one spawn: draw a kind, then a cell uniformly over the full
    /// grid, and discard the draw outright if the cell is on the boundary
    /// ring or already carries food. No retry within one call.
    ///
    /// The snake's body is deliberately not consulted: food may appear under
    /// the snake and sit there until the head passes over it.
    pub fn try_spawn<R: Rng>(
        &self,
        rng: &mut R,
        grid: &Grid,
        active: &[FoodItem],
    ) -> Option<FoodItem> {
        if active.len() >= self.max_food {
            return None;
        }

        let kind = FoodKind::sample(rng);
        let cell = grid.sample_cell(rng);

        if grid.classify(cell) == CellKind::Boundary {
            return None;
        }
        if active.iter().any(|item| item.cell == cell) {
            return None;
        }

        Some(FoodItem { cell, kind })
    }
}
