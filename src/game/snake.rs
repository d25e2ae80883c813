use super::food::FoodItem;
use super::grid::{Cell, CellKind, Grid};
use super::heading::Heading;

/// Score value that marks the snake as dead
const DEAD_SCORE: i32 = -1;

/// The snake: an ordered run of body cells plus a heading and a score
///
/// The head is the first body element, the tail the last. The score is a
/// signed scalar where -1 marks death; food values only ever add to it, so a
/// snake that died earlier in a tick cannot come back alive within it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Cell>,
    heading: Heading,
    score: i32,
}

impl Snake {
    /// Create a single-segment snake at `start`, facing `heading`
    pub fn new(start: Cell, heading: Heading) -> Self {
        Self {
            body: vec![start],
            heading,
            score: 0,
        }
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// All body cells, head first
    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Whether the death sentinel has been set
    pub fn is_dead(&self) -> bool {
        self.score == DEAD_SCORE
    }

    /// Apply a requested heading change; a 180-degree reversal is ignored,
    /// perpendicular turns always take effect
    pub fn set_heading(&mut self, requested: Heading) {
        if !requested.is_opposite(self.heading) {
            self.heading = requested;
        }
    }

    /// Advance one tick, in fixed order: apply the pending heading, resolve
    /// collisions against the current head cell, shift the body, then step
    /// the head one cell along the heading.
    ///
    /// Collisions are evaluated before the shift, so a food cell entered on
    /// one tick is consumed on the next, while the head sits on it. The shift
    /// still runs on the death tick — only the head step is gated — so the
    /// segment behind the head closes onto the head's cell when the snake
    /// dies.
    pub fn advance(&mut self, requested: Option<Heading>, grid: &Grid, food: &mut Vec<FoodItem>) {
        if let Some(heading) = requested {
            self.set_heading(heading);
        }

        self.resolve_collisions(grid, food);
        self.shift_body();

        if self.score >= 0 {
            self.body[0] = self.body[0].toward(self.heading);
        }
    }

    /// Collision checks in fixed order: active food, then own body, then the
    /// boundary ring. At most one food item is consumed (first match wins);
    /// the body and boundary checks run regardless and their death sentinel
    /// overrides any food credit from the same tick.
    ///
    /// The body check looks at the segments the tick started with: the tail
    /// copy appended by the food branch is not a self-collision.
    fn resolve_collisions(&mut self, grid: &Grid, food: &mut Vec<FoodItem>) {
        let head = self.head();
        let bites_own_body = self.body[1..].contains(&head);

        if let Some(index) = food.iter().position(|item| item.cell == head) {
            let item = food.remove(index);
            self.score += item.kind.score();
            self.grow();
        }

        if bites_own_body {
            self.score = DEAD_SCORE;
        }

        if grid.classify(head) == CellKind::Boundary {
            self.score = DEAD_SCORE;
        }
    }

    /// Append one segment at the tail's current cell; the same tick's shift
    /// carries it forward, so the tail stretches before splitting in two
    fn grow(&mut self) {
        let tail = *self.body.last().unwrap();
        self.body.push(tail);
    }

    /// Each segment takes the cell the segment ahead of it occupied before
    /// the shift; the head is left in place for the caller to step
    fn shift_body(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::food::FoodKind;

    fn grid() -> Grid {
        Grid::new(8, 8)
    }

    fn food_at(col: i32, row: i32, kind: FoodKind) -> FoodItem {
        FoodItem {
            cell: Cell::new(col, row),
            kind,
        }
    }

    #[test]
    fn test_new_snake() {
        let snake = Snake::new(Cell::new(1, 1), Heading::Right);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(1, 1));
        assert_eq!(snake.score(), 0);
        assert!(!snake.is_dead());
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_set_heading_blocks_reversal() {
        let mut snake = Snake::new(Cell::new(3, 3), Heading::Right);

        snake.set_heading(Heading::Left);
        assert_eq!(snake.heading(), Heading::Right);

        snake.set_heading(Heading::Up);
        assert_eq!(snake.heading(), Heading::Up);

        snake.set_heading(Heading::Down);
        assert_eq!(snake.heading(), Heading::Up);

        snake.set_heading(Heading::Up);
        assert_eq!(snake.heading(), Heading::Up);

        snake.set_heading(Heading::Left);
        assert_eq!(snake.heading(), Heading::Left);
    }

    #[test]
    fn test_advance_steps_head_along_heading() {
        let mut snake = Snake::new(Cell::new(3, 3), Heading::Right);
        let mut food = Vec::new();

        snake.advance(None, &grid(), &mut food);
        assert_eq!(snake.head(), Cell::new(4, 3));

        snake.advance(Some(Heading::Down), &grid(), &mut food);
        assert_eq!(snake.head(), Cell::new(4, 4));
    }

    #[test]
    fn test_reversal_request_during_advance_keeps_course() {
        let mut snake = Snake::new(Cell::new(3, 3), Heading::Right);
        let mut food = Vec::new();

        snake.advance(Some(Heading::Left), &grid(), &mut food);
        assert_eq!(snake.heading(), Heading::Right);
        assert_eq!(snake.head(), Cell::new(4, 3));
    }

    #[test]
    fn test_food_is_consumed_the_tick_after_landing() {
        let mut snake = Snake::new(Cell::new(3, 3), Heading::Right);
        let mut food = vec![food_at(4, 3, FoodKind::Orange)];

        // Tick 1: collisions run at (3,3), then the head lands on the food.
        snake.advance(None, &grid(), &mut food);
        assert_eq!(snake.head(), Cell::new(4, 3));
        assert_eq!(snake.score(), 0);
        assert_eq!(food.len(), 1);

        // Tick 2: the head cell matches, so the item is credited and removed.
        snake.advance(None, &grid(), &mut food);
        assert_eq!(snake.score(), 5);
        assert_eq!(snake.len(), 2);
        assert!(food.is_empty());
        assert_eq!(snake.head(), Cell::new(5, 3));
        assert_eq!(snake.body()[1], Cell::new(4, 3));
    }

    #[test]
    fn test_first_food_match_wins() {
        let mut snake = Snake::new(Cell::new(3, 3), Heading::Right);
        // Two items stacked on the same cell: only the first is consumed.
        let mut food = vec![
            food_at(3, 3, FoodKind::Red),
            food_at(3, 3, FoodKind::Cyan),
        ];

        snake.advance(None, &grid(), &mut food);
        assert_eq!(snake.score(), 1);
        assert_eq!(food, vec![food_at(3, 3, FoodKind::Cyan)]);
    }

    #[test]
    fn test_body_follows_the_head() {
        let mut snake = Snake {
            body: vec![Cell::new(4, 3), Cell::new(3, 3), Cell::new(2, 3)],
            heading: Heading::Right,
            score: 0,
        };
        let mut food = Vec::new();

        snake.advance(Some(Heading::Down), &grid(), &mut food);
        pretty_assertions::assert_eq!(
            snake.body(),
            &[Cell::new(4, 4), Cell::new(4, 3), Cell::new(3, 3)]
        );
    }

    #[test]
    fn test_self_collision_sets_death_sentinel() {
        // A U-shaped snake about to bite its own flank.
        let mut snake = Snake {
            body: vec![
                Cell::new(5, 5),
                Cell::new(4, 5),
                Cell::new(4, 6),
                Cell::new(5, 6),
                Cell::new(6, 6),
            ],
            heading: Heading::Down,
            score: 4,
        };
        let mut food = Vec::new();

        snake.advance(None, &grid(), &mut food);
        assert_eq!(snake.head(), Cell::new(5, 6));
        assert!(!snake.is_dead());

        snake.advance(None, &grid(), &mut food);
        assert!(snake.is_dead());
        assert_eq!(snake.score(), -1);
    }

    #[test]
    fn test_boundary_collision_sets_death_sentinel() {
        let mut snake = Snake::new(Cell::new(1, 1), Heading::Left);
        let mut food = Vec::new();

        snake.advance(None, &grid(), &mut food);
        assert_eq!(snake.head(), Cell::new(0, 1));
        assert!(!snake.is_dead());

        snake.advance(None, &grid(), &mut food);
        assert!(snake.is_dead());
        // The head never leaves the grid: the step is gated on the death tick.
        assert_eq!(snake.head(), Cell::new(0, 1));
    }

    #[test]
    fn test_body_still_shifts_on_the_death_tick() {
        let mut snake = Snake {
            body: vec![Cell::new(0, 3), Cell::new(1, 3), Cell::new(2, 3)],
            heading: Heading::Left,
            score: 2,
        };
        let mut food = Vec::new();

        snake.advance(None, &grid(), &mut food);
        assert!(snake.is_dead());
        pretty_assertions::assert_eq!(
            snake.body(),
            &[Cell::new(0, 3), Cell::new(0, 3), Cell::new(1, 3)]
        );
    }

    #[test]
    fn test_death_overrides_food_credit_in_the_same_tick() {
        // Food on a ring cell never happens through the spawner; injected
        // here to pin the check ordering.
        let mut snake = Snake::new(Cell::new(0, 2), Heading::Right);
        let mut food = vec![food_at(0, 2, FoodKind::Cyan)];

        snake.advance(None, &grid(), &mut food);
        assert_eq!(snake.score(), -1);
        assert!(food.is_empty());
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_length_tracks_food_consumed() {
        let mut snake = Snake::new(Cell::new(1, 3), Heading::Right);
        let mut food = vec![
            food_at(2, 3, FoodKind::Red),
            food_at(4, 3, FoodKind::Yellow),
        ];
        let mut consumed = 0;

        for _ in 0..6 {
            let before = food.len();
            snake.advance(None, &grid(), &mut food);
            consumed += before - food.len();
            assert_eq!(snake.len(), 1 + consumed);
        }
        assert_eq!(consumed, 2);
        assert_eq!(snake.score(), 3);
    }
}
