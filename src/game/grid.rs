use rand::Rng;

use super::heading::Heading;

/// A cell on the game grid, identified by integer column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Move by a (dcol, drow) delta
    pub fn moved_by(&self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }

    /// Move one cell along a heading
    pub fn toward(&self, heading: Heading) -> Self {
        let (dcol, drow) = heading.delta();
        self.moved_by(dcol, drow)
    }
}

/// Classification of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Outer ring; lethal to the snake
    Boundary,
    /// Playable inner cell
    Interior,
}

/// The fixed play field: cols x rows cells with a one-cell boundary ring
///
/// Built once at world construction from the canvas dimensions and tile size,
/// never mutated afterwards. The ring is exactly the outermost row and column
/// on each side; every grid coordinate is classified exactly once.
#[derive(Debug, Clone)]
pub struct Grid {
    cols: i32,
    rows: i32,
}

impl Grid {
    pub fn new(cols: i32, rows: i32) -> Self {
        Self { cols, rows }
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Whether the cell lies on the grid at all
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.col < self.cols && cell.row >= 0 && cell.row < self.rows
    }

    /// Classify a cell as boundary ring or interior
    ///
    /// Total over all coordinates: anything not strictly inside the ring
    /// classifies as Boundary, so callers never need a bounds check first.
    pub fn classify(&self, cell: Cell) -> CellKind {
        let interior = cell.col > 0
            && cell.row > 0
            && cell.col < self.cols - 1
            && cell.row < self.rows - 1;
        if interior {
            CellKind::Interior
        } else {
            CellKind::Boundary
        }
    }

    /// All interior cells, row-major
    pub fn interior_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.all_cells()
            .filter(|&cell| self.classify(cell) == CellKind::Interior)
    }

    /// All boundary-ring cells, row-major
    pub fn boundary_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.all_cells()
            .filter(|&cell| self.classify(cell) == CellKind::Boundary)
    }

    /// Draw one cell uniformly at random from the full grid, ring included
    pub fn sample_cell<R: Rng>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.cols), rng.gen_range(0..self.rows))
    }

    fn all_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Cell::new(col, row)))
    }
}
