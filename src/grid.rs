//! # Cell Grid
//!
//! The cell/link model behind the loop generator. Every cell carries four
//! edge-link parity flags, and [`Grid::toggle`] flips a cell together with
//! the mirrored flags of its four neighbors. Both views of every shared edge
//! therefore always agree, and every point of the (width+1)x(height+1)
//! lattice keeps even degree, which is exactly the condition for the emitted
//! segments to decompose into closed loops.

use thiserror::Error;

/// One unit square of the grid.
///
/// The four flags are parity bits for the cell's edges. They are only ever
/// flipped, never set absolutely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Cell {
    fn toggle_all(&mut self) {
        self.top = !self.top;
        self.bottom = !self.bottom;
        self.left = !self.left;
        self.right = !self.right;
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must be larger than 2x2, got {width}x{height}")]
    TooSmall { width: usize, height: usize },
}

/// A width x height arena of cells, row-major, with (0,0) at the top-left,
/// x growing rightward and y growing downward.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-blank grid. Dimensions of 2 or less leave no interior
    /// to toggle and are rejected.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width <= 2 || height <= 2 {
            return Err(GridError::TooSmall { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns a copy of the cell at (x, y).
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        assert!(x < self.width);
        assert!(y < self.height);
        self.cells[y * self.width + x]
    }

    /// Flips the four flags of cell (x, y) together with the mirrored flags
    /// of its four neighbors.
    ///
    /// Only the interior may be toggled. Keeping the boundary ring out of
    /// reach means neighbor indexing never leaves the arena, so a toggle on
    /// the ring is a programming error and panics.
    pub fn toggle(&mut self, x: usize, y: usize) {
        assert!(1 <= x && x < self.width - 1);
        assert!(1 <= y && y < self.height - 1);

        let w = self.width;
        self.cells[y * w + x].toggle_all();
        self.cells[y * w + (x - 1)].right ^= true;
        self.cells[y * w + (x + 1)].left ^= true;
        self.cells[(y + 1) * w + x].top ^= true;
        self.cells[(y - 1) * w + x].bottom ^= true;
    }

    /// Emits the active links as a flat list of point-lattice indices,
    /// consumed pairwise. Each cell contributes at most its top and left
    /// edges; a bottom or right edge is always some neighbor's top or left,
    /// so two sides per cell cover every edge exactly once.
    ///
    /// The lattice is (width + 1) x (height + 1), row-major.
    pub fn links(&self) -> Vec<usize> {
        let pw = self.width + 1;
        let mut indices = vec![];
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                if cell.top {
                    indices.push(y * pw + x);
                    indices.push(y * pw + x + 1);
                }
                if cell.left {
                    indices.push(y * pw + x);
                    indices.push((y + 1) * pw + x);
                }
            }
        }
        indices
    }
}
