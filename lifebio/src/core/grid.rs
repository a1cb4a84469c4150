//! Immutable toroidal grid snapshots.
//!
//! A [`Grid`] is created once and never mutated. Every coordinate is taken
//! modulo the grid dimensions, so the grid has no edges: the neighbor of the
//! last row is the first row, and likewise for columns.

use crate::error::{LifeError, LifeResult};

/// Row/column offsets of the eight cells surrounding a coordinate.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rectangular `height x width` matrix of cell states, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid of the given dimensions.
    pub fn new(height: usize, width: usize) -> LifeResult<Self> {
        Self::from_fn(height, width, |_, _| false)
    }

    /// Build a grid by evaluating `alive(row, col)` for every coordinate.
    pub fn from_fn<F>(height: usize, width: usize, alive: F) -> LifeResult<Self>
    where
        F: FnMut(usize, usize) -> bool,
    {
        check_dimensions(height, width)?;
        Ok(Self::generate(height, width, alive))
    }

    /// Grid with the listed `(row, col)` cells alive. Coordinates wrap.
    pub fn with_alive(height: usize, width: usize, alive: &[(usize, usize)]) -> LifeResult<Self> {
        check_dimensions(height, width)?;
        let mut cells = vec![false; height * width];
        for &(row, col) in alive {
            cells[(row % height) * width + col % width] = true;
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Infallible constructor for callers that already hold valid dimensions.
    pub(crate) fn generate<F>(height: usize, width: usize, mut alive: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        debug_assert!(height >= 1 && width >= 1);
        let mut cells = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                cells.push(alive(row, col));
            }
        }
        Self {
            height,
            width,
            cells,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// State of the cell at `(row, col)`, wrapping both coordinates.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[(row % self.height) * self.width + col % self.width]
    }

    /// Number of live cells among the eight toroidal neighbors of `(row, col)`.
    ///
    /// Each offset is counted separately, so on grids narrower than three
    /// cells the same physical cell can be counted more than once.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let r = wrap(row, dr, self.height);
            let c = wrap(col, dc, self.width);
            if self.cells[r * self.width + c] {
                count += 1;
            }
        }
        count
    }

    /// Rows in order, each exactly `width` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// Coordinates of live cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(index, _)| (index / self.width, index % self.width))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    pub fn is_extinct(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Copy of this grid at new dimensions: the overlapping top-left region is
    /// kept, everything else is dead.
    pub fn resized(&self, height: usize, width: usize) -> LifeResult<Self> {
        Self::from_fn(height, width, |row, col| {
            row < self.height && col < self.width && self.cells[row * self.width + col]
        })
    }
}

fn check_dimensions(height: usize, width: usize) -> LifeResult<()> {
    if height == 0 || width == 0 {
        return Err(LifeError::InvalidDimensions { height, width });
    }
    Ok(())
}

fn wrap(index: usize, delta: isize, len: usize) -> usize {
    // Grids are small (a few hundred cells), so the isize round trip is safe.
    (index as isize + delta).rem_euclid(len as isize) as usize
}
