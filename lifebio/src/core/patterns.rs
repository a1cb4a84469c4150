//! Named seed patterns, anchored at the top-left corner.

use crate::core::grid::Grid;
use crate::error::{LifeError, LifeResult};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    Pattern {
        name: "blinker",
        cells: &[(1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(1, 1), (1, 2), (1, 3), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

impl Pattern {
    /// Rows and columns spanned by the pattern.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(rows, cols), &(row, col)| {
            (rows.max(row + 1), cols.max(col + 1))
        })
    }

    /// Place the pattern on an otherwise dead grid. Cells beyond the grid wrap.
    pub fn place(&self, height: usize, width: usize) -> LifeResult<Grid> {
        Grid::with_alive(height, width, self.cells)
    }
}

/// Look a pattern up by name, ignoring case.
pub fn find_pattern(name: &str) -> LifeResult<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
}
