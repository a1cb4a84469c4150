//! Text renderers at one and two cells per character.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::glyphs::{BLANK, FULL_BLOCK, half_glyph};
use crate::core::grid::Grid;
use crate::error::LifeError;

/// Vertical resolution of rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DisplayMode {
    /// One grid row per text line.
    Full,
    /// Two grid rows per text line, using half-block glyphs.
    #[default]
    Half,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 2] = [DisplayMode::Full, DisplayMode::Half];

    pub fn render(self, grid: &Grid) -> String {
        match self {
            DisplayMode::Full => render_full(grid),
            DisplayMode::Half => render_half(grid),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Full => "full",
            DisplayMode::Half => "half",
        }
    }

    /// Text lines needed to show `height` grid rows.
    pub fn lines_for(self, height: usize) -> usize {
        match self {
            DisplayMode::Full => height,
            DisplayMode::Half => height.div_ceil(2),
        }
    }
}

/// `█` for live cells, space for dead ones, one line per row.
pub fn render_full(grid: &Grid) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|&alive| if alive { FULL_BLOCK } else { BLANK })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pair rows (0 and 1, 2 and 3, ...) into one line of half-block glyphs.
///
/// An odd final row is paired with an all-dead row. The result has
/// `ceil(height / 2)` lines of exactly `width` characters.
pub fn render_half(grid: &Grid) -> String {
    let rows: Vec<&[bool]> = grid.rows().collect();
    rows.chunks(2)
        .map(|pair| {
            let top = pair[0];
            let bottom = pair.get(1).copied();
            top.iter()
                .enumerate()
                .map(|(col, &upper)| half_glyph(upper, bottom.is_some_and(|row| row[col])))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl FromStr for DisplayMode {
    type Err = LifeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(DisplayMode::Full),
            "half" => Ok(DisplayMode::Half),
            _ => Err(LifeError::UnknownDisplayMode(value.to_string())),
        }
    }
}

impl TryFrom<String> for DisplayMode {
    type Error = LifeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplayMode> for String {
    fn from(mode: DisplayMode) -> Self {
        mode.name().to_string()
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
