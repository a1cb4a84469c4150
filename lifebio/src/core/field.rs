//! Formatting grids for a length-capped profile text field, and reading them
//! back.
//!
//! The field uses its own alphabet: in full mode `■` marks a live cell and `□`
//! a dead one; half mode keeps the half-block glyphs and writes `□` for an
//! all-dead pair. Writing flattens the rendering onto one line and cuts it at
//! the field's length cap. Reading inflates whatever survived back to the
//! configured dimensions, so the logical grid size never drifts.

use crate::core::codec::{inflate, inflate_half, truncate};
use crate::core::glyphs::{BLANK, FIELD_ALIVE, FIELD_DEAD, FULL_BLOCK, LOWER_HALF, UPPER_HALF};
use crate::core::grid::Grid;
use crate::core::render::DisplayMode;
use crate::error::LifeResult;

/// Length cap of the reference deployment's bio field.
pub const DEFAULT_MAX_LENGTH: usize = 160;

/// A grid formatted for the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldText {
    /// Flattened text sent to the field, at most `max_length` characters.
    pub field: String,
    /// Multi-line rendering in the field alphabet, for previews.
    pub display: String,
}

impl FieldText {
    /// True when the flattened rendering had to be cut to fit.
    pub fn is_truncated(&self) -> bool {
        self.field.chars().count() < self.display.chars().filter(|c| *c != '\n').count()
    }
}

/// Grid read back from the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedField {
    pub grid: Grid,
    /// Field characters the text was short of; their cells were inflated dead.
    pub missing_chars: usize,
}

pub fn format_for_field(grid: &Grid, mode: DisplayMode, max_length: usize) -> FieldText {
    let display: String = mode
        .render(grid)
        .chars()
        .map(|glyph| to_field_glyph(glyph, mode))
        .collect();
    FieldText {
        field: truncate(&display, max_length),
        display,
    }
}

/// Rebuild a `height x width` grid from field text written in `mode`.
pub fn parse_field(
    text: &str,
    mode: DisplayMode,
    height: usize,
    width: usize,
) -> LifeResult<ParsedField> {
    let normalized: String = text.chars().map(from_field_glyph).collect();
    let grid = match mode {
        DisplayMode::Full => inflate(&normalized, height, width)?,
        DisplayMode::Half => inflate_half(&normalized, height, width)?,
    };
    let expected = field_chars(mode, height, width);
    let present = text.chars().filter(|c| !matches!(c, '\n' | '\r')).count();
    Ok(ParsedField {
        grid,
        missing_chars: expected.saturating_sub(present),
    })
}

/// Display mode a field was written in, judged by its glyphs.
///
/// Full mode only ever writes `■`/`□`; half mode writes half blocks, `█` and
/// `□`. A field of nothing but `□` (or nothing at all) is dead in either mode,
/// so `None` is returned.
pub fn detect_field_mode(text: &str) -> Option<DisplayMode> {
    text.chars().find_map(|glyph| match glyph {
        FIELD_ALIVE => Some(DisplayMode::Full),
        UPPER_HALF | LOWER_HALF | FULL_BLOCK => Some(DisplayMode::Half),
        _ => None,
    })
}

/// Characters a `height x width` grid occupies in the field, before truncation.
pub fn field_chars(mode: DisplayMode, height: usize, width: usize) -> usize {
    mode.lines_for(height) * width
}

/// Largest dimensions, no bigger than requested, whose rendering fits in
/// `max_length` field characters.
///
/// Half mode packs two rows per character, so it keeps the requested column
/// count whenever a single column-wide line fits. Full mode shrinks rows first
/// and then columns.
pub fn fit_dimensions(
    rows: usize,
    columns: usize,
    max_length: usize,
    mode: DisplayMode,
) -> (usize, usize) {
    if field_chars(mode, rows, columns) <= max_length {
        return (rows, columns);
    }
    match mode {
        DisplayMode::Half => {
            if columns <= max_length {
                let pair_rows = (max_length / columns).max(1);
                (rows.min(pair_rows * 2), columns)
            } else {
                (1, max_length)
            }
        }
        DisplayMode::Full => {
            if rows <= 1 {
                (1, columns.min(max_length))
            } else {
                let fit_rows = rows.min((max_length / columns).max(1));
                (fit_rows, columns.min(max_length / fit_rows))
            }
        }
    }
}

fn to_field_glyph(glyph: char, mode: DisplayMode) -> char {
    match (glyph, mode) {
        (BLANK, _) => FIELD_DEAD,
        (FULL_BLOCK, DisplayMode::Full) => FIELD_ALIVE,
        _ => glyph,
    }
}

fn from_field_glyph(glyph: char) -> char {
    match glyph {
        FIELD_ALIVE => FULL_BLOCK,
        FIELD_DEAD => BLANK,
        _ => glyph,
    }
}
