//! Characters used to read and draw cells.

/// Full block: one live cell, or a live top/bottom pair in half mode.
pub const FULL_BLOCK: char = '█';
/// Only the top cell of a half-mode pair is alive.
pub const UPPER_HALF: char = '▀';
/// Only the bottom cell of a half-mode pair is alive.
pub const LOWER_HALF: char = '▄';
pub const BLANK: char = ' ';

pub const ALIVE_DIGIT: char = '1';
pub const DEAD_DIGIT: char = '0';

/// Live cell in the bio field. Renders at a steadier width than `█` in
/// proportional fonts.
pub const FIELD_ALIVE: char = '■';
/// Dead cell (or dead pair) in the bio field.
pub const FIELD_DEAD: char = '□';

/// True for the characters the text codec reads as a live cell.
pub fn is_alive_glyph(glyph: char) -> bool {
    matches!(glyph, ALIVE_DIGIT | FULL_BLOCK)
}

/// Glyph for a vertically stacked pair of cells.
pub fn half_glyph(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (false, false) => BLANK,
        (true, false) => UPPER_HALF,
        (false, true) => LOWER_HALF,
        (true, true) => FULL_BLOCK,
    }
}

/// `(top, bottom)` states encoded by a half-mode glyph; unknown glyphs are dead.
pub fn split_half_glyph(glyph: char) -> (bool, bool) {
    match glyph {
        UPPER_HALF => (true, false),
        LOWER_HALF => (false, true),
        FULL_BLOCK => (true, true),
        _ => (false, false),
    }
}
