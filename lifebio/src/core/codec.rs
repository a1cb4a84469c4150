//! Text codec for grids, including the lossy truncate/inflate pair used to
//! round-trip a grid through a length-capped text field.

use crate::core::glyphs::{ALIVE_DIGIT, DEAD_DIGIT, is_alive_glyph, split_half_glyph};
use crate::core::grid::Grid;
use crate::error::{LifeError, LifeResult};

/// How [`decode`] treats lines whose length differs from the grid width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Any line whose length differs from the first line is an error.
    Strict,
    /// Width comes from the first non-empty line; shorter lines are padded with
    /// dead cells and longer lines are cut to width.
    #[default]
    Padded,
}

/// Parse a multi-line grid. `1` and `█` are alive, every other character dead.
///
/// Trailing empty lines are ignored, so a final newline is harmless.
pub fn decode(text: &str, mode: ParseMode) -> LifeResult<Grid> {
    let mut lines: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
    while lines.last().is_some_and(Vec::is_empty) {
        lines.pop();
    }
    let width = lines
        .iter()
        .find(|line| !line.is_empty())
        .map(Vec::len)
        .ok_or_else(|| LifeError::MalformedGrid("grid text is empty".to_string()))?;

    if mode == ParseMode::Strict {
        if let Some((index, line)) = lines.iter().enumerate().find(|(_, line)| line.len() != width)
        {
            return Err(LifeError::MalformedGrid(format!(
                "line {} has inconsistent width {} (expected {})",
                index + 1,
                line.len(),
                width
            )));
        }
    }

    Ok(Grid::generate(lines.len(), width, |row, col| {
        lines[row].get(col).copied().is_some_and(is_alive_glyph)
    }))
}

/// Encode with one `1`/`0` character per cell and one line per row.
pub fn encode(grid: &Grid) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|&alive| if alive { ALIVE_DIGIT } else { DEAD_DIGIT })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// First `max_length` cell characters of `text`, flattened onto one line.
///
/// Line breaks are dropped before counting; the length is measured in
/// characters, not bytes.
pub fn truncate(text: &str, max_length: usize) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\n' | '\r'))
        .take(max_length)
        .collect()
}

/// Rebuild a `height x width` grid from possibly truncated text.
///
/// A single-line text is read row-major, `width` characters per row. A
/// multi-line text is read line by line, each line padded or cut to `width`.
/// Any position the text does not reach is dead, and rows past `height` are
/// ignored, so the result always has the requested dimensions.
pub fn inflate(text: &str, height: usize, width: usize) -> LifeResult<Grid> {
    let rows = text_rows(text, width);
    Grid::from_fn(height, width, |row, col| {
        glyph_at(&rows, row, col).is_some_and(is_alive_glyph)
    })
}

/// Half-mode counterpart of [`inflate`]: each character holds a vertically
/// stacked pair of cells, so text row `i` fills grid rows `2i` and `2i + 1`.
pub fn inflate_half(text: &str, height: usize, width: usize) -> LifeResult<Grid> {
    let rows = text_rows(text, width);
    Grid::from_fn(height, width, |row, col| {
        let (top, bottom) = glyph_at(&rows, row / 2, col).map_or((false, false), split_half_glyph);
        if row % 2 == 0 { top } else { bottom }
    })
}

fn text_rows(text: &str, width: usize) -> Vec<Vec<char>> {
    if text.contains('\n') {
        return text.lines().map(|line| line.chars().collect()).collect();
    }
    let flat: Vec<char> = text.chars().collect();
    // `width` is validated by `Grid::from_fn`; guard the chunk size anyway.
    flat.chunks(width.max(1)).map(<[char]>::to_vec).collect()
}

fn glyph_at(rows: &[Vec<char>], row: usize, col: usize) -> Option<char> {
    rows.get(row).and_then(|line| line.get(col)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::grid_from_strs;

    #[test]
    fn decodes_digits_blocks_and_mixed_alphabets() {
        let expected = grid_from_strs(&["101", "010", "101"]);
        assert_eq!(decode("101\n010\n101", ParseMode::Strict), Ok(expected.clone()));
        assert_eq!(decode("█ █\n █ \n█ █", ParseMode::Strict), Ok(expected.clone()));
        assert_eq!(decode("1 █\n0█ \n█01", ParseMode::Strict), Ok(expected));
    }

    #[test]
    fn unknown_characters_decode_as_dead() {
        let grid = decode("1X1\n#1?", ParseMode::Strict).expect("decode");
        assert_eq!(grid, grid_from_strs(&["101", "010"]));
    }

    #[test]
    fn strict_mode_rejects_inconsistent_width() {
        let err = decode("101\n10\n101", ParseMode::Strict).expect_err("strict");
        assert!(matches!(err, LifeError::MalformedGrid(ref msg) if msg.contains("inconsistent width")));
    }

    #[test]
    fn padded_mode_pads_short_lines_and_cuts_long_ones() {
        let grid = decode("101\n1\n01111", ParseMode::Padded).expect("decode");
        assert_eq!(grid, grid_from_strs(&["101", "100", "011"]));
    }

    #[test]
    fn width_comes_from_first_non_empty_line() {
        let grid = decode("\n11\n1", ParseMode::Padded).expect("decode");
        assert_eq!((grid.height(), grid.width()), (3, 2));
        assert_eq!(grid, grid_from_strs(&["00", "11", "10"]));
    }

    #[test]
    fn empty_text_is_malformed_in_both_modes() {
        for mode in [ParseMode::Strict, ParseMode::Padded] {
            assert!(matches!(decode("", mode), Err(LifeError::MalformedGrid(_))));
            assert!(matches!(decode("\n\n", mode), Err(LifeError::MalformedGrid(_))));
        }
    }

    #[test]
    fn trailing_newline_and_crlf_are_accepted() {
        let grid = decode("10\r\n01\r\n", ParseMode::Strict).expect("decode");
        assert_eq!(grid, grid_from_strs(&["10", "01"]));
    }

    #[test]
    fn decode_inverts_encode() {
        let grid = grid_from_strs(&["10010", "01100", "00001"]);
        let text = encode(&grid);
        assert_eq!(text, "10010\n01100\n00001");
        assert_eq!(decode(&text, ParseMode::Strict), Ok(grid));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("██\n██", 3), "███");
        assert_eq!(truncate("ab", 10), "ab");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn inflate_restores_grid_when_nothing_was_cut() {
        let grid = grid_from_strs(&["10110", "01001", "11100"]);
        let field = truncate(&encode(&grid), 15);
        assert_eq!(inflate(&field, 3, 5), Ok(grid.clone()));
        let roomy = truncate(&encode(&grid), 160);
        assert_eq!(inflate(&roomy, 3, 5), Ok(grid));
    }

    #[test]
    fn inflate_kills_cells_beyond_the_cut() {
        let grid = Grid::from_fn(3, 5, |_, _| true).expect("grid");
        let field = truncate(&encode(&grid), 7);
        let restored = inflate(&field, 3, 5).expect("inflate");
        assert_eq!((restored.height(), restored.width()), (3, 5));
        for (index, row) in restored.rows().enumerate() {
            for (col, &alive) in row.iter().enumerate() {
                assert_eq!(alive, index * 5 + col < 7, "({index},{col})");
            }
        }
    }

    #[test]
    fn inflate_reads_multi_line_text_per_line() {
        let grid = inflate("11\n1\n111\n1", 3, 3).expect("inflate");
        assert_eq!(grid, grid_from_strs(&["110", "100", "111"]));
    }

    #[test]
    fn inflate_rejects_zero_dimensions() {
        assert!(matches!(
            inflate("111", 0, 3),
            Err(LifeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn inflate_half_expands_pairs() {
        let grid = inflate_half(" ▄▀█", 2, 4).expect("inflate");
        assert_eq!(grid, grid_from_strs(&["0011", "0101"]));
    }

    #[test]
    fn inflate_half_drops_bottom_of_odd_final_row() {
        let grid = inflate_half("█▄", 3, 1).expect("inflate");
        assert_eq!(grid, grid_from_strs(&["1", "1", "0"]));
    }
}
