//! Loading grids from text files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::codec::{ParseMode, decode};
use crate::core::grid::Grid;

/// Read and decode the grid stored at `path`.
pub fn load_grid(path: &Path, mode: ParseMode) -> Result<Grid> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let grid = decode(&contents, mode).with_context(|| format!("parse grid {}", path.display()))?;
    Ok(grid)
}
