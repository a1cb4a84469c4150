//! Choosing the initial grid for `lifebio run` and `lifebio update`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::core::codec::ParseMode;
use crate::core::grid::Grid;
use crate::core::patterns::{GLIDER, find_pattern};
use crate::core::random::{random_by_day, random_density};
use crate::io::grid_file::load_grid;

/// Where the initial grid comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Seed {
    /// Grid text file, resized to the configured dimensions.
    File { path: PathBuf, mode: ParseMode },
    /// Random board with the given live-cell probability.
    Density(f64),
    /// Random board seeded from a calendar date.
    ByDay(NaiveDate),
    /// Named pattern at the top-left corner.
    Pattern(String),
}

/// Build the initial `rows x columns` grid for `seed`.
pub fn seed_grid(seed: &Seed, rows: usize, columns: usize) -> Result<Grid> {
    let grid = match seed {
        Seed::File { path, mode } => {
            info!(path = %path.display(), "loading grid from file");
            let loaded = load_grid(path, *mode)?;
            if (loaded.height(), loaded.width()) == (rows, columns) {
                loaded
            } else {
                info!(
                    from = %format!("{}x{}", loaded.height(), loaded.width()),
                    to = %format!("{rows}x{columns}"),
                    "resizing grid"
                );
                loaded.resized(rows, columns)?
            }
        }
        Seed::Density(density) => {
            info!(density, "generating random board");
            random_density(rows, columns, *density)?
        }
        Seed::ByDay(date) => {
            info!(%date, "generating board for date");
            random_by_day(rows, columns, *date)?
        }
        Seed::Pattern(name) => {
            let pattern = find_pattern(name)?;
            let (height, width) = pattern.extent();
            if height > rows || width > columns {
                warn!(
                    pattern = pattern.name,
                    extent = %format!("{height}x{width}"),
                    grid = %format!("{rows}x{columns}"),
                    "pattern is larger than the grid and wraps onto itself"
                );
            }
            pattern
                .place(rows, columns)
                .with_context(|| format!("place pattern {name}"))?
        }
    };
    debug!(population = grid.population(), "seeded grid");
    Ok(grid)
}

/// Glider at the top-left corner; the fallback board when nothing else is given.
pub fn default_grid(rows: usize, columns: usize) -> Result<Grid> {
    if rows < 3 || columns < 3 {
        return Ok(Grid::new(rows, columns)?);
    }
    Ok(GLIDER.place(rows, columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;

    #[test]
    fn file_seed_is_resized_to_configured_dimensions() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("grid.txt");
        std::fs::write(&path, "111\n111\n").expect("write");
        let grid = seed_grid(
            &Seed::File {
                path,
                mode: ParseMode::Strict,
            },
            3,
            5,
        )
        .expect("seed");
        assert_eq!((grid.height(), grid.width()), (3, 5));
        assert_eq!(grid.population(), 6);
    }

    #[test]
    fn density_seed_validates_density() {
        let err = seed_grid(&Seed::Density(2.0), 3, 3).expect_err("density");
        assert!(matches!(
            err.downcast_ref::<LifeError>(),
            Some(LifeError::InvalidDensity(_))
        ));
    }

    #[test]
    fn by_day_seed_is_deterministic() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).expect("date");
        let a = seed_grid(&Seed::ByDay(date), 5, 33).expect("seed");
        let b = seed_grid(&Seed::ByDay(date), 5, 33).expect("seed");
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_pattern_is_reported() {
        let err = seed_grid(&Seed::Pattern("ufo".to_string()), 5, 5).expect_err("pattern");
        assert!(matches!(
            err.downcast_ref::<LifeError>(),
            Some(LifeError::UnknownPattern(_))
        ));
    }

    #[test]
    fn pattern_larger_than_grid_wraps() {
        // The beacon spans 4x4; on a 3x3 torus its far corner lands on row 0.
        let grid = seed_grid(&Seed::Pattern("beacon".to_string()), 3, 3).expect("seed");
        assert_eq!((grid.height(), grid.width()), (3, 3));
        assert!(grid.is_alive(0, 0));
        assert!(grid.population() < 8);
    }

    #[test]
    fn default_grid_is_a_glider_when_it_fits() {
        let grid = default_grid(5, 33).expect("grid");
        assert_eq!(
            grid.alive_cells().collect::<Vec<_>>(),
            vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
        assert!(default_grid(2, 10).expect("grid").is_extinct());
    }
}
