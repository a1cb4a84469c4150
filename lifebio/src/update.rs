//! One update cycle of the bio field: read, step once, write back.

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};

use crate::core::field::{
    FieldText, detect_field_mode, field_chars, fit_dimensions, format_for_field, parse_field,
};
use crate::core::grid::Grid;
use crate::core::stepper::step;
use crate::io::bio::BioStore;
use crate::io::config::LifeConfig;
use crate::seed::default_grid;

/// Where the pre-step grid of an update came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSource {
    /// Supplied by the caller (file, random board, pattern).
    Provided,
    /// Parsed from the current field contents.
    Field,
    /// The field was blank, so a glider was seeded.
    DefaultGlider,
}

/// Result of an update cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub source: UpdateSource,
    pub previous: Grid,
    pub next: Grid,
    pub text: FieldText,
    /// False when the write was suppressed by preview mode.
    pub written: bool,
}

/// Advance the grid held in the field by one generation.
///
/// Unless `initial` is given, the current field is read and inflated to the
/// configured dimensions. The stepped grid is formatted in the configured
/// display mode, cut to `max_length`, and written back unless `preview` is set.
#[instrument(skip_all, fields(rules = %cfg.rules, display = %cfg.display, preview = preview))]
pub fn run_update<B: BioStore>(
    store: &B,
    cfg: &LifeConfig,
    initial: Option<Grid>,
    preview: bool,
) -> Result<UpdateOutcome> {
    cfg.validate()?;
    warn_if_field_too_small(cfg);

    let (source, previous) = match initial {
        Some(grid) => (UpdateSource::Provided, grid),
        None => read_field_grid(store, cfg)?,
    };

    let next = step(&previous, cfg.rules);
    debug!(
        before = previous.population(),
        after = next.population(),
        "stepped field grid"
    );
    let text = format_for_field(&next, cfg.display, cfg.max_length);

    let written = if preview {
        info!("preview mode: field not updated");
        false
    } else {
        store.write_bio(&text.field).context("write bio field")?;
        info!(chars = text.field.chars().count(), "field updated");
        true
    };

    Ok(UpdateOutcome {
        source,
        previous,
        next,
        text,
        written,
    })
}

fn read_field_grid<B: BioStore>(store: &B, cfg: &LifeConfig) -> Result<(UpdateSource, Grid)> {
    let current = store.read_bio().context("read bio field")?;
    if current.trim().is_empty() {
        warn!("bio field is empty; seeding a glider");
        return Ok((UpdateSource::DefaultGlider, default_grid(cfg.rows, cfg.columns)?));
    }

    let mode = detect_field_mode(&current).unwrap_or(cfg.display);
    if mode != cfg.display {
        info!(written = %mode, configured = %cfg.display, "field was written in another display mode");
    }
    let parsed = parse_field(&current, mode, cfg.rows, cfg.columns)?;

    let capped = field_chars(mode, cfg.rows, cfg.columns).min(cfg.max_length);
    let expected_missing = field_chars(mode, cfg.rows, cfg.columns) - capped;
    if parsed.missing_chars > expected_missing {
        warn!(
            missing = parsed.missing_chars,
            "bio field is shorter than expected; missing cells are dead"
        );
    } else if parsed.missing_chars > 0 {
        debug!(
            missing = parsed.missing_chars,
            "inflated truncated field tail as dead cells"
        );
    }
    Ok((UpdateSource::Field, parsed.grid))
}

fn warn_if_field_too_small(cfg: &LifeConfig) {
    let needed = field_chars(cfg.display, cfg.rows, cfg.columns);
    if needed > cfg.max_length {
        let (rows, columns) = fit_dimensions(cfg.rows, cfg.columns, cfg.max_length, cfg.display);
        warn!(
            needed,
            max_length = cfg.max_length,
            fitting = %format!("{rows}x{columns}"),
            "grid exceeds field length; trailing cells are cut on write and read back dead"
        );
    }
}
