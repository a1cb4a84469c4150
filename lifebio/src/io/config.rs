//! Simulation configuration stored in `lifebio.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::field::DEFAULT_MAX_LENGTH;
use crate::core::random::check_density;
use crate::core::render::DisplayMode;
use crate::core::rules::RuleSet;
use crate::error::LifeError;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "lifebio.toml";

/// Simulation configuration (TOML).
///
/// Intended to be edited by humans. Missing fields fall back to the defaults
/// of the reference deployment: a 5x33 grid written in half mode to a
/// 160-character field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LifeConfig {
    /// Grid height in cells.
    pub rows: usize,

    /// Grid width in cells.
    pub columns: usize,

    /// Length cap of the external text field, in characters.
    pub max_length: usize,

    pub rules: RuleSet,

    pub display: DisplayMode,

    /// Generations shown by `lifebio run` after the initial grid.
    pub iterations: u32,

    /// Pause between generations in milliseconds (0 disables the pause).
    pub delay_ms: u64,

    /// Live-cell probability for random boards.
    pub density: f64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            columns: 33,
            max_length: DEFAULT_MAX_LENGTH,
            rules: RuleSet::Standard,
            display: DisplayMode::Half,
            iterations: 5,
            delay_ms: 500,
            density: 0.3,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(LifeError::InvalidDimensions {
                height: self.rows,
                width: self.columns,
            }
            .into());
        }
        if self.max_length == 0 {
            return Err(anyhow!("max_length must be > 0"));
        }
        check_density(self.density)?;
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LifeConfig::default()`.
pub fn load_config(path: &Path) -> Result<LifeConfig> {
    if !path.exists() {
        let cfg = LifeConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LifeConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &LifeConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, LifeConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("lifebio.toml");
        let cfg = LifeConfig {
            rules: RuleSet::HighLife,
            display: DisplayMode::Full,
            ..LifeConfig::default()
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("lifebio.toml");
        fs::write(&path, "rules = \"daynight\"\nrows = 8\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.rules, RuleSet::DayAndNight);
        assert_eq!(cfg.rows, 8);
        assert_eq!(cfg.columns, LifeConfig::default().columns);
    }

    #[test]
    fn unknown_rule_set_in_file_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("lifebio.toml");
        fs::write(&path, "rules = \"seeds\"\n").expect("write");
        let err = load_config(&path).expect_err("unknown rules");
        assert!(format!("{err:#}").contains("unknown rule set"));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let zero_rows = LifeConfig {
            rows: 0,
            ..LifeConfig::default()
        };
        let err = zero_rows.validate().expect_err("rows");
        assert!(matches!(
            err.downcast_ref::<LifeError>(),
            Some(LifeError::InvalidDimensions { .. })
        ));

        let dense = LifeConfig {
            density: 1.2,
            ..LifeConfig::default()
        };
        assert!(matches!(
            dense.validate().expect_err("density").downcast_ref::<LifeError>(),
            Some(LifeError::InvalidDensity(_))
        ));

        let no_room = LifeConfig {
            max_length: 0,
            ..LifeConfig::default()
        };
        assert!(no_room.validate().is_err());
    }
}
