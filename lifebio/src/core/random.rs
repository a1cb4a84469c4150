//! Random and date-seeded grids, plus the day-of-year option picker.

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::grid::Grid;
use crate::core::render::DisplayMode;
use crate::core::rules::RuleSet;
use crate::error::{LifeError, LifeResult};

/// Density used when a grid is seeded from the calendar date.
pub const DAILY_DENSITY: f64 = 0.3;

/// Each cell independently alive with probability `density`.
pub fn random_density(height: usize, width: usize, density: f64) -> LifeResult<Grid> {
    random_density_with(&mut rand::thread_rng(), height, width, density)
}

/// [`random_density`] drawing from a caller-supplied generator.
pub fn random_density_with<R: Rng>(
    rng: &mut R,
    height: usize,
    width: usize,
    density: f64,
) -> LifeResult<Grid> {
    check_density(density)?;
    Grid::from_fn(height, width, |_, _| rng.gen_bool(density))
}

/// Deterministic grid for a calendar date: same date, same grid.
///
/// The seed is the day count since the common era, so distinct dates (including
/// the same day of different years) seed distinct grids.
pub fn random_by_day(height: usize, width: usize, date: NaiveDate) -> LifeResult<Grid> {
    let mut rng = StdRng::seed_from_u64(day_seed(date));
    random_density_with(&mut rng, height, width, DAILY_DENSITY)
}

/// Reinterprets the signed day count, so dates before 1 CE keep distinct seeds.
fn day_seed(date: NaiveDate) -> u64 {
    u64::from_ne_bytes(i64::from(date.num_days_from_ce()).to_ne_bytes())
}

pub fn check_density(density: f64) -> LifeResult<()> {
    if !(0.0..=1.0).contains(&density) {
        return Err(LifeError::InvalidDensity(density));
    }
    Ok(())
}

/// Rule set and display mode picked from the day of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOptions {
    pub rules: RuleSet,
    pub display: DisplayMode,
}

/// Rotate rule sets daily and display modes every three days.
pub fn options_by_day(day_of_year: u32) -> DayOptions {
    const RULES: [RuleSet; 3] = [RuleSet::Standard, RuleSet::DayAndNight, RuleSet::HighLife];
    const DISPLAYS: [DisplayMode; 2] = [DisplayMode::Full, DisplayMode::Half];
    let day = day_of_year as usize;
    DayOptions {
        rules: RULES[day % RULES.len()],
        display: DISPLAYS[(day / RULES.len()) % DISPLAYS.len()],
    }
}

/// [`options_by_day`] for a calendar date (day of year 1..=366).
pub fn options_for_date(date: NaiveDate) -> DayOptions {
    options_by_day(date.ordinal())
}
