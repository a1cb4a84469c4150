//! Birth/survival rule sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LifeError;

/// Named automaton variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RuleSet {
    /// Conway's Game of Life, B3/S23.
    #[default]
    Standard,
    /// B3678/S34678.
    DayAndNight,
    /// B36/S23.
    HighLife,
}

impl RuleSet {
    pub const ALL: [RuleSet; 3] = [RuleSet::Standard, RuleSet::DayAndNight, RuleSet::HighLife];

    /// Neighbor counts that bring a dead cell to life.
    pub fn birth(self) -> &'static [u8] {
        match self {
            RuleSet::Standard => &[3],
            RuleSet::DayAndNight => &[3, 6, 7, 8],
            RuleSet::HighLife => &[3, 6],
        }
    }

    /// Neighbor counts that keep a live cell alive.
    pub fn survival(self) -> &'static [u8] {
        match self {
            RuleSet::Standard | RuleSet::HighLife => &[2, 3],
            RuleSet::DayAndNight => &[3, 4, 6, 7, 8],
        }
    }

    /// Canonical identifier, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            RuleSet::Standard => "standard",
            RuleSet::DayAndNight => "daynight",
            RuleSet::HighLife => "highlife",
        }
    }

    /// Conventional `B.../S...` notation.
    pub fn notation(self) -> String {
        let digits = |counts: &[u8]| counts.iter().map(u8::to_string).collect::<String>();
        format!("B{}/S{}", digits(self.birth()), digits(self.survival()))
    }
}

/// Next state of a single cell.
///
/// Alive iff the cell is dead and `live_neighbors` is in the birth set, or the
/// cell is alive and `live_neighbors` is in the survival set.
pub fn next_state(alive: bool, live_neighbors: u8, rules: RuleSet) -> bool {
    if alive {
        rules.survival().contains(&live_neighbors)
    } else {
        rules.birth().contains(&live_neighbors)
    }
}

impl FromStr for RuleSet {
    type Err = LifeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(RuleSet::Standard),
            "daynight" | "day-and-night" => Ok(RuleSet::DayAndNight),
            "highlife" => Ok(RuleSet::HighLife),
            _ => Err(LifeError::UnknownRuleSet(value.to_string())),
        }
    }
}

impl TryFrom<String> for RuleSet {
    type Error = LifeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuleSet> for String {
    fn from(rules: RuleSet) -> Self {
        rules.name().to_string()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
