//! Typed errors raised by the automaton core.
//!
//! Every variant is raised synchronously at the point of invalid input. The
//! core performs no I/O, so nothing here is retriable.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    #[error("malformed grid: {0}")]
    MalformedGrid(String),

    #[error("unknown rule set '{0}' (expected standard, daynight or highlife)")]
    UnknownRuleSet(String),

    #[error("unknown display mode '{0}' (expected full or half)")]
    UnknownDisplayMode(String),

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("density {0} is outside [0, 1]")]
    InvalidDensity(f64),

    #[error("invalid grid dimensions {height}x{width}: both must be >= 1")]
    InvalidDimensions { height: usize, width: usize },
}

pub type LifeResult<T> = std::result::Result<T, LifeError>;
