//! Stable exit codes for lifebio CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed: invalid grid, rule set, density, dimensions, config or I/O.
pub const INVALID: i32 = 1;
/// `lifebio run --fail-on-extinct` ended with no live cells.
pub const EXTINCT: i32 = 3;
