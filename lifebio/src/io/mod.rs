//! I/O helpers for lifebio commands.

pub mod bio;
pub mod config;
pub mod grid_file;
