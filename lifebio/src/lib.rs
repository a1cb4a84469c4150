//! Toroidal cellular automaton for a length-capped profile text field.
//!
//! Grids wrap at every edge and evolve under one of three birth/survival rule
//! sets. They are rendered one character per cell or two rows per character
//! with half blocks, and can be written to (and read back from) a text field
//! whose length is capped. The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (grid, codec, rules, stepping,
//!   rendering, field formatting). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config file, grid files, the bio
//!   field). Isolated behind traits so tests can fake them.
//!
//! Orchestration modules ([`seed`], [`looping`], [`update`]) combine the two to
//! implement the CLI commands.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod looping;
pub mod seed;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod update;
