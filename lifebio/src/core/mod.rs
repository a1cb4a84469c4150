//! Deterministic, pure automaton logic.
//!
//! Core modules are free of I/O side effects. They operate on immutable
//! [`grid::Grid`] snapshots and return deterministic outputs suitable for
//! tests; the only nondeterminism is [`random::random_density`], which also
//! has a seedable variant.

pub mod codec;
pub mod field;
pub mod glyphs;
pub mod grid;
pub mod patterns;
pub mod random;
pub mod render;
pub mod rules;
pub mod stepper;
