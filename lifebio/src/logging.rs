//! Diagnostics for `lifebio` on stderr.
//!
//! Stdout carries frames and field text, which callers may pipe or paste into
//! a profile. Everything emitted here goes to stderr instead, so raising
//! `RUST_LOG` never changes what ends up in the field.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or invalid.
///
/// `warn` keeps the lossy-field notices visible: a grid too large for the
/// length cap, a short field inflated with dead cells, a blank field seeded
/// with a glider.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Call once, at the start of `main`.
///
/// `RUST_LOG=lifebio=debug` adds per-generation populations and bio file
/// reads/writes; `info` adds seed choices and repeat detection.
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_a_valid_directive() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
