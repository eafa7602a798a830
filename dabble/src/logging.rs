//! Diagnostic tracing for dabble.
//!
//! Everything a player sees (board grid, tray, `word found`, `solved!`,
//! `check` summaries) is written to stdout by the command modules. Tracing
//! events from the engine and the file layer go to stderr only, so piping
//! `dabble check` output never picks up log lines.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `warn`, which keeps a
/// missing word list visible while hiding per-move events. Those are logged
/// at `debug` (placements, rescans) and `info` (words, wins, rounds).
///
/// ```bash
/// RUST_LOG=dabble=debug dabble play --demo
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
