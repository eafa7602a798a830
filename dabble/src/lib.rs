//! Word-grid dice puzzle engine.
//!
//! Twelve lettered dice are dropped onto a 10x10 board. Every horizontal and
//! vertical run of two or more letters must be a dictionary word, and the
//! round is won once every die is on the board, every tile is valid, and the
//! tiles form one connected group. The crate is split into:
//!
//! - **[`core`]**: Pure, deterministic logic (scanning, highlighting,
//!   connectivity, win detection). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config, dictionary file, stats).
//!
//! [`game`] orchestrates core logic behind the [`game::Notifier`] seam, and
//! [`check`] and [`play`] implement the CLI commands on top of it.

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod game;
pub mod io;
pub mod logging;
pub mod play;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
