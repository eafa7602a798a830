//! Deterministic, pure word-grid logic.
//!
//! Core modules must be free of I/O side effects. They operate on the in-memory
//! board and a read-only word list and return fresh values on every call, so a
//! rescan never depends on what an earlier rescan produced.

pub mod board;
pub mod connectivity;
pub mod dice;
pub mod dictionary;
pub mod evaluator;
pub mod highlight;
pub mod scanner;
pub mod types;
pub mod word;
