//! I/O helpers for dabble commands.

pub mod config;
pub mod dictionary;
pub mod init;
pub mod paths;
pub mod stats;
