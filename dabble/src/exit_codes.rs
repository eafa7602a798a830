//! Stable exit codes for dabble CLI commands.

/// Command succeeded; for `dabble check`, the board is a win.
pub const OK: i32 = 0;
/// Command failed due to invalid config, board layout, or other errors.
pub const INVALID: i32 = 1;
/// `dabble check` evaluated the board and it is not a win.
pub const NOT_WON: i32 = 2;
