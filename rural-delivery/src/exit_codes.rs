//! Stable exit codes for `rural-delivery` CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to unreadable input, invalid settings, or other errors.
pub const INVALID: i32 = 1;
