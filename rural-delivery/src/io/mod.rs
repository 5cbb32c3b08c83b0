//! I/O helpers for `rural-delivery` commands.

pub mod input;
pub mod settings;
