//! Deterministic, pure logic for the delivery customization engine.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data. The evaluation path never fails: unusable input degrades to "no
//! operations". Only save-time validation in `settings` returns errors.

pub mod classifier;
pub mod filter;
pub mod loader;
pub mod normalize;
pub mod policy;
pub mod presets;
pub mod settings;
pub mod types;
