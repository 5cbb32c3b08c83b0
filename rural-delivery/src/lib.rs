//! Rural delivery customization engine.
//!
//! Decides, for a cart's delivery options, which options to hide under a
//! merchant-configured rural shipping policy. The architecture enforces a
//! strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (configuration loading,
//!   normalization, rural classification, option filtering). No I/O.
//! - **[`io`]**: Side-effecting helpers for the CLI (settings files, input
//!   documents).
//!
//! [`run`] is the host entry point: one input document in, one result out.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod run;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
