//! Host entry point: one run input in, one function result out.
//!
//! Loader → normalizer → classifier → filter. Every stage is total, so the
//! entry points here never fail; unusable input yields no operations.

use tracing::{debug, warn};

use crate::core::filter::evaluate;
use crate::core::loader::load_config;
use crate::core::policy::RuralPolicy;
use crate::core::types::{FunctionResult, RunInput};

/// Evaluate a deserialized run input.
pub fn run(input: &RunInput) -> FunctionResult {
    let config = load_config(input.metafield());
    let policy = RuralPolicy::from_config(&config);
    let outcome = evaluate(&policy, &input.cart);
    debug!(?outcome, "delivery customization evaluated");
    FunctionResult {
        operations: outcome.into_operations(),
    }
}

/// Evaluate a raw run input document.
///
/// A document that does not deserialize as a run input yields no changes.
pub fn run_json(raw: &str) -> FunctionResult {
    match serde_json::from_str::<RunInput>(raw) {
        Ok(input) => run(&input),
        Err(err) => {
            warn!(error = %err, "unusable run input, leaving delivery options unchanged");
            FunctionResult::no_changes()
        }
    }
}
