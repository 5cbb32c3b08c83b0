//! Delivery option filtering.
//!
//! Evaluation is an ordered series of guards, each of which may end the
//! evaluation with no operations:
//!
//! 1. policy disabled
//! 2. cart has no delivery groups
//! 3. keep list is empty
//!
//! Past the guards the first group's address decides rural vs non-rural for
//! the whole cart, and each group is filtered in order.

use tracing::{debug, trace};

use crate::core::classifier::is_rural;
use crate::core::policy::RuralPolicy;
use crate::core::types::{Cart, DeliveryGroup, Operation};

/// Structured filter outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Policy is disabled (or the configuration was unusable).
    Disabled,
    /// Cart has no delivery groups.
    NoGroups,
    /// Keep list normalized to nothing; hiding would be meaningless or stranding.
    NoKeepList,
    /// Options were evaluated against the policy.
    Evaluated {
        rural: bool,
        operations: Vec<Operation>,
    },
}

impl FilterOutcome {
    pub fn into_operations(self) -> Vec<Operation> {
        match self {
            Self::Evaluated { operations, .. } => operations,
            Self::Disabled | Self::NoGroups | Self::NoKeepList => Vec::new(),
        }
    }
}

/// Evaluate the policy against a cart.
pub fn evaluate(policy: &RuralPolicy, cart: &Cart) -> FilterOutcome {
    if !policy.enabled {
        debug!("rural delivery disabled");
        return FilterOutcome::Disabled;
    }

    let Some(first) = cart.delivery_groups.first() else {
        debug!("cart has no delivery groups");
        return FilterOutcome::NoGroups;
    };

    if policy.methods_to_keep.is_empty() {
        debug!("no rural methods to keep configured");
        return FilterOutcome::NoKeepList;
    }

    let rural = is_rural(policy, first.delivery_address.as_ref());
    debug!(rural, groups = cart.delivery_groups.len(), "classified destination");

    let operations = cart
        .delivery_groups
        .iter()
        .enumerate()
        .flat_map(|(index, group)| filter_group(policy, rural, index, group))
        .collect();

    FilterOutcome::Evaluated { rural, operations }
}

/// Hide operations for the cart, in cart traversal order.
pub fn filter_options(policy: &RuralPolicy, cart: &Cart) -> Vec<Operation> {
    evaluate(policy, cart).into_operations()
}

/// Rural: keep only keep-list options, unless none exist in this group.
/// Non-rural: hide keep-list options.
fn filter_group(
    policy: &RuralPolicy,
    rural: bool,
    index: usize,
    group: &DeliveryGroup,
) -> Vec<Operation> {
    let options = &group.delivery_options;

    if rural && !options.iter().any(|option| policy.is_keep_method(option)) {
        debug!(group = index, "no keep-list option in rural group, leaving it untouched");
        return Vec::new();
    }

    options
        .iter()
        .filter(|option| policy.is_keep_method(option) != rural)
        .filter_map(|option| match option.handle.as_deref() {
            Some(handle) if !handle.is_empty() => {
                trace!(group = index, handle, "hiding delivery option");
                Some(Operation::hide(handle))
            }
            _ => None,
        })
        .collect()
}
