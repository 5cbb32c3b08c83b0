//! Rural classification of a delivery destination.

use crate::core::normalize::normalize_postcode;
use crate::core::policy::RuralPolicy;
use crate::core::types::DeliveryAddress;

/// Classify a destination as rural.
///
/// - Disabled policy or no configured postcodes: never rural, the address is
///   not inspected.
/// - Otherwise rural iff the normalized destination postcode is non-empty and
///   in the configured set. The country code plays no part.
pub fn is_rural(policy: &RuralPolicy, address: Option<&DeliveryAddress>) -> bool {
    if !policy.enabled || policy.postcodes.is_empty() {
        return false;
    }

    let zip = address
        .and_then(|address| address.zip.as_deref())
        .map(normalize_postcode)
        .unwrap_or_default();

    !zip.is_empty() && policy.postcodes.contains(&zip)
}
