//! Normalized form of [`RuralConfig`] used by classification and filtering.

use crate::core::normalize::{TokenSet, normalize_methods, normalize_postcodes};
use crate::core::types::{DeliveryOption, RuralConfig};

/// Configuration with every list reduced to comparable tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuralPolicy {
    pub enabled: bool,
    pub postcodes: TokenSet,
    pub methods_to_keep: TokenSet,
}

impl RuralPolicy {
    pub fn from_config(config: &RuralConfig) -> Self {
        Self {
            enabled: config.enabled,
            postcodes: normalize_postcodes(&config.postcodes),
            methods_to_keep: normalize_methods(&config.rural_methods_to_keep),
        }
    }

    /// True if the option's handle or title names a keep-list method.
    ///
    /// Handle and title are compared lowercased; either match qualifies.
    pub fn is_keep_method(&self, option: &DeliveryOption) -> bool {
        [option.handle.as_deref(), option.title.as_deref()]
            .into_iter()
            .flatten()
            .any(|text| self.methods_to_keep.contains(&text.to_lowercase()))
    }
}
