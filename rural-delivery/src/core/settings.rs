//! Merchant settings form and its mapping to the stored configuration.
//!
//! The form holds free text exactly as typed; lists are split on commas and
//! newlines when converted. Method names are lowercased on save.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::loader::parse_config_text;
use crate::core::normalize::{normalize_methods, normalize_postcodes};
use crate::core::types::RuralConfig;

/// Editable settings (TOML), one text field per configured list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SettingsForm {
    pub enabled: bool,

    /// Comma- or newline-separated postcodes.
    pub postcodes: String,

    /// Comma- or newline-separated method handles or titles.
    pub rural_methods_to_keep: String,
}

impl SettingsForm {
    pub fn to_config(&self) -> RuralConfig {
        RuralConfig {
            enabled: self.enabled,
            postcodes: split_list(&self.postcodes),
            rural_methods_to_keep: split_list(&self.rural_methods_to_keep)
                .into_iter()
                .map(|method| method.to_lowercase())
                .collect(),
        }
    }

    /// Render a stored configuration back into editable text.
    pub fn from_config(config: &RuralConfig) -> Self {
        Self {
            enabled: config.enabled,
            postcodes: config.postcodes.join(", "),
            rural_methods_to_keep: config.rural_methods_to_keep.join(", "),
        }
    }
}

impl RuralConfig {
    /// JSON text stored in the customization metafield.
    pub fn to_metafield_value(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Read a stored metafield value; unusable text yields the disabled default.
    pub fn from_metafield_value(text: &str) -> Self {
        parse_config_text(text)
    }

    /// Reject configurations that cannot be saved.
    ///
    /// An enabled configuration needs at least one method to keep: with an
    /// empty keep list nothing is ever hidden.
    pub fn validate(&self) -> Result<()> {
        if self.enabled && normalize_methods(&self.rural_methods_to_keep).is_empty() {
            return Err(anyhow!(
                "ruralMethodsToKeep must name at least one method when enabled"
            ));
        }
        Ok(())
    }
}

/// Split free text on commas and newlines, trimming and dropping blanks.
pub fn split_list(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Configuration states that pass [`RuralConfig::validate`] but are likely
/// mistakes.
///
/// Returns stable messages (empty when the configuration is effective).
pub fn config_warnings(config: &RuralConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if !config.enabled {
        return warnings;
    }

    if normalize_postcodes(&config.postcodes).is_empty() {
        warnings.push(
            "postcodes is empty: every destination is non-rural and keep-list methods are hidden"
                .to_string(),
        );
    }

    warnings
}
