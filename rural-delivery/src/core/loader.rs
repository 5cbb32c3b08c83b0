//! Total configuration loader.
//!
//! Every malformed shape maps to [`RuralConfig::default`] (disabled) or to an
//! empty list for the offending field. Nothing here returns an error.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::types::{Metafield, RuralConfig, Scalar};

/// Extract the configuration from the metafield carrier.
///
/// A string `value` is parsed as JSON and wins over `jsonValue`; otherwise a
/// structured `jsonValue` object is used. Anything else is disabled.
pub fn load_config(metafield: Option<&Metafield>) -> RuralConfig {
    let Some(metafield) = metafield else {
        debug!("no configuration metafield");
        return RuralConfig::default();
    };

    match (&metafield.value, &metafield.json_value) {
        (Some(Value::String(text)), _) => parse_config_text(text),
        (_, Some(value @ Value::Object(_))) => config_from_value(value),
        _ => {
            debug!("configuration metafield carries no usable payload");
            RuralConfig::default()
        }
    }
}

/// Parse configuration JSON text; unparseable text yields the disabled default.
pub fn parse_config_text(text: &str) -> RuralConfig {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => config_from_value(&value),
        Err(err) => {
            warn!(error = %err, "configuration is not valid JSON, treating as disabled");
            RuralConfig::default()
        }
    }
}

/// Coerce a parsed JSON payload into a configuration.
///
/// Non-object payloads are disabled. The legacy `countryCodes` list stands in
/// for `postcodes` when `postcodes` is not an array.
pub fn config_from_value(value: &Value) -> RuralConfig {
    if !value.is_object() {
        debug!("configuration payload is not an object");
        return RuralConfig::default();
    }

    match StoredConfig::deserialize(value) {
        Ok(stored) => stored.into_config(),
        Err(err) => {
            warn!(error = %err, "configuration payload is unusable, treating as disabled");
            RuralConfig::default()
        }
    }
}

/// Metafield payload as written by the settings surface, read leniently.
///
/// Lists are `None` when the key is missing or not an array.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StoredConfig {
    #[serde(deserialize_with = "truthy")]
    enabled: bool,
    #[serde(deserialize_with = "lenient_list")]
    postcodes: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_list")]
    rural_methods_to_keep: Option<Vec<String>>,
    /// Legacy name for `postcodes`.
    #[serde(deserialize_with = "lenient_list")]
    country_codes: Option<Vec<String>>,
}

impl StoredConfig {
    fn into_config(self) -> RuralConfig {
        RuralConfig {
            enabled: self.enabled,
            postcodes: self.postcodes.or(self.country_codes).unwrap_or_default(),
            rural_methods_to_keep: self.rural_methods_to_keep.unwrap_or_default(),
        }
    }
}

/// Shapes a truthiness check distinguishes.
#[derive(Deserialize)]
#[serde(untagged)]
enum Truthy {
    Flag(bool),
    Number(f64),
    Text(String),
    Container(IgnoredAny),
}

/// JSON truthiness: `false`, `null`, `0` and `""` are false.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Truthy>::deserialize(deserializer)? {
        None => false,
        Some(Truthy::Flag(flag)) => flag,
        Some(Truthy::Number(number)) => number != 0.0,
        Some(Truthy::Text(text)) => !text.is_empty(),
        Some(Truthy::Container(_)) => true,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeList {
    List(Vec<Scalar>),
    Other(IgnoredAny),
}

/// Read an array as text items; any other shape reads as `None`.
///
/// Scalars are rendered as text; `null` and nested containers are skipped.
fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match MaybeList::deserialize(deserializer)? {
        MaybeList::List(items) => Some(items.into_iter().filter_map(Scalar::into_text).collect()),
        MaybeList::Other(_) => None,
    })
}
