//! Shared types for the delivery customization engine.
//!
//! Input types mirror the host's run input (camelCase JSON) and are lenient:
//! every field is optional or defaulted so a sparse cart still deserializes.
//! Output types mirror the host's operation wire shape exactly.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Merchant configuration stored in the customization metafield.
///
/// Produced by the total loader in [`crate::core::loader`]; never fails to
/// exist. The default is the disabled configuration. Serializes to the
/// metafield wire shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuralConfig {
    pub enabled: bool,
    /// Raw postcode entries as typed by the merchant, possibly several per entry.
    pub postcodes: Vec<String>,
    /// Method handles or titles that stay visible for rural destinations.
    pub rural_methods_to_keep: Vec<String>,
}

/// Input document handed to the engine by the host, once per cart evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunInput {
    pub delivery_customization: Option<DeliveryCustomization>,
    #[serde(deserialize_with = "null_as_default")]
    pub cart: Cart,
}

impl RunInput {
    /// The configuration carrier, if the customization has one.
    pub fn metafield(&self) -> Option<&Metafield> {
        self.delivery_customization
            .as_ref()
            .and_then(|customization| customization.metafield.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliveryCustomization {
    pub metafield: Option<Metafield>,
}

/// Opaque configuration carrier.
///
/// `value` holds the JSON text when the host query selects `value`;
/// `json_value` holds the structured payload when it selects `jsonValue`.
/// Both are kept as raw JSON so a wrongly typed carrier still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metafield {
    pub value: Option<Value>,
    pub json_value: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cart {
    #[serde(deserialize_with = "null_as_default")]
    pub delivery_groups: Vec<DeliveryGroup>,
}

/// A partition of the cart with its own destination and candidate options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliveryGroup {
    pub delivery_address: Option<DeliveryAddress>,
    #[serde(deserialize_with = "null_as_default")]
    pub delivery_options: Vec<DeliveryOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliveryAddress {
    #[serde(deserialize_with = "lenient_text")]
    pub country_code: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub zip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryOption {
    #[serde(deserialize_with = "lenient_text")]
    pub handle: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
}

/// The only operation kind the engine emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    DeliveryOptionHide(DeliveryOptionHide),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOptionHide {
    pub delivery_option_handle: String,
}

impl Operation {
    pub fn hide(handle: impl Into<String>) -> Self {
        Self::DeliveryOptionHide(DeliveryOptionHide {
            delivery_option_handle: handle.into(),
        })
    }

    /// Handle of the delivery option this operation targets.
    pub fn handle(&self) -> &str {
        match self {
            Self::DeliveryOptionHide(hide) => &hide.delivery_option_handle,
        }
    }
}

/// Result document returned to the host. Empty `operations` means no change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionResult {
    pub operations: Vec<Operation>,
}

impl FunctionResult {
    pub fn no_changes() -> Self {
        Self::default()
    }
}

/// Any JSON value, read as text where a scalar allows it.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Scalar {
    Text(String),
    Number(Number),
    Flag(bool),
    Other(IgnoredAny),
}

impl Scalar {
    /// Strings as-is, numbers and booleans by their JSON rendering.
    pub(crate) fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(number) => Some(number.to_string()),
            Self::Flag(flag) => Some(flag.to_string()),
            Self::Other(_) => None,
        }
    }
}

/// Read a scalar as text; `null`, arrays and objects read as `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_text))
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
