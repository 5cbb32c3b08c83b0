//! Test-only helpers for constructing carts, configurations and input files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

use crate::core::types::{
    Cart, DeliveryAddress, DeliveryCustomization, DeliveryGroup, DeliveryOption, FunctionResult,
    Metafield, RunInput, RuralConfig,
};

/// Create a delivery option with both handle and title set.
pub fn option(handle: &str, title: &str) -> DeliveryOption {
    DeliveryOption {
        handle: Some(handle.to_string()),
        title: Some(title.to_string()),
    }
}

pub fn address(country_code: &str, zip: &str) -> DeliveryAddress {
    DeliveryAddress {
        country_code: Some(country_code.to_string()),
        zip: Some(zip.to_string()),
    }
}

/// Create a delivery group shipping to `zip` in `country_code`.
pub fn group(country_code: &str, zip: &str, options: Vec<DeliveryOption>) -> DeliveryGroup {
    DeliveryGroup {
        delivery_address: Some(address(country_code, zip)),
        delivery_options: options,
    }
}

pub fn cart(groups: Vec<DeliveryGroup>) -> Cart {
    Cart {
        delivery_groups: groups,
    }
}

/// Create an enabled configuration from postcode and keep-list entries.
pub fn config(postcodes: &[&str], keep: &[&str]) -> RuralConfig {
    RuralConfig {
        enabled: true,
        postcodes: postcodes.iter().map(|entry| entry.to_string()).collect(),
        rural_methods_to_keep: keep.iter().map(|entry| entry.to_string()).collect(),
    }
}

/// Build a run input carrying `config` as metafield JSON text.
pub fn metafield_input(config: Value, cart: Cart) -> RunInput {
    RunInput {
        delivery_customization: Some(DeliveryCustomization {
            metafield: Some(Metafield {
                value: Some(Value::String(config.to_string())),
                json_value: None,
            }),
        }),
        cart,
    }
}

/// Handles targeted by a result's operations, in order.
pub fn hidden_handles(result: &FunctionResult) -> Vec<&str> {
    result
        .operations
        .iter()
        .map(|operation| operation.handle())
        .collect()
}

/// Temporary working directory for CLI tests.
pub struct Workdir {
    dir: TempDir,
}

impl Workdir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` inside the workdir and return its path.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Serialize `input` as JSON into `name` and return its path.
    pub fn write_input(&self, name: &str, input: &RunInput) -> Result<PathBuf> {
        let payload = serde_json::to_string_pretty(input).context("serialize run input")?;
        self.write(name, &payload)
    }
}
