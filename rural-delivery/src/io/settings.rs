//! Merchant settings stored as a TOML form (default `rural-delivery.toml`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::settings::SettingsForm;

/// Default settings file name, relative to the working directory.
pub const DEFAULT_SETTINGS_PATH: &str = "rural-delivery.toml";

/// Load settings from a TOML file.
///
/// If the file is missing, returns `SettingsForm::default()` (disabled).
pub fn load_settings(path: &Path) -> Result<SettingsForm> {
    if !path.exists() {
        debug!(path = %path.display(), "settings file missing, using defaults");
        return Ok(SettingsForm::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let form: SettingsForm =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    Ok(form)
}

/// Atomically write settings to disk (temp file + rename).
pub fn write_settings(path: &Path, form: &SettingsForm) -> Result<()> {
    let mut buf = toml::to_string_pretty(form).context("serialize settings toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("settings path missing parent {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp settings {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace settings {}", path.display()))?;
    Ok(())
}
