//! Reading run input documents for `rural-delivery run`.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read the raw input document from `path`, or from stdin when `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read input from stdin")?;
            Ok(buf)
        }
    }
}
