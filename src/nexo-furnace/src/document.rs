//! Loading item definition documents and writing JSON output

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::value::Value;
use crate::{Error, Result};

/// Supported definition file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Extensions (without dot) recognised as item definitions
    pub const EXTENSIONS: &'static [&'static str] = &["yml", "yaml", "json"];

    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yml" | "yaml" => Some(DocumentFormat::Yaml),
            "json" => Some(DocumentFormat::Json),
            _ => None,
        }
    }

    /// Parse text in this format
    pub fn parse(self, text: &str) -> Result<Value> {
        Ok(match self {
            DocumentFormat::Yaml if text.trim().is_empty() => Value::Null,
            DocumentFormat::Yaml => {
                let mut value: serde_yaml::Value = serde_yaml::from_str(text)?;
                value.apply_merge()?;
                Value::from(value)
            }
            DocumentFormat::Json => Value::from(serde_json::from_str::<serde_json::Value>(text)?),
        })
    }
}

/// Load a definition file into a [`Value`] tree.
///
/// An empty YAML file loads as [`Value::Null`].
pub fn load_document(path: &Path) -> Result<Value> {
    let format =
        DocumentFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat(path.to_path_buf()))?;
    let text = fs::read_to_string(path)?;
    format.parse(&text)
}

/// Write pretty-printed JSON, creating the parent directory if needed
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
