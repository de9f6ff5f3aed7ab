//! Configuration management for the nexo-furnace CLI

use anyhow::{Context, Result};
use nexo_furnace::Layout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the root directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "nexo-furnace.toml";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Path layout; unset fields keep their defaults
    #[serde(default)]
    pub layout: Layout,
}

impl Config {
    /// Resolve which config file to read, if any
    pub fn config_path(explicit: Option<&Path>, root: &Path) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default = root.join(DEFAULT_CONFIG_FILE);
                default.exists().then_some(default)
            }
        }
    }

    /// Load configuration from file, or use defaults if there is none.
    ///
    /// An explicitly named file must exist.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        let Some(config_path) = Self::config_path(explicit, root) else {
            return Ok(Config::default());
        };

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_layout_override() {
        let config = Config::parse(
            r#"
[layout]
items = "packs/items"
output_file = "armor.json"
"#,
        )
        .unwrap();

        assert_eq!(config.layout.items, PathBuf::from("packs/items"));
        assert_eq!(config.layout.output_file, "armor.json");
        assert_eq!(config.layout.archive, Layout::default().archive);
    }

    #[test]
    fn test_wrong_value_type_fails() {
        assert!(Config::parse("[layout]\noutput_file = 3\n").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[layout]\noutput = \"out\"\n").unwrap();

        let config = Config::load(Some(path.as_path()), temp_dir.path()).unwrap();
        assert_eq!(config.layout.output, PathBuf::from("out"));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(Config::load(Some(missing.as_path()), temp_dir.path()).is_err());
    }

    #[test]
    fn test_default_file_in_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(None, temp_dir.path()).unwrap(), Config::default());

        fs::write(
            temp_dir.path().join(DEFAULT_CONFIG_FILE),
            "[layout]\nitems = \"defs\"\n",
        )
        .unwrap();
        let config = Config::load(None, temp_dir.path()).unwrap();
        assert_eq!(config.layout.items, PathBuf::from("defs"));
    }
}
