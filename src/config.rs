//! Configuration file support for lockgraph.
//!
//! Provides YAML-based configuration through `lockgraph.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use lockgraph::shared::Result;

pub const CONFIG_FILENAME: &str = "lockgraph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub lockfile: Option<String>,
    /// Package names left out of the duplicate report.
    pub ignore_duplicates: Option<Vec<String>>,
    pub fail_on_duplicates: Option<bool>,
    pub trace_ancestors: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref ignored) = config.ignore_duplicates {
        for (i, name) in ignored.iter().enumerate() {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: ignore_duplicates[{}] must not be empty.\n\n\
                     💡 Hint: Each ignore_duplicates entry must be a package name (e.g., \"windows-sys\").",
                    i
                );
            }
        }
    }

    if let Some(ref lockfile) = config.lockfile {
        if lockfile.trim().is_empty() {
            bail!(
                "Invalid config: lockfile must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default Cargo.lock."
            );
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
