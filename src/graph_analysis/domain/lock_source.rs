use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;

/// Structured form of a lockfile, before any graph semantics are applied
///
/// Records are kept exactly as they appear in the file. Missing names or
/// versions are not rejected here; `LockGraph::build` reports them with the
/// position of the offending entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LockSource {
    #[serde(default, rename = "package")]
    pub packages: Vec<LockRecord>,
}

/// A single `[[package]]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LockRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl LockRecord {
    pub fn new(name: &str, version: &str, dependencies: &[&str]) -> Self {
        Self {
            name: Some(name.to_string()),
            version: Some(version.to_string()),
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl LockSource {
    pub fn new(packages: Vec<LockRecord>) -> Self {
        Self { packages }
    }

    /// Parses Cargo.lock-shaped TOML
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse lockfile TOML")
    }
}
