use chrono::{DateTime, Utc};

/// ReportMetadata value object describing how a report was produced
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    generated_at: DateTime<Utc>,
    tool_name: String,
    tool_version: String,
    lockfile: String,
}

impl ReportMetadata {
    pub fn new(
        generated_at: DateTime<Utc>,
        tool_name: String,
        tool_version: String,
        lockfile: String,
    ) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
            lockfile,
        }
    }

    /// Metadata stamped with the current time and this crate's name and version
    pub fn for_lockfile(lockfile: String) -> Self {
        Self::new(
            Utc::now(),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            lockfile,
        )
    }

    pub fn generated_at(&self) -> &DateTime<Utc> {
        &self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn lockfile(&self) -> &str {
        &self.lockfile
    }
}
