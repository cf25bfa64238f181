use std::fmt;
use std::path::PathBuf;

/// Default lockfile name inside a project directory
pub const DEFAULT_LOCKFILE_NAME: &str = "Cargo.lock";

/// A package named on the command line, optionally pinned to a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageQuery {
    pub name: String,
    pub version: Option<String>,
}

impl PackageQuery {
    pub fn new(name: String, version: Option<String>) -> Self {
        Self { name, version }
    }
}

impl fmt::Display for PackageQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} {}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Options for the duplicate report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateOptions {
    /// Attach the upward dependency path of every listed version
    pub trace_ancestors: bool,
    /// Package names left out of the report
    pub ignored: Vec<String>,
}

/// The analysis to run against the lock-graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisQuery {
    Duplicates(DuplicateOptions),
    Closure(PackageQuery),
    Ancestors(PackageQuery),
    Members,
}

/// AnalysisRequest - Request DTO for the analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Path to the project directory containing the lockfile
    pub project_path: PathBuf,
    /// Lockfile name inside `project_path`
    pub lockfile_name: String,
    pub query: AnalysisQuery,
}

impl AnalysisRequest {
    pub fn new(project_path: PathBuf, lockfile_name: String, query: AnalysisQuery) -> Self {
        Self {
            project_path,
            lockfile_name,
            query,
        }
    }

    /// Full path of the lockfile, as shown in report metadata
    pub fn lockfile_path(&self) -> PathBuf {
        self.project_path.join(&self.lockfile_name)
    }
}
