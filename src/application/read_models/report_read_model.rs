//! Unified report read model
//!
//! Every formatter renders from this model. It derives `Serialize` so the
//! JSON formatter can emit it as-is.

use crate::graph_analysis::domain::PackageIdentity;
use serde::Serialize;

/// Unified read model for every analysis report
#[derive(Debug, Clone, Serialize)]
pub struct ReportReadModel {
    pub metadata: ReportMetadataView,
    #[serde(flatten)]
    pub body: ReportBody,
}

/// View representation of report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    pub tool_name: String,
    pub tool_version: String,
    /// RFC 3339 timestamp
    pub generated_at: String,
    pub lockfile: String,
    pub package_count: usize,
}

/// The analysis-specific part of a report
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportBody {
    Duplicates(DuplicatesView),
    Closure(ClosureView),
    Ancestors(AncestorsView),
    Members(MembersView),
}

#[derive(Debug, Clone, Serialize)]
pub struct DuplicatesView {
    pub groups: Vec<DuplicateGroupView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DuplicateGroupView {
    pub name: String,
    /// Primary version first
    pub versions: Vec<VersionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionView {
    pub version: String,
    pub primary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ancestors: Option<Vec<PackageIdentity>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClosureView {
    pub root: PackageIdentity,
    pub dependency_count: usize,
    pub dependencies: Vec<PackageIdentity>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AncestorsView {
    pub target: PackageIdentity,
    pub direct_dependents: Vec<PackageIdentity>,
    pub ancestors: Vec<PackageIdentity>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MembersView {
    pub members: Vec<MemberView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberView {
    pub name: String,
    pub version: String,
    pub direct_dependency_count: usize,
    pub dependency_count: usize,
}

/// Joins identities into a `"a 1.0 -> b 2.0"` path narrative
pub fn format_path(path: &[PackageIdentity]) -> String {
    path.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
