use super::ClosureWalker;
use crate::graph_analysis::domain::{LockGraph, PackageIdentity};

/// Dependency totals for one workspace member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSummary {
    pub identity: PackageIdentity,
    pub direct_dependency_count: usize,
    /// Size of the full closure of the member's declared dependencies
    pub dependency_count: usize,
}

/// WorkspaceAnalyzer service summarizing the dependency footprint of members
pub struct WorkspaceAnalyzer;

impl WorkspaceAnalyzer {
    /// Summarizes every locked package whose name is a workspace member
    ///
    /// # Arguments
    /// * `graph` - The lock-graph
    /// * `members` - Normalized member package names
    ///
    /// # Returns
    /// One summary per matching node, in lockfile order
    pub fn summarize(graph: &LockGraph, members: &[String]) -> Vec<MemberSummary> {
        graph
            .nodes()
            .iter()
            .filter(|node| members.iter().any(|m| m == node.name()))
            .map(|node| MemberSummary {
                identity: node.identity().clone(),
                direct_dependency_count: node.dependencies().len(),
                dependency_count: ClosureWalker::closure(graph, node.dependencies()).len(),
            })
            .collect()
    }
}
