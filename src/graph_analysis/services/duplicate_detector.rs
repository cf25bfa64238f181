use crate::graph_analysis::domain::{DuplicateReport, LockGraph};
use std::collections::HashMap;

/// DuplicateDetector service finding packages locked at several versions
pub struct DuplicateDetector;

impl DuplicateDetector {
    /// Scans the graph in lockfile order and reports conflicting versions
    ///
    /// The first version seen for a name is its primary version. Every later
    /// node with the same name and a different version is recorded against
    /// that primary. The primary is therefore whatever the lockfile lists
    /// first, not the newest version; sort the graph beforehand for
    /// latest-wins semantics.
    ///
    /// # Returns
    /// A report that is empty when every name is locked once.
    pub fn find_duplicates(graph: &LockGraph) -> DuplicateReport {
        let mut primaries: HashMap<&str, &str> = HashMap::new();
        let mut report = DuplicateReport::new();

        for node in graph.nodes() {
            match primaries.get(node.name()).copied() {
                None => {
                    primaries.insert(node.name(), node.version());
                }
                Some(primary) if primary != node.version() => {
                    report.record(node.name(), node.version(), primary);
                }
                Some(_) => {}
            }
        }

        report
    }
}
