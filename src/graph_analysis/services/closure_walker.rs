use crate::graph_analysis::domain::{DependencyReference, LockGraph, PackageIdentity};
use std::collections::HashSet;

/// ClosureWalker service computing downward dependency closures
///
/// This service contains pure business logic for graph traversal.
/// It has no I/O dependencies and works only with domain objects.
pub struct ClosureWalker;

impl ClosureWalker {
    /// Computes every package reachable from `start_refs`
    ///
    /// Each reference resolves to zero or more nodes (an unversioned reference
    /// resolves to every locked version of its name, a dangling one to none).
    /// Resolved nodes are added to the result and their own references are
    /// pushed onto an explicit stack. A node is expanded at most once, so
    /// cyclic lock data terminates.
    ///
    /// # Arguments
    /// * `graph` - The lock-graph to walk
    /// * `start_refs` - References to start from; the nodes they resolve to are part of the result
    ///
    /// # Returns
    /// The set of reachable identities. The set has no order; callers sort it for display.
    pub fn closure(
        graph: &LockGraph,
        start_refs: &[DependencyReference],
    ) -> HashSet<PackageIdentity> {
        let mut visited = vec![false; graph.len()];
        let mut reachable = HashSet::new();
        let mut pending: Vec<&DependencyReference> = start_refs.iter().rev().collect();

        while let Some(reference) = pending.pop() {
            for index in graph.resolve_indices(reference) {
                if visited[index] {
                    continue;
                }
                visited[index] = true;

                let node = graph.node(index);
                reachable.insert(node.identity().clone());
                pending.extend(node.dependencies().iter().rev());
            }
        }

        reachable
    }

    /// Closure sorted by name, then version
    pub fn sorted_closure(
        graph: &LockGraph,
        start_refs: &[DependencyReference],
    ) -> Vec<PackageIdentity> {
        let mut packages: Vec<PackageIdentity> =
            Self::closure(graph, start_refs).into_iter().collect();
        packages.sort();
        packages
    }
}
