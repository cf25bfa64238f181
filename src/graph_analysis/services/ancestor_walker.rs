use crate::graph_analysis::domain::{LockGraph, PackageIdentity};

/// AncestorWalker service answering "who depends on this package?"
///
/// This service contains pure business logic for graph traversal.
/// It has no I/O dependencies and works only with domain objects.
///
/// The reverse edge list is computed once in [`AncestorWalker::new`], so a
/// single walker can answer queries for many targets of the same graph.
pub struct AncestorWalker<'g> {
    graph: &'g LockGraph,
    /// For every node index, the indices of the nodes that reference it
    parents: Vec<Vec<usize>>,
}

impl<'g> AncestorWalker<'g> {
    pub fn new(graph: &'g LockGraph) -> Self {
        Self {
            graph,
            parents: Self::direct_parents(graph),
        }
    }

    /// Computes every direct and transitive dependent of `target`
    ///
    /// A node is a direct parent of `target` when one of its references
    /// resolves to `target`: versioned references must match exactly, an
    /// unversioned reference matches on the name alone. Every newly found
    /// parent is appended and then walked upward before the next parent of
    /// the same package is considered, so for `A -> B -> C` the ancestors of
    /// `C` come out as `[B, A]`.
    ///
    /// The walk keeps an explicit stack of `(package, next parent)` frames and
    /// never appends the same identity twice. When the lock data loops back to
    /// `target`, the target is reported as one of its own ancestors: for
    /// `A -> B -> A` the ancestors of `A` are `[B, A]`.
    ///
    /// # Returns
    /// Ancestors in first-discovery order; empty when `target` is not locked.
    pub fn ancestors(&self, target: &PackageIdentity) -> Vec<PackageIdentity> {
        let target_index = match self.graph.index_of(target) {
            Some(index) => index,
            None => return Vec::new(),
        };

        let mut seen = vec![false; self.graph.len()];
        let mut ancestors = Vec::new();
        let mut frames: Vec<(usize, usize)> = vec![(target_index, 0)];

        while let Some(frame) = frames.last_mut() {
            let (current, cursor) = *frame;
            let next = self.parents[current][cursor..]
                .iter()
                .position(|&parent| !seen[parent]);

            match next {
                Some(offset) => {
                    let parent = self.parents[current][cursor + offset];
                    frame.1 = cursor + offset + 1;
                    seen[parent] = true;
                    ancestors.push(self.graph.node(parent).identity().clone());
                    frames.push((parent, 0));
                }
                None => {
                    frames.pop();
                }
            }
        }

        ancestors
    }

    /// Direct parents only, in lockfile order
    pub fn direct_dependents(&self, target: &PackageIdentity) -> Vec<PackageIdentity> {
        match self.graph.index_of(target) {
            Some(index) => self.parents[index]
                .iter()
                .map(|&parent| self.graph.node(parent).identity().clone())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Inverts the edge list: for every node, the nodes that reference it
    ///
    /// Parents are listed once each, in lockfile order.
    fn direct_parents(graph: &LockGraph) -> Vec<Vec<usize>> {
        let mut parents: Vec<Vec<usize>> = vec![Vec::new(); graph.len()];

        for (parent_index, node) in graph.nodes().iter().enumerate() {
            for reference in node.dependencies() {
                for child in graph.resolve_indices(reference) {
                    if parents[child].last() != Some(&parent_index) {
                        parents[child].push(parent_index);
                    }
                }
            }
        }

        parents
    }
}
