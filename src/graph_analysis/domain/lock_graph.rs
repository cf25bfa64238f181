use super::{DependencyReference, LockSource, PackageIdentity, PackageNode};
use crate::shared::error::LockGraphError;
use std::collections::HashMap;

/// LockGraph aggregate: every locked package and its declared edges
///
/// Built once from a [`LockSource`] and read-only afterwards. Nodes keep the
/// lockfile order; a name index makes reference resolution proportional to
/// the number of versions of a name instead of the graph size.
#[derive(Debug, Clone, Default)]
pub struct LockGraph {
    nodes: Vec<PackageNode>,
    by_name: HashMap<String, Vec<usize>>,
}

impl LockGraph {
    /// Builds the graph from parsed lockfile records
    ///
    /// # Errors
    /// Returns `LockGraphError::MalformedSource` when a record lacks a name or
    /// a version, or carries a dependency string that cannot be parsed.
    /// Duplicate identities and dangling references are not checked here.
    pub fn build(source: &LockSource) -> std::result::Result<Self, LockGraphError> {
        let mut nodes = Vec::with_capacity(source.packages.len());

        for (index, record) in source.packages.iter().enumerate() {
            let name = record
                .name
                .as_deref()
                .filter(|n| !n.trim().is_empty())
                .ok_or_else(|| LockGraphError::MalformedSource {
                    index,
                    details: "missing package name".to_string(),
                })?;
            let version = record
                .version
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| LockGraphError::MalformedSource {
                    index,
                    details: format!("missing version for package '{}'", name),
                })?;

            let dependencies = record
                .dependencies
                .iter()
                .map(|raw| DependencyReference::parse(raw))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| LockGraphError::MalformedSource {
                    index,
                    details: e.to_string(),
                })?;

            nodes.push(PackageNode::new(
                PackageIdentity::new(name, version),
                dependencies,
            ));
        }

        Ok(Self::from_nodes(nodes))
    }

    /// Creates a graph from already-built nodes, keeping their order
    pub fn from_nodes(nodes: Vec<PackageNode>) -> Self {
        let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, node) in nodes.iter().enumerate() {
            by_name
                .entry(node.name().to_string())
                .or_default()
                .push(index);
        }
        Self { nodes, by_name }
    }

    pub fn nodes(&self) -> &[PackageNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn node(&self, index: usize) -> &PackageNode {
        &self.nodes[index]
    }

    /// Position of the node carrying this identity
    pub fn index_of(&self, identity: &PackageIdentity) -> Option<usize> {
        self.by_name
            .get(identity.name())?
            .iter()
            .copied()
            .find(|&i| self.nodes[i].version() == identity.version())
    }

    pub fn contains(&self, identity: &PackageIdentity) -> bool {
        self.index_of(identity).is_some()
    }

    /// Node positions a reference resolves to, in lockfile order
    ///
    /// Versioned references yield at most one position, unversioned ones
    /// every node with the name. Dangling references yield nothing.
    pub(crate) fn resolve_indices<'a>(
        &'a self,
        reference: &'a DependencyReference,
    ) -> impl Iterator<Item = usize> + 'a {
        self.by_name
            .get(reference.name())
            .into_iter()
            .flatten()
            .copied()
            .filter(move |&i| reference.matches(self.nodes[i].identity()))
    }

    /// Nodes a reference resolves to, in lockfile order
    pub fn resolve<'a>(
        &'a self,
        reference: &'a DependencyReference,
    ) -> impl Iterator<Item = &'a PackageNode> + 'a {
        self.resolve_indices(reference).map(move |i| &self.nodes[i])
    }

    /// Every locked version of a package name, in lockfile order
    pub fn versions_of(&self, name: &str) -> Vec<&str> {
        self.by_name
            .get(name)
            .map(|indices| indices.iter().map(|&i| self.nodes[i].version()).collect())
            .unwrap_or_default()
    }

    /// Looks up a single package for a user query
    ///
    /// With a version the identity must match exactly. Without one the name
    /// must be locked at exactly one version.
    pub fn find(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> std::result::Result<&PackageNode, LockGraphError> {
        let not_found = || LockGraphError::PackageNotFound {
            query: match version {
                Some(v) => format!("{} {}", name, v),
                None => name.to_string(),
            },
        };

        if let Some(version) = version {
            let identity = PackageIdentity::new(name, version);
            return self
                .index_of(&identity)
                .map(|i| &self.nodes[i])
                .ok_or_else(not_found);
        }

        match self.by_name.get(name).map(Vec::as_slice) {
            None | Some([]) => Err(not_found()),
            Some([only]) => Ok(&self.nodes[*only]),
            Some(_) => Err(LockGraphError::AmbiguousPackage {
                name: name.to_string(),
                versions: self.versions_of(name).join(", "),
            }),
        }
    }
}
