use super::{DependencyReference, PackageIdentity};

/// One `[[package]]` entry of the lock-graph
///
/// Dependency order is the order from the lockfile. It carries no meaning
/// for traversal and is only kept so reports come out deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNode {
    identity: PackageIdentity,
    dependencies: Vec<DependencyReference>,
}

impl PackageNode {
    pub fn new(identity: PackageIdentity, dependencies: Vec<DependencyReference>) -> Self {
        Self {
            identity,
            dependencies,
        }
    }

    pub fn identity(&self) -> &PackageIdentity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    pub fn version(&self) -> &str {
        self.identity.version()
    }

    pub fn dependencies(&self) -> &[DependencyReference] {
        &self.dependencies
    }
}
