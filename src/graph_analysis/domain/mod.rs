pub mod dependency_reference;
pub mod duplicate_report;
pub mod lock_graph;
pub mod lock_source;
pub mod package;
pub mod package_node;
pub mod report_metadata;

pub use dependency_reference::{DependencyReference, ReferenceParseError};
pub use duplicate_report::{DuplicateGroup, DuplicateReport, DuplicateVersion};
pub use lock_graph::LockGraph;
pub use lock_source::{LockRecord, LockSource};
pub use package::PackageIdentity;
pub use package_node::PackageNode;
pub use report_metadata::ReportMetadata;
