mod ancestor_walker;
mod closure_walker;
mod duplicate_detector;
mod workspace_summary;

pub use ancestor_walker::AncestorWalker;
pub use closure_walker::ClosureWalker;
pub use duplicate_detector::DuplicateDetector;
pub use workspace_summary::{MemberSummary, WorkspaceAnalyzer};
