//! lockgraph - dependency graph analysis for Cargo lockfiles
//!
//! This library builds a graph from the `[[package]]` entries of a Cargo.lock
//! file and answers questions about it: which packages are locked at more than
//! one version, what a package pulls in, and who depends on a package. It
//! follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_analysis`): Lock-graph model and traversal services
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use lockgraph::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let lockfile_reader = FileSystemReader::new();
//! let project_config_reader = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case =
//!     AnalyzeLockfileUseCase::new(lockfile_reader, project_config_reader, progress_reporter);
//!
//! // Execute
//! let request = AnalysisRequest::new(
//!     PathBuf::from("."),
//!     DEFAULT_LOCKFILE_NAME.to_string(),
//!     AnalysisQuery::Duplicates(DuplicateOptions::default()),
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let model = ReportReadModelBuilder::build(&response);
//! let output = TextFormatter::new().format(&model)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod graph_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::application::dto::{
        AnalysisQuery, AnalysisReport, AnalysisRequest, AnalysisResponse, DuplicateOptions,
        OutputFormat, PackageQuery, DEFAULT_LOCKFILE_NAME,
    };
    pub use crate::application::read_models::{ReportReadModel, ReportReadModelBuilder};
    pub use crate::application::use_cases::AnalyzeLockfileUseCase;
    pub use crate::graph_analysis::domain::{
        DependencyReference, DuplicateReport, LockGraph, LockRecord, LockSource,
        PackageIdentity, PackageNode, ReportMetadata,
    };
    pub use crate::graph_analysis::services::{
        AncestorWalker, ClosureWalker, DuplicateDetector, MemberSummary, WorkspaceAnalyzer,
    };
    pub use crate::ports::outbound::{
        LockfileReader, OutputPresenter, ProgressReporter, ProjectConfigReader, ReportFormatter,
    };
    pub use crate::shared::error::{ExitCode, LockGraphError};
    pub use crate::shared::Result;
}
