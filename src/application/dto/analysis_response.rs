use crate::graph_analysis::domain::{DuplicateReport, PackageIdentity, ReportMetadata};
use crate::graph_analysis::services::MemberSummary;
use std::collections::HashMap;

/// Result of one analysis, before any formatting
#[derive(Debug, Clone)]
pub enum AnalysisReport {
    Duplicates {
        report: DuplicateReport,
        /// Ancestor path per listed version, present when tracing was requested
        traces: Option<HashMap<PackageIdentity, Vec<PackageIdentity>>>,
    },
    Closure {
        root: PackageIdentity,
        /// Sorted by name, then version
        packages: Vec<PackageIdentity>,
    },
    Ancestors {
        target: PackageIdentity,
        direct: Vec<PackageIdentity>,
        /// Direct and transitive dependents in discovery order
        ancestors: Vec<PackageIdentity>,
    },
    Members(Vec<MemberSummary>),
}

/// AnalysisResponse - Response DTO from the analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    pub report: AnalysisReport,
    pub metadata: ReportMetadata,
    /// Number of packages in the lockfile
    pub package_count: usize,
}

impl AnalysisResponse {
    pub fn new(report: AnalysisReport, metadata: ReportMetadata, package_count: usize) -> Self {
        Self {
            report,
            metadata,
            package_count,
        }
    }

    /// Whether this is a duplicate report with at least one entry
    pub fn has_duplicates(&self) -> bool {
        matches!(&self.report, AnalysisReport::Duplicates { report, .. } if !report.is_empty())
    }
}
