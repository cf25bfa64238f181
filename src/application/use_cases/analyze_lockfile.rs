use crate::application::dto::{
    AnalysisQuery, AnalysisReport, AnalysisRequest, AnalysisResponse, DuplicateOptions,
    PackageQuery,
};
use crate::graph_analysis::domain::{LockGraph, LockSource, PackageIdentity, ReportMetadata};
use crate::graph_analysis::services::{
    AncestorWalker, ClosureWalker, DuplicateDetector, WorkspaceAnalyzer,
};
use crate::ports::outbound::{LockfileReader, ProgressReporter, ProjectConfigReader};
use crate::shared::error::LockGraphError;
use crate::shared::Result;
use std::collections::HashMap;

/// AnalyzeLockfileUseCase - Core use case for lock-graph analysis
///
/// Loads the lockfile through the injected reader, builds the graph once and
/// runs the requested analysis against it.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `PCR` - ProjectConfigReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeLockfileUseCase<LR, PCR, PR> {
    lockfile_reader: LR,
    project_config_reader: PCR,
    progress_reporter: PR,
}

impl<LR, PCR, PR> AnalyzeLockfileUseCase<LR, PCR, PR>
where
    LR: LockfileReader,
    PCR: ProjectConfigReader,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeLockfileUseCase with injected dependencies
    pub fn new(lockfile_reader: LR, project_config_reader: PCR, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            project_config_reader,
            progress_reporter,
        }
    }

    /// Executes the analysis use case
    ///
    /// # Returns
    /// AnalysisResponse carrying the report, its metadata and the package count
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        // Step 1: Read the lockfile and build the graph
        let graph = self.load_graph(&request)?;

        // Step 2: Run the requested analysis
        let report = match &request.query {
            AnalysisQuery::Duplicates(options) => self.analyze_duplicates(&graph, options),
            AnalysisQuery::Closure(query) => self.analyze_closure(&graph, query)?,
            AnalysisQuery::Ancestors(query) => self.analyze_ancestors(&graph, query)?,
            AnalysisQuery::Members => self.analyze_members(&graph, &request)?,
        };

        // Step 3: Build response
        let metadata =
            ReportMetadata::for_lockfile(request.lockfile_path().display().to_string());
        Ok(AnalysisResponse::new(report, metadata, graph.len()))
    }

    /// Reads, parses and builds the lock-graph, reporting progress
    fn load_graph(&self, request: &AnalysisRequest) -> Result<LockGraph> {
        self.progress_reporter.report(&format!(
            "📖 Loading {} from: {}",
            request.lockfile_name,
            request.project_path.display()
        ));

        let content = self
            .lockfile_reader
            .read_lockfile(&request.project_path, &request.lockfile_name)?;

        let source = LockSource::from_toml(&content).map_err(|e| {
            LockGraphError::LockfileParseError {
                path: request.lockfile_path(),
                details: format!("{:#}", e),
            }
        })?;
        let graph = LockGraph::build(&source)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", graph.len()));

        Ok(graph)
    }

    fn analyze_duplicates(&self, graph: &LockGraph, options: &DuplicateOptions) -> AnalysisReport {
        let found = DuplicateDetector::find_duplicates(graph);

        for ignored in &options.ignored {
            if found.get(ignored).is_none() {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Ignored package '{}' has no duplicate versions.",
                    ignored
                ));
            }
        }
        let report = found.without_names(&options.ignored);

        if report.is_empty() {
            self.progress_reporter
                .report_completion("✅ No duplicate dependencies found.");
        } else {
            self.progress_reporter.report(&format!(
                "🔍 Found {} package(s) with {} duplicate version(s)",
                report.len(),
                report.duplicate_version_count()
            ));
        }

        let traces = options.trace_ancestors.then(|| {
            let identities: Vec<PackageIdentity> = report
                .groups()
                .iter()
                .flat_map(|group| {
                    group
                        .all_versions()
                        .map(|version| PackageIdentity::new(group.name.as_str(), version))
                        .collect::<Vec<_>>()
                })
                .collect();
            self.trace_ancestors(graph, identities)
        });

        AnalysisReport::Duplicates { report, traces }
    }

    /// Walks upward from every identity, reporting progress per package
    fn trace_ancestors(
        &self,
        graph: &LockGraph,
        identities: Vec<PackageIdentity>,
    ) -> HashMap<PackageIdentity, Vec<PackageIdentity>> {
        let total = identities.len();
        let mut traces = HashMap::with_capacity(total);
        let walker = AncestorWalker::new(graph);

        for (i, identity) in identities.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(i + 1, total, Some(&identity.to_string()));
            let ancestors = walker.ancestors(&identity);
            traces.insert(identity, ancestors);
        }

        if total > 0 {
            self.progress_reporter
                .report_completion(&format!("✅ Traced {} package version(s)", total));
        }

        traces
    }

    fn analyze_closure(&self, graph: &LockGraph, query: &PackageQuery) -> Result<AnalysisReport> {
        let root = graph.find(&query.name, query.version.as_deref())?;
        let packages = ClosureWalker::sorted_closure(graph, root.dependencies());

        self.progress_reporter.report(&format!(
            "🔗 {} pulls in {} package(s)",
            root.identity(),
            packages.len()
        ));

        Ok(AnalysisReport::Closure {
            root: root.identity().clone(),
            packages,
        })
    }

    fn analyze_ancestors(
        &self,
        graph: &LockGraph,
        query: &PackageQuery,
    ) -> Result<AnalysisReport> {
        let target = graph
            .find(&query.name, query.version.as_deref())?
            .identity()
            .clone();
        let walker = AncestorWalker::new(graph);
        let direct = walker.direct_dependents(&target);
        let ancestors = walker.ancestors(&target);

        self.progress_reporter.report(&format!(
            "🔗 {} is required by {} package(s)",
            target,
            ancestors.len()
        ));

        Ok(AnalysisReport::Ancestors {
            target,
            direct,
            ancestors,
        })
    }

    fn analyze_members(&self, graph: &LockGraph, request: &AnalysisRequest) -> Result<AnalysisReport> {
        let members = self
            .project_config_reader
            .read_workspace_members(&request.project_path)?;

        let summaries = WorkspaceAnalyzer::summarize(graph, &members);

        for member in &members {
            if !summaries.iter().any(|s| s.identity.name() == member) {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Workspace member '{}' was not found in the lockfile.",
                    member
                ));
            }
        }

        Ok(AnalysisReport::Members(summaries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    struct InMemoryLockfile(&'static str);

    impl LockfileReader for InMemoryLockfile {
        fn read_lockfile(&self, _project_path: &Path, _lockfile_name: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FixedMembers(Vec<&'static str>);

    impl ProjectConfigReader for FixedMembers {
        fn read_workspace_members(&self, _project_path: &Path) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|m| m.to_string()).collect())
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        messages: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }

        fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
            self.messages
                .borrow_mut()
                .push(format!("{}/{}", current, total));
        }

        fn report_error(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }

        fn report_completion(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    const LOCKFILE: &str = r#"
version = 3

[[package]]
name = "app"
version = "0.1.0"
dependencies = [
 "mid",
 "syn 2.0.48",
]

[[package]]
name = "mid"
version = "1.0.0"
dependencies = [
 "syn 1.0.109",
]

[[package]]
name = "syn"
version = "1.0.109"

[[package]]
name = "syn"
version = "2.0.48"
"#;

    fn use_case(
        content: &'static str,
    ) -> AnalyzeLockfileUseCase<InMemoryLockfile, FixedMembers, RecordingReporter> {
        AnalyzeLockfileUseCase::new(
            InMemoryLockfile(content),
            FixedMembers(vec!["app", "ghost"]),
            RecordingReporter::default(),
        )
    }

    fn request(query: AnalysisQuery) -> AnalysisRequest {
        AnalysisRequest::new(PathBuf::from("."), "Cargo.lock".to_string(), query)
    }

    #[test]
    fn test_execute_duplicates_with_traces() {
        let uc = use_case(LOCKFILE);
        let response = uc
            .execute(request(AnalysisQuery::Duplicates(DuplicateOptions {
                trace_ancestors: true,
                ignored: vec![],
            })))
            .unwrap();

        assert!(response.has_duplicates());
        assert_eq!(response.package_count, 4);
        match response.report {
            AnalysisReport::Duplicates { report, traces } => {
                assert_eq!(report.get("syn").unwrap().primary_version, "1.0.109");
                let traces = traces.unwrap();
                assert_eq!(
                    traces[&PackageIdentity::new("syn", "1.0.109")],
                    vec![
                        PackageIdentity::new("mid", "1.0.0"),
                        PackageIdentity::new("app", "0.1.0")
                    ]
                );
                assert_eq!(
                    traces[&PackageIdentity::new("syn", "2.0.48")],
                    vec![PackageIdentity::new("app", "0.1.0")]
                );
            }
            other => panic!("unexpected report: {:?}", other),
        }
        assert!(uc
            .progress_reporter
            .messages
            .borrow()
            .iter()
            .any(|m| m == "2/2"));
    }

    #[test]
    fn test_execute_duplicates_ignored() {
        let uc = use_case(LOCKFILE);
        let response = uc
            .execute(request(AnalysisQuery::Duplicates(DuplicateOptions {
                trace_ancestors: false,
                ignored: vec!["syn".to_string(), "nothing".to_string()],
            })))
            .unwrap();

        assert!(!response.has_duplicates());
        let messages = uc.progress_reporter.messages.borrow();
        assert!(messages.iter().any(|m| m.contains("'nothing'")));
        assert!(!messages.iter().any(|m| m.contains("'syn'")));
    }

    #[test]
    fn test_execute_closure() {
        let uc = use_case(LOCKFILE);
        let response = uc
            .execute(request(AnalysisQuery::Closure(PackageQuery::new(
                "app".to_string(),
                None,
            ))))
            .unwrap();

        match response.report {
            AnalysisReport::Closure { root, packages } => {
                assert_eq!(root, PackageIdentity::new("app", "0.1.0"));
                assert_eq!(
                    packages,
                    vec![
                        PackageIdentity::new("mid", "1.0.0"),
                        PackageIdentity::new("syn", "1.0.109"),
                        PackageIdentity::new("syn", "2.0.48"),
                    ]
                );
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_execute_ancestors_requires_version_when_ambiguous() {
        let uc = use_case(LOCKFILE);
        let err = uc
            .execute(request(AnalysisQuery::Ancestors(PackageQuery::new(
                "syn".to_string(),
                None,
            ))))
            .unwrap_err();

        assert!(format!("{}", err).contains("several versions"));
    }

    #[test]
    fn test_execute_ancestors() {
        let uc = use_case(LOCKFILE);
        let response = uc
            .execute(request(AnalysisQuery::Ancestors(PackageQuery::new(
                "syn".to_string(),
                Some("1.0.109".to_string()),
            ))))
            .unwrap();

        match response.report {
            AnalysisReport::Ancestors {
                target,
                direct,
                ancestors,
            } => {
                assert_eq!(target, PackageIdentity::new("syn", "1.0.109"));
                assert_eq!(direct, vec![PackageIdentity::new("mid", "1.0.0")]);
                assert_eq!(ancestors.len(), 2);
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_execute_members_warns_on_missing_member() {
        let uc = use_case(LOCKFILE);
        let response = uc.execute(request(AnalysisQuery::Members)).unwrap();

        match response.report {
            AnalysisReport::Members(summaries) => {
                assert_eq!(summaries.len(), 1);
                assert_eq!(summaries[0].dependency_count, 3);
            }
            other => panic!("unexpected report: {:?}", other),
        }
        assert!(uc
            .progress_reporter
            .messages
            .borrow()
            .iter()
            .any(|m| m.contains("'ghost'")));
    }

    #[test]
    fn test_execute_malformed_lockfile() {
        let uc = use_case(
            r#"
[[package]]
name = "broken"
"#,
        );
        let err = uc.execute(request(AnalysisQuery::Members)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LockGraphError>(),
            Some(LockGraphError::MalformedSource { index: 0, .. })
        ));
    }

    #[test]
    fn test_execute_invalid_toml() {
        let uc = use_case("not toml [[[");
        let err = uc.execute(request(AnalysisQuery::Members)).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse lockfile"));
    }
}
