//! Builder for constructing ReportReadModel from an analysis response

use super::report_read_model::{
    AncestorsView, ClosureView, DuplicateGroupView, DuplicatesView, MemberView, MembersView,
    ReportBody, ReportMetadataView, ReportReadModel, VersionView,
};
use crate::application::dto::{AnalysisReport, AnalysisResponse};
use crate::graph_analysis::domain::{DuplicateReport, PackageIdentity};
use std::collections::HashMap;

/// Builder transforming analysis results into the formatter-facing read model
pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    pub fn build(response: &AnalysisResponse) -> ReportReadModel {
        let metadata = ReportMetadataView {
            tool_name: response.metadata.tool_name().to_string(),
            tool_version: response.metadata.tool_version().to_string(),
            generated_at: response.metadata.generated_at().to_rfc3339(),
            lockfile: response.metadata.lockfile().to_string(),
            package_count: response.package_count,
        };

        let body = match &response.report {
            AnalysisReport::Duplicates { report, traces } => {
                ReportBody::Duplicates(Self::build_duplicates(report, traces.as_ref()))
            }
            AnalysisReport::Closure { root, packages } => ReportBody::Closure(ClosureView {
                root: root.clone(),
                dependency_count: packages.len(),
                dependencies: packages.clone(),
            }),
            AnalysisReport::Ancestors {
                target,
                direct,
                ancestors,
            } => ReportBody::Ancestors(AncestorsView {
                target: target.clone(),
                direct_dependents: direct.clone(),
                ancestors: ancestors.clone(),
            }),
            AnalysisReport::Members(summaries) => ReportBody::Members(MembersView {
                members: summaries
                    .iter()
                    .map(|s| MemberView {
                        name: s.identity.name().to_string(),
                        version: s.identity.version().to_string(),
                        direct_dependency_count: s.direct_dependency_count,
                        dependency_count: s.dependency_count,
                    })
                    .collect(),
            }),
        };

        ReportReadModel { metadata, body }
    }

    fn build_duplicates(
        report: &DuplicateReport,
        traces: Option<&HashMap<PackageIdentity, Vec<PackageIdentity>>>,
    ) -> DuplicatesView {
        let groups = report
            .groups()
            .iter()
            .map(|group| DuplicateGroupView {
                name: group.name.clone(),
                versions: group
                    .all_versions()
                    .map(|version| VersionView {
                        version: version.to_string(),
                        primary: version == group.primary_version,
                        ancestors: traces.map(|t| {
                            t.get(&PackageIdentity::new(group.name.as_str(), version))
                                .cloned()
                                .unwrap_or_default()
                        }),
                    })
                    .collect(),
            })
            .collect();

        DuplicatesView { groups }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_analysis::domain::ReportMetadata;
    use crate::graph_analysis::services::MemberSummary;

    fn response(report: AnalysisReport) -> AnalysisResponse {
        AnalysisResponse::new(
            report,
            ReportMetadata::for_lockfile("ws/Cargo.lock".to_string()),
            7,
        )
    }

    #[test]
    fn test_build_metadata() {
        let model = ReportReadModelBuilder::build(&response(AnalysisReport::Members(vec![])));
        assert_eq!(model.metadata.lockfile, "ws/Cargo.lock");
        assert_eq!(model.metadata.package_count, 7);
        assert_eq!(model.metadata.tool_name, env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn test_build_duplicates_primary_first_with_traces() {
        let mut report = DuplicateReport::new();
        report.record("syn", "2.0.48", "1.0.109");

        let mut traces = HashMap::new();
        traces.insert(
            PackageIdentity::new("syn", "2.0.48"),
            vec![PackageIdentity::new("serde_derive", "1.0.196")],
        );

        let model = ReportReadModelBuilder::build(&response(AnalysisReport::Duplicates {
            report,
            traces: Some(traces),
        }));

        match model.body {
            ReportBody::Duplicates(view) => {
                assert_eq!(view.groups.len(), 1);
                let versions = &view.groups[0].versions;
                assert_eq!(versions[0].version, "1.0.109");
                assert!(versions[0].primary);
                assert_eq!(versions[0].ancestors.as_deref(), Some(&[][..]));
                assert_eq!(versions[1].version, "2.0.48");
                assert!(!versions[1].primary);
                assert_eq!(versions[1].ancestors.as_ref().unwrap().len(), 1);
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_build_duplicates_without_traces() {
        let mut report = DuplicateReport::new();
        report.record("pkg", "2.0", "1.0");

        let model = ReportReadModelBuilder::build(&response(AnalysisReport::Duplicates {
            report,
            traces: None,
        }));

        match model.body {
            ReportBody::Duplicates(view) => {
                assert!(view.groups[0].versions.iter().all(|v| v.ancestors.is_none()));
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_build_members() {
        let model = ReportReadModelBuilder::build(&response(AnalysisReport::Members(vec![
            MemberSummary {
                identity: PackageIdentity::new("tosho", "0.4.0"),
                direct_dependency_count: 2,
                dependency_count: 40,
            },
        ])));

        match model.body {
            ReportBody::Members(view) => {
                assert_eq!(view.members[0].name, "tosho");
                assert_eq!(view.members[0].dependency_count, 40);
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }
}
