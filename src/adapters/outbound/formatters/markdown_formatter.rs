use crate::application::read_models::{
    format_path, AncestorsView, ClosureView, DuplicatesView, MembersView, ReportBody,
    ReportMetadataView, ReportReadModel,
};
use crate::graph_analysis::domain::PackageIdentity;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for package listings
const TABLE_HEADER: &str = "| Package | Version |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|---------|\n";

/// Markdown table header for the duplicate report
const DUPLICATE_TABLE_HEADER: &str = "| Package | Version | Primary | Required By |\n";

/// Markdown table separator line for the duplicate report
const DUPLICATE_TABLE_SEPARATOR: &str = "|---------|---------|---------|-------------|\n";

/// Markdown table header for the workspace summary
const MEMBER_TABLE_HEADER: &str = "| Member | Version | Direct | Total |\n";

/// Markdown table separator line for the workspace summary
const MEMBER_TABLE_SEPARATOR: &str = "|--------|---------|--------|-------|\n";

/// MarkdownFormatter adapter rendering reports as Markdown documents
///
/// Package names link to their crates.io page.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Generate a Markdown hyperlink to the crate's crates.io page
    fn crate_link(name: &str) -> String {
        format!(
            "[{}](https://crates.io/crates/{})",
            Self::escape_markdown_table_cell(name),
            name
        )
    }

    fn render_package_table(output: &mut String, packages: &[PackageIdentity]) {
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for package in packages {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::crate_link(package.name()),
                Self::escape_markdown_table_cell(package.version())
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, title: &str, metadata: &ReportMetadataView) {
        output.push_str(&format!("# {}\n\n", title));
        output.push_str(&format!(
            "Generated by {} {} on {} from `{}` ({} packages).\n\n",
            metadata.tool_name,
            metadata.tool_version,
            metadata.generated_at,
            metadata.lockfile,
            metadata.package_count
        ));
    }

    fn render_duplicates(&self, output: &mut String, view: &DuplicatesView) {
        if view.groups.is_empty() {
            output.push_str("*No duplicate dependencies found.*\n");
            return;
        }

        output.push_str(&format!(
            "**{} {} locked at more than one version.**\n\n",
            view.groups.len(),
            if view.groups.len() == 1 {
                "package is"
            } else {
                "packages are"
            }
        ));
        output.push_str(DUPLICATE_TABLE_HEADER);
        output.push_str(DUPLICATE_TABLE_SEPARATOR);

        for group in &view.groups {
            for version in &group.versions {
                let required_by = match &version.ancestors {
                    Some(path) if !path.is_empty() => format_path(path),
                    Some(_) => "-".to_string(),
                    None => String::new(),
                };
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    Self::crate_link(&group.name),
                    Self::escape_markdown_table_cell(&version.version),
                    if version.primary { "✓" } else { "" },
                    Self::escape_markdown_table_cell(&required_by)
                ));
            }
        }
        output.push('\n');
    }

    fn render_closure(&self, output: &mut String, view: &ClosureView) {
        output.push_str(&format!(
            "`{}` pulls in **{}** {}.\n\n",
            view.root,
            view.dependency_count,
            if view.dependency_count == 1 {
                "package"
            } else {
                "packages"
            }
        ));

        if view.dependencies.is_empty() {
            output.push_str("*No dependencies*\n");
        } else {
            Self::render_package_table(output, &view.dependencies);
        }
    }

    fn render_ancestors(&self, output: &mut String, view: &AncestorsView) {
        output.push_str(&format!(
            "`{}` is required by **{}** {}.\n\n",
            view.target,
            view.ancestors.len(),
            if view.ancestors.len() == 1 {
                "package"
            } else {
                "packages"
            }
        ));

        if view.ancestors.is_empty() {
            output.push_str("*Nothing depends on this package*\n");
            return;
        }

        output.push_str("## Direct Dependents\n\n");
        Self::render_package_table(output, &view.direct_dependents);

        output.push_str("## All Dependents\n\n");
        output.push_str("Listed in discovery order while walking up the graph.\n\n");
        Self::render_package_table(output, &view.ancestors);

        output.push_str(&format!("**Path:** {}\n", format_path(&view.ancestors)));
    }

    fn render_members(&self, output: &mut String, view: &MembersView) {
        if view.members.is_empty() {
            output.push_str("*No workspace members found in the lockfile*\n");
            return;
        }

        output.push_str(MEMBER_TABLE_HEADER);
        output.push_str(MEMBER_TABLE_SEPARATOR);
        for member in &view.members {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&member.name),
                Self::escape_markdown_table_cell(&member.version),
                member.direct_dependency_count,
                member.dependency_count
            ));
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = String::new();

        match &model.body {
            ReportBody::Duplicates(view) => {
                self.render_header(&mut output, "Duplicate Dependencies", &model.metadata);
                self.render_duplicates(&mut output, view);
            }
            ReportBody::Closure(view) => {
                self.render_header(
                    &mut output,
                    &format!("Dependency Closure of {}", view.root.name()),
                    &model.metadata,
                );
                self.render_closure(&mut output, view);
            }
            ReportBody::Ancestors(view) => {
                self.render_header(
                    &mut output,
                    &format!("Reverse Dependencies of {}", view.target.name()),
                    &model.metadata,
                );
                self.render_ancestors(&mut output, view);
            }
            ReportBody::Members(view) => {
                self.render_header(&mut output, "Workspace Members", &model.metadata);
                self.render_members(&mut output, view);
            }
        }

        Ok(output)
    }
}
