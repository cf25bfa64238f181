use crate::application::read_models::{
    format_path, AncestorsView, ClosureView, DuplicatesView, MembersView, ReportBody,
    ReportReadModel,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter producing the plain console report
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_duplicates(output: &mut String, view: &DuplicatesView) -> std::fmt::Result {
        if view.groups.is_empty() {
            return writeln!(output, "No duplicate dependencies found.");
        }

        writeln!(output, "Duplicate dependencies found:")?;
        for group in &view.groups {
            writeln!(output, "  {}:", group.name)?;
            for version in &group.versions {
                match &version.ancestors {
                    Some(path) if !path.is_empty() => {
                        writeln!(output, "    - {} ({})", version.version, format_path(path))?
                    }
                    _ => writeln!(output, "    - {}", version.version)?,
                }
            }
        }
        Ok(())
    }

    fn render_closure(output: &mut String, view: &ClosureView) -> std::fmt::Result {
        writeln!(output, "{} v{}:", view.root.name(), view.root.version())?;
        writeln!(output, "  {} dependencies", view.dependency_count)?;
        for package in &view.dependencies {
            writeln!(output, "    - {}", package)?;
        }
        Ok(())
    }

    fn render_ancestors(output: &mut String, view: &AncestorsView) -> std::fmt::Result {
        writeln!(
            output,
            "{} v{} is required by {} package(s)",
            view.target.name(),
            view.target.version(),
            view.ancestors.len()
        )?;
        if view.ancestors.is_empty() {
            return Ok(());
        }

        writeln!(output, "  direct:")?;
        for package in &view.direct_dependents {
            writeln!(output, "    - {}", package)?;
        }
        writeln!(output, "  all:")?;
        for package in &view.ancestors {
            writeln!(output, "    - {}", package)?;
        }
        writeln!(output, "  path: {}", format_path(&view.ancestors))
    }

    fn render_members(output: &mut String, view: &MembersView) -> std::fmt::Result {
        if view.members.is_empty() {
            return writeln!(output, "No workspace members found in the lockfile.");
        }
        for member in &view.members {
            writeln!(output, "{} v{}:", member.name, member.version)?;
            writeln!(output, "  {} dependencies", member.dependency_count)?;
        }
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = String::new();

        match &model.body {
            ReportBody::Duplicates(view) => Self::render_duplicates(&mut output, view),
            ReportBody::Closure(view) => Self::render_closure(&mut output, view),
            ReportBody::Ancestors(view) => Self::render_ancestors(&mut output, view),
            ReportBody::Members(view) => Self::render_members(&mut output, view),
        }
        .map_err(|e| anyhow::anyhow!("Failed to render text report: {}", e))?;

        Ok(output)
    }
}
