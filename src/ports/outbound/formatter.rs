use crate::application::read_models::ReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering analysis reports
///
/// This port abstracts the formatting logic for the different
/// output formats (plain text, Markdown, JSON).
pub trait ReportFormatter {
    /// Formats a report read model
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &ReportReadModel) -> Result<String>;
}
