/// ProgressReporter port for user feedback while an analysis runs
///
/// Messages go to a side channel (stderr for the CLI) so they never
/// mix with the report itself.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress through a fixed amount of work
    ///
    /// # Arguments
    /// * `current` - Items processed so far
    /// * `total` - Total number of items
    /// * `message` - Optional label for the current item
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an analysis
    fn report_completion(&self, message: &str);
}
