use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for reading lockfile contents
///
/// This port abstracts the file system operations needed to read
/// the lockfile (Cargo.lock by default) from a project directory.
pub trait LockfileReader {
    /// Reads the lockfile from the specified project directory
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory
    /// * `lockfile_name` - File name of the lockfile inside that directory
    ///
    /// # Returns
    /// The raw content of the lockfile as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The lockfile does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_lockfile(&self, project_path: &Path, lockfile_name: &str) -> Result<String>;
}
