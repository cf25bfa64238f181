use crate::shared::Result;
use std::path::Path;

/// ProjectConfigReader port for reading workspace configuration
///
/// This port abstracts the file system operations needed to read
/// workspace metadata from the project manifest (Cargo.toml).
pub trait ProjectConfigReader {
    /// Reads the package names of the workspace members
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory
    ///
    /// # Returns
    /// Member package names, normalized the way they appear in the lockfile
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest (Cargo.toml) does not exist
    /// - The file cannot be parsed
    fn read_workspace_members(&self, project_path: &Path) -> Result<Vec<String>>;
}
