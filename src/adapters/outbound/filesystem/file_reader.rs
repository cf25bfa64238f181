use crate::ports::outbound::{LockfileReader, ProjectConfigReader};
use crate::shared::error::LockGraphError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

const MANIFEST_FILENAME: &str = "Cargo.toml";

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both LockfileReader and ProjectConfigReader ports,
/// providing file system access for reading lockfiles and workspace manifests.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }

    fn read_manifest(&self, manifest_path: &Path) -> Result<toml::Value> {
        let content = self
            .safe_read_file(manifest_path, MANIFEST_FILENAME)
            .map_err(|e| LockGraphError::FileReadError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            })?;

        toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!(
                "Failed to parse {}: {}",
                manifest_path.display(),
                e
            )
        })
    }

    /// Package name declared by a member directory, if it has a readable manifest
    fn member_package_name(&self, member_dir: &Path) -> Option<String> {
        let manifest = self.read_manifest(&member_dir.join(MANIFEST_FILENAME)).ok()?;
        manifest
            .get("package")
            .and_then(|p| p.get("name"))
            .and_then(|n| n.as_str())
            .map(str::to_string)
    }

    /// Expands a `[workspace].members` entry into member directories
    ///
    /// Only a trailing `/*` glob is supported; it expands to every
    /// subdirectory that contains a manifest.
    fn expand_member(&self, project_path: &Path, member: &str) -> Vec<PathBuf> {
        match member.strip_suffix("/*") {
            Some(parent) => {
                let parent_dir = project_path.join(parent);
                let mut dirs: Vec<PathBuf> = fs::read_dir(&parent_dir)
                    .map(|entries| {
                        entries
                            .filter_map(|entry| entry.ok().map(|e| e.path()))
                            .filter(|path| path.join(MANIFEST_FILENAME).is_file())
                            .collect()
                    })
                    .unwrap_or_default();
                dirs.sort();
                dirs
            }
            None => vec![project_path.join(member)],
        }
    }
}

/// Lockfiles spell member names with dashes where directories often use underscores
pub fn normalize_member_name(member_dir: &Path) -> Option<String> {
    member_dir
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.replace('_', "-"))
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, project_path: &Path, lockfile_name: &str) -> Result<String> {
        let lockfile_path = project_path.join(lockfile_name);

        if !lockfile_path.exists() {
            return Err(LockGraphError::LockfileNotFound {
                path: lockfile_path.clone(),
                suggestion: format!(
                    "{} does not exist in project directory \"{}\".\n   \
                     Run `cargo generate-lockfile` first, or specify the correct path with the --path option.",
                    lockfile_name,
                    project_path.display()
                ),
            }
            .into());
        }

        self.safe_read_file(&lockfile_path, lockfile_name)
            .map_err(|e| {
                LockGraphError::FileReadError {
                    path: lockfile_path,
                    details: e.to_string(),
                }
                .into()
            })
    }
}

impl ProjectConfigReader for FileSystemReader {
    fn read_workspace_members(&self, project_path: &Path) -> Result<Vec<String>> {
        let manifest_path = project_path.join(MANIFEST_FILENAME);

        if !manifest_path.exists() {
            anyhow::bail!("Cargo.toml not found in project directory");
        }

        let manifest = self.read_manifest(&manifest_path)?;
        let mut members = Vec::new();

        if let Some(name) = manifest
            .get("package")
            .and_then(|p| p.get("name"))
            .and_then(|n| n.as_str())
        {
            members.push(name.to_string());
        }

        let declared = manifest
            .get("workspace")
            .and_then(|w| w.get("members"))
            .and_then(|m| m.as_array())
            .cloned()
            .unwrap_or_default();

        for entry in declared.iter().filter_map(|m| m.as_str()) {
            for member_dir in self.expand_member(project_path, entry) {
                let name = self
                    .member_package_name(&member_dir)
                    .or_else(|| normalize_member_name(&member_dir));
                if let Some(name) = name {
                    if !members.contains(&name) {
                        members.push(name);
                    }
                }
            }
        }

        if members.is_empty() {
            anyhow::bail!(
                "No workspace members or package name found in {}",
                manifest_path.display()
            );
        }

        Ok(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_lockfile_success() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Cargo.lock"), "version = 3\n").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_lockfile(temp_dir.path(), "Cargo.lock").unwrap();

        assert_eq!(content, "version = 3\n");
    }

    #[test]
    fn test_read_lockfile_custom_name() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("other.lock"), "version = 4\n").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_lockfile(temp_dir.path(), "other.lock").unwrap();

        assert_eq!(content, "version = 4\n");
    }

    #[test]
    fn test_read_lockfile_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_lockfile(temp_dir.path(), "Cargo.lock");

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Lockfile not found"));
        assert!(err_string.contains("cargo generate-lockfile"));
    }

    #[test]
    fn test_read_lockfile_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("Cargo.lock")).unwrap();

        let reader = FileSystemReader::new();
        let err_string = format!(
            "{}",
            reader
                .read_lockfile(temp_dir.path(), "Cargo.lock")
                .unwrap_err()
        );
        assert!(err_string.contains("not a regular file"));
    }

    #[test]
    fn test_read_workspace_members_normalizes_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("Cargo.toml"),
            r#"
[workspace]
members = ["tosho", "tosho_common", "crates/tosho_macros"]
"#,
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let members = reader.read_workspace_members(temp_dir.path()).unwrap();

        assert_eq!(members, vec!["tosho", "tosho-common", "tosho-macros"]);
    }

    #[test]
    fn test_read_workspace_members_prefers_member_manifest() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("Cargo.toml"),
            "[workspace]\nmembers = [\"core_lib\"]\n",
        )
        .unwrap();
        fs::create_dir(temp_dir.path().join("core_lib")).unwrap();
        fs::write(
            temp_dir.path().join("core_lib/Cargo.toml"),
            "[package]\nname = \"fancy-core\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let members = reader.read_workspace_members(temp_dir.path()).unwrap();

        assert_eq!(members, vec!["fancy-core"]);
    }

    #[test]
    fn test_read_workspace_members_expands_glob() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("Cargo.toml"),
            "[workspace]\nmembers = [\"crates/*\"]\n",
        )
        .unwrap();
        for name in ["beta", "alpha"] {
            let dir = temp_dir.path().join("crates").join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(
                dir.join("Cargo.toml"),
                format!("[package]\nname = \"{}\"\nversion = \"0.1.0\"\n", name),
            )
            .unwrap();
        }
        fs::create_dir_all(temp_dir.path().join("crates/not-a-crate")).unwrap();

        let reader = FileSystemReader::new();
        let members = reader.read_workspace_members(temp_dir.path()).unwrap();

        assert_eq!(members, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_read_workspace_members_root_package() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("Cargo.toml"),
            "[package]\nname = \"single\"\nversion = \"1.0.0\"\n",
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let members = reader.read_workspace_members(temp_dir.path()).unwrap();

        assert_eq!(members, vec!["single"]);
    }

    #[test]
    fn test_read_workspace_members_manifest_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let err_string = format!(
            "{}",
            reader.read_workspace_members(temp_dir.path()).unwrap_err()
        );
        assert!(err_string.contains("Cargo.toml not found"));
    }

    #[test]
    fn test_read_workspace_members_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Cargo.toml"), "invalid toml [[[").unwrap();

        let reader = FileSystemReader::new();
        let err_string = format!(
            "{}",
            reader.read_workspace_members(temp_dir.path()).unwrap_err()
        );
        assert!(err_string.contains("Failed to parse"));
    }

    #[test]
    fn test_read_workspace_members_empty_manifest() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Cargo.toml"), "[workspace]\n").unwrap();

        let reader = FileSystemReader::new();
        assert!(reader.read_workspace_members(temp_dir.path()).is_err());
    }

    #[test]
    fn test_normalize_member_name() {
        assert_eq!(
            normalize_member_name(Path::new("crates/tosho_common")),
            Some("tosho-common".to_string())
        );
    }
}
