use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no duplicates detected, or duplicates not treated as failure
    Success = 0,
    /// Duplicate dependencies were detected and `--fail-on-duplicates` was set
    DuplicatesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, malformed lockfile, unknown package, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DuplicatesDetected => write!(f, "Duplicates Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for lock-graph analysis.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum LockGraphError {
    /// A lockfile entry does not have the `name`/`version` shape
    #[error("Malformed lockfile entry at package #{index}\nDetails: {details}\n\n💡 Hint: Every [[package]] entry needs a name and a version")]
    MalformedSource { index: usize, details: String },

    #[error("Lockfile not found: {path}\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse lockfile: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the lockfile is in the correct format")]
    LockfileParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Package not found in lockfile: {query}\n\n💡 Hint: Check the package name and version against the lockfile")]
    PackageNotFound { query: String },

    #[error("Package '{name}' is locked at several versions: {versions}\n\n💡 Hint: Pass one of the versions explicitly")]
    AmbiguousPackage { name: String, versions: String },

    /// An option value that cannot be used, e.g. an unknown format in the config file
    #[error("Validation error: {message}")]
    Validation { message: String },
}
