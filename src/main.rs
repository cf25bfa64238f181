mod cli;
mod config;

use cli::{Args, Command};
use config::{discover_config, load_config_from_path, ConfigFile};
use lockgraph::adapters::outbound::console::StderrProgressReporter;
use lockgraph::adapters::outbound::filesystem::FileSystemReader;
use lockgraph::application::dto::{
    AnalysisQuery, AnalysisRequest, DuplicateOptions, OutputFormat, PackageQuery,
    DEFAULT_LOCKFILE_NAME,
};
use lockgraph::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use lockgraph::application::read_models::ReportReadModelBuilder;
use lockgraph::application::use_cases::AnalyzeLockfileUseCase;
use lockgraph::shared::error::{ExitCode, LockGraphError};
use lockgraph::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    // Load config file: explicit --config, otherwise auto-discovered
    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(Path::new(path))?,
        None => discover_config(&project_path)?.unwrap_or_default(),
    };

    let format = resolve_format(args.format, &config)?;
    let lockfile_name = args
        .lockfile
        .clone()
        .or_else(|| config.lockfile.clone())
        .unwrap_or_else(|| DEFAULT_LOCKFILE_NAME.to_string());
    let (query, fail_on_duplicates) = resolve_query(args.command, &config);

    // Create adapters (Dependency Injection)
    let lockfile_reader = FileSystemReader::new();
    let project_config_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case =
        AnalyzeLockfileUseCase::new(lockfile_reader, project_config_reader, progress_reporter);

    let request = AnalysisRequest::new(project_path, lockfile_name, query);
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(format));

    let model = ReportReadModelBuilder::build(&response);
    let formatter = FormatterFactory::create(format);
    let formatted_output = formatter.format(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.as_deref()));
    presenter.present(&formatted_output)?;

    if fail_on_duplicates && response.has_duplicates() {
        return Ok(ExitCode::DuplicatesDetected);
    }
    Ok(ExitCode::Success)
}

/// Picks the output format: CLI flag first, then the config file, then text
fn resolve_format(cli_format: Option<OutputFormat>, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = cli_format {
        return Ok(format);
    }

    match config.format.as_deref() {
        Some(value) => value
            .parse::<OutputFormat>()
            .map_err(|message| anyhow::Error::from(LockGraphError::Validation { message })),
        None => Ok(OutputFormat::default()),
    }
}

/// Builds the analysis query, merging duplicate options from the config file
///
/// Returns the query and whether remaining duplicates should fail the run.
fn resolve_query(command: Command, config: &ConfigFile) -> (AnalysisQuery, bool) {
    match command {
        Command::Duplicates {
            trace,
            ignore,
            fail_on_duplicates,
        } => {
            let mut ignored = ignore;
            for name in config.ignore_duplicates.iter().flatten() {
                if !ignored.contains(name) {
                    ignored.push(name.clone());
                }
            }
            let options = DuplicateOptions {
                trace_ancestors: trace || config.trace_ancestors.unwrap_or(false),
                ignored,
            };
            let fail = fail_on_duplicates || config.fail_on_duplicates.unwrap_or(false);
            (AnalysisQuery::Duplicates(options), fail)
        }
        Command::Closure { name, pkg_version } => (
            AnalysisQuery::Closure(PackageQuery::new(name, pkg_version)),
            false,
        ),
        Command::Ancestors { name, pkg_version } => (
            AnalysisQuery::Ancestors(PackageQuery::new(name, pkg_version)),
            false,
        ),
        Command::Members => (AnalysisQuery::Members, false),
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(LockGraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| LockGraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(LockGraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(LockGraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let err = validate_project_path(&nonexistent_path).unwrap_err();
        assert!(format!("{}", err).contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Cargo.lock");
        fs::write(&file_path, "version = 3").unwrap();

        let err = validate_project_path(&file_path).unwrap_err();
        assert!(format!("{}", err).contains("Not a directory"));
    }

    #[test]
    fn test_resolve_format_precedence() {
        let config = ConfigFile {
            format: Some("json".to_string()),
            ..Default::default()
        };

        assert_eq!(
            resolve_format(Some(OutputFormat::Markdown), &config).unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(resolve_format(None, &config).unwrap(), OutputFormat::Json);
        assert_eq!(
            resolve_format(None, &ConfigFile::default()).unwrap(),
            OutputFormat::Text
        );
    }

    #[test]
    fn test_resolve_format_invalid_config_value() {
        let config = ConfigFile {
            format: Some("xml".to_string()),
            ..Default::default()
        };
        let err = resolve_format(None, &config).unwrap_err();
        assert!(format!("{}", err).contains("Invalid format: xml"));
    }

    #[test]
    fn test_resolve_query_merges_duplicate_options() {
        let config = ConfigFile {
            ignore_duplicates: Some(vec!["bitflags".to_string(), "syn".to_string()]),
            fail_on_duplicates: Some(true),
            trace_ancestors: Some(true),
            ..Default::default()
        };
        let command = Command::Duplicates {
            trace: false,
            ignore: vec!["syn".to_string()],
            fail_on_duplicates: false,
        };

        let (query, fail) = resolve_query(command, &config);

        assert!(fail);
        assert_eq!(
            query,
            AnalysisQuery::Duplicates(DuplicateOptions {
                trace_ancestors: true,
                ignored: vec!["syn".to_string(), "bitflags".to_string()],
            })
        );
    }

    #[test]
    fn test_resolve_query_package_commands() {
        let (query, fail) = resolve_query(
            Command::Closure {
                name: "serde".to_string(),
                pkg_version: Some("1.0.196".to_string()),
            },
            &ConfigFile::default(),
        );
        assert!(!fail);
        assert_eq!(
            query,
            AnalysisQuery::Closure(PackageQuery::new(
                "serde".to_string(),
                Some("1.0.196".to_string())
            ))
        );

        let (query, _) = resolve_query(Command::Members, &ConfigFile::default());
        assert_eq!(query, AnalysisQuery::Members);
    }
}
