use clap::{Parser, Subcommand};

use lockgraph::application::dto::OutputFormat;

/// Analyze the dependency graph recorded in a Cargo lockfile
#[derive(Parser, Debug)]
#[command(name = "lockgraph")]
#[command(version)]
#[command(
    about = "Analyze Cargo.lock dependency graphs: duplicates, closures and reverse paths",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub path: Option<String>,

    /// Lockfile name inside the project directory [default: Cargo.lock]
    #[arg(long, global = true, env = "LOCKGRAPH_LOCKFILE")]
    pub lockfile: Option<String>,

    /// Output format: text, markdown or json [default: text]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Path to a config file (defaults to lockgraph.config.yml in the project directory)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List packages locked at more than one version
    Duplicates {
        /// Show the dependency path leading to every listed version
        #[arg(short, long)]
        trace: bool,

        /// Leave a package out of the report (can be given multiple times)
        #[arg(short, long = "ignore", value_name = "NAME")]
        ignore: Vec<String>,

        /// Exit with code 1 when duplicates remain after filtering
        #[arg(long)]
        fail_on_duplicates: bool,
    },
    /// List every package reachable from a package's dependencies
    Closure {
        /// Package name
        name: String,
        /// Exact version, required when the name is locked at several versions
        #[arg(value_name = "VERSION")]
        pkg_version: Option<String>,
    },
    /// List every package that depends on a package, directly or transitively
    Ancestors {
        /// Package name
        name: String,
        /// Exact version, required when the name is locked at several versions
        #[arg(value_name = "VERSION")]
        pkg_version: Option<String>,
    },
    /// Summarize the dependency count of each workspace member
    Members,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
