//! CLI argument parsing

mod folders;

use clap::{Parser, Subcommand};

use crate::config::{api, credentials, defaults};
use crate::error::{GcpError, Result};
use crate::output::OutputFormat;

pub use folders::FoldersArgs;

/// gcphelper CLI
#[derive(Parser, Debug)]
#[command(name = "gcphelper")]
#[command(version)]
#[command(
    about = "A CLI tool to fetch information from Google Cloud",
    long_about = "gcphelper lists Google Cloud organizations and folders through the \
                  Resource Manager API and prints them as a table, JSON, CSV or bare IDs."
)]
#[command(after_help = "EXAMPLES:\n  \
        gcphelper organizations\n  \
        gcphelper folders --parent-organization 123456789 -f json\n  \
        gcphelper folders -p 987654321 -f id")]
pub struct Cli {
    /// Output format (table, json, csv, id)
    #[arg(short = 'f', long, global = true, default_value = defaults::FORMAT)]
    pub format: String,

    /// Print extra messages such as totals and empty-result notices
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no progress spinner
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    /// OAuth access token (overrides env vars and Application Default Credentials)
    #[arg(long, global = true)]
    pub access_token: Option<String>,

    /// Resource Manager API base URL
    #[arg(
        long,
        global = true,
        env = credentials::ENDPOINT_ENV_VAR,
        default_value = api::BASE_URL
    )]
    pub endpoint: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List organizations you have access to
    #[command(visible_alias = "organization", visible_alias = "org")]
    Organizations,

    /// List active folders, optionally under a parent
    #[command(visible_alias = "folder")]
    Folders(FoldersArgs),
}

/// Output settings resolved from global flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub verbose: bool,
    /// Suppress the progress spinner
    pub quiet: bool,
}

impl Cli {
    /// Resolve output settings; fails on an unknown format selector
    pub fn output_options(&self) -> Result<OutputOptions> {
        Ok(OutputOptions {
            format: self.format.parse()?,
            verbose: self.verbose,
            quiet: self.batch,
        })
    }

    /// API base URL; fails when it is blank or not an http(s) URL
    pub fn endpoint(&self) -> Result<&str> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(GcpError::Config("API endpoint must not be empty".to_string()));
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(GcpError::Config(format!(
                "API endpoint must be an http or https URL: {}",
                endpoint
            )));
        }
        Ok(endpoint)
    }
}
