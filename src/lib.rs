//! gcphelper - Explore Google Cloud organizations and folders
//!
//! A CLI tool to list Google Cloud resource hierarchy entries.
//!
//! # Features
//!
//! - List organizations and active folders
//! - Filter folders by parent folder or organization
//! - Multiple output formats (table, JSON, CSV, bare IDs)
//! - Automatic pagination handling
//!
//! # Example
//!
//! ```bash
//! # List all organizations
//! gcphelper organizations
//!
//! # List folders under an organization
//! gcphelper folders --parent-organization 123456789
//!
//! # Folder IDs only, for scripting
//! gcphelper folders -p 987654321 -f id
//!
//! # Output as JSON
//! gcphelper org -f json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gcp;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, FoldersArgs, OutputOptions};
pub use error::{GcpError, Result};
pub use gcp::{
    run_folders_command, run_organizations_command, FetchOptions, Folder, GcpClient,
    Organization, TokenResolver,
};
pub use output::{Formatter, OutputFormat, Resource};
