//! Folder command handlers

use log::debug;
use std::io::{self, Write};

use crate::cli::{FoldersArgs, OutputOptions};
use crate::error::{GcpError, Result};
use crate::gcp::GcpClient;
use crate::output::{folder_headers, folders_to_resources, Formatter};
use crate::ui::{create_spinner, finish_spinner};

use super::{FetchOptions, Folder};

/// Fetch active folders, under `options.parent` when set
pub async fn fetch_folders(
    client: &GcpClient,
    options: &FetchOptions,
    quiet: bool,
) -> Result<Vec<Folder>> {
    let message = match options.parent.as_deref() {
        Some(parent) => {
            debug!("fetching folders from parent {}", parent);
            format!("Fetching folders from parent {}...", parent)
        }
        None => {
            debug!("fetching all accessible folders");
            "Fetching folders...".to_string()
        }
    };

    let spinner = create_spinner(&message, quiet);
    let result = client.search_folders(options).await;
    finish_spinner(spinner);

    let folders = result.map_err(|e| e.context("failed to list folders"))?;
    debug!("successfully fetched {} folders", folders.len());
    Ok(folders)
}

/// Turn a 403 into remediation text; other errors pass through
pub fn handle_folders_error(err: GcpError, parent: Option<&str>) -> GcpError {
    if err.api_status() != Some(403) {
        return err;
    }

    let message = match parent {
        Some(parent) => format!(
            "permission denied: insufficient permissions to list folders under parent {}.\n\n\
             Ensure you have the 'resourcemanager.folders.list' permission for this parent resource.\n\n\
             Original error: {}",
            parent, err
        ),
        None => format!(
            "permission denied: insufficient permissions to search folders.\n\n\
             Ensure you have the required IAM permissions:\n  \
             - resourcemanager.folders.list (to access folders)\n  \
             - Or specify a parent with: gcphelper folders --parent-organization YOUR_ORG_ID\n\n\
             Original error: {}",
            err
        ),
    };
    GcpError::PermissionDenied(message)
}

/// Render folders to `writer` in the selected format
pub fn output_folders<W: Write>(
    writer: W,
    folders: &[Folder],
    options: &OutputOptions,
) -> Result<()> {
    let resources = folders_to_resources(folders);
    Formatter::new(writer, options.verbose, "folders")
        .format_as(&resources, options.format, folder_headers())
        .map_err(|e| e.context("failed to format folders output"))
}

/// Run the folders command
pub async fn run_folders_command(
    client: &GcpClient,
    args: &FoldersArgs,
    options: &OutputOptions,
) -> Result<()> {
    let fetch_options = FetchOptions {
        parent: args.parent(),
    };

    let folders = fetch_folders(client, &fetch_options, options.quiet)
        .await
        .map_err(|e| handle_folders_error(e, fetch_options.parent.as_deref()))?;

    output_folders(io::stdout().lock(), &folders, options)
}
