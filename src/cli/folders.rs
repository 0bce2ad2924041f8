//! Folders command arguments

use clap::Parser;

use crate::gcp::folders::FOLDER_PREFIX;
use crate::gcp::organizations::ORGANIZATION_PREFIX;

/// Arguments for the 'folders' command
#[derive(Parser, Debug, Default)]
pub struct FoldersArgs {
    /// List folders directly under this folder ID
    #[arg(short = 'p', long, conflicts_with = "parent_organization")]
    pub parent_folder: Option<String>,

    /// List folders directly under this organization ID
    #[arg(short = 'o', long)]
    pub parent_organization: Option<String>,
}

impl FoldersArgs {
    /// Parent resource name for the search, if a non-empty parent flag was given
    pub fn parent(&self) -> Option<String> {
        self.parent_folder
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("{}{}", FOLDER_PREFIX, id))
            .or_else(|| {
                self.parent_organization
                    .as_deref()
                    .filter(|id| !id.is_empty())
                    .map(|id| format!("{}{}", ORGANIZATION_PREFIX, id))
            })
    }
}
