//! Folder API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::gcp::GcpClient;

use super::models::{ApiFolder, FetchOptions, Folder, SearchFoldersResponse};

impl GcpClient {
    /// Search active folders, optionally restricted to a parent
    pub async fn search_folders(&self, options: &FetchOptions) -> Result<Vec<Folder>> {
        let query = options.query();
        debug!("Searching folders with query: {}", query);

        let items = self
            .fetch_all_pages::<ApiFolder, SearchFoldersResponse>(
                api::FOLDERS_SEARCH,
                &[("query", query.as_str())],
                "folders",
            )
            .await?;

        Ok(items.iter().map(Folder::from).collect())
    }
}
