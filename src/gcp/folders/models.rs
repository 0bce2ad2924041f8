//! Folder data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::gcp::models::{ApiResourceCore, ResourceCore};
use crate::gcp::traits::PaginatedResponse;
use crate::output::common::format_timestamp;
use crate::output::Resource;

/// Resource name prefix for folders
pub const FOLDER_PREFIX: &str = "folders/";

/// Response page from `folders:search`
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchFoldersResponse {
    #[serde(default)]
    pub folders: Vec<ApiFolder>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl PaginatedResponse<ApiFolder> for SearchFoldersResponse {
    fn into_data(self) -> Vec<ApiFolder> {
        self.folders
    }

    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

/// Folder as returned by the API
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApiFolder {
    #[serde(flatten)]
    pub core: ApiResourceCore,
    /// Parent resource name ("organizations/1" or "folders/2")
    #[serde(default)]
    pub parent: String,
}

/// Options for folder searches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Only list direct children of this resource (e.g. "folders/123", "organizations/456")
    pub parent: Option<String>,
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: impl Into<String>) -> Self {
        Self {
            parent: Some(parent.into()),
        }
    }

    /// Search query for active folders, narrowed to the parent when set
    pub fn query(&self) -> String {
        match self.parent.as_deref().filter(|p| !p.is_empty()) {
            Some(parent) => format!("{} AND parent:{}", api::ACTIVE_FOLDERS_QUERY, parent),
            None => api::ACTIVE_FOLDERS_QUERY.to_string(),
        }
    }
}

/// Google Cloud folder
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Folder {
    /// Bare identifier ("123456789")
    pub id: String,
    /// Resource name ("folders/123456789")
    pub name: String,
    pub display_name: String,
    /// Containing organization or folder
    pub parent: String,
    pub state: String,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl Folder {
    /// Convert an optional wire record; absent input gives an absent folder
    pub fn from_api(api: Option<&ApiFolder>) -> Option<Self> {
        api.map(Self::from)
    }
}

impl From<&ApiFolder> for Folder {
    fn from(api: &ApiFolder) -> Self {
        let core = ResourceCore::from_api(FOLDER_PREFIX, &api.core);
        Self {
            id: core.id,
            name: core.name,
            display_name: core.display_name,
            parent: api.parent.clone(),
            state: core.state,
            create_time: core.create_time,
            update_time: core.update_time,
        }
    }
}

impl Resource for Folder {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn state(&self) -> &str {
        &self.state
    }

    fn create_time(&self) -> DateTime<Utc> {
        self.create_time
    }

    fn update_time(&self) -> DateTime<Utc> {
        self.update_time
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.display_name.clone(),
            self.parent.clone(),
            self.state.clone(),
            format_timestamp(&self.create_time),
            format_timestamp(&self.update_time),
        ]
    }
}
