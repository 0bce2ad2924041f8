/// Configuration constants for the Cloud Resource Manager API
pub mod api {
    /// Base URL for Cloud Resource Manager API v3
    pub const BASE_URL: &str = "https://cloudresourcemanager.googleapis.com/v3";

    /// Organizations search endpoint
    pub const ORGANIZATIONS_SEARCH: &str = "organizations:search";

    /// Folders search endpoint
    pub const FOLDERS_SEARCH: &str = "folders:search";

    /// Folder search query; only active folders are listed
    pub const ACTIVE_FOLDERS_QUERY: &str = "state:ACTIVE";

    /// Page size requested from search endpoints
    pub const DEFAULT_PAGE_SIZE: u32 = 1000;
}

/// Configuration constants for credentials
pub mod credentials {
    /// OAuth scopes requested from Application Default Credentials
    pub const SCOPES: &[&str] = &["https://www.googleapis.com/auth/cloud-platform"];

    /// Environment variable names for a pre-issued access token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["GOOGLE_OAUTH_ACCESS_TOKEN", "CLOUDSDK_AUTH_ACCESS_TOKEN"];

    /// Environment variable overriding the API base URL
    pub const ENDPOINT_ENV_VAR: &str = "GCPHELPER_ENDPOINT";
}

/// Default values for CLI
pub mod defaults {
    /// Default output format
    pub const FORMAT: &str = "table";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Resource label used in messages when none is given
    pub const RESOURCE_TYPE: &str = "resources";
}
