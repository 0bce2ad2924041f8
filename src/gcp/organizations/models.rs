//! Organization data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::gcp::models::{ApiResourceCore, ResourceCore};
use crate::gcp::traits::PaginatedResponse;
use crate::output::common::format_timestamp;
use crate::output::Resource;

/// Resource name prefix for organizations
pub const ORGANIZATION_PREFIX: &str = "organizations/";

/// Response page from `organizations:search`
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchOrganizationsResponse {
    #[serde(default)]
    pub organizations: Vec<ApiOrganization>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl PaginatedResponse<ApiOrganization> for SearchOrganizationsResponse {
    fn into_data(self) -> Vec<ApiOrganization> {
        self.organizations
    }

    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

/// Organization as returned by the API
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApiOrganization {
    #[serde(flatten)]
    pub core: ApiResourceCore,
}

/// Google Cloud organization
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Organization {
    /// Bare identifier ("123456789")
    pub id: String,
    /// Resource name ("organizations/123456789")
    pub name: String,
    pub display_name: String,
    pub state: String,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl Organization {
    /// Convert an optional wire record; absent input gives an absent organization
    pub fn from_api(api: Option<&ApiOrganization>) -> Option<Self> {
        api.map(Self::from)
    }
}

impl From<&ApiOrganization> for Organization {
    fn from(api: &ApiOrganization) -> Self {
        let core = ResourceCore::from_api(ORGANIZATION_PREFIX, &api.core);
        Self {
            id: core.id,
            name: core.name,
            display_name: core.display_name,
            state: core.state,
            create_time: core.create_time,
            update_time: core.update_time,
        }
    }
}

impl Resource for Organization {
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
            self.state.clone(),
            format_timestamp(&self.create_time),
            format_timestamp(&self.update_time),
        ]
    }
}
