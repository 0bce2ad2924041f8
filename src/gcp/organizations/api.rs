//! Organization API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::gcp::GcpClient;

use super::models::{ApiOrganization, Organization, SearchOrganizationsResponse};

impl GcpClient {
    /// Search all organizations visible to the caller
    pub async fn search_organizations(&self) -> Result<Vec<Organization>> {
        debug!("Searching organizations");

        let items = self
            .fetch_all_pages::<ApiOrganization, SearchOrganizationsResponse>(
                api::ORGANIZATIONS_SEARCH,
                &[],
                "organizations",
            )
            .await?;

        Ok(items.iter().map(Organization::from).collect())
    }
}
