//! Organization module

mod api;
mod commands;
mod models;

pub use commands::{
    fetch_organizations, handle_organizations_error, output_organizations,
    run_organizations_command,
};
pub use models::{ApiOrganization, Organization, SearchOrganizationsResponse, ORGANIZATION_PREFIX};
