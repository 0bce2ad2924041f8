//! Cloud Resource Manager client module
//!
//! This module provides functionality to search organizations and folders
//! through the Resource Manager v3 REST API.

mod client;
mod credentials;
pub mod folders;
pub mod models;
pub mod organizations;
pub mod traits;

pub use client::GcpClient;
pub use credentials::TokenResolver;
pub use folders::{run_folders_command, FetchOptions, Folder};
pub use organizations::{run_organizations_command, Organization};
pub use traits::PaginatedResponse;
