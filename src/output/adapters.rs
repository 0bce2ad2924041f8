//! Conversions from concrete resource lists to formatter input

use super::Resource;
use crate::gcp::{Folder, Organization};

const ORGANIZATION_HEADERS: &[&str] = &[
    "ID",
    "Display Name",
    "State",
    "Create Time",
    "Update Time",
];

const FOLDER_HEADERS: &[&str] = &[
    "ID",
    "Display Name",
    "Parent",
    "State",
    "Create Time",
    "Update Time",
];

/// View any list of resources as capability references, same order and length
pub fn to_resources<R: Resource>(items: &[R]) -> Vec<&dyn Resource> {
    items.iter().map(|item| item as &dyn Resource).collect()
}

pub fn organizations_to_resources(organizations: &[Organization]) -> Vec<&dyn Resource> {
    to_resources(organizations)
}

pub fn folders_to_resources(folders: &[Folder]) -> Vec<&dyn Resource> {
    to_resources(folders)
}

/// Column labels matching `Organization::table_row`
pub fn organization_headers() -> &'static [&'static str] {
    ORGANIZATION_HEADERS
}

/// Column labels matching `Folder::table_row`
pub fn folder_headers() -> &'static [&'static str] {
    FOLDER_HEADERS
}
