//! Folder module

mod api;
mod commands;
mod models;

pub use commands::{fetch_folders, handle_folders_error, output_folders, run_folders_command};
pub use models::{ApiFolder, FetchOptions, Folder, SearchFoldersResponse, FOLDER_PREFIX};
