//! Test fixtures shared by the output formatter tests

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Serialize;

use super::common::format_timestamp;
use super::Resource;

/// Minimal resource kind used to exercise the formatter
#[derive(Debug, Clone, Serialize)]
pub struct MockResource {
    pub id: String,
    pub display_name: String,
    pub state: String,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl MockResource {
    pub fn new(id: &str, display_name: &str) -> Self {
        let base = base_time();
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            state: "ACTIVE".to_string(),
            create_time: base,
            update_time: base + Duration::hours(1),
        }
    }
}

impl Resource for MockResource {
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

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

/// Two resources with distinct IDs, names and states
pub fn sample_resources() -> Vec<MockResource> {
    let mut second = MockResource::new("456", "Test Resource 2");
    second.state = "INACTIVE".to_string();
    second.create_time = base_time() + Duration::minutes(1);
    second.update_time = base_time() + Duration::hours(2);

    vec![MockResource::new("123", "Test Resource 1"), second]
}

pub const HEADERS: &[&str] = &["ID", "Name", "State", "Created", "Updated"];
