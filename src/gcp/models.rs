//! Shared Resource Manager models

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::output::common::zero_time;

/// State label used when the API omits or leaves the state unset
pub const STATE_UNSPECIFIED: &str = "STATE_UNSPECIFIED";

/// Fields every Resource Manager resource carries on the wire
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiResourceCore {
    /// Full resource name (e.g. "organizations/123")
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub update_time: Option<DateTime<Utc>>,
}

/// Display-ready core fields derived from the wire form
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCore {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub state: String,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl ResourceCore {
    /// Convert the wire fields, deriving the bare ID by stripping `prefix`
    ///
    /// A name without the prefix is used as the ID unchanged. Missing
    /// timestamps become the zero instant and a missing state becomes
    /// "STATE_UNSPECIFIED".
    pub fn from_api(prefix: &str, api: &ApiResourceCore) -> Self {
        Self {
            id: strip_prefix(&api.name, prefix).to_string(),
            name: api.name.clone(),
            display_name: api.display_name.clone(),
            state: api
                .state
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(STATE_UNSPECIFIED)
                .to_string(),
            create_time: api.create_time.unwrap_or_else(zero_time),
            update_time: api.update_time.unwrap_or_else(zero_time),
        }
    }
}

/// Remove a collection prefix such as "folders/" from a resource name
pub fn strip_prefix<'a>(name: &'a str, prefix: &str) -> &'a str {
    name.strip_prefix(prefix).unwrap_or(name)
}
