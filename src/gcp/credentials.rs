//! Access token resolution from multiple sources

use gcp_auth::TokenProvider;
use log::debug;

use crate::config::credentials;
use crate::error::{GcpError, Result};

/// Token resolution with fallback logic
#[derive(Debug, Default)]
pub struct TokenResolver;

impl TokenResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (GOOGLE_OAUTH_ACCESS_TOKEN, CLOUDSDK_AUTH_ACCESS_TOKEN - in order)
    /// 3. Application Default Credentials
    pub async fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = static_token(cli_token, |name| std::env::var(name).ok()) {
            return Ok(token);
        }

        debug!(
            "No token in CLI argument or environment variables {:?}, trying Application Default Credentials",
            credentials::TOKEN_ENV_VARS
        );
        self.token_from_adc().await
    }

    /// Ask Application Default Credentials for a cloud-platform token
    async fn token_from_adc(&self) -> Result<String> {
        let provider = gcp_auth::provider().await.map_err(|e| {
            debug!("Application Default Credentials unavailable: {}", e);
            GcpError::TokenNotFound(token_not_found_message())
        })?;

        let token = provider.token(credentials::SCOPES).await?;
        debug!("Using token from Application Default Credentials");
        Ok(token.as_str().to_string())
    }
}

/// Token from the CLI argument or the first non-empty token env var
fn static_token<F>(cli_token: Option<&str>, env: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = cli_token.filter(|t| !t.is_empty()) {
        debug!("Using token from CLI argument");
        return Some(token.to_string());
    }

    credentials::TOKEN_ENV_VARS.iter().find_map(|name| {
        env(name).filter(|t| !t.is_empty()).inspect(|_| {
            debug!("Using token from {} environment variable", name);
        })
    })
}

/// Generate helpful error message when no token is available
fn token_not_found_message() -> String {
    format!(
        "No access token found. Please provide credentials using one of:\n\
         \n\
         1. CLI argument:      gcphelper --access-token <TOKEN>\n\
         2. Environment var:   export GOOGLE_OAUTH_ACCESS_TOKEN=$(gcloud auth print-access-token)\n\
         3. Default creds:     gcloud auth application-default login\n\
         \n\
         Checked: env vars [{}], Application Default Credentials",
        credentials::TOKEN_ENV_VARS.join(", ")
    )
}
