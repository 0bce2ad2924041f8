//! Cloud Resource Manager HTTP client

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::config::api;
use crate::error::{GcpError, Result};
use crate::gcp::traits::PaginatedResponse;

/// Google API error envelope: `{"error": {"code": 403, "message": "...", "status": "..."}}`
#[derive(Deserialize, Debug)]
struct GoogleErrorBody {
    error: GoogleErrorDetail,
}

#[derive(Deserialize, Debug)]
struct GoogleErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Resource Manager API client
pub struct GcpClient {
    client: Client,
    token: String,
    base_url: String,
}

impl GcpClient {
    /// Create a client for `base_url` authenticating with a bearer `token`
    pub fn new(token: String, base_url: String) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
    }

    /// Parse an API response, returning error for non-success status codes
    ///
    /// The error message carries the Google error body's message when the
    /// server sends one.
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GcpError::Api {
                status: status.as_u16(),
                message: api_error_message(error_context, &body),
            });
        }
        Ok(response.json().await?)
    }

    /// Build a URL for `path` with percent-encoded query parameters
    pub(crate) fn url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Fetch every page of a search endpoint
    ///
    /// Pages are requested one after another, following `nextPageToken`
    /// until the server stops returning one. Items keep server order.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "folders:search")
    /// * `query` - Extra query parameters sent with every page
    /// * `error_context` - Context for error messages (e.g., "folders")
    pub async fn fetch_all_pages<T, R>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        error_context: &str,
    ) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let page_size = api::DEFAULT_PAGE_SIZE.to_string();
        let mut all_items = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page = 1u32;

        loop {
            let url = {
                let mut params: Vec<(&str, &str)> = query.to_vec();
                params.push(("pageSize", page_size.as_str()));
                if let Some(token) = page_token.as_deref() {
                    params.push(("pageToken", token));
                }
                self.url(path, &params)
            };
            debug!("Fetching {} page {} from: {}", error_context, page, url);

            let response = self.get(&url).send().await?;
            let resp: R = self.parse_api_response(response, error_context).await?;

            let next = resp
                .has_next_page()
                .then(|| resp.next_page_token().map(str::to_string))
                .flatten();
            let items = resp.into_data();
            debug!("Page {} returned {} {}", page, items.len(), error_context);
            all_items.extend(items);

            match next {
                Some(token) if page_token.as_deref() == Some(token.as_str()) => {
                    return Err(GcpError::Api {
                        status: 200,
                        message: format!(
                            "Failed to fetch {}: server repeated page token '{}'",
                            error_context, token
                        ),
                    });
                }
                Some(token) => {
                    page_token = Some(token);
                    page += 1;
                }
                None => break,
            }
        }

        debug!("Fetched {} {} in {} page(s)", all_items.len(), error_context, page);
        Ok(all_items)
    }
}

/// Compose the message for a failed request from the response body
fn api_error_message(error_context: &str, body: &str) -> String {
    match serde_json::from_str::<GoogleErrorBody>(body) {
        Ok(parsed) if !parsed.error.message.is_empty() => match parsed.error.status {
            Some(status) => format!(
                "Failed to fetch {}: {} ({})",
                error_context, parsed.error.message, status
            ),
            None => format!("Failed to fetch {}: {}", error_context, parsed.error.message),
        },
        _ => format!("Failed to fetch {}", error_context),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize)]
    struct TestPage {
        #[serde(default)]
        items: Vec<String>,
        #[serde(default, rename = "nextPageToken")]
        next_page_token: Option<String>,
    }

    impl PaginatedResponse<String> for TestPage {
        fn into_data(self) -> Vec<String> {
            self.items
        }

        fn next_page_token(&self) -> Option<&str> {
            self.next_page_token.as_deref()
        }
    }

    fn create_test_client(base_url: &str) -> GcpClient {
        GcpClient::new("test-token".to_string(), base_url.to_string())
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = create_test_client("https://example.com/v3/");
        assert_eq!(client.base_url, "https://example.com/v3");
    }

    #[test]
    fn test_url_encodes_query() {
        let client = create_test_client("https://example.com/v3");
        let url = client.url(
            "folders:search",
            &[("query", "state:ACTIVE AND parent:organizations/1")],
        );
        assert_eq!(
            url,
            "https://example.com/v3/folders:search?query=state%3AACTIVE%20AND%20parent%3Aorganizations%2F1"
        );
    }

    #[test]
    fn test_url_without_query() {
        let client = create_test_client("https://example.com/v3");
        assert_eq!(
            client.url("organizations:search", &[]),
            "https://example.com/v3/organizations:search"
        );
    }

    #[test]
    fn test_api_error_message_with_google_body() {
        let body = r#"{"error": {"code": 403, "message": "The caller does not have permission", "status": "PERMISSION_DENIED"}}"#;
        assert_eq!(
            api_error_message("folders", body),
            "Failed to fetch folders: The caller does not have permission (PERMISSION_DENIED)"
        );
    }

    #[test]
    fn test_api_error_message_without_body() {
        assert_eq!(api_error_message("folders", ""), "Failed to fetch folders");
        assert_eq!(
            api_error_message("folders", "<html>oops</html>"),
            "Failed to fetch folders"
        );
    }

    #[tokio::test]
    async fn test_fetch_all_pages_follows_tokens() {
        let mock_server = MockServer::start().await;
        let client = create_test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/things:search"))
            .and(query_param("pageToken", "page-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": ["c"]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/things:search"))
            .and(query_param_is_missing("pageToken"))
            .and(query_param("pageSize", "1000"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": ["a", "b"],
                "nextPageToken": "page-2"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<String, TestPage>("things:search", &[], "things")
            .await
            .unwrap();

        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_empty_token_stops() {
        let mock_server = MockServer::start().await;
        let client = create_test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/things:search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": ["a"],
                "nextPageToken": ""
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<String, TestPage>("things:search", &[], "things")
            .await
            .unwrap();

        assert_eq!(items, vec!["a"]);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_repeated_token_fails() {
        let mock_server = MockServer::start().await;
        let client = create_test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/things:search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": ["a"],
                "nextPageToken": "same"
            })))
            .expect(2)
            .mount(&mock_server)
            .await;

        let err = client
            .fetch_all_pages::<String, TestPage>("things:search", &[], "things")
            .await
            .unwrap_err();

        match err {
            GcpError::Api { message, .. } => {
                assert_eq!(
                    message,
                    "Failed to fetch things: server repeated page token 'same'"
                );
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_pages_sends_query() {
        let mock_server = MockServer::start().await;
        let client = create_test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/things:search"))
            .and(query_param("query", "state:ACTIVE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<String, TestPage>(
                "things:search",
                &[("query", "state:ACTIVE")],
                "things",
            )
            .await
            .unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_pages_api_error() {
        let mock_server = MockServer::start().await;
        let client = create_test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/things:search"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": {
                    "code": 403,
                    "message": "denied",
                    "status": "PERMISSION_DENIED"
                }
            })))
            .mount(&mock_server)
            .await;

        let err = client
            .fetch_all_pages::<String, TestPage>("things:search", &[], "things")
            .await
            .unwrap_err();

        match err {
            GcpError::Api { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("denied"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }
}
