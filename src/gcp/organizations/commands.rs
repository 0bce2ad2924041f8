//! Organization command handlers

use log::debug;
use std::io::{self, Write};

use crate::cli::OutputOptions;
use crate::error::{GcpError, Result};
use crate::gcp::GcpClient;
use crate::output::{organization_headers, organizations_to_resources, Formatter};
use crate::ui::{create_spinner, finish_spinner};

use super::Organization;

/// Fetch all organizations the caller can see
pub async fn fetch_organizations(client: &GcpClient, quiet: bool) -> Result<Vec<Organization>> {
    debug!("fetching organizations");

    let spinner = create_spinner("Fetching organizations...", quiet);
    let result = client.search_organizations().await;
    finish_spinner(spinner);

    let organizations = result.map_err(|e| e.context("failed to search organizations"))?;
    debug!("successfully fetched {} organizations", organizations.len());
    Ok(organizations)
}

/// Turn a 403 into remediation text; other errors pass through
pub fn handle_organizations_error(err: GcpError) -> GcpError {
    if err.api_status() != Some(403) {
        return err;
    }

    GcpError::PermissionDenied(format!(
        "permission denied: insufficient permissions to search organizations.\n\n\
         Ensure you have the 'resourcemanager.organizations.get' permission.\n\n\
         Original error: {}",
        err
    ))
}

/// Render organizations to `writer` in the selected format
pub fn output_organizations<W: Write>(
    writer: W,
    organizations: &[Organization],
    options: &OutputOptions,
) -> Result<()> {
    let resources = organizations_to_resources(organizations);
    Formatter::new(writer, options.verbose, "organizations")
        .format_as(&resources, options.format, organization_headers())
        .map_err(|e| e.context("failed to format organizations output"))
}

/// Run the organizations command
pub async fn run_organizations_command(client: &GcpClient, options: &OutputOptions) -> Result<()> {
    let organizations = fetch_organizations(client, options.quiet)
        .await
        .map_err(handle_organizations_error)?;

    output_organizations(io::stdout().lock(), &organizations, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn options(format: OutputFormat) -> OutputOptions {
        OutputOptions {
            format,
            verbose: false,
            quiet: true,
        }
    }

    fn test_org() -> Organization {
        let api = serde_json::from_value(serde_json::json!({
            "name": "organizations/123456789",
            "displayName": "Test Organization",
            "state": "ACTIVE",
            "createTime": "2023-01-01T00:00:00Z",
            "updateTime": "2023-06-01T00:00:00Z"
        }))
        .unwrap();
        Organization::from_api(Some(&api)).unwrap()
    }

    #[test]
    fn test_output_organizations_csv() {
        let mut out = Vec::new();
        output_organizations(&mut out, &[test_org()], &options(OutputFormat::Csv)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(
            "ID,Display Name,State,Create Time,Update Time\n\
             123456789,Test Organization,ACTIVE,2023-01-01 00:00:00,2023-06-01 00:00:00\n"
        ));
    }

    #[test]
    fn test_output_organizations_id() {
        let mut out = Vec::new();
        output_organizations(&mut out, &[test_org()], &options(OutputFormat::Id)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "123456789\n");
    }

    #[test]
    fn test_permission_denied_mapping() {
        let err = GcpError::Api {
            status: 403,
            message: "denied".to_string(),
        }
        .context("failed to search organizations");

        let mapped = handle_organizations_error(err);
        let msg = mapped.to_string();
        assert!(matches!(mapped, GcpError::PermissionDenied(_)));
        assert!(msg.starts_with("permission denied: insufficient permissions to search organizations."));
        assert!(msg.contains("resourcemanager.organizations.get"));
        assert!(msg.contains("Original error: failed to search organizations"));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let err = GcpError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(matches!(
            handle_organizations_error(err),
            GcpError::Api { status: 500, .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_organizations_wraps_errors() {
        let mock_server = MockServer::start().await;
        let client = GcpClient::new("test-token".to_string(), mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations:search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let err = fetch_organizations(&client, true).await.unwrap_err();
        assert!(err.to_string().starts_with("failed to search organizations: "));
        assert_eq!(err.api_status(), Some(500));
    }
}
