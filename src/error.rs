use std::fmt;

/// Output stage that failed while writing formatted results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStage {
    Json,
    Table,
    Csv,
    Id,
    Diagnostic,
}

impl fmt::Display for OutputStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputStage::Json => write!(f, "encode JSON"),
            OutputStage::Table => write!(f, "render table"),
            OutputStage::Csv => write!(f, "render CSV"),
            OutputStage::Id => write!(f, "write resource ID"),
            OutputStage::Diagnostic => write!(f, "write diagnostic"),
        }
    }
}

/// Custom error type for gcphelper operations
#[derive(Debug)]
pub enum GcpError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Caller lacks the IAM permission for the request; carries remediation text
    PermissionDenied(String),
    /// No access token could be resolved
    TokenNotFound(String),
    /// Application Default Credentials failed to issue a token
    Auth(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Requested output format is not one of table, json, csv, id
    UnsupportedFormat(String),
    /// Writing formatted output failed
    Output {
        stage: OutputStage,
        source: std::io::Error,
    },
    /// An error wrapped with a description of the failed operation
    Context {
        message: String,
        source: Box<GcpError>,
    },
}

impl GcpError {
    /// Wrap this error with a description of the operation that failed
    pub fn context(self, message: impl Into<String>) -> Self {
        GcpError::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping context wrappers
    pub fn root(&self) -> &GcpError {
        match self {
            GcpError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// HTTP status code of the underlying API error, if any
    pub fn api_status(&self) -> Option<u16> {
        match self.root() {
            GcpError::Api { status, .. } => Some(*status),
            GcpError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for GcpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GcpError::Http(e) => write!(f, "HTTP request failed: {}", e),
            GcpError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            GcpError::PermissionDenied(msg) => write!(f, "{}", msg),
            GcpError::TokenNotFound(msg) => write!(f, "{}", msg),
            GcpError::Auth(msg) => write!(f, "Authentication error: {}", msg),
            GcpError::Json(msg) => write!(f, "JSON error: {}", msg),
            GcpError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GcpError::UnsupportedFormat(format) => {
                write!(f, "unsupported output format: {}", format)
            }
            GcpError::Output { stage, source } => write!(f, "failed to {}: {}", stage, source),
            GcpError::Context { message, source } => write!(f, "{}: {}", message, source),
        }
    }
}

impl std::error::Error for GcpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GcpError::Http(e) => Some(e),
            GcpError::Output { source, .. } => Some(source),
            GcpError::Context { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GcpError {
    fn from(err: reqwest::Error) -> Self {
        GcpError::Http(err)
    }
}

impl From<serde_json::Error> for GcpError {
    fn from(err: serde_json::Error) -> Self {
        GcpError::Json(err.to_string())
    }
}

impl From<gcp_auth::Error> for GcpError {
    fn from(err: gcp_auth::Error) -> Self {
        GcpError::Auth(err.to_string())
    }
}

/// Result type alias for gcphelper operations
pub type Result<T> = std::result::Result<T, GcpError>;
