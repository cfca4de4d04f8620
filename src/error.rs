use std::fmt;

/// Custom error type for management API operations
#[derive(Debug)]
pub enum CliError {
    /// Client configuration missing, unreadable, or without a usable credential
    Config(String),
    /// Management client could not be constructed from the configuration
    Connection(String),
    /// Remote query failed; carries the stage context and the underlying error
    Query {
        context: String,
        source: Box<CliError>,
    },
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// JSON parsing error
    Json(String),
}

impl CliError {
    /// Wrap an upstream failure with query-stage context
    pub fn query(context: impl Into<String>, source: impl Into<CliError>) -> Self {
        CliError::Query {
            context: context.into(),
            source: Box::new(source.into()),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "{}", msg),
            CliError::Connection(msg) => write!(f, "{}", msg),
            CliError::Query { context, source } => write!(f, "{}: {}", context, source),
            CliError::Http(e) => write!(f, "HTTP request failed: {}", e),
            CliError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CliError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Http(e) => Some(e),
            CliError::Query { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(err: reqwest::Error) -> Self {
        CliError::Http(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Config(err.to_string())
    }
}

/// Result type alias for management API operations
pub type Result<T> = std::result::Result<T, CliError>;
