//! Error types for the zapi client and CLI

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for zapi operations
pub type Result<T> = std::result::Result<T, Error>;

/// Resource an operation was acting on, used to label operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Cycle,
    Execution,
    Folder,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Cycle => write!(f, "Cycle"),
            Resource::Execution => write!(f, "Execution"),
            Resource::Folder => write!(f, "Folder"),
        }
    }
}

/// Top-level error type
///
/// Every resource operation reports failures through one of the labelled
/// variants (`List`, `Create`, `Execute`) so callers can tell which operation
/// failed without digging into the wrapped [`ApiError`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("{resource} list error: {source}")]
    List {
        resource: Resource,
        #[source]
        source: ApiError,
    },

    #[error("{resource} create error: {source}")]
    Create {
        resource: Resource,
        #[source]
        source: ApiError,
    },

    #[error("Execute error: {source}")]
    Execute {
        #[source]
        source: ApiError,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// Labeller for failures of a list operation on `resource`
    pub(crate) fn list(resource: Resource) -> impl Fn(ApiError) -> Error {
        move |source| Error::List { resource, source }
    }

    /// Labeller for failures of a create operation on `resource`
    pub(crate) fn create(resource: Resource) -> impl Fn(ApiError) -> Error {
        move |source| Error::Create { resource, source }
    }

    /// Labeller for failures of an execution status transition
    pub(crate) fn execute() -> impl Fn(ApiError) -> Error {
        |source| Error::Execute { source }
    }

    /// The underlying API error, if this error came from an API call
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::List { source, .. }
            | Error::Create { source, .. }
            | Error::Execute { source } => Some(source),
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the remote API answered 404
    pub fn is_not_found(&self) -> bool {
        matches!(self.api_error(), Some(ApiError::NotFound(_)))
    }
}

/// API-related errors
///
/// Falls into three groups: request construction (`RequestBuild`), transport
/// and HTTP status failures, and response decoding (`Decode`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    RequestBuild(String),

    #[error("Authentication failed. Check the username and API token (run `zapi init`).")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Unexpected status code {status}: {detail}")]
    UnexpectedStatus { status: u16, detail: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else if err.is_builder() {
            ApiError::RequestBuild(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `zapi init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Jira base URL not configured. Run `zapi init` or set ZAPI_BASE_URL.")]
    MissingBaseUrl,

    #[error(
        "Credentials not configured. Run `zapi init` or set ZAPI_USERNAME and ZAPI_API_TOKEN."
    )]
    MissingCredentials,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
