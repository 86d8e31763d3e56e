//! HTTP transport
//!
//! The resource APIs only describe *what* to send ([`ApiRequest`]). A
//! [`Transport`] sends it and hands back the raw body of a successful
//! response; status and network failures come back as [`ApiError`]s.
//! [`HttpTransport`] is the reqwest-backed implementation.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, RETRY_AFTER};
use reqwest::{Client as HttpClient, Method, StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{ApiError, ConfigError, Result};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully described API request, validated at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, always starting with `/`
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Create a request, rejecting paths that cannot form a valid URL.
    pub fn new(method: Method, path: impl Into<String>) -> std::result::Result<Self, ApiError> {
        let path = path.into();
        validate_path(&path)?;
        Ok(Self {
            method,
            path,
            query: Vec::new(),
            body: None,
        })
    }

    pub fn get(path: impl Into<String>) -> std::result::Result<Self, ApiError> {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> std::result::Result<Self, ApiError> {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> std::result::Result<Self, ApiError> {
        Self::new(Method::PUT, path)
    }

    /// Append query parameters.
    pub fn query(mut self, params: Vec<(&'static str, String)>) -> Self {
        self.query.extend(params);
        self
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> std::result::Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::RequestBuild(format!("Failed to encode request body: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Reject paths the URL parser would silently rewrite or refuse.
///
/// The WHATWG parser strips tabs and newlines instead of failing, so control
/// characters and whitespace are checked here. `?` and `#` would cut the path
/// short; query parameters go through [`ApiRequest::query`].
fn validate_path(path: &str) -> std::result::Result<(), ApiError> {
    if !path.starts_with('/') {
        return Err(ApiError::RequestBuild(format!(
            "path must start with '/': {:?}",
            path
        )));
    }
    if let Some(c) = path
        .chars()
        .find(|&c| c.is_control() || c.is_whitespace() || c == '?' || c == '#')
    {
        return Err(ApiError::RequestBuild(format!(
            "path contains invalid character {:?}: {:?}",
            c, path
        )));
    }
    Ok(())
}

/// Executes [`ApiRequest`]s against the remote API.
///
/// Implementations must be safe to share between concurrent callers.
/// Dropping the returned future cancels the request.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the body of a 2xx response.
    async fn execute(&self, request: ApiRequest) -> std::result::Result<String, ApiError>;
}

/// Basic-auth credentials (Jira username and API token or password)
#[derive(Clone)]
struct Credentials {
    username: String,
    api_token: String,
}

/// reqwest-backed transport
pub struct HttpTransport {
    http: HttpClient,
    base_url: String,
    credentials: Option<Credentials>,
}

impl HttpTransport {
    /// Create an unauthenticated transport for `base_url` (e.g. `https://jira.example.com`).
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a transport with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        Url::parse(base_url)
            .map_err(|e| ConfigError::Invalid(format!("invalid base URL {:?}: {}", base_url, e)))?;

        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("zapi/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: None,
        })
    }

    /// Build a transport from a validated configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .ok_or(ConfigError::MissingBaseUrl)?;
        let mut transport = Self::with_timeout(base_url, config.timeout())?;
        if let (Some(username), Some(api_token)) = (&config.username, &config.api_token) {
            transport = transport.with_credentials(username, api_token);
        }
        Ok(transport)
    }

    /// Authenticate every request with HTTP Basic auth.
    pub fn with_credentials(mut self, username: &str, api_token: &str) -> Self {
        self.credentials = Some(Credentials {
            username: username.to_string(),
            api_token: api_token.to_string(),
        });
        self
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve the full URL of a request, including its query string.
    pub fn url_for(&self, request: &ApiRequest) -> std::result::Result<Url, ApiError> {
        // Concatenate rather than `Url::join` so a base URL with a context path
        // (https://host/jira) keeps it.
        let raw = format!("{}{}", self.base_url, request.path);
        let mut url = Url::parse(&raw)
            .map_err(|e| ApiError::RequestBuild(format!("invalid URL {:?}: {}", raw, e)))?;

        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> std::result::Result<String, ApiError> {
        let url = self.url_for(&request)?;
        debug!("{} {}", request.method, url);

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .header(ACCEPT, "application/json");
        if let Some(ref credentials) = self.credentials {
            builder = builder.basic_auth(&credentials.username, Some(&credentials.api_token));
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(ApiError::from)?;

        let status = response.status();
        debug!("{} {} -> {}", request.method, request.path, status);

        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response body: {}", e)))?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(status_error(status, retry_after, &body))
        }
    }
}

/// Map a non-2xx response to an [`ApiError`], keeping any remote error detail.
pub fn status_error(status: StatusCode, retry_after: Option<u64>, body: &str) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(remote_detail(body, "Resource not found")),
        StatusCode::TOO_MANY_REQUESTS => {
            ApiError::RateLimit(Duration::from_secs(retry_after.unwrap_or(60)))
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(remote_detail(body, "Bad request"))
        }
        status if status.is_server_error() => {
            ApiError::ServerError(remote_detail(body, &format!("Server error: {}", status)))
        }
        status => ApiError::UnexpectedStatus {
            status: status.as_u16(),
            detail: remote_detail(body, "no response body"),
        },
    }
}

/// Error body shapes returned by Jira and the ZAPI plugin
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteErrorBody {
    #[serde(default)]
    error_desc: Option<String>,
    #[serde(default)]
    error_messages: Vec<String>,
    #[serde(default)]
    errors: BTreeMap<String, String>,
}

/// Human-readable detail of an error response.
///
/// Prefers the structured Jira/ZAPI error fields, then the raw body, then
/// `fallback` when the body is empty.
pub fn remote_detail(body: &str, fallback: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return fallback.to_string();
    }

    if let Ok(parsed) = serde_json::from_str::<RemoteErrorBody>(body) {
        let mut parts: Vec<String> = Vec::new();
        parts.extend(parsed.error_desc);
        parts.extend(parsed.error_messages);
        parts.extend(
            parsed
                .errors
                .into_iter()
                .map(|(field, message)| format!("{}: {}", field, message)),
        );
        if !parts.is_empty() {
            return parts.join("; ");
        }
    }

    body.to_string()
}
