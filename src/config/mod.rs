//! Configuration management for zapi
//!
//! Configuration lives in `~/.zapi/config.yaml`. Environment variables
//! (`ZAPI_BASE_URL`, `ZAPI_USERNAME`, `ZAPI_API_TOKEN`) override file values.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::client::Endpoints;
use crate::error::{ConfigError, Result};

/// Environment variable overriding the Jira base URL
pub const ENV_BASE_URL: &str = "ZAPI_BASE_URL";
/// Environment variable overriding the username
pub const ENV_USERNAME: &str = "ZAPI_USERNAME";
/// Environment variable overriding the API token
pub const ENV_API_TOKEN: &str = "ZAPI_API_TOKEN";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Jira base URL, e.g. `https://jira.example.com`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Jira username for Basic auth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Jira API token (or password)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Endpoint path templates
    #[serde(default)]
    pub endpoints: Endpoints,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            username: None,
            api_token: None,
            timeout_secs: default_timeout_secs(),
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".zapi").join("config.yaml"))
    }

    /// Resolve an explicit path override or fall back to the default path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load configuration for a command run.
    ///
    /// A missing file is not an error here since the environment alone may
    /// carry the whole configuration. Environment overrides are applied.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let mut config = match Self::load_from(Self::resolve_path(path)?) {
            Ok(config) => config,
            Err(crate::error::Error::Config(ConfigError::NotFound)) => {
                log::debug!("No config file found, using defaults");
                Config::default()
            }
            Err(err) => return Err(err),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The file holds an API token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Save configuration to an explicit path or the default path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Apply `ZAPI_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(base_url) = get(ENV_BASE_URL) {
            self.base_url = Some(base_url);
        }
        if let Some(username) = get(ENV_USERNAME) {
            self.username = Some(username);
        }
        if let Some(api_token) = get(ENV_API_TOKEN) {
            self.api_token = Some(api_token);
        }
    }

    /// Validate that everything needed to talk to the API is present
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_none() {
            return Err(ConfigError::MissingBaseUrl.into());
        }
        if self.username.is_none() || self.api_token.is_none() {
            return Err(ConfigError::MissingCredentials.into());
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be greater than 0".to_string()).into());
        }
        self.endpoints.validate()?;
        Ok(())
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API token with everything but the last four characters hidden
    pub fn masked_token(&self) -> Option<String> {
        self.api_token.as_ref().map(|token| {
            let chars: Vec<char> = token.chars().collect();
            if chars.len() <= 4 {
                "****".to_string()
            } else {
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("****{}", tail)
            }
        })
    }
}
