//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, credential validation, and client initialization.

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use zapi::ZapiClient;
use zapi::config::Config;
use zapi::error::Result;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: Config,
    /// Authenticated API client
    pub client: ZapiClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads the config file (or defaults when absent), applies `ZAPI_*`
    /// environment overrides, validates it and builds the client.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded or is incomplete.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let client = ZapiClient::from_config(&config)?;

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }

    /// Configured base URL, for log lines
    pub fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or_default()
    }
}
