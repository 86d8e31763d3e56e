//! Client for the Zephyr for Jira test-management REST API (ZAPI).
//!
//! Covers test cycles, executions and folders. Each operation is a single
//! request/response round trip through a shared [`Transport`](client::Transport).
//!
//! # Quick Start
//!
//! ```no_run
//! use zapi::client::{CycleApi, HttpTransport, ListFilter, ZapiClient};
//!
//! # async fn run() -> zapi::error::Result<()> {
//! let transport = HttpTransport::new("https://jira.example.com")?
//!     .with_credentials("jdoe", "api-token");
//! let client = ZapiClient::new(transport);
//!
//! let filter = ListFilter::new().project(10000).version(-1);
//! for cycle in client.list_cycles(Some(&filter)).await? {
//!     println!("{:?} {:?}", cycle.id, cycle.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! [`Config`](config::Config) loads `~/.zapi/config.yaml` and honors
//! `ZAPI_BASE_URL`, `ZAPI_USERNAME` and `ZAPI_API_TOKEN`;
//! [`ZapiClient::from_config`](client::ZapiClient::from_config) builds an
//! authenticated client from it.

pub mod client;
pub mod config;
pub mod error;

pub use client::{ZapiApi, ZapiClient};
pub use error::{ApiError, Error, Result};
