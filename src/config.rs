//! Client configuration.
//!
//! [`ForecastConfig`] deserializes with a default for every field, so it can be
//! embedded in an application's own configuration file and only the fields
//! that differ need to be spelled out.

use crate::error::ForecastError;
use crate::fetch::endpoint::{LATITUDE_PLACEHOLDER, LONGITUDE_PLACEHOLDER};
use crate::forecast_view::CutoffPolicy;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// The pmp3g point forecast endpoint, with coordinate placeholders.
pub const DEFAULT_ENDPOINT: &str = "https://opendata-download-metfcst.smhi.se/api/category/pmp3g/version/2/geotype/point/lon/{LONGITUDE}/lat/{LATITUDE}/data.json";

/// `User-Agent` sent by the default transport.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Which HTTP status codes are handed on to decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Only `200..=299`. Everything else fails the fetch.
    #[default]
    SuccessOnly,
    /// `200..=399`. For transports that do not follow redirects themselves but
    /// still return a usable body.
    AllowRedirects,
}

impl StatusPolicy {
    /// Whether a response with `status` should be decoded.
    pub fn accepts(&self, status: StatusCode) -> bool {
        match self {
            StatusPolicy::SuccessOnly => status.is_success(),
            StatusPolicy::AllowRedirects => status.is_success() || status.is_redirection(),
        }
    }
}

/// Settings for a [`crate::ForecastClient`].
///
/// # Examples
///
/// ```
/// use smhi_forecast::{CutoffPolicy, ForecastConfig, StatusPolicy};
///
/// let config: ForecastConfig = serde_json::from_str(r#"{"cutoff": {"grace": {"minutes": 60}}}"#)?;
/// assert_eq!(config.cutoff, CutoffPolicy::skewed());
/// assert_eq!(config.status_policy, StatusPolicy::SuccessOnly);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// URL template containing `{LONGITUDE}` and `{LATITUDE}`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Status codes that are accepted as success (default: 2xx only).
    #[serde(default)]
    pub status_policy: StatusPolicy,

    /// Cutoff used by [`crate::ForecastClient::view`] (default: strict).
    #[serde(default)]
    pub cutoff: CutoffPolicy,

    /// Request timeout in seconds for the default transport. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// `User-Agent` header for the default transport.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            status_policy: StatusPolicy::default(),
            cutoff: CutoffPolicy::default(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ForecastConfig {
    /// Checks that the endpoint template can be filled in.
    pub fn validate(&self) -> Result<(), ForecastError> {
        for placeholder in [LONGITUDE_PLACEHOLDER, LATITUDE_PLACEHOLDER] {
            if !self.endpoint.contains(placeholder) {
                return Err(ForecastError::InvalidConfig(format!(
                    "endpoint '{}' has no {} placeholder",
                    self.endpoint, placeholder
                )));
            }
        }
        Ok(())
    }
}
