//! Paths of SMHI's historical-observation (metobs) service.
//!
//! Only the directory URLs are provided; the observation documents themselves
//! are not fetched or decoded by this crate.

use crate::error::ForecastError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Base URL of the observation service.
pub const OBSERVATION_ENDPOINT: &str = "https://opendata-download-metobs.smhi.se";

/// The content type to request from the observation service.
pub const PREFERRED_CONTENT_TYPE: &str = "application/json";

/// Version segment of the observation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DirectoryVersion {
    #[default]
    #[serde(rename = "latest")]
    Latest,
    #[serde(rename = "1.0")]
    V1,
}

impl DirectoryVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectoryVersion::Latest => "latest",
            DirectoryVersion::V1 => "1.0",
        }
    }
}

impl fmt::Display for DirectoryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the directory URLs of the observation service.
///
/// # Examples
///
/// ```
/// use smhi_forecast::{DirectoryVersion, ObservationDirectory};
///
/// let directory = ObservationDirectory::new(DirectoryVersion::V1)?;
/// assert_eq!(
///     directory.directory_url()?.as_str(),
///     "https://opendata-download-metobs.smhi.se/api.json"
/// );
/// assert_eq!(
///     directory.resource_directory_url()?.as_str(),
///     "https://opendata-download-metobs.smhi.se/api/version/1.0.json"
/// );
/// # Ok::<(), smhi_forecast::ForecastError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationDirectory {
    endpoint: Url,
    version: DirectoryVersion,
}

impl ObservationDirectory {
    /// The directory of the public observation service.
    pub fn new(version: DirectoryVersion) -> Result<Self, ForecastError> {
        Self::with_base_url(OBSERVATION_ENDPOINT, version)
    }

    /// The directory of a service hosted at `base`, e.g. a mirror or mock server.
    pub fn with_base_url(base: &str, version: DirectoryVersion) -> Result<Self, ForecastError> {
        let mut endpoint =
            Url::parse(base).map_err(|e| ForecastError::InvalidUrl(base.to_string(), e))?;
        // Joined paths must extend the base path, not replace its last segment.
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }
        Ok(Self { endpoint, version })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn version(&self) -> DirectoryVersion {
        self.version
    }

    /// The service's root directory document, `/api.json`.
    pub fn directory_url(&self) -> Result<Url, ForecastError> {
        self.join("api.json")
    }

    /// The resource directory for the configured version, `/api/version/{version}.json`.
    pub fn resource_directory_url(&self) -> Result<Url, ForecastError> {
        self.join(&format!("api/version/{}.json", self.version))
    }

    fn join(&self, path: &str) -> Result<Url, ForecastError> {
        self.endpoint
            .join(path)
            .map_err(|e| ForecastError::InvalidUrl(format!("{}{}", self.endpoint, path), e))
    }
}
