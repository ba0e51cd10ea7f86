//! The HTTP seam of the library.
//!
//! The fetch pipeline only needs "GET this URL, give me the status and body".
//! [`ReqwestTransport`] provides that over a shared `reqwest::Client`; tests and
//! applications with their own HTTP stack can implement [`Transport`] instead.

use crate::config::ForecastConfig;
use crate::error::{ForecastError, TransportError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Performs a single `GET` request.
///
/// Implementations must not turn non-success status codes into errors; the
/// pipeline validates the status itself. Errors are reserved for failures to
/// obtain a response at all (connection refused, timeout, broken body stream).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Wraps an existing client, sharing its connection pool.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client with the user agent and timeout from `config`.
    pub fn from_config(config: &ForecastConfig) -> Result<Self, ForecastError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(ForecastError::HttpClient)?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}
