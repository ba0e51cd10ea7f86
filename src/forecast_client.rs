//! This module provides the main entry point of the library.
//!
//! A [`ForecastClient`] holds the configuration and the transport, and hands out
//! one [`ForecastPublisher`] per requested location.

use crate::config::ForecastConfig;
use crate::error::ForecastError;
use crate::fetch::endpoint::build_url;
use crate::fetch::pipeline::fetch_document;
use crate::fetch::publisher::ForecastPublisher;
use crate::fetch::transport::{ReqwestTransport, Transport};
use crate::forecast_view::ForecastView;
use crate::types::coordinate::Coordinate;
use crate::types::forecast::ForecastDocument;
use bon::bon;
use log::debug;
use std::fmt;
use std::sync::Arc;

/// The client for the SMHI point forecast service.
///
/// Cheap to clone; clones share the transport and its connection pool.
///
/// # Examples
///
/// ```no_run
/// use smhi_forecast::{ForecastClient, ForecastConfig, ForecastError, ParameterName};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), ForecastError> {
/// // Defaults: the public pmp3g endpoint, 2xx only, strict cutoff.
/// let client = ForecastClient::builder().build()?;
///
/// let document = client.fetch(59.3258414, 17.7018733).await?;
/// let view = client.view(&document);
/// if view.is_relevant() {
///     println!("Wind: {} m/s", view.get(ParameterName::WindSpeed).value());
/// }
///
/// // Or with explicit settings.
/// let config = ForecastConfig {
///     timeout_secs: Some(10),
///     ..Default::default()
/// };
/// let client = ForecastClient::builder().config(config).build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ForecastClient {
    config: ForecastConfig,
    transport: Arc<dyn Transport>,
}

#[bon]
impl ForecastClient {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `.config(ForecastConfig)`: Optional. Defaults to [`ForecastConfig::default`].
    /// * `.transport(Arc<dyn Transport>)`: Optional. Defaults to a
    ///   [`ReqwestTransport`] built from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidConfig`] if the endpoint template lacks a
    /// coordinate placeholder, and [`ForecastError::HttpClient`] if the default
    /// HTTP client cannot be created.
    #[builder]
    pub fn new(
        config: Option<ForecastConfig>,
        transport: Option<Arc<dyn Transport>>,
    ) -> Result<Self, ForecastError> {
        let config = config.unwrap_or_default();
        config.validate()?;

        let transport = match transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::from_config(&config)?),
        };
        debug!("Created forecast client for endpoint {}", config.endpoint);
        Ok(Self { config, transport })
    }

    /// The active configuration.
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// A publisher for the forecast at the given position.
    ///
    /// The coordinate is rounded to six decimals. Nothing is requested until the
    /// publisher gets its first subscriber, and every call returns an independent
    /// publisher with its own single fetch.
    pub fn publisher(&self, latitude: f64, longitude: f64) -> ForecastPublisher {
        self.publisher_at(Coordinate::normalize(latitude, longitude))
    }

    /// Like [`ForecastClient::publisher`] for an already normalised coordinate.
    pub fn publisher_at(&self, coordinate: Coordinate) -> ForecastPublisher {
        ForecastPublisher::new(
            coordinate,
            self.config.endpoint.clone(),
            self.config.status_policy,
            Arc::clone(&self.transport),
        )
    }

    /// Fetches the forecast at the given position and waits for it.
    ///
    /// Does not go through a publisher; dropping the future aborts the request.
    ///
    /// # Errors
    ///
    /// Any failure of the fetch: see [`ForecastError`].
    pub async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastDocument, ForecastError> {
        let coordinate = Coordinate::normalize(latitude, longitude);
        let url = build_url(&self.config.endpoint, &coordinate)?;
        fetch_document(self.transport.as_ref(), &url, self.config.status_policy).await
    }

    /// Views `document` with the configured cutoff policy.
    pub fn view<'a>(&self, document: &'a ForecastDocument) -> ForecastView<'a> {
        document.view_with(self.config.cutoff)
    }
}

impl fmt::Debug for ForecastClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
