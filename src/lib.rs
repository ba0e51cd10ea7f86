//! A client for the SMHI open data point forecast service (`pmp3g`).
//!
//! Give it a latitude and longitude and it fetches the forecast document for
//! that point, decodes it into typed parameters, and answers "what is the
//! weather now" through a [`ForecastView`]. Fetches are shared: a
//! [`ForecastPublisher`] performs one request and delivers its outcome to every
//! subscriber, and can be cancelled while in flight.
//!
//! ```no_run
//! use smhi_forecast::{ForecastClient, ForecastError, ParameterName};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), ForecastError> {
//! let client = ForecastClient::builder().build()?;
//! let document = client.fetch(59.3258414, 17.7018733).await?;
//!
//! for (time, temperature) in document.view().project(ParameterName::AirTemperature, |p| p.value()) {
//!     println!("{time}: {temperature} °C");
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod fetch;
mod forecast_client;
mod forecast_view;
mod observations;
mod types;

#[cfg(test)]
mod test_support;

pub use config::{ForecastConfig, StatusPolicy, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
pub use error::{ForecastError, TransportError};
pub use forecast_client::ForecastClient;
pub use forecast_view::{CutoffPolicy, ForecastView};
pub use observations::{
    DirectoryVersion, ObservationDirectory, OBSERVATION_ENDPOINT, PREFERRED_CONTENT_TYPE,
};

pub use fetch::decoder::decode_document;
pub use fetch::endpoint::build_url;
pub use fetch::publisher::{
    Completion, FetchResult, FetchState, ForecastPublisher, ForecastSubscriber, Sink, Subscription,
};
pub use fetch::transport::{HttpResponse, ReqwestTransport, Transport};

pub use types::coordinate::{Coordinate, COORDINATE_PRECISION};
pub use types::forecast::{ForecastDocument, ForecastEntry};
pub use types::geometry::Geometry;
pub use types::level_type::LevelType;
pub use types::parameter_name::ParameterName;
pub use types::parameter_value::ParameterValue;
pub use types::tolerant::TolerantCode;
pub use types::weather_symbol::{PrecipitationCategory, WeatherSymbol};
