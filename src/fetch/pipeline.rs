use crate::config::StatusPolicy;
use crate::error::ForecastError;
use crate::fetch::decoder::decode_document;
use crate::fetch::transport::{HttpResponse, Transport};
use crate::types::forecast::ForecastDocument;
use log::{info, warn};
use url::Url;

/// Requests `url` once and turns the response into a document.
pub(crate) async fn fetch_document(
    transport: &dyn Transport,
    url: &Url,
    status_policy: StatusPolicy,
) -> Result<ForecastDocument, ForecastError> {
    info!("Requesting forecast from {}", url);

    let response = transport.get(url).await.map_err(|e| {
        warn!("Transport error for {}: {}", url, e);
        ForecastError::NetworkRequest(url.to_string(), e)
    })?;

    let body = validate_response(url, response, status_policy)?;
    let document = decode_document(&body).inspect_err(|e| {
        warn!("Failed to decode forecast from {}: {}", url, e);
    })?;

    info!(
        "Received forecast with {} entries from {}",
        document.time_series.len(),
        url
    );
    Ok(document)
}

/// Checks the status code and body before anything is decoded.
fn validate_response(
    url: &Url,
    response: HttpResponse,
    status_policy: StatusPolicy,
) -> Result<Vec<u8>, ForecastError> {
    if !status_policy.accepts(response.status) {
        warn!("HTTP error for {}: {}", url, response.status);
        return Err(ForecastError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }
    if response.body.is_empty() {
        warn!("Empty response body from {}", url);
        return Err(ForecastError::EmptyBody(url.to_string()));
    }
    Ok(response.body)
}
