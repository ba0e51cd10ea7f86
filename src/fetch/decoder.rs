use crate::error::ForecastError;
use crate::types::forecast::ForecastDocument;
use log::debug;
use std::str::FromStr;

/// Decodes a response body into a [`ForecastDocument`].
///
/// `approvedTime`, `referenceTime` and every `validTime` must be RFC 3339
/// timestamps, and each parameter must carry `level`, `unit` and `values`;
/// any violation fails the whole document with [`ForecastError::Decode`].
/// Unrecognised parameter names and level types are not errors and decode to
/// their `Unknown` variants.
pub fn decode_document(bytes: &[u8]) -> Result<ForecastDocument, ForecastError> {
    let document: ForecastDocument = serde_json::from_slice(bytes)?;
    debug!(
        "Decoded forecast document ({} bytes, {} entries, reference time {})",
        bytes.len(),
        document.time_series.len(),
        document.reference_time
    );
    Ok(document)
}

impl FromStr for ForecastDocument {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_document(s.as_bytes())
    }
}
