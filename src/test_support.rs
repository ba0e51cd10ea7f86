//! Shared fixtures for unit tests.

use crate::error::TransportError;
use crate::fetch::decoder::decode_document;
use crate::fetch::transport::{HttpResponse, Transport};
use crate::types::forecast::ForecastDocument;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::StatusCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use url::Url;

/// 2024-01-15 at the given UTC time.
pub(crate) fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, 0).unwrap()
}

/// Three entries at 11:00, 12:00 and 13:00, deliberately out of order.
/// The 12:00 entry has no `gust` and carries one unrecognised parameter.
pub(crate) const SAMPLE_BODY: &str = r#"{
  "approvedTime": "2024-01-15T10:05:12Z",
  "referenceTime": "2024-01-15T10:00:00Z",
  "geometry": {"type": "Point", "coordinates": [[17.701873, 59.325841]]},
  "timeSeries": [
    {
      "validTime": "2024-01-15T13:00:00Z",
      "parameters": [
        {"name": "t", "levelType": "hl", "level": 2, "unit": "Cel", "values": [-0.5]},
        {"name": "ws", "levelType": "hl", "level": 10, "unit": "m/s", "values": [4.1]},
        {"name": "gust", "levelType": "hl", "level": 10, "unit": "m/s", "values": [9.0]},
        {"name": "Wsymb2", "levelType": "hl", "level": 0, "unit": "category", "values": [6]}
      ]
    },
    {
      "validTime": "2024-01-15T11:00:00Z",
      "parameters": [
        {"name": "t", "levelType": "hl", "level": 2, "unit": "Cel", "values": [-2.0]},
        {"name": "ws", "levelType": "hl", "level": 10, "unit": "m/s", "values": [3.2]},
        {"name": "gust", "levelType": "hl", "level": 10, "unit": "m/s", "values": [7.5]},
        {"name": "msl", "levelType": "hmsl", "level": 0, "unit": "hPa", "values": [1012.3]}
      ]
    },
    {
      "validTime": "2024-01-15T12:00:00Z",
      "parameters": [
        {"name": "t", "levelType": "hl", "level": 2, "unit": "Cel", "values": [-1.5]},
        {"name": "ws", "levelType": "hl", "level": 10, "unit": "m/s", "values": [3.6]},
        {"name": "new_param", "levelType": "hl", "level": 0, "unit": "x", "values": [1]}
      ]
    }
  ]
}"#;

pub(crate) fn sample_document() -> ForecastDocument {
    decode_document(SAMPLE_BODY.as_bytes()).expect("sample body decodes")
}

/// An in-memory [`Transport`] answering every request with the same response.
///
/// When gated, requests wait until [`FakeTransport::release`] is called.
pub(crate) struct FakeTransport {
    status: StatusCode,
    body: Vec<u8>,
    gate: Option<Notify>,
    calls: AtomicUsize,
    requested: Mutex<Vec<Url>>,
}

impl FakeTransport {
    pub(crate) fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            gate: None,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn ok() -> Self {
        Self::new(StatusCode::OK, SAMPLE_BODY)
    }

    pub(crate) fn gated(mut self) -> Self {
        self.gate = Some(Notify::new());
        self
    }

    pub(crate) fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn requested(&self) -> Vec<Url> {
        self.requested.lock().unwrap().clone()
    }

    pub(crate) fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(url.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// A [`Transport`] whose requests always fail at the connection level.
pub(crate) struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn get(&self, _url: &Url) -> Result<HttpResponse, TransportError> {
        Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused").into())
    }
}
