//! Reqwest-backed remote offer source.
//!
//! This adapter owns transport details only: the request URL, timeout and
//! HTTP error mapping, and JSON decoding into domain offers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::JobOfferDto;
use crate::domain::RemoteOffer;
use crate::domain::ports::{RemoteOfferSource, RemoteOfferSourceError};

const DEFAULT_USER_AGENT: &str = concat!("job-offers/", env!("CARGO_PKG_VERSION"));
const OFFERS_PATH: &str = "offers";

/// Errors raised while building the adapter.
#[derive(Debug, thiserror::Error)]
pub enum RemoteOfferHttpSourceError {
    /// The base URL cannot carry a path (e.g. `mailto:`).
    #[error("remote offer base url cannot be a base: {url}")]
    InvalidBaseUrl { url: String },
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Remote offer source performing `GET {base}/offers`.
pub struct RemoteOfferHttpSource {
    client: Client,
    endpoint: Url,
}

impl RemoteOfferHttpSource {
    /// Build an adapter whose requests are bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when `base_url` cannot be extended with a path or the
    /// reqwest client cannot be constructed.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, RemoteOfferHttpSourceError> {
        let endpoint = offers_endpoint(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Full URL queried on each fetch.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RemoteOfferSource for RemoteOfferHttpSource {
    async fn fetch_offers(&self) -> Result<Vec<RemoteOffer>, RemoteOfferSourceError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let offers = parse_offers(body.as_ref())?;
        debug!(endpoint = %self.endpoint, count = offers.len(), "fetched remote offers");
        Ok(offers)
    }
}

fn offers_endpoint(base_url: &Url) -> Result<Url, RemoteOfferHttpSourceError> {
    let mut endpoint = base_url.clone();
    endpoint
        .path_segments_mut()
        .map_err(|()| RemoteOfferHttpSourceError::InvalidBaseUrl {
            url: base_url.to_string(),
        })?
        .pop_if_empty()
        .push(OFFERS_PATH);
    Ok(endpoint)
}

fn parse_offers(body: &[u8]) -> Result<Vec<RemoteOffer>, RemoteOfferSourceError> {
    let decoded: Vec<JobOfferDto> = serde_json::from_slice(body).map_err(|error| {
        RemoteOfferSourceError::decode(format!("invalid offers JSON payload: {error}"))
    })?;
    Ok(decoded.into_iter().map(RemoteOffer::from).collect())
}

fn map_transport_error(error: reqwest::Error) -> RemoteOfferSourceError {
    if error.is_timeout() {
        RemoteOfferSourceError::timeout(error.to_string())
    } else {
        RemoteOfferSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RemoteOfferSourceError {
    let preview = body_preview(body);
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            RemoteOfferSourceError::timeout(format!("status {}", status.as_u16()))
        }
        _ => RemoteOfferSourceError::status(status.as_u16(), preview),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
