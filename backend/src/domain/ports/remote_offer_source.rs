//! Driven port for fetching offers from the remote job board.
//!
//! Adapters own transport concerns (HTTP, timeouts, decoding). The domain only
//! sees a list of [`RemoteOffer`] records or a fetch failure, which the sync
//! service treats as an empty cycle.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::RemoteOffer;

define_port_error! {
    /// Fetch failures raised by remote offer sources.
    pub enum RemoteOfferSourceError {
        /// The request could not be sent or the response could not be read.
        transient Transport { message: String } => "remote offer transport failed: {message}",
        /// The request exceeded its deadline.
        transient Timeout { message: String } => "remote offer request timed out: {message}",
        /// The provider answered with a non-success status.
        permanent Status { status: u16, message: String } =>
            "remote offer provider returned status {status}: {message}",
        /// The payload could not be decoded into offers.
        permanent Decode { message: String } => "remote offer payload invalid: {message}",
    }
}

/// Port for listing the offers currently published by the remote provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteOfferSource: Send + Sync {
    /// Fetch every offer the provider currently advertises.
    ///
    /// An empty list is a valid answer meaning the provider has no offers.
    async fn fetch_offers(&self) -> Result<Vec<RemoteOffer>, RemoteOfferSourceError>;
}

/// Fixture source returning a fixed list of offers.
///
/// Used when no remote provider is configured.
#[derive(Debug, Clone, Default)]
pub struct FixtureRemoteOfferSource {
    offers: Vec<RemoteOffer>,
}

impl FixtureRemoteOfferSource {
    /// Serve the given offers on every fetch.
    #[must_use]
    pub const fn new(offers: Vec<RemoteOffer>) -> Self {
        Self { offers }
    }
}

#[async_trait]
impl RemoteOfferSource for FixtureRemoteOfferSource {
    async fn fetch_offers(&self) -> Result<Vec<RemoteOffer>, RemoteOfferSourceError> {
        Ok(self.offers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_fixture_serves_no_offers() {
        let offers = FixtureRemoteOfferSource::default()
            .fetch_offers()
            .await
            .expect("fixture fetch succeeds");
        assert!(offers.is_empty());
    }

    #[tokio::test]
    async fn fixture_serves_configured_offers_every_time() {
        let remote = RemoteOffer {
            position: "Junior".to_owned(),
            company_name: "IBM".to_owned(),
            salary: "14000".to_owned(),
            offer_url: "01".to_owned(),
        };
        let source = FixtureRemoteOfferSource::new(vec![remote.clone()]);

        for _ in 0..2 {
            let offers = source.fetch_offers().await.expect("fixture fetch succeeds");
            assert_eq!(offers, vec![remote.clone()]);
        }
    }

    #[test]
    fn network_failures_are_transient() {
        assert!(RemoteOfferSourceError::transport("connection reset").is_transient());
        assert!(RemoteOfferSourceError::timeout("5000 ms").is_transient());
        assert!(!RemoteOfferSourceError::decode("expected array").is_transient());
    }

    #[test]
    fn status_errors_render_code_and_message() {
        let err = RemoteOfferSourceError::status(503_u16, "maintenance");
        assert_eq!(
            err.to_string(),
            "remote offer provider returned status 503: maintenance"
        );
    }
}
