//! Shared helpers for offer integration tests.
//!
//! Integration tests compile as separate crates, so each one includes this
//! module with `mod support;` and uses the parts it needs.

#![allow(dead_code, reason = "each test crate uses a subset of these helpers")]

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use job_offers::domain::ports::{OfferRepository, RemoteOfferSource, RemoteOfferSourceError};
use job_offers::domain::{OfferFacade, OfferSyncService, RemoteOffer};
use job_offers::outbound::memory::InMemoryOfferRepository;

/// Remote source whose response can be swapped between syncs.
pub struct ScriptedRemoteOfferSource {
    response: Mutex<Result<Vec<RemoteOffer>, RemoteOfferSourceError>>,
}

impl ScriptedRemoteOfferSource {
    pub fn serve(&self, offers: Vec<RemoteOffer>) {
        *self.response.lock().unwrap_or_else(PoisonError::into_inner) = Ok(offers);
    }

    pub fn fail(&self, error: RemoteOfferSourceError) {
        *self.response.lock().unwrap_or_else(PoisonError::into_inner) = Err(error);
    }
}

impl Default for ScriptedRemoteOfferSource {
    fn default() -> Self {
        Self {
            response: Mutex::new(Ok(Vec::new())),
        }
    }
}

#[async_trait]
impl RemoteOfferSource for ScriptedRemoteOfferSource {
    async fn fetch_offers(&self) -> Result<Vec<RemoteOffer>, RemoteOfferSourceError> {
        self.response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Remote record for `https://nofluffjobs.com/pl/job/{suffix}`.
pub fn remote_offer(suffix: &str) -> RemoteOffer {
    RemoteOffer {
        position: format!("Junior Developer {suffix}"),
        company_name: format!("Company {suffix}"),
        salary: "7 000 - 9 000 PLN".to_owned(),
        offer_url: offer_url(suffix),
    }
}

pub fn offer_url(suffix: &str) -> String {
    format!("https://nofluffjobs.com/pl/job/{suffix}")
}

/// Facade over an in-memory store and a scripted source.
pub struct OfferHarness {
    pub source: Arc<ScriptedRemoteOfferSource>,
    pub repository: Arc<InMemoryOfferRepository>,
    pub facade: Arc<OfferFacade>,
}

impl OfferHarness {
    pub fn new() -> Self {
        let source = Arc::new(ScriptedRemoteOfferSource::default());
        let repository = Arc::new(InMemoryOfferRepository::new());
        let repo: Arc<dyn OfferRepository> = repository.clone();
        let sync_service = OfferSyncService::new(source.clone(), repo.clone());
        let facade = Arc::new(OfferFacade::new(repo, sync_service));
        Self {
            source,
            repository,
            facade,
        }
    }
}
