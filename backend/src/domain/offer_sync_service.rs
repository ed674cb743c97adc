//! Merges remote offers into the repository.
//!
//! A sync is insert-if-absent per URL: existing offers are never updated and
//! offers missing from the current fetch are never deleted. A failed fetch
//! counts as an empty fetch; the next scheduled run retries. Transient fetch
//! failures log at `warn` and permanent ones at `error`.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::ports::{OfferRepository, OfferRepositoryError, RemoteOfferSource};
use crate::domain::{NewOffer, Offer};

/// Service reconciling remote offers with stored ones.
#[derive(Clone)]
pub struct OfferSyncService {
    source: Arc<dyn RemoteOfferSource>,
    repository: Arc<dyn OfferRepository>,
}

impl OfferSyncService {
    /// Build a sync service over the given ports.
    pub fn new(source: Arc<dyn RemoteOfferSource>, repository: Arc<dyn OfferRepository>) -> Self {
        Self { source, repository }
    }

    /// Fetch remote offers and insert those whose URL is not yet stored.
    ///
    /// Returns the offers inserted by this call, in fetch order.
    ///
    /// # Errors
    ///
    /// Propagates repository connection and query failures. Duplicate URL
    /// failures caused by a concurrent writer are skipped.
    pub async fn sync(&self) -> Result<Vec<Offer>, OfferRepositoryError> {
        let remote_offers = match self.source.fetch_offers().await {
            Ok(offers) => offers,
            Err(fetch_error) if fetch_error.is_transient() => {
                warn!(error = %fetch_error, "remote offer fetch failed; treating cycle as empty");
                Vec::new()
            }
            Err(fetch_error) => {
                error!(
                    error = %fetch_error,
                    "remote offer provider rejected fetch; treating cycle as empty"
                );
                Vec::new()
            }
        };
        let fetched = remote_offers.len();

        let mut inserted = Vec::new();
        for remote_offer in remote_offers {
            let new_offer = match NewOffer::try_from(remote_offer) {
                Ok(offer) => offer,
                Err(error) => {
                    warn!(%error, "skipping invalid remote offer");
                    continue;
                }
            };
            if self.repository.exists_by_url(new_offer.offer_url()).await? {
                continue;
            }
            match self.repository.insert(new_offer).await {
                Ok(offer) => inserted.push(offer),
                Err(OfferRepositoryError::DuplicateUrl { offer_url }) => {
                    debug!(%offer_url, "offer stored concurrently; skipping");
                }
                Err(error) => return Err(error),
            }
        }

        info!(fetched, inserted = inserted.len(), "offer sync finished");
        Ok(inserted)
    }
}
