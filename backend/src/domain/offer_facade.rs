//! Entry point for offer use-cases.
//!
//! The facade implements the driving ports ([`OffersQuery`] and
//! [`OffersCommand`]) on top of the repository and the sync service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::OfferSyncService;
use crate::domain::ports::{OfferRepository, OffersCommand, OffersQuery};
use crate::domain::{NewOffer, Offer, OfferError, OfferId, OfferRequest};

/// Offer use-cases over a repository and a sync service.
#[derive(Clone)]
pub struct OfferFacade {
    repository: Arc<dyn OfferRepository>,
    sync_service: OfferSyncService,
}

impl OfferFacade {
    /// Build a facade sharing `repository` with `sync_service`.
    pub fn new(repository: Arc<dyn OfferRepository>, sync_service: OfferSyncService) -> Self {
        Self {
            repository,
            sync_service,
        }
    }
}

#[async_trait]
impl OffersQuery for OfferFacade {
    async fn list_all(&self) -> Result<Vec<Offer>, OfferError> {
        Ok(self.repository.find_all().await?)
    }

    async fn get_by_id(&self, id: &OfferId) -> Result<Offer, OfferError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| OfferError::not_found(id.clone()))
    }
}

#[async_trait]
impl OffersCommand for OfferFacade {
    async fn save(&self, request: OfferRequest) -> Result<Offer, OfferError> {
        let new_offer = NewOffer::try_from(request)?;
        if self.repository.exists_by_url(new_offer.offer_url()).await? {
            return Err(OfferError::duplicate_url(new_offer.offer_url()));
        }
        // A concurrent insert of the same URL surfaces as DuplicateUrl here too.
        let offer = self.repository.insert(new_offer).await?;
        info!(offer_id = %offer.id, offer_url = %offer.offer_url, "offer saved");
        Ok(offer)
    }

    async fn run_sync(&self) -> Result<Vec<Offer>, OfferError> {
        Ok(self.sync_service.sync().await?)
    }
}

#[cfg(test)]
#[path = "offer_facade_tests.rs"]
mod tests;
