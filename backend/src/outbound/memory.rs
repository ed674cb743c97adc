//! In-process offer repository.
//!
//! Used when no database is configured and by integration tests. Check and
//! insert happen under one lock, which gives the same URL uniqueness
//! guarantee as the PostgreSQL constraint within a single process.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{OfferRepository, OfferRepositoryError};
use crate::domain::{NewOffer, Offer, OfferId};

/// Insertion-ordered, mutex-guarded offer store.
#[derive(Debug, Default)]
pub struct InMemoryOfferRepository {
    offers: Mutex<Vec<Offer>>,
}

impl InMemoryOfferRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Offer>> {
        // Offers are only ever appended whole, so a poisoned guard still holds consistent data.
        self.offers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl OfferRepository for InMemoryOfferRepository {
    async fn find_all(&self) -> Result<Vec<Offer>, OfferRepositoryError> {
        Ok(self.lock().clone())
    }

    async fn find_by_id(&self, id: &OfferId) -> Result<Option<Offer>, OfferRepositoryError> {
        Ok(self.lock().iter().find(|offer| &offer.id == id).cloned())
    }

    async fn exists_by_url(&self, offer_url: &str) -> Result<bool, OfferRepositoryError> {
        Ok(self.lock().iter().any(|offer| offer.offer_url == offer_url))
    }

    async fn insert(&self, offer: NewOffer) -> Result<Offer, OfferRepositoryError> {
        let mut offers = self.lock();
        if offers.iter().any(|stored| stored.offer_url == offer.offer_url()) {
            return Err(OfferRepositoryError::duplicate_url(offer.offer_url()));
        }
        let stored = offer.into_offer(OfferId::generate());
        offers.push(stored.clone());
        Ok(stored)
    }
}
