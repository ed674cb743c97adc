//! Driven port for offer persistence.
//!
//! Repositories assign identifiers at insert time and enforce uniqueness of
//! `offer_url`. The uniqueness guarantee must hold across concurrent writers,
//! so adapters rely on the store (a unique index, or a single lock around
//! check-and-insert) rather than on callers checking first.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{NewOffer, Offer, OfferId};

define_port_error! {
    /// Persistence errors raised by offer repository adapters.
    pub enum OfferRepositoryError {
        /// Repository connection could not be established.
        transient Connection { message: String } => "offer repository connection failed: {message}",
        /// Query or mutation failed during execution.
        permanent Query { message: String } => "offer repository query failed: {message}",
        /// An offer with the same URL is already stored.
        permanent DuplicateUrl { offer_url: String } => "offer url already stored: {offer_url}",
    }
}

/// Port for storing and reading job offers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Return every stored offer. Callers must not rely on the order.
    async fn find_all(&self) -> Result<Vec<Offer>, OfferRepositoryError>;

    /// Look up one offer by identifier.
    async fn find_by_id(&self, id: &OfferId) -> Result<Option<Offer>, OfferRepositoryError>;

    /// Report whether an offer with this URL is stored.
    async fn exists_by_url(&self, offer_url: &str) -> Result<bool, OfferRepositoryError>;

    /// Store a new offer and return it with its assigned identifier.
    ///
    /// Fails with [`OfferRepositoryError::DuplicateUrl`] without storing
    /// anything when the URL is taken.
    async fn insert(&self, offer: NewOffer) -> Result<Offer, OfferRepositoryError>;
}
