//! Driving ports for offer use-cases.
//!
//! Inbound adapters (HTTP handlers, the sync scheduler) depend on these traits
//! rather than on the facade type, so they stay testable without I/O.

use async_trait::async_trait;

use crate::domain::{Offer, OfferError, OfferId, OfferRequest};

/// Read-side offer use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OffersQuery: Send + Sync {
    /// List every stored offer.
    async fn list_all(&self) -> Result<Vec<Offer>, OfferError>;

    /// Fetch one offer, failing with [`OfferError::NotFound`] when absent.
    async fn get_by_id(&self, id: &OfferId) -> Result<Offer, OfferError>;
}

/// Write-side offer use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OffersCommand: Send + Sync {
    /// Store a user-submitted offer, failing with
    /// [`OfferError::DuplicateUrl`] when the URL is already stored.
    async fn save(&self, request: OfferRequest) -> Result<Offer, OfferError>;

    /// Pull offers from the remote provider and store the new ones.
    ///
    /// Returns only the offers inserted by this call, in fetch order.
    async fn run_sync(&self) -> Result<Vec<Offer>, OfferError>;
}
