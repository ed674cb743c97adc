//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{OffersCommand, OffersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub offers_query: Arc<dyn OffersQuery>,
    pub offers_command: Arc<dyn OffersCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use job_offers::domain::ports::{FixtureRemoteOfferSource, OfferRepository};
    /// use job_offers::domain::{OfferFacade, OfferSyncService};
    /// use job_offers::inbound::http::state::HttpState;
    /// use job_offers::outbound::memory::InMemoryOfferRepository;
    ///
    /// let repository: Arc<dyn OfferRepository> = Arc::new(InMemoryOfferRepository::new());
    /// let sync = OfferSyncService::new(
    ///     Arc::new(FixtureRemoteOfferSource::default()),
    ///     repository.clone(),
    /// );
    /// let facade = Arc::new(OfferFacade::new(repository, sync));
    /// let _state = HttpState::new(facade.clone(), facade);
    /// ```
    pub fn new(offers_query: Arc<dyn OffersQuery>, offers_command: Arc<dyn OffersCommand>) -> Self {
        Self {
            offers_query,
            offers_command,
        }
    }
}
