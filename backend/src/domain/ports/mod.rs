//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod offer_repository;
mod offers;
mod remote_offer_source;

#[cfg(test)]
pub use offer_repository::MockOfferRepository;
pub use offer_repository::{OfferRepository, OfferRepositoryError};
#[cfg(test)]
pub use offers::{MockOffersCommand, MockOffersQuery};
pub use offers::{OffersCommand, OffersQuery};
#[cfg(test)]
pub use remote_offer_source::MockRemoteOfferSource;
pub use remote_offer_source::{
    FixtureRemoteOfferSource, RemoteOfferSource, RemoteOfferSourceError,
};
