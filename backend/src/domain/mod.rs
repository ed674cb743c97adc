//! Domain model, ports and services for job offer aggregation.
//!
//! Purpose: keep offer rules (URL uniqueness, insert-if-absent sync, exact
//! not-found and duplicate messages) free of transport and storage concerns.
//!
//! Public surface:
//! - Entities: [`Offer`], [`OfferId`], [`NewOffer`], [`RemoteOffer`],
//!   [`OfferRequest`].
//! - Errors: [`OfferError`] for use-cases, [`Error`] / [`ErrorCode`] for
//!   adapters.
//! - Services: [`OfferSyncService`], [`OfferFacade`], [`OfferSyncScheduler`].
//! - Ports: see [`ports`].

pub mod error;
mod offer;
mod offer_error;
mod offer_facade;
mod offer_sync_scheduler;
mod offer_sync_service;
pub mod ports;
mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::offer::{NewOffer, Offer, OfferId, OfferRequest, OfferValidationError, RemoteOffer};
pub use self::offer_error::OfferError;
pub use self::offer_facade::OfferFacade;
pub use self::offer_sync_scheduler::{
    OfferSyncScheduler, OfferSyncSchedulerConfig, OfferSyncSchedulerHandle,
};
pub use self::offer_sync_service::OfferSyncService;
pub use self::trace_id::{TraceId, TraceIdParseError};
