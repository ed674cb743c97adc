//! Remote job board adapters.
//!
//! Provides a thin HTTP implementation of the `RemoteOfferSource` port.

mod dto;
mod http_source;

pub use http_source::{RemoteOfferHttpSource, RemoteOfferHttpSourceError};
