//! Failures surfaced by offer use-cases.

use serde_json::json;

use super::ports::OfferRepositoryError;
use super::{Error, OfferId, OfferValidationError};

/// Tagged error returned by the offer facade.
///
/// `NotFound` and `DuplicateUrl` carry the exact messages shown to clients.
///
/// # Examples
/// ```
/// use job_offers::domain::{OfferError, OfferId};
///
/// let err = OfferError::not_found(OfferId::new("9999"));
/// assert_eq!(err.to_string(), "Offer with id 9999 not found");
///
/// let err = OfferError::duplicate_url("random.pl");
/// assert_eq!(err.to_string(), "Offer with offerUrl [random.pl] already exist");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OfferError {
    /// No offer is stored under the identifier.
    #[error("Offer with id {id} not found")]
    NotFound { id: OfferId },
    /// An offer with the same URL is already stored.
    #[error("Offer with offerUrl [{offer_url}] already exist")]
    DuplicateUrl { offer_url: String },
    /// The submitted offer failed validation.
    #[error(transparent)]
    Invalid(#[from] OfferValidationError),
    /// The repository failed for reasons unrelated to the request.
    #[error(transparent)]
    Repository(OfferRepositoryError),
}

impl OfferError {
    /// Build a [`OfferError::NotFound`] for `id`.
    #[must_use]
    pub const fn not_found(id: OfferId) -> Self {
        Self::NotFound { id }
    }

    /// Build a [`OfferError::DuplicateUrl`] for `offer_url`.
    pub fn duplicate_url(offer_url: impl Into<String>) -> Self {
        Self::DuplicateUrl {
            offer_url: offer_url.into(),
        }
    }
}

impl From<OfferRepositoryError> for OfferError {
    fn from(value: OfferRepositoryError) -> Self {
        match value {
            OfferRepositoryError::DuplicateUrl { offer_url } => Self::DuplicateUrl { offer_url },
            other => Self::Repository(other),
        }
    }
}

impl From<OfferError> for Error {
    fn from(value: OfferError) -> Self {
        match &value {
            OfferError::NotFound { .. } => Self::not_found(value.to_string()),
            OfferError::DuplicateUrl { .. } => Self::conflict(value.to_string()),
            OfferError::Invalid(invalid) => Self::invalid_request(value.to_string())
                .with_details(json!({ "field": invalid.field() })),
            OfferError::Repository(error) if error.is_transient() => {
                Self::service_unavailable("offer store unavailable")
            }
            OfferError::Repository(_) => Self::internal(value.to_string()),
        }
    }
}
