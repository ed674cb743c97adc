//! Job offer data model.
//!
//! Offers enter the system either from the remote provider during a sync
//! ([`RemoteOffer`]) or from a user submission ([`OfferRequest`]). Both paths
//! funnel through [`NewOffer`], which is the only shape a repository accepts.
//! Stored offers ([`Offer`]) carry a repository-assigned [`OfferId`] and are
//! never mutated afterwards.

use std::fmt;

use uuid::Uuid;

/// Validation errors raised when building a [`NewOffer`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OfferValidationError {
    /// The offer URL was empty or whitespace.
    #[error("offer url must not be empty")]
    EmptyOfferUrl,
    /// The company name was empty or whitespace.
    #[error("company name must not be empty")]
    EmptyCompanyName,
    /// The position was empty or whitespace.
    #[error("position must not be empty")]
    EmptyPosition,
}

impl OfferValidationError {
    /// JSON field name of the rejected value, as clients submit it.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyOfferUrl => "offerUrl",
            Self::EmptyCompanyName => "companyName",
            Self::EmptyPosition => "position",
        }
    }
}

/// Opaque, store-assigned offer identifier.
///
/// Lookups accept any string; only identifiers handed out by a repository
/// ever resolve to an offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OfferId(String);

impl OfferId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier for a newly stored offer.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for OfferId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<OfferId> for String {
    fn from(value: OfferId) -> Self {
        value.0
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persisted job offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    /// Store-assigned identifier.
    pub id: OfferId,
    /// Hiring company.
    pub company_name: String,
    /// Advertised position.
    pub position: String,
    /// Free-form salary text, e.g. `"7 000 - 9 000 PLN"`.
    pub salary: String,
    /// Unique external URL of the posting.
    pub offer_url: String,
}

/// Raw offer record fetched from the remote provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOffer {
    /// Advertised position.
    pub position: String,
    /// Hiring company.
    pub company_name: String,
    /// Salary text as published; may be empty.
    pub salary: String,
    /// Posting URL on the provider's site.
    pub offer_url: String,
}

/// User submission for a manually created offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferRequest {
    /// Hiring company; must not be blank.
    pub company_name: String,
    /// Advertised position; must not be blank.
    pub position: String,
    /// Free-form salary text; may be empty.
    pub salary: String,
    /// External URL of the posting; must not be blank or already stored.
    pub offer_url: String,
}

/// Validated offer awaiting an identifier from the repository.
///
/// ## Invariants
/// - `offer_url`, `company_name` and `position` are non-blank.
///
/// # Examples
/// ```
/// use job_offers::domain::{NewOffer, OfferValidationError};
///
/// let offer = NewOffer::try_new("ACME", "Junior", "9000", "https://jobs.test/1")
///     .expect("valid offer");
/// assert_eq!(offer.offer_url(), "https://jobs.test/1");
///
/// let err = NewOffer::try_new("ACME", "Junior", "9000", " ").expect_err("blank url");
/// assert_eq!(err, OfferValidationError::EmptyOfferUrl);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOffer {
    company_name: String,
    position: String,
    salary: String,
    offer_url: String,
}

impl NewOffer {
    /// Validate the fields and build an insertable offer.
    ///
    /// # Errors
    ///
    /// Returns an [`OfferValidationError`] naming the first blank field.
    pub fn try_new(
        company_name: impl Into<String>,
        position: impl Into<String>,
        salary: impl Into<String>,
        offer_url: impl Into<String>,
    ) -> Result<Self, OfferValidationError> {
        let offer_url = offer_url.into();
        if offer_url.trim().is_empty() {
            return Err(OfferValidationError::EmptyOfferUrl);
        }
        let company_name = company_name.into();
        if company_name.trim().is_empty() {
            return Err(OfferValidationError::EmptyCompanyName);
        }
        let position = position.into();
        if position.trim().is_empty() {
            return Err(OfferValidationError::EmptyPosition);
        }
        Ok(Self {
            company_name,
            position,
            salary: salary.into(),
            offer_url,
        })
    }

    /// Hiring company.
    #[must_use]
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// Advertised position.
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Salary text, possibly empty.
    #[must_use]
    pub fn salary(&self) -> &str {
        &self.salary
    }

    /// Natural deduplication key.
    #[must_use]
    pub fn offer_url(&self) -> &str {
        &self.offer_url
    }

    /// Attach the identifier assigned by a repository.
    #[must_use]
    pub fn into_offer(self, id: OfferId) -> Offer {
        Offer {
            id,
            company_name: self.company_name,
            position: self.position,
            salary: self.salary,
            offer_url: self.offer_url,
        }
    }
}

impl TryFrom<RemoteOffer> for NewOffer {
    type Error = OfferValidationError;

    fn try_from(value: RemoteOffer) -> Result<Self, Self::Error> {
        let RemoteOffer {
            position,
            company_name,
            salary,
            offer_url,
        } = value;
        Self::try_new(company_name, position, salary, offer_url)
    }
}

impl TryFrom<OfferRequest> for NewOffer {
    type Error = OfferValidationError;

    fn try_from(value: OfferRequest) -> Result<Self, Self::Error> {
        let OfferRequest {
            company_name,
            position,
            salary,
            offer_url,
        } = value;
        Self::try_new(company_name, position, salary, offer_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "Junior", "https://jobs.test/1", OfferValidationError::EmptyCompanyName)]
    #[case("ACME", "  ", "https://jobs.test/1", OfferValidationError::EmptyPosition)]
    #[case("ACME", "Junior", "\t", OfferValidationError::EmptyOfferUrl)]
    fn rejects_blank_required_fields(
        #[case] company_name: &str,
        #[case] position: &str,
        #[case] offer_url: &str,
        #[case] expected: OfferValidationError,
    ) {
        let err = NewOffer::try_new(company_name, position, "1000", offer_url)
            .expect_err("blank field should be rejected");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case(OfferValidationError::EmptyOfferUrl, "offerUrl")]
    #[case(OfferValidationError::EmptyCompanyName, "companyName")]
    #[case(OfferValidationError::EmptyPosition, "position")]
    fn validation_errors_name_the_json_field(
        #[case] error: OfferValidationError,
        #[case] field: &str,
    ) {
        assert_eq!(error.field(), field);
    }

    #[test]
    fn salary_may_be_empty() {
        let offer = NewOffer::try_new("ACME", "Junior", "", "https://jobs.test/1")
            .expect("empty salary is allowed");
        assert_eq!(offer.salary(), "");
    }

    #[test]
    fn remote_offer_maps_every_field() {
        let remote = RemoteOffer {
            position: "Senior".to_owned(),
            company_name: "mBank".to_owned(),
            salary: "23000".to_owned(),
            offer_url: "02".to_owned(),
        };
        let id = OfferId::new("abc");
        let offer = NewOffer::try_from(remote)
            .expect("valid remote offer")
            .into_offer(id.clone());

        assert_eq!(
            offer,
            Offer {
                id,
                company_name: "mBank".to_owned(),
                position: "Senior".to_owned(),
                salary: "23000".to_owned(),
                offer_url: "02".to_owned(),
            }
        );
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(OfferId::generate(), OfferId::generate());
    }
}
