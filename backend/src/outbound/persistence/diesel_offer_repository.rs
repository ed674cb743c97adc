//! PostgreSQL-backed `OfferRepository` implementation using Diesel ORM.
//!
//! The `offers_offer_url_key` unique constraint is the authoritative guard
//! against duplicate URLs; a violation on insert maps to
//! [`OfferRepositoryError::DuplicateUrl`], so concurrent writers (other tasks
//! or other service instances) cannot store the same URL twice.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use super::models::{NewOfferRow, OfferRow};
use super::pool::{DbPool, PoolError};
use super::schema::offers;
use crate::domain::ports::{OfferRepository, OfferRepositoryError};
use crate::domain::{NewOffer, Offer, OfferId};

/// Diesel-backed implementation of the [`OfferRepository`] port.
#[derive(Clone)]
pub struct DieselOfferRepository {
    pool: DbPool,
}

impl DieselOfferRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> OfferRepositoryError {
    OfferRepositoryError::connection(error.into_message())
}

/// Map Diesel errors to offer repository errors.
///
/// `offer_url` is only known on insert; unique violations elsewhere are
/// reported as query failures.
fn map_diesel_error(error: diesel::result::Error, offer_url: Option<&str>) -> OfferRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => match offer_url {
            Some(url) => OfferRepositoryError::duplicate_url(url),
            None => OfferRepositoryError::query("unexpected unique violation"),
        },
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            OfferRepositoryError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => OfferRepositoryError::query("database query error"),
        _ => OfferRepositoryError::query("database error"),
    }
}

#[async_trait]
impl OfferRepository for DieselOfferRepository {
    async fn find_all(&self) -> Result<Vec<Offer>, OfferRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<OfferRow> = offers::table
            .order((offers::created_at.asc(), offers::id.asc()))
            .select(OfferRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        Ok(rows.into_iter().map(Offer::from).collect())
    }

    async fn find_by_id(&self, id: &OfferId) -> Result<Option<Offer>, OfferRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<OfferRow> = offers::table
            .find(id.as_str())
            .select(OfferRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        Ok(row.map(Offer::from))
    }

    async fn exists_by_url(&self, offer_url: &str) -> Result<bool, OfferRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(exists(
            offers::table.filter(offers::offer_url.eq(offer_url)),
        ))
        .get_result::<bool>(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, None))
    }

    async fn insert(&self, offer: NewOffer) -> Result<Offer, OfferRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = OfferId::generate();
        let row = NewOfferRow {
            id: id.as_str(),
            company_name: offer.company_name(),
            position: offer.position(),
            salary: offer.salary(),
            offer_url: offer.offer_url(),
        };

        diesel::insert_into(offers::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(offer.offer_url())))?;

        Ok(offer.into_offer(id))
    }
}
