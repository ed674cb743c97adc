//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use super::schema::offers;
use crate::domain::{Offer, OfferId};

/// Row struct for reading from the offers table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = offers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OfferRow {
    pub id: String,
    pub company_name: String,
    pub position: String,
    pub salary: String,
    pub offer_url: String,
}

impl From<OfferRow> for Offer {
    fn from(row: OfferRow) -> Self {
        Self {
            id: OfferId::new(row.id),
            company_name: row.company_name,
            position: row.position,
            salary: row.salary,
            offer_url: row.offer_url,
        }
    }
}

/// Insertable struct for new offer records; `created_at` uses the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = offers)]
pub(crate) struct NewOfferRow<'a> {
    pub id: &'a str,
    pub company_name: &'a str,
    pub position: &'a str,
    pub salary: &'a str,
    pub offer_url: &'a str,
}
