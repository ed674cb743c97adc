//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Job offers keyed by a store-assigned text identifier.
    ///
    /// `offer_url` carries a unique constraint; it is the deduplication key.
    offers (id) {
        /// Primary key: UUID v4 rendered as text.
        id -> Text,
        company_name -> Text,
        position -> Text,
        salary -> Text,
        /// Unique external URL of the posting.
        offer_url -> Text,
        /// Insertion timestamp, used for stable listing order.
        created_at -> Timestamptz,
    }
}
