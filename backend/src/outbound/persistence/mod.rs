//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Async pooling**: connections come from a `bb8` pool via `diesel-async`.
//!
//! # Example
//!
//! ```ignore
//! use job_offers::outbound::persistence::{DbPool, DieselOfferRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/offers")).await?;
//! let repo = DieselOfferRepository::new(pool);
//! ```

mod diesel_offer_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_offer_repository::DieselOfferRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
