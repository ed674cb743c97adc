//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **offers_http**: reqwest client for the remote job board
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: in-process repository for database-less runs and tests
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod memory;
pub mod offers_http;
pub mod persistence;
