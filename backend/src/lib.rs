//! Job offer aggregation service library.
//!
//! Offers are pulled periodically from a remote job board, deduplicated by
//! URL and stored; an HTTP API lists, fetches, submits and syncs them.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
