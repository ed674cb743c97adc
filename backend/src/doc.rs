//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the offer and health endpoints together with the
//! request, response and error body schemas. The generated document backs
//! Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::offers::{OfferRequestBody, OfferResponseBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Job offers API",
        description = "Aggregated job offers synced from a remote provider plus manual submissions."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::offers::list_offers,
        crate::inbound::http::offers::get_offer,
        crate::inbound::http::offers::create_offer,
        crate::inbound::http::offers::sync_offers,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(OfferResponseBody, OfferRequestBody, ErrorBody)),
    tags(
        (name = "offers", description = "Job offer listing, lookup and submission"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
