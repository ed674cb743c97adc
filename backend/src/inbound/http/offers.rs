//! Offer API handlers.
//!
//! ```text
//! GET  /offers
//! GET  /offers/{id}
//! POST /offers
//! POST /offers/sync
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Offer, OfferId, OfferRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Offer as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferResponseBody {
    /// Store-assigned identifier used by `GET /offers/{id}`.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    /// Hiring company.
    #[schema(example = "BlueSoft Sp. z o.o.")]
    pub company_name: String,
    /// Advertised position.
    #[schema(example = "Junior Java Developer")]
    pub position: String,
    /// Free-form salary text.
    #[schema(example = "7 000 - 9 000 PLN")]
    pub salary: String,
    /// Unique external URL of the posting.
    #[schema(example = "https://nofluffjobs.com/pl/job/1000")]
    pub offer_url: String,
}

impl From<Offer> for OfferResponseBody {
    fn from(value: Offer) -> Self {
        Self {
            id: value.id.into(),
            company_name: value.company_name,
            position: value.position,
            salary: value.salary,
            offer_url: value.offer_url,
        }
    }
}

/// Payload for `POST /offers`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferRequestBody {
    /// Hiring company; must not be blank.
    #[schema(example = "someCompany")]
    pub company_name: String,
    /// Advertised position; must not be blank.
    #[schema(example = "somePosition")]
    pub position: String,
    /// Free-form salary text; may be empty.
    #[serde(default)]
    #[schema(example = "7 000 - 9 000 PLN")]
    pub salary: String,
    /// External URL of the posting; rejected with 409 when already stored.
    #[schema(example = "https://newoffers.pl/offer/1234")]
    pub offer_url: String,
}

impl From<OfferRequestBody> for OfferRequest {
    fn from(value: OfferRequestBody) -> Self {
        Self {
            company_name: value.company_name,
            position: value.position,
            salary: value.salary,
            offer_url: value.offer_url,
        }
    }
}

fn into_bodies(offers: Vec<Offer>) -> Vec<OfferResponseBody> {
    offers.into_iter().map(OfferResponseBody::from).collect()
}

/// List every stored offer.
#[utoipa::path(
    get,
    path = "/offers",
    responses(
        (status = 200, description = "Stored offers", body = [OfferResponseBody]),
        (status = 503, description = "Offer store unavailable", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["offers"],
    operation_id = "listOffers"
)]
#[get("/offers")]
pub async fn list_offers(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<OfferResponseBody>>> {
    let offers = state.offers_query.list_all().await?;
    Ok(web::Json(into_bodies(offers)))
}

/// Fetch a single offer by identifier.
#[utoipa::path(
    get,
    path = "/offers/{id}",
    params(("id" = String, Path, description = "Offer identifier")),
    responses(
        (status = 200, description = "Offer found", body = OfferResponseBody),
        (status = 404, description = "Offer not found", body = ErrorBody),
        (status = 503, description = "Offer store unavailable", body = ErrorBody)
    ),
    tags = ["offers"],
    operation_id = "getOffer"
)]
#[get("/offers/{id}")]
pub async fn get_offer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<OfferResponseBody>> {
    let id = OfferId::new(path.into_inner());
    let offer = state.offers_query.get_by_id(&id).await?;
    Ok(web::Json(OfferResponseBody::from(offer)))
}

/// Store a user-submitted offer.
///
/// # Examples
/// ```no_run
/// use actix_web::{HttpResponse, web};
/// use job_offers::inbound::http::ApiResult;
/// use job_offers::inbound::http::offers::{OfferRequestBody, create_offer};
/// use job_offers::inbound::http::state::HttpState;
///
/// async fn call_handler(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
///     let payload = web::Json(OfferRequestBody {
///         company_name: "someCompany".to_owned(),
///         position: "somePosition".to_owned(),
///         salary: "7 000 - 9 000 PLN".to_owned(),
///         offer_url: "https://newoffers.pl/offer/1234".to_owned(),
///     });
///     create_offer(state, payload).await
/// }
/// ```
#[utoipa::path(
    post,
    path = "/offers",
    request_body = OfferRequestBody,
    responses(
        (status = 201, description = "Offer created", body = OfferResponseBody),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 409, description = "Offer URL already stored", body = ErrorBody),
        (status = 503, description = "Offer store unavailable", body = ErrorBody)
    ),
    tags = ["offers"],
    operation_id = "createOffer"
)]
#[post("/offers")]
pub async fn create_offer(
    state: web::Data<HttpState>,
    payload: web::Json<OfferRequestBody>,
) -> ApiResult<HttpResponse> {
    let request = OfferRequest::from(payload.into_inner());
    let offer = state.offers_command.save(request).await?;
    Ok(HttpResponse::Created().json(OfferResponseBody::from(offer)))
}

/// Run a sync with the remote provider immediately.
///
/// Responds with the offers inserted by this run only.
#[utoipa::path(
    post,
    path = "/offers/sync",
    responses(
        (status = 200, description = "Newly inserted offers", body = [OfferResponseBody]),
        (status = 503, description = "Offer store unavailable", body = ErrorBody)
    ),
    tags = ["offers"],
    operation_id = "syncOffers"
)]
#[post("/offers/sync")]
pub async fn sync_offers(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<OfferResponseBody>>> {
    let inserted = state.offers_command.run_sync().await?;
    info!(inserted = inserted.len(), "manual offer sync finished");
    Ok(web::Json(into_bodies(inserted)))
}

#[cfg(test)]
#[path = "offers_tests.rs"]
mod tests;
