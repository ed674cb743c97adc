//! Tests for offer HTTP handlers.

use super::*;
use crate::domain::ports::{
    MockOffersCommand, MockOffersQuery, OfferRepositoryError, OffersCommand, OffersQuery,
};
use crate::domain::{OfferError, OfferValidationError};
use crate::inbound::http::error::json_config;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

fn offer(id: &str, offer_url: &str) -> Offer {
    Offer {
        id: OfferId::new(id),
        company_name: "BlueSoft Sp. z o.o.".to_owned(),
        position: "Junior Java Developer".to_owned(),
        salary: "7 000 - 9 000 PLN".to_owned(),
        offer_url: offer_url.to_owned(),
    }
}

fn test_app(
    query: MockOffersQuery,
    command: MockOffersCommand,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let query: Arc<dyn OffersQuery> = Arc::new(query);
    let command: Arc<dyn OffersCommand> = Arc::new(command);
    App::new()
        .app_data(web::Data::new(HttpState::new(query, command)))
        .app_data(json_config())
        .service(list_offers)
        .service(sync_offers)
        .service(get_offer)
        .service(create_offer)
}

fn request_body() -> Value {
    json!({
        "companyName": "someCompany",
        "position": "somePosition",
        "salary": "7 000 - 9 000 PLN",
        "offerUrl": "https://newoffers.pl/offer/1234"
    })
}

#[actix_web::test]
async fn list_offers_returns_camel_case_array() {
    let mut query = MockOffersQuery::new();
    query
        .expect_list_all()
        .times(1)
        .return_once(|| Ok(vec![offer("a1", "https://jobs.test/1")]));
    let app = actix_test::init_service(test_app(query, MockOffersCommand::new())).await;

    let req = actix_test::TestRequest::get().uri("/offers").to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!([{
            "id": "a1",
            "companyName": "BlueSoft Sp. z o.o.",
            "position": "Junior Java Developer",
            "salary": "7 000 - 9 000 PLN",
            "offerUrl": "https://jobs.test/1"
        }])
    );
}

#[actix_web::test]
async fn get_offer_returns_the_offer() {
    let mut query = MockOffersQuery::new();
    query
        .expect_get_by_id()
        .withf(|id| id.as_str() == "a1")
        .times(1)
        .return_once(|_| Ok(offer("a1", "https://jobs.test/1")));
    let app = actix_test::init_service(test_app(query, MockOffersCommand::new())).await;

    let req = actix_test::TestRequest::get().uri("/offers/a1").to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: OfferResponseBody = actix_test::read_body_json(res).await;
    assert_eq!(body.id, "a1");
    assert_eq!(body.offer_url, "https://jobs.test/1");
}

#[actix_web::test]
async fn get_offer_missing_id_is_not_found() {
    let mut query = MockOffersQuery::new();
    query
        .expect_get_by_id()
        .times(1)
        .returning(|id| Err(OfferError::not_found(id.clone())));
    let app = actix_test::init_service(test_app(query, MockOffersCommand::new())).await;

    let req = actix_test::TestRequest::get().uri("/offers/9999").to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "Offer with id 9999 not found");
    assert_eq!(body["status"], "NOT_FOUND");
    assert_eq!(body["code"], "not_found");
}

#[actix_web::test]
async fn create_offer_returns_created() {
    let mut command = MockOffersCommand::new();
    command
        .expect_save()
        .withf(|request| {
            request.company_name == "someCompany"
                && request.offer_url == "https://newoffers.pl/offer/1234"
        })
        .times(1)
        .returning(|request| {
            Ok(Offer {
                id: OfferId::new("generated"),
                company_name: request.company_name,
                position: request.position,
                salary: request.salary,
                offer_url: request.offer_url,
            })
        });
    let app = actix_test::init_service(test_app(MockOffersQuery::new(), command)).await;

    let req = actix_test::TestRequest::post()
        .uri("/offers")
        .set_json(request_body())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["id"], "generated");
    assert_eq!(body["companyName"], "someCompany");
    assert_eq!(body["position"], "somePosition");
    assert_eq!(body["salary"], "7 000 - 9 000 PLN");
    assert_eq!(body["offerUrl"], "https://newoffers.pl/offer/1234");
}

#[actix_web::test]
async fn create_offer_duplicate_url_is_conflict() {
    let mut command = MockOffersCommand::new();
    command
        .expect_save()
        .times(1)
        .returning(|request| Err(OfferError::duplicate_url(request.offer_url)));
    let app = actix_test::init_service(test_app(MockOffersQuery::new(), command)).await;

    let req = actix_test::TestRequest::post()
        .uri("/offers")
        .set_json(request_body())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body["message"],
        "Offer with offerUrl [https://newoffers.pl/offer/1234] already exist"
    );
    assert_eq!(body["status"], "CONFLICT");
}

#[actix_web::test]
async fn create_offer_with_blank_field_is_bad_request() {
    let mut command = MockOffersCommand::new();
    command
        .expect_save()
        .times(1)
        .returning(|_| Err(OfferError::from(OfferValidationError::EmptyOfferUrl)));
    let app = actix_test::init_service(test_app(MockOffersQuery::new(), command)).await;

    let mut payload = request_body();
    payload["offerUrl"] = json!("  ");
    let req = actix_test::TestRequest::post()
        .uri("/offers")
        .set_json(payload)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["status"], "BAD_REQUEST");
    assert_eq!(body["message"], "offer url must not be empty");
    assert_eq!(body["details"], json!({ "field": "offerUrl" }));
}

#[rstest]
#[case::missing_url(json!({"companyName": "c", "position": "p", "salary": "s"}))]
#[case::wrong_type(json!({"companyName": 1, "position": "p", "offerUrl": "u"}))]
#[case::not_an_object(json!(["offer"]))]
#[actix_web::test]
async fn create_offer_rejects_malformed_payloads(#[case] payload: Value) {
    let app = actix_test::init_service(test_app(
        MockOffersQuery::new(),
        MockOffersCommand::new(),
    ))
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/offers")
        .set_json(payload)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
}

#[actix_web::test]
async fn sync_offers_returns_inserted_offers() {
    let mut command = MockOffersCommand::new();
    command.expect_run_sync().times(1).return_once(|| {
        Ok(vec![
            offer("n1", "https://jobs.test/3000"),
            offer("n2", "https://jobs.test/4000"),
        ])
    });
    let app = actix_test::init_service(test_app(MockOffersQuery::new(), command)).await;

    let req = actix_test::TestRequest::post().uri("/offers/sync").to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Vec<OfferResponseBody> = actix_test::read_body_json(res).await;
    let urls: Vec<_> = body.iter().map(|offer| offer.offer_url.as_str()).collect();
    assert_eq!(urls, ["https://jobs.test/3000", "https://jobs.test/4000"]);
}

#[actix_web::test]
async fn store_outage_is_service_unavailable() {
    let mut query = MockOffersQuery::new();
    query.expect_list_all().times(1).return_once(|| {
        Err(OfferError::from(OfferRepositoryError::connection(
            "pool timed out",
        )))
    });
    let app = actix_test::init_service(test_app(query, MockOffersCommand::new())).await;

    let req = actix_test::TestRequest::get().uri("/offers").to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["status"], "SERVICE_UNAVAILABLE");
    assert_eq!(body["message"], "offer store unavailable");
}
