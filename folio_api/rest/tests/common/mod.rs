#![allow(dead_code, reason = "each test binary uses a different subset of these helpers")]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use folio_api_rest::{RestServer, RestServerConfig};
use folio_core_contact_contracts::MockContactFeatureService;
use folio_core_portfolio_contracts::MockPortfolioFeatureService;
use tower::ServiceExt;

pub fn router(
    contact: MockContactFeatureService,
    portfolio: MockPortfolioFeatureService,
) -> Router<()> {
    RestServer::new(contact, portfolio, RestServerConfig::default()).router()
}

pub async fn get(router: Router<()>, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

pub async fn post(
    router: Router<()>,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn send(router: Router<()>, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, body)
}
