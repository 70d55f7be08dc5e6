//! HTTP-level functional tests for the converter REST API.
//!
//! These tests drive the full axum router with in-process requests,
//! validating the public endpoint contract: response shapes, the plain-text
//! bodies for extraction failures and the JSON error envelope for
//! conversion failures.

use axum::body::Body;
use http_body_util::BodyExt;
use hyper::{Request, StatusCode};
use tower::ServiceExt;

use mic_rust::http::{create_router, AppState};
use mic_rust::registry::{Profile, UnitTable};

// ==================== Helpers ====================

/// Build a router over the given catalog profile.
fn test_app(profile: Profile) -> axum::Router {
    let table = UnitTable::with_profile(profile).expect("built-in catalog must build");
    create_router(AppState::new(table))
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read a response body as JSON.
async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as plain text.
async fn body_text(resp: axum::response::Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ==================== Conversion Endpoint ====================

#[tokio::test]
async fn test_convert_ten_liters() {
    let resp = get(test_app(Profile::Compat), "/api/convert?input=10L").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["initNum"].as_f64().unwrap(), 10.0);
    assert_eq!(body["initUnit"], "L");
    assert_eq!(body["returnUnit"], "gal");
    assert!((body["returnNum"].as_f64().unwrap() - 2.64172).abs() < 0.1);
    assert_eq!(body["string"], "10 liters converts to 2.64172 gallons");
}

#[tokio::test]
async fn test_convert_bare_unit_defaults_magnitude_to_one() {
    let resp = get(test_app(Profile::Compat), "/api/convert?input=kg").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["initNum"].as_f64().unwrap(), 1.0);
    assert_eq!(body["initUnit"], "kg");
    assert_eq!(body["returnUnit"], "lbs");
    assert!((body["returnNum"].as_f64().unwrap() - 2.20462).abs() < 0.1);
}

#[tokio::test]
async fn test_convert_fractional_input() {
    let resp = get(test_app(Profile::Compat), "/api/convert?input=32/3L").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert!((body["initNum"].as_f64().unwrap() - 32.0 / 3.0).abs() < 1e-12);
    assert_eq!(body["returnUnit"], "gal");
}

#[tokio::test]
async fn test_missing_input_falls_back_to_one_liter() {
    let resp = get(test_app(Profile::Compat), "/api/convert").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["initNum"].as_f64().unwrap(), 1.0);
    assert_eq!(body["initUnit"], "L");
    assert_eq!(body["returnUnit"], "gal");
}

#[tokio::test]
async fn test_blank_input_falls_back_to_one_liter() {
    let resp = get(test_app(Profile::Compat), "/api/convert?input=%20%20").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["initNum"].as_f64().unwrap(), 1.0);
    assert_eq!(body["initUnit"], "L");
}

// ==================== Extraction Failures (plain text, 200) ====================

#[tokio::test]
async fn test_unknown_unit_answers_plain_text() {
    let resp = get(test_app(Profile::Compat), "/api/convert?input=32g").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "invalid unit");
}

#[tokio::test]
async fn test_bad_number_answers_plain_text() {
    let resp = get(test_app(Profile::Compat), "/api/convert?input=3/7.2/4kg").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "invalid number");
}

#[tokio::test]
async fn test_bad_number_and_unit_answers_plain_text() {
    let resp = get(
        test_app(Profile::Compat),
        "/api/convert?input=3/7.2/4kilomegagram",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "invalid number and unit");
}

// ==================== Explicit Targets ====================

#[tokio::test]
async fn test_explicit_target_on_full_catalog() {
    let resp = get(test_app(Profile::Full), "/api/convert?input=1mi&target=ft").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["returnUnit"], "ft");
    assert_eq!(body["returnNum"].as_f64().unwrap(), 5280.0);
}

#[tokio::test]
async fn test_blank_target_means_default_partner() {
    let resp = get(test_app(Profile::Compat), "/api/convert?input=5gal&target=").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["returnUnit"], "L");
}

#[tokio::test]
async fn test_target_without_table_entry_is_bad_request() {
    // ha carries a ratio to m2 but the catalog has no m2 entry.
    let resp = get(test_app(Profile::Full), "/api/convert?input=1ha&target=m2").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "no conversion path from ha");
}

#[tokio::test]
async fn test_reduced_catalog_rejects_target_outside_subset() {
    let resp = get(test_app(Profile::Compat), "/api/convert?input=1gal&target=qt").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("no conversion path"));
}

// ==================== Unit Listing ====================

#[tokio::test]
async fn test_units_listing_on_reduced_catalog() {
    let resp = get(test_app(Profile::Compat), "/api/units").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["total"].as_u64().unwrap(), 6);

    let units = body["units"].as_array().unwrap();
    assert_eq!(units.len(), 6);

    // Entries come back in key order; gal leads the reduced catalog.
    let gal = &units[0];
    assert_eq!(gal["symbol"], "gal");
    assert_eq!(gal["plural"], "gallons");
    assert_eq!(gal["defaultTarget"], "l");
    assert!(gal["ratios"]["ml"].as_f64().is_some());
    assert!(gal["countries"].as_array().is_some());
}

#[tokio::test]
async fn test_units_listing_on_full_catalog() {
    let resp = get(test_app(Profile::Full), "/api/units").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["total"].as_u64().unwrap(), 23);

    let units = body["units"].as_array().unwrap();
    let link = units
        .iter()
        .find(|u| u["symbol"] == "li")
        .expect("link unit present");
    assert!(link.get("defaultTarget").is_none());
}

// ==================== Health Check ====================

#[tokio::test]
async fn test_health_reports_profile_and_size() {
    let resp = get(test_app(Profile::Compat), "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["profile"], "compat");
    assert_eq!(body["units"].as_u64().unwrap(), 6);
}
