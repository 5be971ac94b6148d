use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;

fn get(uri: &str) -> Request<axum::body::Body> {
    Request::get(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}

fn json_request(
    method: &str,
    uri: &str,
    payload: serde_json::Value,
) -> Request<axum::body::Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&payload).expect("payload encodes"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn catalog_route_returns_a_page() {
    let router = build_router(12);
    let response = router.oneshot(get("/api/v1/catalog")).await.expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 12);
    assert_eq!(payload["matched"], 12);
    assert_eq!(payload["reports"].as_array().map(Vec::len), Some(12));
}

#[tokio::test]
async fn catalog_route_applies_query_filters() {
    let router = build_router(12);
    let response = router
        .oneshot(get("/api/v1/catalog?search=rpt-0003&limit=5"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["matched"], 1);
    assert_eq!(payload["reports"][0]["id"], "RPT-0003");
}

#[tokio::test]
async fn stats_route_summarizes_the_catalog() {
    let router = build_router(12);
    let response = router
        .oneshot(get("/api/v1/catalog/stats"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 12);
    assert!(payload["by_source"].get("SAP ABAP").is_some());
    assert!(payload["by_path"].get("SAP Datasphere / BDC").is_some());
}

#[tokio::test]
async fn report_route_finds_records_and_maps_missing_ids_to_not_found() {
    let router = build_router(12);
    let response = router
        .clone()
        .oneshot(get("/api/v1/catalog/RPT-0005"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["id"], "RPT-0005");

    let response = router
        .oneshot(get("/api/v1/catalog/RPT-9999"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn criteria_route_lists_the_registry() {
    let router = build_router(6);
    let response = router
        .oneshot(get("/api/v1/criteria"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["criteria"].as_array().map(Vec::len), Some(8));
    assert_eq!(payload["weight_total"], 100);
    assert_eq!(payload["balanced"], true);
}

#[tokio::test]
async fn weight_route_validates_bounds_and_criterion_ids() {
    let router = build_router(6);

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/criteria/2/weight",
            json!({ "weight": 40 }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/criteria/99/weight",
            json!({ "weight": 20 }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = router
        .oneshot(json_request(
            "PUT",
            "/api/v1/criteria/2/weight",
            json!({ "weight": 25 }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["id"], 2);
    assert_eq!(payload["weight"], 25);
}

#[tokio::test]
async fn classify_route_scores_payloads() {
    let router = build_router(6);
    let scores: serde_json::Value = (1..=8)
        .map(|id| (id.to_string(), json!(5)))
        .collect::<serde_json::Map<_, _>>()
        .into();

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/classify",
            json!({
                "criteria_scores": scores,
                "source_type": "SAP ABAP",
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["composite_score"], 5.0);
    assert_eq!(payload["status"], "Retain");
}

#[tokio::test]
async fn classify_route_rejects_out_of_scale_scores() {
    let router = build_router(6);
    let mut scores = serde_json::Map::new();
    for id in 1..=8 {
        scores.insert(id.to_string(), json!(3));
    }
    scores.insert("5".to_string(), json!(9));

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/classify",
            json!({
                "criteria_scores": scores,
                "source_type": "SAP BW",
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("criterion 5"));
}

#[tokio::test]
async fn export_route_serves_csv() {
    let router = build_router(6);
    let response = router
        .oneshot(get("/api/v1/catalog/export"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/csv")
    );
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    let rendered = String::from_utf8(body.to_vec()).expect("utf-8 export");
    assert!(rendered.starts_with("id,name,source_type"));
    assert_eq!(rendered.lines().count(), 7);
}
