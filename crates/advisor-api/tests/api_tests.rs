//! HTTP tests for the advisor API, driven through the router in-process.

use advisor_api::{build, create_app};
use advisor_config::AdvisorFile;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use tower::ServiceExt;

const CONFIG: &str = r#"
language: en
entries:
  - entry_id: kitchen
    data:
      name: Kitchen Window
      indoor_temp: sensor.kitchen_temperature
      outdoor_temp: sensor.outside_temperature
      indoor_hum: sensor.kitchen_humidity
      outdoor_hum: sensor.outside_humidity
      contact: binary_sensor.kitchen_window
      wind_speed: sensor.wind_speed
"#;

fn locales_dir() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    PathBuf::from(manifest_dir).join("../../locales")
}

fn app() -> Router {
    let mut file = AdvisorFile::from_yaml(CONFIG).unwrap();
    file.locales_dir = Some(locales_dir());
    let (runtime, state) = build(&file).unwrap();
    tokio::spawn(runtime.run());
    create_app(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn post_state(app: &Router, entity_id: &str, state: &str) {
    let (status, _) = send(
        app,
        Method::POST,
        "/v1/states",
        Some(json!({ "entity_id": entity_id, "state": state })),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
}

/// Options updates resolve after the runtime drained everything queued before them
async fn settle(app: &Router) {
    let (status, _) = send(app, Method::PUT, "/v1/entries/kitchen/options", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

async fn feed_hot_kitchen(app: &Router) {
    post_state(app, "sensor.kitchen_temperature", "28").await;
    post_state(app, "sensor.kitchen_humidity", "60").await;
    post_state(app, "sensor.outside_temperature", "20").await;
    post_state(app, "sensor.outside_humidity", "40").await;
    post_state(app, "binary_sensor.kitchen_window", "off").await;
    settle(app).await;
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "version": "1.0.0" }));
}

#[tokio::test]
async fn test_evaluate_with_default_thresholds() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/evaluate",
        Some(json!({
            "sample": {
                "indoor_temp": 28.0,
                "indoor_hum": 60.0,
                "outdoor_temp": 20.0,
                "outdoor_hum": 40.0,
                "contact": "off"
            }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"], "OPEN");
    assert_eq!(body["reason_code"], "open_hot");
    assert_eq!(body["confidence"], "HIGH");
    assert_eq!(body["diagnostics"]["enthalpy_indoor"], 33.53);
    assert_eq!(body["diagnostics"]["enthalpy_outdoor"], 22.92);
    assert_eq!(body["diagnostics"]["enthalpy_target"], 26.28);
}

fn hot_sample() -> Value {
    json!({
        "indoor_temp": 28.0,
        "indoor_hum": 60.0,
        "outdoor_temp": 20.0,
        "outdoor_hum": 40.0,
        "contact": "Aberto",
        "wind_speed": 30.04
    })
}

#[tokio::test]
async fn test_evaluate_uses_fixed_wind_limit() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/evaluate",
        Some(json!({ "sample": hot_sample() })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"], "CLOSE");
    assert_eq!(body["reason_code"], "strong_wind");
    assert_eq!(body["diagnostics"]["wind_speed"], 30.0);
}

#[tokio::test]
async fn test_evaluate_with_custom_target() {
    let app = app();
    let mut sample = hot_sample();
    sample["wind_speed"] = Value::Null;
    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/evaluate",
        Some(json!({
            "sample": sample,
            "target": { "target_temp": 28.0, "target_hum": 60.0 }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"], "CLOSE");
    assert_eq!(body["reason_code"], "close_cold");
    assert_eq!(body["diagnostics"]["enthalpy_target"], 33.53);
}

#[tokio::test]
async fn test_evaluate_rejects_out_of_range_target() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/evaluate",
        Some(json!({
            "sample": hot_sample(),
            "target": { "target_temp": 95.0, "target_hum": 300.0 }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("target_temp"));

    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/evaluate",
        Some(json!({
            "sample": hot_sample(),
            "target": { "target_temp": 22.0, "target_hum": 19.5 }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_evaluate_rejects_threshold_overrides() {
    let app = app();
    for body in [
        json!({ "sample": hot_sample(), "target": { "target_temp": 22.0, "comfort_band": -5.0 } }),
        json!({
            "sample": hot_sample(),
            "thresholds": {
                "target_temp": 22.0,
                "target_hum": 55.0,
                "wind_limit": 100.0,
                "state_labels": { "open": "X", "close": "X", "keep": "X" }
            }
        }),
    ] {
        let (status, _) = send(&app, Method::POST, "/v1/evaluate", Some(body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn test_evaluate_rejects_malformed_body() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/evaluate",
        Some(json!({ "sample": { "indoor_temp": "hot" } })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_startup_state_is_published() {
    let app = app();
    settle(&app).await;

    let (status, body) = send(&app, Method::GET, "/v1/entities", None).await;
    assert_eq!(status, StatusCode::OK);
    let entities = body.as_array().unwrap();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0]["entity_id"], "sensor.kitchen_window_advice");
    assert_eq!(entities[0]["state"], "MANTER");
    assert_eq!(entities[0]["attributes"]["reason"], "Insufficient indoor data");
}

#[tokio::test]
async fn test_sensor_states_drive_the_entity() {
    let app = app();
    feed_hot_kitchen(&app).await;

    let (status, body) = send(&app, Method::GET, "/v1/entities/sensor.kitchen_window_advice", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "ABRIR");
    assert_eq!(body["unique_id"], "door_window_advisor_kitchen");
    assert_eq!(body["icon"], "mdi:window-open-variant");
    assert_eq!(body["attributes"]["reason"], "Open to let hot and humid air exit");
    assert_eq!(body["attributes"]["enthalpy_indoor"], 33.53);

    post_state(&app, "sensor.wind_speed", "40").await;
    settle(&app).await;

    let (_, body) = send(&app, Method::GET, "/v1/entities/sensor.kitchen_window_advice", None).await;
    assert_eq!(body["state"], "MANTER");
    assert_eq!(body["reason_code"], "strong_wind");
    assert_eq!(body["attributes"]["wind_speed"], 40.0);
}

#[tokio::test]
async fn test_options_update() {
    let app = app();
    feed_hot_kitchen(&app).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/v1/entries/kitchen/options",
        Some(json!({ "state_open": "OPEN", "state_close": "CLOSE", "state_keep": "KEEP" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, Method::GET, "/v1/entities/sensor.kitchen_window_advice", None).await;
    assert_eq!(body["state"], "OPEN");
    assert_eq!(body["options"], json!(["OPEN", "CLOSE", "KEEP"]));
}

#[tokio::test]
async fn test_options_errors() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/v1/entries/kitchen/options",
        Some(json!({ "target_temp": 45 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("target_temp"));

    let (status, _) = send(&app, Method::PUT, "/v1/entries/garage/options", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_entity() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/v1/entities/sensor.nothing_advice", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("sensor.nothing_advice"));
}

#[tokio::test]
async fn test_evaluate_is_counted_separately() {
    let app = app();
    settle(&app).await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/evaluate",
        Some(json!({ "sample": hot_sample() })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains(
        r#"advisor_recommendations_total{action="CLOSE",reason="strong_wind",source="evaluate"} 1"#
    ));
    assert!(!text.contains(r#"reason="strong_wind",source="entity""#));
}

#[tokio::test]
async fn test_metrics_count_published_recommendations() {
    let app = app();
    feed_hot_kitchen(&app).await;

    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains(
        r#"advisor_recommendations_total{action="OPEN",reason="open_hot",source="entity"}"#
    ));
    assert!(text.contains(
        r#"advisor_recommendations_total{action="KEEP",reason="insufficient_indoor_data",source="entity"}"#
    ));
    assert!(!text.contains(r#"source="evaluate""#));
}
