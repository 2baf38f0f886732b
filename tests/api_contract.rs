mod support;

use serde_json::{Value, json};
use std::path::Path;

#[tokio::test]
async fn test_health_reports_ok() {
    let base_url = support::ensure_server();

    let res = reqwest::get(format!("{base_url}/api/health"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["status"], "OK");
    let timestamp = body["timestamp"].as_str().expect("timestamp string");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_scenarios_come_from_bundled_asset() {
    let base_url = support::ensure_server();
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let asset_path = manifest_dir.join("data/scenarios.json");
    let raw = std::fs::read_to_string(asset_path).expect("read asset");
    let asset: Value = serde_json::from_str(&raw).expect("asset is json");

    let res = reqwest::get(format!("{base_url}/api/scenarios"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body, asset);
}

#[tokio::test]
async fn test_generate_scenario_over_the_wire() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base_url}/api/generate-scenario"))
        .json(&json!({"theme": "pirates", "difficulty": "easy"}))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["scenario"]["estimatedPlayTime"], 30);
    assert_eq!(body["scenario"]["theme"], "pirates");
    assert!(body["scenario"]["fileContent"].is_null());
}

#[tokio::test]
async fn test_read_file_rejects_broken_json() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base_url}/api/read-file"))
        .body("{")
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_preflight_and_unknown_route() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let url = format!("{base_url}/api/anything");
    let preflight = client
        .request(reqwest::Method::OPTIONS, url)
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(preflight.status(), reqwest::StatusCode::OK);
    let headers = preflight.headers();
    assert!(headers.contains_key("access-control-allow-methods"));
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert!(preflight.text().await.expect("body").is_empty());

    let missing = client
        .get(format!("{base_url}/api/nowhere"))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = missing.json().await.expect("json body");
    assert_eq!(body, json!({"error": "Route not found"}));
}
