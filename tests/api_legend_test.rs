//! Integration tests for the colormap and contour legend endpoints.

mod common;

use axum::http::StatusCode;
use common::*;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_colormap_default_samples() {
    let app = TestApp::new();

    let response = app.get("/api/colormap/hsl").await;
    assert_ok(&response);

    let json: serde_json::Value = response.json();
    assert_eq!(json["mode"], "hsl");
    let samples = json["samples"].as_array().unwrap();
    assert_eq!(samples.len(), 16);

    let first_phase = samples[0]["phase"].as_f64().unwrap();
    assert!((first_phase + std::f64::consts::PI).abs() < 1e-12);
    for sample in samples {
        let phase = sample["phase"].as_f64().unwrap();
        assert!(phase < std::f64::consts::PI);
        let color = sample["color"].as_str().unwrap();
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
    }
}

#[tokio::test]
async fn test_colormap_samples_are_clamped() {
    let app = TestApp::new();

    let json: serde_json::Value = app.get("/api/colormap/oklch?samples=1").await.json();
    assert_eq!(json["samples"].as_array().unwrap().len(), 2);

    let json: serde_json::Value = app.get("/api/colormap/oklch?samples=5000").await.json();
    assert_eq!(json["samples"].as_array().unwrap().len(), 1024);
}

#[tokio::test]
async fn test_colormap_modes_differ() {
    let app = TestApp::new();

    let hsl: serde_json::Value = app.get("/api/colormap/hsl?samples=6").await.json();
    let oklch: serde_json::Value = app.get("/api/colormap/perceptual?samples=6").await.json();
    assert_eq!(oklch["mode"], "oklch");
    assert_ne!(hsl["samples"], oklch["samples"]);
}

#[tokio::test]
async fn test_colormap_unknown_mode() {
    let app = TestApp::new();

    let response = app.get("/api/colormap/cmyk").await;
    assert_json_error(&response, StatusCode::BAD_REQUEST, "cmyk");
}

#[tokio::test]
async fn test_contour_levels() {
    let app = TestApp::new();

    let response = app.get("/api/contours").await;
    assert_ok(&response);

    let json: serde_json::Value = response.json();
    let modulus: Vec<f64> = json["modulus"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();
    assert_eq!(modulus.len(), 23);
    assert!((modulus[7] - 1.0).abs() < 1e-12);
    assert!(modulus.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(
        json["phase_deg"],
        serde_json::json!([-180.0, -90.0, 0.0, 90.0, 180.0])
    );
}
