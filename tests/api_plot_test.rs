//! Integration tests for /api/plots and /api/plot/{name}.

mod common;

use axum::http::StatusCode;
use common::fixtures::{plots, TEST_CONFIG};
use common::*;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_list_plots_from_embedded_config() {
    let app = TestApp::new();

    let response = app.get("/api/plots").await;
    assert_ok(&response);

    let json: serde_json::Value = response.json();
    let list = json.as_array().expect("Expected JSON array");
    let names: Vec<&str> = list.iter().filter_map(|p| p["name"].as_str()).collect();
    assert!(names.contains(&plots::IDENTITY));
    assert!(names.contains(&plots::ROOTS));

    let roots = list.iter().find(|p| p["name"] == plots::ROOTS).unwrap();
    assert_eq!(roots["function"], "roots");
    assert_eq!(roots["formula"], "z^3 - 1");
    assert_eq!(roots["mode"], "oklch");
    assert_eq!(roots["variant"], "continuous");

    let bands = list.iter().find(|p| p["name"] == plots::LOG_BANDS).unwrap();
    assert_eq!(bands["variant"], "thresholded");
    assert_eq!(bands["contours"], false);
}

#[tokio::test]
async fn test_plot_renders_png_with_requested_size() {
    let app = TestApp::new();

    let response = app.get("/api/plot/identity?w=40&h=30").await;
    assert_png(&response);

    let (width, height, data) = response.decode_png();
    assert_eq!((width, height), (40, 30));
    assert_eq!(data.len(), 40 * 30 * 3);

    let length: usize = response.header("content-length").unwrap().parse().unwrap();
    assert_eq!(length, response.body.len());
    assert!(response.header("etag").unwrap().starts_with('"'));
    assert!(response.header("last-modified").is_some());
    assert_eq!(response.header("cache-control"), Some("no-cache"));
}

#[tokio::test]
async fn test_plot_dimensions_are_clamped() {
    let app = TestApp::with_config(TEST_CONFIG);

    let response = app.get("/api/plot/tiny?w=0&h=5").await;
    assert_png(&response);
    let (width, height, _) = response.decode_png();
    assert_eq!((width, height), (1, 5));
}

#[tokio::test]
async fn test_plot_uses_config_defaults() {
    let app = TestApp::with_config(TEST_CONFIG);

    let response = app.get("/api/plot/tiny").await;
    assert_png(&response);
    let (width, height, _) = response.decode_png();
    assert_eq!((width, height), (32, 24));
}

#[tokio::test]
async fn test_plot_etag_not_modified() {
    let app = TestApp::new();
    let path = "/api/plot/identity?w=16&h=16&contours=false";

    let first = app.get(path).await;
    assert_png(&first);
    let etag = first.header("etag").unwrap().to_string();

    let second = app.get_with_headers(path, &[("If-None-Match", &etag)]).await;
    assert_status(&second, StatusCode::NOT_MODIFIED);
    assert!(second.body.is_empty());
    assert_eq!(second.header("etag"), Some(etag.as_str()));

    let stale = app
        .get_with_headers(path, &[("If-None-Match", "\"0000\"")])
        .await;
    assert_png(&stale);
}

#[tokio::test]
async fn test_plot_is_cached_per_settings() {
    let app = TestApp::new();

    let a = app.get("/api/plot/identity?w=16&h=16").await;
    let b = app.get("/api/plot/identity?w=16&h=16").await;
    assert_png(&a);
    assert_eq!(a.body, b.body);
    assert_eq!(a.header("etag"), b.header("etag"));
    assert_eq!(app.cache().len().await, 1);

    let c = app.get("/api/plot/identity?w=16&h=16&mode=oklch").await;
    assert_png(&c);
    assert_ne!(a.header("etag"), c.header("etag"));
    assert_eq!(app.cache().len().await, 2);
}

#[tokio::test]
async fn test_plot_every_variant_renders() {
    let app = TestApp::with_config(TEST_CONFIG);

    for variant in ["continuous", "rounded", "thresholded", "lightness", "phase", "real", "imaginary"] {
        let response = app
            .get(&format!("/api/plot/tiny?w=8&h=8&variant={variant}"))
            .await;
        assert_png(&response);
    }
}

#[tokio::test]
async fn test_plot_not_found() {
    let app = TestApp::new();

    let response = app.get(&format!("/api/plot/{}", plots::MISSING)).await;
    assert_json_error(&response, StatusCode::NOT_FOUND, plots::MISSING);
}

#[tokio::test]
async fn test_plot_bad_overrides_are_bad_requests() {
    let app = TestApp::with_config(TEST_CONFIG);

    let response = app.get("/api/plot/tiny?mode=cmyk").await;
    assert_json_error(&response, StatusCode::BAD_REQUEST, "cmyk");

    let response = app.get("/api/plot/tiny?variant=sparkly").await;
    assert_json_error(&response, StatusCode::BAD_REQUEST, "sparkly");
}

#[tokio::test]
async fn test_plot_bad_definitions_are_bad_requests() {
    let app = TestApp::with_config(TEST_CONFIG);

    let response = app.get("/api/plot/bad-function").await;
    assert_json_error(&response, StatusCode::BAD_REQUEST, "gamma");

    let response = app.get("/api/plot/bad-range").await;
    assert_json_error(&response, StatusCode::BAD_REQUEST, "Invalid range for x");

    let response = app.get("/api/plot/bad-mode").await;
    assert_json_error(&response, StatusCode::BAD_REQUEST, "cmyk");
}

#[tokio::test]
async fn test_health_and_openapi() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_ok(&response);
    assert_eq!(response.text(), "OK");

    let response = app.get("/api-docs/openapi.json").await;
    assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert!(json["paths"]["/api/plot/{name}"].is_object());
    assert!(json["paths"]["/api/color"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new();

    let response = app.get("/api/nothing-here").await;
    assert_json_error(&response, StatusCode::NOT_FOUND, "Not found");
}
