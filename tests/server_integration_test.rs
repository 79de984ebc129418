//! Server integration tests that test the actual server behavior.
//!
//! These tests start a real TCP server and verify behavior that can only
//! be tested with actual network connections.

use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use phasecolor::assets::AssetLoader;
use phasecolor::server::{build_app, create_app_state};

/// Start a test server on an available port and return the port number.
async fn start_test_server() -> u16 {
    let asset_loader = Arc::new(AssetLoader::new(None));
    let state = create_app_state(asset_loader).expect("Failed to create app state");
    let app = build_app(state);

    // Bind to port 0 to get an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    port
}

/// Send a raw HTTP/1.1 request and read the whole response.
async fn raw_request(port: u16, path: &str) -> Vec<u8> {
    let mut stream = TcpStream::connect(format!("127.0.0.1:{port}"))
        .await
        .expect("Failed to connect");

    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("Failed to write request");

    let mut response = Vec::new();
    tokio::time::timeout(
        tokio::time::Duration::from_secs(10),
        stream.read_to_end(&mut response),
    )
    .await
    .expect("Timed out reading response")
    .expect("Failed to read response");
    response
}

#[tokio::test]
async fn test_health_over_tcp() {
    let port = start_test_server().await;

    let response = raw_request(port, "/health").await;
    let text = String::from_utf8_lossy(&response);
    assert!(text.starts_with("HTTP/1.1 200"), "Unexpected response: {text}");
    assert!(text.to_lowercase().contains("cache-control: no-cache"));
    assert!(text.ends_with("OK"));
}

#[tokio::test]
async fn test_plot_png_over_tcp() {
    let port = start_test_server().await;

    let response = raw_request(port, "/api/plot/roots?w=24&h=24").await;
    let header_end = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("No header terminator");
    let head = String::from_utf8_lossy(&response[..header_end]).to_lowercase();
    assert!(head.starts_with("http/1.1 200"), "Unexpected response: {head}");
    assert!(head.contains("content-type: image/png"));
    assert!(head.contains("etag: \""));

    let body = &response[header_end + 4..];
    assert_eq!(&body[..8], b"\x89PNG\r\n\x1a\n");
}
