//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{Path, Query, State},
    http::{header::CACHE_CONTROL, HeaderMap, HeaderValue},
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::{AppConfig, PlotOverrides};
use crate::services::{PlotCache, RenderService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub renderer: Arc<RenderService>,
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(&asset_loader);
    create_app_state_with_config(config)
}

/// Create application state from an already loaded configuration.
pub fn create_app_state_with_config(config: AppConfig) -> anyhow::Result<AppState> {
    for (name, plot) in &config.plots {
        if let Err(e) = plot.function.parse::<crate::services::ComplexFunction>() {
            tracing::warn!(plot = %name, %e, "Plot references an unknown function");
        }
    }

    Ok(AppState {
        config: Arc::new(config),
        renderer: Arc::new(RenderService::new(Arc::new(PlotCache::new()))),
    })
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Phasecolor API",
        description = "Domain coloring of complex functions",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_list_plots,
        api::handle_plot,
        api::handle_color,
        api::handle_colormap,
        api::handle_contours,
    ),
    components(schemas(
        api::PlotInfo,
        api::ColorRequest,
        api::ColormapResponse,
        api::ColormapSample,
        api::ContoursResponse,
    )),
    tags(
        (name = "Plots", description = "Configured function plots"),
        (name = "Coloring", description = "Coloring of caller-supplied fields"),
        (name = "Legends", description = "Colormaps and contour levels")
    )
)]
pub struct ApiDoc;

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
/// Responses default to `Cache-Control: no-cache` so that clients
/// revalidate plots with their ETag.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/plots", get(handle_list_plots))
        .route("/api/plot/:name", get(handle_plot))
        .route("/api/color", post(handle_color))
        .route("/api/colormap/:mode", get(api::handle_colormap))
        .route("/api/contours", get(api::handle_contours))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .fallback(|| async { ApiError::NotFound })
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
}

/// Router plus OpenAPI JSON and Swagger UI.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_list_plots(State(state): State<AppState>) -> Json<Vec<api::PlotInfo>> {
    api::handle_list_plots(State(state.config)).await
}

async fn handle_plot(
    State(state): State<AppState>,
    path: Path<String>,
    query: Query<PlotOverrides>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    api::handle_plot(
        State(state.config),
        State(state.renderer),
        path,
        query,
        headers,
    )
    .await
}

async fn handle_color(
    State(state): State<AppState>,
    body: Json<api::ColorRequest>,
) -> Result<Response, ApiError> {
    api::handle_color(State(state.renderer), body).await
}
