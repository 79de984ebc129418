use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{AppConfig, PlotOverrides, PlotSpec};
use crate::services::{CachedPlot, ComplexFunction, RenderService};

/// Summary of a configured plot
#[derive(Debug, Serialize, ToSchema)]
pub struct PlotInfo {
    /// Name used in /api/plot/{name}
    pub name: String,
    /// Function from the built-in catalogue
    pub function: String,
    /// Human-readable formula, e.g. "z^3 - 1"
    pub formula: Option<String>,
    /// Real axis range
    #[schema(value_type = Vec<f64>)]
    pub x: [f64; 2],
    /// Imaginary axis range
    #[schema(value_type = Vec<f64>)]
    pub y: [f64; 2],
    pub mode: String,
    pub variant: String,
    pub contours: bool,
}

/// List configured plots
#[utoipa::path(
    get,
    path = "/api/plots",
    responses(
        (status = 200, description = "Configured plots", body = Vec<PlotInfo>),
    ),
    tag = "Plots"
)]
pub async fn handle_list_plots(State(config): State<Arc<AppConfig>>) -> Json<Vec<PlotInfo>> {
    let plots = config
        .plots
        .iter()
        .map(|(name, plot)| PlotInfo {
            name: name.clone(),
            function: plot.function.clone(),
            formula: plot
                .function
                .parse::<ComplexFunction>()
                .ok()
                .map(|f| f.formula().to_string()),
            x: plot.x,
            y: plot.y,
            mode: plot.mode.clone().unwrap_or_else(|| config.defaults.mode.clone()),
            variant: plot
                .variant
                .clone()
                .unwrap_or_else(|| "continuous".to_string()),
            contours: plot.contours.unwrap_or(config.defaults.contours),
        })
        .collect();

    Json(plots)
}

/// Render a configured plot as PNG
///
/// The response carries an ETag derived from the resolved settings. A request
/// with a matching If-None-Match header gets 304 without a body.
#[utoipa::path(
    get,
    path = "/api/plot/{name}",
    responses(
        (status = 200, description = "PNG image", content_type = "image/png"),
        (status = 304, description = "Not modified"),
        (status = 400, description = "Invalid mode, variant or plot definition"),
        (status = 404, description = "Plot not found"),
    ),
    params(
        ("name" = String, Path, description = "Plot name from config.yaml"),
        PlotOverrides,
    ),
    tag = "Plots"
)]
pub async fn handle_plot(
    State(config): State<Arc<AppConfig>>,
    State(renderer): State<Arc<RenderService>>,
    Path(name): Path<String>,
    Query(overrides): Query<PlotOverrides>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let plot = config
        .get_plot(&name)
        .ok_or_else(|| ApiError::PlotNotFound(name.clone()))?;
    let spec = PlotSpec::resolve(plot, &config.defaults, &overrides)?;

    tracing::info!(
        plot = %name,
        width = spec.width,
        height = spec.height,
        "Plot request received"
    );

    let etag = format!("\"{}\"", spec.cache_key());
    if if_none_match(&headers, &etag) {
        tracing::debug!(plot = %name, "ETag matched, returning 304");
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    let rendered = renderer.render(spec).await?;
    Ok(png_response(rendered))
}

fn if_none_match(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(',').any(|tag| tag.trim() == etag || tag.trim() == "*"))
        .unwrap_or(false)
}

fn png_response(plot: CachedPlot) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_LENGTH, plot.png_bytes.len().to_string()),
            (header::ETAG, format!("\"{}\"", plot.etag)),
            (
                header::LAST_MODIFIED,
                plot.generated_at
                    .format("%a, %d %b %Y %H:%M:%S GMT")
                    .to_string(),
            ),
        ],
        Bytes::from(plot.png_bytes),
    )
        .into_response()
}
