use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use domain_color::{ColorSpaceMode, ComplexField, Grid, Variant};
use num_complex::Complex64;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::MAX_DIMENSION;
use crate::services::RenderService;

/// A complex field supplied by the caller, as separate real and imaginary
/// grids. `null` entries become NaN and render white.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ColorRequest {
    /// Real parts, one inner array per image row (top row first)
    pub re: Vec<Vec<Option<f64>>>,
    /// Imaginary parts, same shape as `re`
    pub im: Vec<Vec<Option<f64>>>,
    /// Color space: "hsl" (default) or "oklch"
    #[serde(default)]
    pub mode: Option<String>,
    /// Septaphase variant, "continuous" when omitted
    #[serde(default)]
    pub variant: Option<String>,
    /// Draw modulus and phase contours (default false)
    #[serde(default)]
    pub contours: bool,
}

impl ColorRequest {
    /// Validate the grids and combine them into a field.
    pub fn to_field(&self) -> Result<ComplexField, ApiError> {
        let re = to_grid(&self.re)?;
        let im = to_grid(&self.im)?;
        if re.is_empty() {
            return Err(ApiError::BadRequest("field must not be empty".to_string()));
        }
        if re.rows() > MAX_DIMENSION as usize || re.cols() > MAX_DIMENSION as usize {
            return Err(ApiError::BadRequest(format!(
                "field {} exceeds {MAX_DIMENSION}x{MAX_DIMENSION}",
                re.shape()
            )));
        }
        let values = re.zip_map(&im, "imaginary part", |&a, &b| Complex64::new(a, b))?;
        Ok(ComplexField::new(values))
    }
}

fn to_grid(rows: &[Vec<Option<f64>>]) -> Result<Grid<f64>, ApiError> {
    let rows = rows
        .iter()
        .map(|row| row.iter().map(|v| v.unwrap_or(f64::NAN)).collect())
        .collect();
    Ok(Grid::from_rows(rows)?)
}

/// Color a caller-supplied complex field
///
/// Renders the field without caching. Row 0 is the top of the image.
#[utoipa::path(
    post,
    path = "/api/color",
    request_body = ColorRequest,
    responses(
        (status = 200, description = "PNG image", content_type = "image/png"),
        (status = 400, description = "Ragged, empty or mismatched grids, or unknown mode/variant"),
    ),
    tag = "Coloring"
)]
pub async fn handle_color(
    State(renderer): State<Arc<RenderService>>,
    Json(request): Json<ColorRequest>,
) -> Result<Response, ApiError> {
    let field = request.to_field()?;
    let mode: ColorSpaceMode = request.mode.as_deref().unwrap_or("hsl").parse()?;
    let variant: Variant = match request.variant.as_deref() {
        Some(name) => name.parse()?,
        None => Variant::Continuous,
    };

    tracing::info!(
        rows = field.rows(),
        cols = field.cols(),
        mode = %mode,
        variant = %variant,
        "Color request received"
    );

    let png_bytes = renderer
        .render_field(field, mode, variant, request.contours)
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_LENGTH, png_bytes.len().to_string()),
        ],
        Bytes::from(png_bytes),
    )
        .into_response())
}
