use axum::{
    extract::{Path, Query},
    response::Json,
};
use domain_color::{colormap, ColorSpaceMode, ContourLevels, COLORMAP_SIZE};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;

const DEFAULT_SAMPLES: usize = 16;

/// Query parameters for the colormap endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ColormapQuery {
    /// Number of evenly spaced entries to return (2..=1024, default 16)
    #[serde(default)]
    pub samples: Option<usize>,
}

/// One colormap entry
#[derive(Debug, Serialize, ToSchema)]
pub struct ColormapSample {
    /// Phase in radians, in [-pi, pi)
    pub phase: f64,
    /// Color as "#rrggbb"
    pub color: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ColormapResponse {
    pub mode: String,
    pub samples: Vec<ColormapSample>,
}

/// Contour levels used by the overlay
#[derive(Debug, Serialize, ToSchema)]
pub struct ContoursResponse {
    /// Iso-modulus levels, powers of two
    pub modulus: Vec<f64>,
    /// Iso-phase levels in degrees
    pub phase_deg: Vec<f64>,
}

/// Sample the phase colormap of a color space
///
/// Entries are taken from the 1024-entry table at evenly spaced indices,
/// starting at phase -pi.
#[utoipa::path(
    get,
    path = "/api/colormap/{mode}",
    responses(
        (status = 200, description = "Colormap samples", body = ColormapResponse),
        (status = 400, description = "Unsupported color space"),
    ),
    params(
        ("mode" = String, Path, description = "Color space: hsl or oklch"),
        ColormapQuery,
    ),
    tag = "Legends"
)]
pub async fn handle_colormap(
    Path(mode): Path<String>,
    Query(query): Query<ColormapQuery>,
) -> Result<Json<ColormapResponse>, ApiError> {
    let mode: ColorSpaceMode = mode.parse()?;
    let count = query
        .samples
        .unwrap_or(DEFAULT_SAMPLES)
        .clamp(2, COLORMAP_SIZE);

    Ok(Json(ColormapResponse {
        mode: mode.name().to_string(),
        samples: colormap_samples(mode, count),
    }))
}

/// Evenly spaced entries of the colormap for `mode`.
pub fn colormap_samples(mode: ColorSpaceMode, count: usize) -> Vec<ColormapSample> {
    let table = colormap(mode);
    (0..count)
        .map(|i| {
            let index = i * table.len() / count;
            ColormapSample {
                phase: table.phase(index),
                color: table.colors()[index].to_string(),
            }
        })
        .collect()
}

/// List contour levels
#[utoipa::path(
    get,
    path = "/api/contours",
    responses(
        (status = 200, description = "Contour levels", body = ContoursResponse),
    ),
    tag = "Legends"
)]
pub async fn handle_contours() -> Json<ContoursResponse> {
    let levels = ContourLevels::standard();
    Json(ContoursResponse {
        modulus: levels.modulus().to_vec(),
        phase_deg: levels.phase_deg().to_vec(),
    })
}
