//! Contour overlay rasterizer.
//!
//! Marks iso-modulus and iso-phase curves on a colored image. A pixel is on
//! a contour when its band index (see [`band_index`]) differs from that of
//! its right or lower neighbour, which is the per-cell threshold test of
//! marching squares without the segment tracing.

use domain_color::contour::band_index;
use domain_color::{ColorError, ContourLevels, Grid, PolarField, RgbImage, Srgb};

/// Factor applied to every channel of a contour pixel.
pub const CONTOUR_SHADE: f32 = 0.55;

/// Darken contour pixels in place and return how many were darkened.
///
/// Pixels whose modulus or phase is NaN never carry a contour. The phase
/// wrap at ±180° is drawn like any other phase level.
pub fn overlay_contours(
    image: &mut RgbImage,
    polar: &PolarField,
    levels: &ContourLevels,
) -> Result<usize, ColorError> {
    let shape = polar.shape();
    if image.width() != shape.cols || image.height() != shape.rows {
        return Err(ColorError::ShapeMismatch {
            what: "contour image",
            expected: shape.to_string(),
            actual: format!("{}x{}", image.height(), image.width()),
        });
    }

    let modulus_bands = polar.modulus().map(|&m| band_index(levels.modulus(), m));
    let phase_bands = polar
        .phase_degrees()
        .map(|&p| band_index(levels.phase_deg(), p));

    let mut darkened = 0;
    for row in 0..shape.rows {
        for col in 0..shape.cols {
            if is_boundary(&modulus_bands, row, col) || is_boundary(&phase_bands, row, col) {
                if let Some(pixel) = image.pixel(row, col) {
                    image.set_pixel(row, col, shade(pixel));
                    darkened += 1;
                }
            }
        }
    }

    tracing::debug!(darkened, rows = shape.rows, cols = shape.cols, "Overlaid contours");
    Ok(darkened)
}

fn is_boundary(bands: &Grid<Option<usize>>, row: usize, col: usize) -> bool {
    let Some(&Some(here)) = bands.get(row, col) else {
        return false;
    };
    let differs = |r: usize, c: usize| matches!(bands.get(r, c), Some(&Some(other)) if other != here);
    differs(row, col + 1) || differs(row + 1, col)
}

fn shade(pixel: Srgb) -> Srgb {
    Srgb::new(
        pixel.r * CONTOUR_SHADE,
        pixel.g * CONTOUR_SHADE,
        pixel.b * CONTOUR_SHADE,
    )
}
