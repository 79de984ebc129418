use domain_color::{ColorSpaceMode, Variant};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use utoipa::IntoParams;

use super::config::{PlotConfig, RenderDefaults};
use crate::error::RenderError;
use crate::services::ComplexFunction;

// Maximum allowed image dimensions to prevent DoS
pub const MAX_DIMENSION: u32 = 2000;

/// Per-request overrides of a plot's settings
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlotOverrides {
    /// Color space: "hsl" or "oklch"
    #[serde(default)]
    pub mode: Option<String>,
    /// Septaphase variant (continuous, rounded, thresholded, lightness, phase, real, imaginary)
    #[serde(default)]
    pub variant: Option<String>,
    /// Image width in pixels (1..=2000)
    #[serde(default)]
    pub w: Option<u32>,
    /// Image height in pixels (1..=2000)
    #[serde(default)]
    pub h: Option<u32>,
    /// Draw modulus and phase contours
    #[serde(default)]
    pub contours: Option<bool>,
}

/// A fully resolved plot: everything needed to produce one PNG
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub function: ComplexFunction,
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub mode: ColorSpaceMode,
    pub variant: Variant,
    pub contours: bool,
    pub width: u32,
    pub height: u32,
}

impl PlotSpec {
    /// Merge request overrides, plot settings and global defaults, in that
    /// order of precedence.
    ///
    /// Dimensions are clamped to `1..=MAX_DIMENSION`.
    pub fn resolve(
        plot: &PlotConfig,
        defaults: &RenderDefaults,
        overrides: &PlotOverrides,
    ) -> Result<Self, RenderError> {
        let function: ComplexFunction = plot.function.parse()?;
        let mode: ColorSpaceMode = overrides
            .mode
            .as_deref()
            .or(plot.mode.as_deref())
            .unwrap_or(defaults.mode.as_str())
            .parse()?;
        let variant = match overrides.variant.as_deref().or(plot.variant.as_deref()) {
            Some(name) => name.parse()?,
            None => Variant::Continuous,
        };

        validate_range("x", plot.x)?;
        validate_range("y", plot.y)?;

        Ok(Self {
            function,
            x: plot.x,
            y: plot.y,
            mode,
            variant,
            contours: overrides
                .contours
                .or(plot.contours)
                .unwrap_or(defaults.contours),
            width: clamp_dimension(overrides.w.unwrap_or(defaults.width)),
            height: clamp_dimension(overrides.h.unwrap_or(defaults.height)),
        })
    }

    /// Stable identifier of the rendered output, used as cache key and ETag.
    ///
    /// SHA-256 of the canonical settings, first 16 bytes as 32 hex characters.
    pub fn cache_key(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.function.name().as_bytes());
        hasher.update(b"|x:");
        for bound in self.x.iter().chain(self.y.iter()) {
            hasher.update(bound.to_bits().to_le_bytes());
        }
        hasher.update(b"|mode:");
        hasher.update(self.mode.name().as_bytes());
        hasher.update(b"|variant:");
        hasher.update(self.variant.name().as_bytes());
        hasher.update(if self.contours { b"|contours" as &[u8] } else { b"|plain" });
        hasher.update(self.width.to_le_bytes());
        hasher.update(self.height.to_le_bytes());

        let result = hasher.finalize();
        hex::encode(&result[..16])
    }
}

pub fn clamp_dimension(value: u32) -> u32 {
    value.clamp(1, MAX_DIMENSION)
}

fn validate_range(axis: &'static str, [min, max]: [f64; 2]) -> Result<(), RenderError> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(RenderError::InvalidRange { axis, min, max })
    }
}
