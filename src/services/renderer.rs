use domain_color::{
    ColorSpaceMode, ComplexField, ContourLevels, DomainColoring, PolarField, RgbImage, Variant,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::plot_cache::{CachedPlot, PlotCache};
use super::sampler::sample_function;
use crate::error::RenderError;
use crate::models::PlotSpec;
use crate::rendering::{encode_png, overlay_contours};

/// Color a field as one variant, optionally with contours.
pub fn color_field(
    field: &ComplexField,
    mode: ColorSpaceMode,
    variant: Variant,
    contours: bool,
) -> Result<RgbImage, RenderError> {
    let mut image = DomainColoring::new(mode).variant(field, variant)?;
    if contours {
        let polar = PolarField::from_field(field);
        overlay_contours(&mut image, &polar, &ContourLevels::standard())?;
    }
    Ok(image)
}

/// Sample, color and encode a plot. Synchronous and CPU bound.
pub fn render_plot(spec: &PlotSpec) -> Result<Vec<u8>, RenderError> {
    let field = sample_function(
        spec.function,
        spec.x,
        spec.y,
        spec.width as usize,
        spec.height as usize,
    );
    let image = color_field(&field, spec.mode, spec.variant, spec.contours)?;
    encode_png(&image)
}

/// High-level render service that combines rendering and caching
pub struct RenderService {
    cache: Arc<PlotCache>,
    /// One lock per cache key with a render in flight.
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl RenderService {
    pub fn new(cache: Arc<PlotCache>) -> Self {
        Self {
            cache,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    pub fn cache(&self) -> &Arc<PlotCache> {
        &self.cache
    }

    /// Render a plot, serving it from the cache when the same settings were
    /// rendered before.
    ///
    /// Uses spawn_blocking to avoid blocking the async runtime during
    /// CPU-intensive sampling and coloring. Concurrent misses on the same
    /// key wait for the first render instead of repeating it.
    pub async fn render(&self, spec: PlotSpec) -> Result<CachedPlot, RenderError> {
        let key = spec.cache_key();
        if let Some(hit) = self.cache.get(&key).await {
            tracing::debug!(cache_key = %key, "Plot cache hit");
            return Ok(hit);
        }

        let key_lock = self.in_flight.lock().await.entry(key.clone()).or_default().clone();
        let result = {
            let _guard = key_lock.lock().await;
            self.render_miss(spec, &key).await
        };
        self.in_flight.lock().await.remove(&key);
        result
    }

    async fn render_miss(&self, spec: PlotSpec, key: &str) -> Result<CachedPlot, RenderError> {
        if let Some(hit) = self.cache.get(key).await {
            tracing::debug!(cache_key = %key, "Plot rendered by a concurrent request");
            return Ok(hit);
        }

        tracing::info!(
            function = %spec.function,
            mode = %spec.mode,
            variant = %spec.variant,
            width = spec.width,
            height = spec.height,
            "Rendering plot"
        );

        let png_bytes = tokio::task::spawn_blocking(move || render_plot(&spec))
            .await
            .map_err(|e| RenderError::Task(e.to_string()))??;

        let plot = CachedPlot {
            png_bytes,
            etag: key.to_string(),
            generated_at: chrono::Utc::now(),
        };
        self.cache.store(key, plot.clone()).await;

        tracing::info!(size_bytes = plot.png_bytes.len(), "Plot rendered successfully");
        Ok(plot)
    }

    /// Color a caller-supplied field in a blocking context. Not cached.
    pub async fn render_field(
        &self,
        field: ComplexField,
        mode: ColorSpaceMode,
        variant: Variant,
        contours: bool,
    ) -> Result<Vec<u8>, RenderError> {
        tokio::task::spawn_blocking(move || {
            let image = color_field(&field, mode, variant, contours)?;
            encode_png(&image)
        })
        .await
        .map_err(|e| RenderError::Task(e.to_string()))?
    }
}
