//! RgbImage: the terminal artifact of the mapping pipeline.

use crate::color::Srgb;

/// A row-major grid of sanitized sRGB pixels.
///
/// Invariant: every channel of every pixel is finite and in 0.0..=1.0.
/// [`new`](Self::new) and [`set_pixel`](Self::set_pixel) sanitize what they
/// are given, so the invariant holds regardless of the caller.
///
/// # Example
///
/// ```
/// use domain_color::{RgbImage, Srgb};
///
/// let image = RgbImage::new(vec![Srgb::BLACK, Srgb::new(f32::NAN, 0.5, 2.0)], 2, 1);
/// assert_eq!(image.pixel(0, 1), Some(Srgb::new(1.0, 0.5, 1.0)));
/// assert_eq!(image.to_rgb8(), vec![0, 0, 0, 255, 128, 255]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RgbImage {
    pixels: Vec<Srgb>,
    width: usize,
    height: usize,
}

impl RgbImage {
    /// Create an image from row-major pixels.
    ///
    /// # Panics
    ///
    /// Panics unless `pixels.len() == width * height`.
    pub fn new(pixels: Vec<Srgb>, width: usize, height: usize) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match width * height ({}x{}={})",
            pixels.len(),
            width,
            height,
            width * height,
        );
        Self {
            pixels: pixels.into_iter().map(Srgb::sanitized).collect(),
            width,
            height,
        }
    }

    /// Image width in pixels (grid columns).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels (grid rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixels.
    #[inline]
    pub fn pixels(&self) -> &[Srgb] {
        &self.pixels
    }

    /// Pixel at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> Option<Srgb> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// Overwrite one pixel; out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, row: usize, col: usize, color: Srgb) {
        if row < self.height && col < self.width {
            self.pixels[row * self.width + col] = color.sanitized();
        }
    }

    /// Flat `[R, G, B, R, G, B, ...]` bytes, `width * height * 3` long.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            rgb.extend_from_slice(&pixel.to_bytes());
        }
        rgb
    }
}
