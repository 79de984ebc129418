//! Complex fields and the polar extractor.
//!
//! A [`ComplexField`] is the caller's input: a grid of complex samples with
//! optional sample axes. [`PolarField`] and [`CartesianParts`] are derived
//! from it on every mapping call and never outlive it.

use num_complex::Complex64;

use crate::api::ColorError;
use crate::grid::{Grid, Shape};

/// A 2-D grid of complex samples, optionally tagged with its sample axes.
///
/// Axis convention: `x` runs along columns (its length must equal
/// [`cols`](Self::cols)) and `y` along rows (length must equal
/// [`rows`](Self::rows)).
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexField {
    values: Grid<Complex64>,
    x: Option<Vec<f64>>,
    y: Option<Vec<f64>>,
}

impl ComplexField {
    /// Wrap a grid of samples without axes.
    pub fn new(values: Grid<Complex64>) -> Self {
        Self {
            values,
            x: None,
            y: None,
        }
    }

    /// Wrap a grid of samples together with its sample axes.
    ///
    /// Fails before any numeric work when an axis length disagrees with the
    /// matching grid dimension.
    ///
    /// ```
    /// use domain_color::{ColorError, ComplexField, Grid};
    /// use num_complex::Complex64;
    ///
    /// let values = Grid::from_fn(10, 20, |_, _| Complex64::new(0.0, 0.0));
    /// let x = vec![0.0; 10];
    /// let y = vec![0.0; 10];
    /// let err = ComplexField::with_axes(values, x, y).unwrap_err();
    /// assert!(matches!(err, ColorError::ShapeMismatch { what: "x axis", .. }));
    /// ```
    pub fn with_axes(values: Grid<Complex64>, x: Vec<f64>, y: Vec<f64>) -> Result<Self, ColorError> {
        if x.len() != values.cols() {
            return Err(ColorError::shape("x axis", values.cols(), x.len()));
        }
        if y.len() != values.rows() {
            return Err(ColorError::shape("y axis", values.rows(), y.len()));
        }
        Ok(Self {
            values,
            x: Some(x),
            y: Some(y),
        })
    }

    /// Build from nested rows of samples.
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> Result<Self, ColorError> {
        Ok(Self::new(Grid::from_rows(rows)?))
    }

    /// Sample `f` on the grid spanned by `x` (columns) and `y` (rows).
    ///
    /// Cell `(row, col)` holds `f(x[col] + i·y[row])`.
    pub fn sample(x: &[f64], y: &[f64], f: impl Fn(Complex64) -> Complex64) -> Self {
        let values = Grid::from_fn(y.len(), x.len(), |row, col| f(Complex64::new(x[col], y[row])));
        Self {
            values,
            x: Some(x.to_vec()),
            y: Some(y.to_vec()),
        }
    }

    #[inline]
    pub fn values(&self) -> &Grid<Complex64> {
        &self.values
    }

    /// Column sample positions, if supplied.
    #[inline]
    pub fn x(&self) -> Option<&[f64]> {
        self.x.as_deref()
    }

    /// Row sample positions, if supplied.
    #[inline]
    pub fn y(&self) -> Option<&[f64]> {
        self.y.as_deref()
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.values.shape()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.values.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.values.cols()
    }
}

/// Modulus and phase of a complex field.
///
/// `phase` is in radians, within (−π, π].
#[derive(Debug, Clone, PartialEq)]
pub struct PolarField {
    modulus: Grid<f64>,
    phase: Grid<f64>,
}

impl PolarField {
    /// Extract `|z|` and `arg z` for every sample.
    ///
    /// Total: NaN and infinite samples pass through as NaN/inf values.
    pub fn from_field(field: &ComplexField) -> Self {
        let values = field.values();
        Self {
            modulus: values.map(|z| z.norm()),
            phase: values.map(|z| z.im.atan2(z.re)),
        }
    }

    /// Pair caller-supplied modulus and phase (radians) grids.
    pub fn new(modulus: Grid<f64>, phase: Grid<f64>) -> Result<Self, ColorError> {
        modulus.ensure_same_shape(&phase, "phase grid")?;
        Ok(Self { modulus, phase })
    }

    #[inline]
    pub fn modulus(&self) -> &Grid<f64> {
        &self.modulus
    }

    /// Phase in radians.
    #[inline]
    pub fn phase(&self) -> &Grid<f64> {
        &self.phase
    }

    /// Phase in degrees, within (−180, 180].
    pub fn phase_degrees(&self) -> Grid<f64> {
        self.phase.map(|p| p.to_degrees())
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.modulus.shape()
    }
}

/// Real and imaginary parts of a complex field.
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianParts {
    real: Grid<f64>,
    imag: Grid<f64>,
}

impl CartesianParts {
    pub fn from_field(field: &ComplexField) -> Self {
        let values = field.values();
        Self {
            real: values.map(|z| z.re),
            imag: values.map(|z| z.im),
        }
    }

    #[inline]
    pub fn real(&self) -> &Grid<f64> {
        &self.real
    }

    #[inline]
    pub fn imag(&self) -> &Grid<f64> {
        &self.imag
    }
}
