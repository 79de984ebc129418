//! Row-major 2-D grids.
//!
//! Every array in the pipeline (complex samples, modulus, phase, hue and
//! color channels) is a [`Grid`]. Elementwise operations never depend on
//! neighbouring cells, so element order is irrelevant to the result.

use std::fmt;
use std::ops::Index;

use crate::api::ColorError;

/// Grid dimensions as `(rows, cols)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows (image height)
    pub rows: usize,
    /// Number of columns (image width)
    pub cols: usize,
}

impl Shape {
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A dense row-major 2-D grid.
///
/// ```
/// use domain_color::Grid;
///
/// let grid = Grid::from_fn(2, 3, |row, col| row * 10 + col);
/// assert_eq!(grid[(1, 2)], 12);
/// assert_eq!(grid.shape().to_string(), "2x3");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Wrap a row-major buffer.
    ///
    /// Fails with [`ColorError::ShapeMismatch`] when `data.len()` is not
    /// `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, ColorError> {
        let shape = Shape::new(rows, cols);
        if data.len() != shape.len() {
            return Err(ColorError::shape("grid data", shape.len(), data.len()));
        }
        Ok(Self { shape, data })
    }

    /// Build from nested rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ColorError> {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut data = Vec::with_capacity(row_count * cols);
        for row in rows {
            if row.len() != cols {
                return Err(ColorError::shape("grid row", cols, row.len()));
            }
            data.extend(row);
        }
        Ok(Self {
            shape: Shape::new(row_count, cols),
            data,
        })
    }

    /// Build by evaluating `f(row, col)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self {
            shape: Shape::new(rows, cols),
            data,
        }
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.shape.rows && col < self.shape.cols {
            self.data.get(row * self.shape.cols + col)
        } else {
            None
        }
    }

    /// Row-major view of all cells.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Apply `f` to every cell, producing a new grid of the same shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            shape: self.shape,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Fail with [`ColorError::ShapeMismatch`] unless `other` has this shape.
    pub fn ensure_same_shape<U>(&self, other: &Grid<U>, what: &'static str) -> Result<(), ColorError> {
        if self.shape != other.shape {
            return Err(ColorError::shape(what, self.shape, other.shape));
        }
        Ok(())
    }

    /// Combine two same-shape grids cell by cell.
    pub fn zip_map<U, V>(
        &self,
        other: &Grid<U>,
        what: &'static str,
        mut f: impl FnMut(&T, &U) -> V,
    ) -> Result<Grid<V>, ColorError> {
        self.ensure_same_shape(other, what)?;
        Ok(Grid {
            shape: self.shape,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    /// # Panics
    /// Panics when `(row, col)` is out of bounds.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.shape.rows && col < self.shape.cols,
            "grid index ({row}, {col}) out of bounds for shape {}",
            self.shape
        );
        &self.data[row * self.shape.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Grid::from_vec(2, 2, vec![1, 2, 3, 4]).is_ok());
        let err = Grid::from_vec(2, 3, vec![1, 2, 3, 4]).unwrap_err();
        assert_eq!(err, ColorError::shape("grid data", 6, 4));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, ColorError::ShapeMismatch { what: "grid row", .. }));
    }

    #[test]
    fn test_from_rows_row_major() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.shape(), Shape::new(2, 3));
        assert_eq!(grid.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(grid[(1, 0)], 4);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_map_preserves_shape() {
        let grid = Grid::from_fn(3, 4, |r, c| (r + c) as f64);
        let doubled = grid.map(|v| v * 2.0);
        assert_eq!(doubled.shape(), grid.shape());
        assert_eq!(doubled[(2, 3)], 10.0);
    }

    #[test]
    fn test_zip_map_shape_mismatch() {
        let a = Grid::from_fn(2, 3, |_, _| 1.0);
        let b = Grid::from_fn(3, 2, |_, _| 1.0);
        let err = a.zip_map(&b, "phase", |x, y| x + y).unwrap_err();
        assert_eq!(err.to_string(), "shape mismatch for phase: expected 2x3, got 3x2");
    }
}
