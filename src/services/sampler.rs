//! Sampling named functions over rectangles of the complex plane.

use domain_color::ComplexField;

use super::functions::ComplexFunction;

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// A single sample sits at the midpoint.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![(start + end) / 2.0],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Sample `function` on a `width × height` grid spanning `x` (real) and `y`
/// (imaginary).
///
/// Row 0 is the top of the image, so rows run from `y[1]` down to `y[0]`
/// and the imaginary axis points up as on paper.
pub fn sample_function(
    function: ComplexFunction,
    x: [f64; 2],
    y: [f64; 2],
    width: usize,
    height: usize,
) -> ComplexField {
    let xs = linspace(x[0], x[1], width);
    let ys = linspace(y[1], y[0], height);
    ComplexField::sample(&xs, &ys, |z| function.eval(z))
}
