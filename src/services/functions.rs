//! Named complex functions that plots can sample.

use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;

use crate::error::RenderError;

/// The built-in function catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexFunction {
    Identity,
    Square,
    Cube,
    Reciprocal,
    Mobius,
    Exp,
    Sin,
    Log,
    Sqrt,
    Essential,
    Roots,
}

impl ComplexFunction {
    pub const ALL: [ComplexFunction; 11] = [
        ComplexFunction::Identity,
        ComplexFunction::Square,
        ComplexFunction::Cube,
        ComplexFunction::Reciprocal,
        ComplexFunction::Mobius,
        ComplexFunction::Exp,
        ComplexFunction::Sin,
        ComplexFunction::Log,
        ComplexFunction::Sqrt,
        ComplexFunction::Essential,
        ComplexFunction::Roots,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ComplexFunction::Identity => "identity",
            ComplexFunction::Square => "square",
            ComplexFunction::Cube => "cube",
            ComplexFunction::Reciprocal => "reciprocal",
            ComplexFunction::Mobius => "mobius",
            ComplexFunction::Exp => "exp",
            ComplexFunction::Sin => "sin",
            ComplexFunction::Log => "log",
            ComplexFunction::Sqrt => "sqrt",
            ComplexFunction::Essential => "essential",
            ComplexFunction::Roots => "roots",
        }
    }

    /// Formula shown in plot listings.
    pub fn formula(self) -> &'static str {
        match self {
            ComplexFunction::Identity => "z",
            ComplexFunction::Square => "z^2",
            ComplexFunction::Cube => "z^3",
            ComplexFunction::Reciprocal => "1/z",
            ComplexFunction::Mobius => "(z - 1)/(z + 1)",
            ComplexFunction::Exp => "exp(z)",
            ComplexFunction::Sin => "sin(z)",
            ComplexFunction::Log => "log(z)",
            ComplexFunction::Sqrt => "sqrt(z)",
            ComplexFunction::Essential => "exp(1/z)",
            ComplexFunction::Roots => "z^3 - 1",
        }
    }

    /// Evaluate at `z`. Poles come out as NaN or infinity, never a panic.
    pub fn eval(self, z: Complex64) -> Complex64 {
        let one = Complex64::new(1.0, 0.0);
        match self {
            ComplexFunction::Identity => z,
            ComplexFunction::Square => z * z,
            ComplexFunction::Cube => z * z * z,
            ComplexFunction::Reciprocal => one / z,
            ComplexFunction::Mobius => (z - one) / (z + one),
            ComplexFunction::Exp => z.exp(),
            ComplexFunction::Sin => z.sin(),
            ComplexFunction::Log => z.ln(),
            ComplexFunction::Sqrt => z.sqrt(),
            ComplexFunction::Essential => (one / z).exp(),
            ComplexFunction::Roots => z * z * z - one,
        }
    }
}

impl fmt::Display for ComplexFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComplexFunction {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| RenderError::UnknownFunction(s.to_string()))
    }
}
