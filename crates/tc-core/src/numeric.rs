//! Float helpers for comparing and validating temperature values.

use crate::TcError;

/// Floating point type used for every temperature value.
pub type Real = f64;

/// Absolute/relative tolerance pair for comparing two temperatures.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Agreement expected between two computations of the same temperature,
    /// e.g. a conversion and its inverse, or a formula and the uom quantity.
    pub const TEMPERATURE: Self = Self {
        abs: 1e-9,
        rel: 1e-9,
    };
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::TEMPERATURE
    }
}

/// True when `a` and `b` agree within either the absolute or the
/// magnitude-scaled relative tolerance.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Pass finite values through; NaN and ±inf become [`TcError::NonFinite`].
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TcError::NonFinite { what, value: v })
    }
}
