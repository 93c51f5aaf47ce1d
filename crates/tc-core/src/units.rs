// tc-core/src/units.rs

use uom::si::f64::ThermodynamicTemperature as UomThermodynamicTemperature;
use uom::si::thermodynamic_temperature::{degree_celsius, degree_fahrenheit, kelvin};

use crate::{Real, Scale};

/// Canonical typed temperature (SI, f64).
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn k(v: Real) -> Temperature {
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn deg_c(v: Real) -> Temperature {
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn deg_f(v: Real) -> Temperature {
    Temperature::new::<degree_fahrenheit>(v)
}

impl Scale {
    /// Lift a raw value in this scale into a typed temperature.
    pub fn to_temperature(self, v: Real) -> Temperature {
        match self {
            Self::Celsius => deg_c(v),
            Self::Fahrenheit => deg_f(v),
            Self::Kelvin => k(v),
        }
    }

    /// Read a typed temperature back out as a raw value in this scale.
    pub fn value_of(self, t: Temperature) -> Real {
        match self {
            Self::Celsius => t.get::<degree_celsius>(),
            Self::Fahrenheit => t.get::<degree_fahrenheit>(),
            Self::Kelvin => t.get::<kelvin>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tolerances, nearly_equal};

    #[test]
    fn constructors_agree_on_fixed_points() {
        let tol = Tolerances::TEMPERATURE;
        assert!(nearly_equal(deg_c(0.0).get::<kelvin>(), 273.15, tol));
        assert!(nearly_equal(deg_f(32.0).get::<kelvin>(), 273.15, tol));
        assert!(nearly_equal(deg_c(-40.0).get::<degree_fahrenheit>(), -40.0, tol));
        assert!(nearly_equal(k(0.0).get::<degree_celsius>(), -273.15, tol));
    }

    #[test]
    fn lift_and_read_back_per_scale() {
        let tol = Tolerances::TEMPERATURE;
        for scale in Scale::ALL {
            for v in [-500.0, -40.0, 0.0, 37.5, 1_000.0] {
                let back = scale.value_of(scale.to_temperature(v));
                assert!(nearly_equal(back, v, tol), "{scale}: {v} -> {back}");
            }
        }
    }
}
