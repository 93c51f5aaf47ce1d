//! Pairwise temperature conversions.
//!
//! The six free functions are total over `f64`: no domain check is applied, so
//! values below absolute zero convert like any other number. Callers that want
//! physical validation go through [`ensure_physical`] first.

use core::fmt;

use crate::scale::{CELSIUS_OFFSET_K, FAHRENHEIT_FREEZING};
use crate::{Real, Scale, TcError, TcResult, ensure_finite};

#[inline]
pub fn celsius_to_fahrenheit(c: Real) -> Real {
    c * 9.0 / 5.0 + FAHRENHEIT_FREEZING
}

#[inline]
pub fn celsius_to_kelvin(c: Real) -> Real {
    c + CELSIUS_OFFSET_K
}

#[inline]
pub fn fahrenheit_to_celsius(f: Real) -> Real {
    (f - FAHRENHEIT_FREEZING) * 5.0 / 9.0
}

#[inline]
pub fn fahrenheit_to_kelvin(f: Real) -> Real {
    (f - FAHRENHEIT_FREEZING) * 5.0 / 9.0 + CELSIUS_OFFSET_K
}

#[inline]
pub fn kelvin_to_celsius(k: Real) -> Real {
    k - CELSIUS_OFFSET_K
}

#[inline]
pub fn kelvin_to_fahrenheit(k: Real) -> Real {
    (k - CELSIUS_OFFSET_K) * 9.0 / 5.0 + FAHRENHEIT_FREEZING
}

/// An ordered pair of distinct scales, in menu order (1-6).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Conversion {
    CelsiusToFahrenheit,
    CelsiusToKelvin,
    FahrenheitToCelsius,
    FahrenheitToKelvin,
    KelvinToCelsius,
    KelvinToFahrenheit,
}

impl Conversion {
    pub const ALL: [Conversion; 6] = [
        Conversion::CelsiusToFahrenheit,
        Conversion::CelsiusToKelvin,
        Conversion::FahrenheitToCelsius,
        Conversion::FahrenheitToKelvin,
        Conversion::KelvinToCelsius,
        Conversion::KelvinToFahrenheit,
    ];

    /// Look up a conversion by its 1-based menu index.
    pub fn from_menu_index(index: u8) -> Option<Self> {
        let slot = usize::from(index).checked_sub(1)?;
        Self::ALL.get(slot).copied()
    }

    pub fn menu_index(self) -> u8 {
        match self {
            Self::CelsiusToFahrenheit => 1,
            Self::CelsiusToKelvin => 2,
            Self::FahrenheitToCelsius => 3,
            Self::FahrenheitToKelvin => 4,
            Self::KelvinToCelsius => 5,
            Self::KelvinToFahrenheit => 6,
        }
    }

    /// The conversion from `from` to `to`, or `None` when both are the same scale.
    pub fn between(from: Scale, to: Scale) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.source() == from && c.target() == to)
    }

    pub fn source(self) -> Scale {
        match self {
            Self::CelsiusToFahrenheit | Self::CelsiusToKelvin => Scale::Celsius,
            Self::FahrenheitToCelsius | Self::FahrenheitToKelvin => Scale::Fahrenheit,
            Self::KelvinToCelsius | Self::KelvinToFahrenheit => Scale::Kelvin,
        }
    }

    pub fn target(self) -> Scale {
        match self {
            Self::FahrenheitToCelsius | Self::KelvinToCelsius => Scale::Celsius,
            Self::CelsiusToFahrenheit | Self::KelvinToFahrenheit => Scale::Fahrenheit,
            Self::CelsiusToKelvin | Self::FahrenheitToKelvin => Scale::Kelvin,
        }
    }

    pub fn apply(self, value: Real) -> Real {
        match self {
            Self::CelsiusToFahrenheit => celsius_to_fahrenheit(value),
            Self::CelsiusToKelvin => celsius_to_kelvin(value),
            Self::FahrenheitToCelsius => fahrenheit_to_celsius(value),
            Self::FahrenheitToKelvin => fahrenheit_to_kelvin(value),
            Self::KelvinToCelsius => kelvin_to_celsius(value),
            Self::KelvinToFahrenheit => kelvin_to_fahrenheit(value),
        }
    }
}

/// Menu wording, e.g. `Celsius to Fahrenheit`.
impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.source().name(), self.target().name())
    }
}

/// Convert `value` from one scale to another. Same-scale conversion is the identity.
pub fn convert(value: Real, from: Scale, to: Scale) -> Real {
    match Conversion::between(from, to) {
        Some(conversion) => conversion.apply(value),
        None => value,
    }
}

/// Reject values that cannot be a physical temperature in `scale`.
pub fn ensure_physical(value: Real, scale: Scale) -> TcResult<Real> {
    let value = ensure_finite(value, "temperature")?;
    if value < scale.absolute_zero() {
        return Err(TcError::BelowAbsoluteZero { value, scale });
    }
    Ok(value)
}
