use core::fmt;
use core::str::FromStr;

use crate::{Real, TcError};

/// Kelvin offset of the Celsius scale.
pub const CELSIUS_OFFSET_K: Real = 273.15;

/// Fahrenheit value of 0 °C.
pub const FAHRENHEIT_FREEZING: Real = 32.0;

/// One of the three supported temperature scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::Celsius, Scale::Fahrenheit, Scale::Kelvin];

    /// Suffix printed after a value: `°C`, `°F`, `K`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
            Self::Kelvin => "Kelvin",
        }
    }

    /// Absolute zero expressed in this scale.
    pub fn absolute_zero(self) -> Real {
        match self {
            Self::Celsius => -CELSIUS_OFFSET_K,
            Self::Fahrenheit => -459.67,
            Self::Kelvin => 0.0,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Scale {
    type Err = TcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "°c" | "celsius" => Ok(Self::Celsius),
            "f" | "°f" | "fahrenheit" => Ok(Self::Fahrenheit),
            "k" | "kelvin" => Ok(Self::Kelvin),
            _ => Err(TcError::UnknownScale(s.to_string())),
        }
    }
}
