//! Unit conversion utilities
//!
//! Handles conversion between document millimeters and the controller's
//! fixed-point unit (micrometers), plus parsing of millimeter lengths as
//! they appear in SVG size attributes.

use crate::error::GeometryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Controller units per millimeter (the controller counts micrometers)
pub const DEVICE_UNITS_PER_MM: f64 = 1000.0;

/// Float-to-integer conversion policy for device coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Discard the fractional part (toward zero)
    Truncate,
    /// Round half away from zero
    Nearest,
}

impl Default for RoundingMode {
    fn default() -> Self {
        Self::Truncate
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncate => write!(f, "truncate"),
            Self::Nearest => write!(f, "nearest"),
        }
    }
}

impl FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "truncate" | "trunc" => Ok(Self::Truncate),
            "nearest" | "round" => Ok(Self::Nearest),
            _ => Err(format!("Unknown rounding mode: {}", s)),
        }
    }
}

impl RoundingMode {
    /// Convert a device-space value to `i32`.
    ///
    /// Out-of-range values saturate at `i32::MIN`/`i32::MAX` and NaN maps to 0.
    pub fn to_i32(self, value: f64) -> i32 {
        match self {
            Self::Truncate => value as i32,
            Self::Nearest => value.round() as i32,
        }
    }
}

/// Convert millimeters to controller units
pub fn mm_to_device(value_mm: f64) -> f64 {
    value_mm * DEVICE_UNITS_PER_MM
}

/// Parse a millimeter length such as `"50mm"` or `"12.5 mm"`.
///
/// The `mm` suffix is mandatory; other units are rejected.
pub fn parse_length_mm(input: &str) -> Result<f64, GeometryError> {
    let trimmed = input.trim();
    let number = trimmed
        .strip_suffix("mm")
        .ok_or_else(|| GeometryError::InvalidLength {
            input: input.to_string(),
            reason: "missing mm suffix".to_string(),
        })?
        .trim_end();

    number
        .parse::<f64>()
        .map_err(|e| GeometryError::InvalidLength {
            input: input.to_string(),
            reason: e.to_string(),
        })
}
