//! Geometry data model
//!
//! Value types for positions in document space and device space, the
//! nominal canvas size of a document, and the machine work area.

use crate::error::GeometryError;
use crate::units::mm_to_device;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in document space (or any floating-point space)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A position in controller units (micrometers, origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DevicePoint {
    pub x: i32,
    pub y: i32,
}

impl DevicePoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for DevicePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Nominal canvas size of a source document, in document units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasDimensions {
    width: f64,
    height: f64,
}

impl CanvasDimensions {
    /// Create canvas dimensions; both sides must be finite and > 0.
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        if is_positive(width) && is_positive(height) {
            Ok(Self { width, height })
        } else {
            Err(GeometryError::InvalidCanvas { width, height })
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Physical addressable surface of the machine, in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkArea {
    width_mm: f64,
    height_mm: f64,
}

impl WorkArea {
    /// Create a work area; both sides must be finite and > 0.
    pub fn new(width_mm: f64, height_mm: f64) -> Result<Self, GeometryError> {
        if is_positive(width_mm) && is_positive(height_mm) {
            Ok(Self {
                width_mm,
                height_mm,
            })
        } else {
            Err(GeometryError::InvalidWorkArea {
                width_mm,
                height_mm,
            })
        }
    }

    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    /// Width in controller units
    pub fn width_device(&self) -> f64 {
        mm_to_device(self.width_mm)
    }

    /// Height in controller units
    pub fn height_device(&self) -> f64 {
        mm_to_device(self.height_mm)
    }
}

impl Default for WorkArea {
    fn default() -> Self {
        Self {
            width_mm: 50.0,
            height_mm: 50.0,
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
