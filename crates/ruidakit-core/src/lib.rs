//! # RuidaKit Core
//!
//! Core types and utilities shared by the RuidaKit crates.
//! Provides the geometry data model used on both sides of the
//! document-to-device mapping, unit helpers, and the common error type.

pub mod data;
pub mod error;
pub mod units;

pub use data::{CanvasDimensions, DevicePoint, Point, WorkArea};
pub use error::GeometryError;
pub use units::{RoundingMode, DEVICE_UNITS_PER_MM};
