//! Error handling for the RuidaKit data model
//!
//! Rejections of invalid geometric input. Pipeline failures live in
//! `ruidakit-camtools`, configuration failures in `ruidakit-settings`.

use thiserror::Error;

/// Geometry error type
///
/// Represents invalid geometric input handed to the core data model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Canvas dimensions must be strictly positive and finite
    #[error("Invalid canvas dimensions {width}x{height}")]
    InvalidCanvas {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },

    /// Work area dimensions must be strictly positive and finite
    #[error("Invalid work area {width_mm}x{height_mm} mm")]
    InvalidWorkArea {
        /// The rejected width in millimeters.
        width_mm: f64,
        /// The rejected height in millimeters.
        height_mm: f64,
    },

    /// A length string could not be parsed
    #[error("Invalid length '{input}': {reason}")]
    InvalidLength {
        /// The text that failed to parse.
        input: String,
        /// Why parsing failed.
        reason: String,
    },
}
