//! Document-to-device coordinate mapping
//!
//! Fits the canvas into the work area with a uniform scale, centres it on
//! the free axis and flips Y: documents grow downward from the top-left,
//! the controller grows upward from the bottom-left.
//!
//! Device coordinates never leave `[0, floor(W*1000)] x [0, floor(H*1000)]`,
//! whatever the rounding policy or a fractional work-area size.

use ruidakit_core::{CanvasDimensions, DevicePoint, Point, RoundingMode, WorkArea};
use tracing::debug;

/// Maps document-space points into controller units
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    max_x: i32,
    max_y: i32,
    rounding: RoundingMode,
}

impl CoordinateMapper {
    pub fn new(canvas: CanvasDimensions, work_area: WorkArea, rounding: RoundingMode) -> Self {
        let area_w = work_area.width_device();
        let area_h = work_area.height_device();

        let scale_x = area_w / canvas.width();
        let scale_y = area_h / canvas.height();
        let scale = scale_x.min(scale_y);

        let offset_x = (area_w - canvas.width() * scale) / 2.0;
        let offset_y = (area_h - canvas.height() * scale) / 2.0;

        debug!(
            "Mapping {}x{} canvas into {}x{} mm: scale {:.4}, offset ({:.1}, {:.1})",
            canvas.width(),
            canvas.height(),
            work_area.width_mm(),
            work_area.height_mm(),
            scale,
            offset_x,
            offset_y
        );

        Self {
            scale,
            offset_x,
            offset_y,
            max_x: RoundingMode::Truncate.to_i32(area_w.floor()),
            max_y: RoundingMode::Truncate.to_i32(area_h.floor()),
            rounding,
        }
    }

    /// Uniform document-unit to device-unit scale
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Centering offsets in device units
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// Map a single point
    pub fn map(&self, point: Point) -> DevicePoint {
        let x = self.rounding.to_i32(point.x * self.scale + self.offset_x);
        let y = self.rounding.to_i32(point.y * self.scale + self.offset_y);
        DevicePoint::new(
            x.clamp(0, self.max_x),
            self.max_y.saturating_sub(y).clamp(0, self.max_y),
        )
    }

    /// Largest device coordinates a mapped point can take
    pub fn bounds(&self) -> (i32, i32) {
        (self.max_x, self.max_y)
    }

    /// Map a sequence of points, preserving order
    pub fn map_all(&self, points: &[Point]) -> Vec<DevicePoint> {
        points.iter().map(|&p| self.map(p)).collect()
    }
}
