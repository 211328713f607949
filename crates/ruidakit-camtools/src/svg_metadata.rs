//! SVG document metadata extraction
//!
//! Pulls the path data and the nominal canvas size out of raw SVG markup.
//! The markup is scanned with attribute patterns rather than parsed as XML;
//! only the first `<path>` element is considered.
//!
//! Canvas size resolution order:
//! 1. `width`/`height` attributes declared in millimeters
//! 2. otherwise the last two fields of a four-field `viewBox`
//! 3. if that yields nothing or a zero side, a strict integer-only
//!    `viewBox="x y w h"` form

use crate::error::{ConversionError, ConversionResult};
use regex::Regex;
use ruidakit_core::CanvasDimensions;
use std::sync::LazyLock;
use tracing::debug;

static RE_PATH_D: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<path\b[^>]*?\sd\s*=\s*["']([^"']*)["']"#).expect("invalid path regex")
});
static RE_WIDTH_MM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\swidth\s*=\s*["'](\d+(?:\.\d+)?)\s*mm["']"#).expect("invalid width regex")
});
static RE_HEIGHT_MM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\sheight\s*=\s*["'](\d+(?:\.\d+)?)\s*mm["']"#).expect("invalid height regex")
});
static RE_VIEWBOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\sviewBox\s*=\s*["']([^"']+)["']"#).expect("invalid viewbox regex")
});
static RE_VIEWBOX_INTEGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\sviewBox\s*=\s*["']\s*\d+\s+\d+\s+(\d+)\s+(\d+)\s*["']"#)
        .expect("invalid integer viewbox regex")
});

/// Return the `d` attribute of the first `<path>` element.
pub fn extract_path_data(markup: &str) -> ConversionResult<&str> {
    RE_PATH_D
        .captures(markup)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|d| !d.trim().is_empty())
        .ok_or(ConversionError::MissingPathData)
}

/// Recovers the nominal canvas size of a document
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentMetadataExtractor;

impl DocumentMetadataExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the canvas size, failing with `MissingDimensions`.
    pub fn extract(&self, markup: &str) -> ConversionResult<CanvasDimensions> {
        let (width, height) = match Self::millimeter_size(markup) {
            Some(size) => size,
            None => Self::viewbox_size(markup).unwrap_or((0.0, 0.0)),
        };

        if let Ok(canvas) = CanvasDimensions::new(width, height) {
            debug!("Canvas size {}x{}", width, height);
            return Ok(canvas);
        }

        let (width, height) =
            Self::integer_viewbox_size(markup).ok_or(ConversionError::MissingDimensions)?;
        debug!("Canvas size {}x{} from integer viewBox", width, height);
        CanvasDimensions::new(width, height).map_err(|_| ConversionError::MissingDimensions)
    }

    fn millimeter_size(markup: &str) -> Option<(f64, f64)> {
        let width = capture_number(&RE_WIDTH_MM, markup)?;
        let height = capture_number(&RE_HEIGHT_MM, markup)?;
        Some((width, height))
    }

    fn viewbox_size(markup: &str) -> Option<(f64, f64)> {
        let value = RE_VIEWBOX.captures(markup)?.get(1)?.as_str();
        let fields: Vec<&str> = value
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .collect();
        if fields.len() != 4 {
            return None;
        }
        let width = fields[2].parse().ok()?;
        let height = fields[3].parse().ok()?;
        Some((width, height))
    }

    fn integer_viewbox_size(markup: &str) -> Option<(f64, f64)> {
        let caps = RE_VIEWBOX_INTEGER.captures(markup)?;
        let width = caps.get(1)?.as_str().parse().ok()?;
        let height = caps.get(2)?.as_str().parse().ok()?;
        Some((width, height))
    }
}

fn capture_number(re: &Regex, markup: &str) -> Option<f64> {
    re.captures(markup)?.get(1)?.as_str().parse().ok()
}
