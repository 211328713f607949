//! Path interpreter
//!
//! Walks path tokens with a cursor starting at the origin and emits one
//! absolute point per consumed argument group. Arcs are reduced to their
//! endpoint, so curved segments come out as straight lines.

use crate::error::{ConversionError, ConversionResult};
use crate::path_tokenizer::{PathCommand, PathToken};
use ruidakit_core::Point;
use tracing::{debug, warn};

/// Ordered, non-empty list of points in drawing order
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Wrap a point list; `None` when empty.
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// Turns path tokens into a polyline
#[derive(Debug, Default)]
pub struct PathInterpreter {
    cursor: Point,
    points: Vec<Point>,
}

impl PathInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret a token sequence from a fresh cursor at (0, 0).
    pub fn interpret(tokens: &[PathToken]) -> ConversionResult<Polyline> {
        let mut interpreter = Self::new();
        for token in tokens {
            interpreter.apply(token);
        }
        debug!(
            "Interpreted {} path tokens into {} points",
            tokens.len(),
            interpreter.points.len()
        );
        Polyline::new(interpreter.points).ok_or(ConversionError::EmptyGeometry)
    }

    /// Current cursor position
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Points emitted so far
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Apply a single token, updating the cursor and point list.
    pub fn apply(&mut self, token: &PathToken) {
        let group = token.command.group_size();
        if group == 0 {
            if token.command == PathCommand::ClosePath {
                self.close_path();
            }
            return;
        }

        let remainder = token.arguments.len() % group;
        if remainder != 0 {
            warn!(
                "Ignoring {} trailing argument(s) of '{}' (groups of {})",
                remainder,
                token.letter(),
                group
            );
        }

        for args in token.arguments.chunks_exact(group) {
            match token.command {
                PathCommand::MoveTo | PathCommand::LineTo => {
                    self.move_cursor(Some(args[0]), Some(args[1]), token.relative)
                }
                PathCommand::HorizontalLineTo => self.move_cursor(Some(args[0]), None, token.relative),
                PathCommand::VerticalLineTo => self.move_cursor(None, Some(args[0]), token.relative),
                // rx ry x-axis-rotation large-arc sweep x y
                PathCommand::ArcTo => self.move_cursor(Some(args[5]), Some(args[6]), token.relative),
                PathCommand::ClosePath => {}
            }
        }
    }

    fn move_cursor(&mut self, x: Option<f64>, y: Option<f64>, relative: bool) {
        if let Some(x) = x {
            self.cursor.x = if relative { self.cursor.x + x } else { x };
        }
        if let Some(y) = y {
            self.cursor.y = if relative { self.cursor.y + y } else { y };
        }
        self.points.push(self.cursor);
    }

    // Closes back to the first point of the whole polyline; the cursor stays put.
    fn close_path(&mut self) {
        if let Some(&first) = self.points.first() {
            self.points.push(first);
        }
    }
}
