//! Error types for the conversion pipeline.
//!
//! Every failure here means "no output": the caller never receives a
//! container built from partial geometry.

use thiserror::Error;

/// Errors that can occur while converting a document into a job container.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The document has no `d` path attribute.
    #[error("No path data found in document")]
    MissingPathData,

    /// No usable width/height or viewBox was found.
    #[error("No usable canvas dimensions found in document")]
    MissingDimensions,

    /// The path parsed but produced no points.
    #[error("Path produced no geometry")]
    EmptyGeometry,

    /// A numeric argument failed to parse under the strict policy.
    #[error("Invalid number in path data: '{token}'")]
    NumericParseError { token: String },

    /// The header/trailer template could not be obtained.
    #[error("Template container unavailable: {0}")]
    TemplateUnavailable(String),

    /// The template is too short to hold a header and a trailer.
    #[error("Template container too short: {len} bytes (need at least {min})")]
    TemplateTooShort { len: usize, min: usize },
}

/// Errors raised while decoding an existing container.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The file cannot even hold the framing.
    #[error("Container too short: {len} bytes")]
    TooShort { len: usize },

    /// The body does not split into whole records.
    #[error("Body length {len} is not a multiple of the {record} byte record size")]
    RaggedBody { len: usize, record: usize },

    /// An opcode outside the supported set.
    #[error("Unknown opcode 0x{opcode:04X} at body offset {offset}")]
    UnknownOpcode { opcode: u16, offset: usize },
}

/// Result type alias for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Result type alias for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
