//! # RuidaKit CAM Tools
//!
//! Converts a single-path SVG drawing into a Ruida laser controller job.
//!
//! ## Pipeline
//!
//! - **Path Tokenizer**: splits path data into command/argument tokens
//! - **Path Interpreter**: walks tokens into an absolute polyline
//! - **SVG Metadata**: finds the path data and the canvas size
//! - **Coordinate Mapper**: fits the canvas into the machine work area
//! - **Ruida**: command encoding, body scrambling and container framing
//! - **Converter**: runs the stages end to end
//!
//! Only straight-line commands (`M L H V Z`) and arc endpoints (`A`) are
//! supported; arcs are drawn as straight lines to their endpoint.

pub mod coordinate_mapper;
pub mod converter;
pub mod error;
pub mod path_interpreter;
pub mod path_tokenizer;
pub mod ruida;
pub mod svg_metadata;

pub use coordinate_mapper::CoordinateMapper;
pub use converter::{ConversionOptions, RuidaConverter};
pub use error::{ConversionError, ConversionResult, DecodeError, DecodeResult};
pub use path_interpreter::{PathInterpreter, Polyline};
pub use path_tokenizer::{NumericParsePolicy, PathCommand, PathToken, PathTokenizer};
pub use ruida::{
    decode_container, scramble, CommandEncoder, Container, ContainerAssembler, ContainerTemplate,
    DecodedContainer, DeviceCommand, Opcode,
};
pub use svg_metadata::{extract_path_data, DocumentMetadataExtractor};
