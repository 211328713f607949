//! SVG to Ruida job conversion
//!
//! Runs the whole pipeline for one document:
//! markup → path data → tokens → polyline → device points → command bytes
//! → scrambled body → framed container.
//!
//! Any failing stage aborts the conversion; a container is only produced
//! when the body holds at least one command.

use crate::coordinate_mapper::CoordinateMapper;
use crate::error::ConversionResult;
use crate::path_interpreter::PathInterpreter;
use crate::path_tokenizer::{NumericParsePolicy, PathTokenizer};
use crate::ruida::{
    scramble, CommandEncoder, Container, ContainerAssembler, ContainerTemplate, DeviceCommand,
};
use crate::svg_metadata::{extract_path_data, DocumentMetadataExtractor};
use ruidakit_core::{RoundingMode, WorkArea};
use std::sync::Arc;
use tracing::{debug, info};

/// Conversion parameters
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConversionOptions {
    /// Physical bounds the artwork is fitted into
    pub work_area: WorkArea,
    /// Handling of malformed numbers in path data
    pub numeric_policy: NumericParsePolicy,
    /// Float-to-integer policy for device coordinates
    pub rounding: RoundingMode,
}

/// Converts SVG documents into Ruida job containers
///
/// Holds only immutable state, so one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct RuidaConverter {
    template: Arc<ContainerTemplate>,
    options: ConversionOptions,
}

impl RuidaConverter {
    pub fn new(template: ContainerTemplate, options: ConversionOptions) -> Self {
        Self::with_shared_template(Arc::new(template), options)
    }

    pub fn with_shared_template(template: Arc<ContainerTemplate>, options: ConversionOptions) -> Self {
        Self { template, options }
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    pub fn template(&self) -> &ContainerTemplate {
        &self.template
    }

    /// Compute the device commands for a document without framing them.
    pub fn plan(&self, markup: &[u8]) -> ConversionResult<Vec<DeviceCommand>> {
        let markup = String::from_utf8_lossy(markup);

        let path_data = extract_path_data(&markup)?;
        let canvas = DocumentMetadataExtractor::new().extract(&markup)?;

        let tokens = PathTokenizer::new(self.options.numeric_policy).tokenize(path_data)?;
        debug!("Tokenized path data into {} commands", tokens.len());
        let polyline = PathInterpreter::interpret(&tokens)?;

        let mapper = CoordinateMapper::new(canvas, self.options.work_area, self.options.rounding);
        let device_points = mapper.map_all(polyline.points());

        Ok(CommandEncoder::commands(&device_points))
    }

    /// Convert a document into a framed container.
    pub fn convert(&self, markup: &[u8]) -> ConversionResult<Container> {
        let commands = self.plan(markup)?;
        let body = scramble(&CommandEncoder::encode_commands(&commands));
        let container = ContainerAssembler::assemble(&self.template, body)?;
        info!(
            "Converted document into {} commands ({} bytes)",
            commands.len(),
            container.len()
        );
        Ok(container)
    }

    /// Convert a document straight to file bytes.
    pub fn convert_to_bytes(&self, markup: &[u8]) -> ConversionResult<Vec<u8>> {
        self.convert(markup).map(|c| c.to_bytes())
    }
}
