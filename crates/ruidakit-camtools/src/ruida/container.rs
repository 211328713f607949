//! Ruida `.rd` container framing
//!
//! ```text
//! [512-byte header][scrambled command body][6-byte trailer]
//! ```
//!
//! The header and trailer are not synthesized: they are copied verbatim
//! from an existing, known-good container supplied by the caller.

use super::command::{decode_commands, DeviceCommand};
use super::scrambler::scramble;
use crate::error::{ConversionError, ConversionResult, DecodeError, DecodeResult};
use std::path::Path;
use tracing::debug;

pub const HEADER_LEN: usize = 512;
pub const TRAILER_LEN: usize = 6;
/// Smallest template that can supply both framing blocks
pub const MIN_TEMPLATE_LEN: usize = HEADER_LEN + TRAILER_LEN;

/// Header and trailer bytes borrowed from a template container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerTemplate {
    header: Box<[u8; HEADER_LEN]>,
    trailer: [u8; TRAILER_LEN],
}

impl ContainerTemplate {
    /// Take the first 512 and last 6 bytes of a template container.
    pub fn from_bytes(bytes: &[u8]) -> ConversionResult<Self> {
        if bytes.len() < MIN_TEMPLATE_LEN {
            return Err(ConversionError::TemplateTooShort {
                len: bytes.len(),
                min: MIN_TEMPLATE_LEN,
            });
        }

        let mut header = Box::new([0u8; HEADER_LEN]);
        header.copy_from_slice(&bytes[..HEADER_LEN]);
        let mut trailer = [0u8; TRAILER_LEN];
        trailer.copy_from_slice(&bytes[bytes.len() - TRAILER_LEN..]);

        Ok(Self { header, trailer })
    }

    /// Read a template container from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> ConversionResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            ConversionError::TemplateUnavailable(format!("{}: {}", path.display(), e))
        })?;
        debug!("Loaded {} byte template from {}", bytes.len(), path.display());
        Self::from_bytes(&bytes)
    }

    pub fn header(&self) -> &[u8] {
        &self.header[..]
    }

    pub fn trailer(&self) -> &[u8] {
        &self.trailer
    }
}

/// A complete job file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    header: Vec<u8>,
    body: Vec<u8>,
    trailer: Vec<u8>,
}

impl Container {
    /// Scrambled command body
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn header(&self) -> &[u8] {
        &self.header
    }

    pub fn trailer(&self) -> &[u8] {
        &self.trailer
    }

    pub fn len(&self) -> usize {
        self.header.len() + self.body.len() + self.trailer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize as header ++ body ++ trailer
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(&self.header);
        out.extend_from_slice(&self.body);
        out.extend_from_slice(&self.trailer);
        out
    }
}

/// Wraps a scrambled body in template framing
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerAssembler;

impl ContainerAssembler {
    /// Frame a scrambled body. An empty body is refused.
    pub fn assemble(template: &ContainerTemplate, body: Vec<u8>) -> ConversionResult<Container> {
        if body.is_empty() {
            return Err(ConversionError::EmptyGeometry);
        }
        Ok(Container {
            header: template.header().to_vec(),
            body,
            trailer: template.trailer().to_vec(),
        })
    }
}

/// A container split back into its parts with the body decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedContainer {
    pub header: Vec<u8>,
    pub commands: Vec<DeviceCommand>,
    pub trailer: Vec<u8>,
}

/// Split, unscramble and decode a container produced by this crate.
pub fn decode_container(bytes: &[u8]) -> DecodeResult<DecodedContainer> {
    if bytes.len() < MIN_TEMPLATE_LEN {
        return Err(DecodeError::TooShort { len: bytes.len() });
    }
    let body_end = bytes.len() - TRAILER_LEN;
    let body = scramble(&bytes[HEADER_LEN..body_end]);

    Ok(DecodedContainer {
        header: bytes[..HEADER_LEN].to_vec(),
        commands: decode_commands(&body)?,
        trailer: bytes[body_end..].to_vec(),
    })
}
