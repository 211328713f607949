//! Ruida move/cut command records
//!
//! Each record is 10 bytes, little-endian:
//!
//! ```text
//! u16 opcode | i32 x | i32 y
//! ```

use crate::error::{DecodeError, DecodeResult};
use ruidakit_core::DevicePoint;
use std::fmt;

/// Size in bytes of one encoded record
pub const RECORD_LEN: usize = 10;

/// Supported opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Laser-off travel to an absolute position
    MoveAbsolute,
    /// Laser-on cut to an absolute position
    CutAbsolute,
}

impl Opcode {
    pub const MOVE_ABSOLUTE: u16 = 0x0104;
    pub const CUT_ABSOLUTE: u16 = 0x0102;

    pub fn code(self) -> u16 {
        match self {
            Self::MoveAbsolute => Self::MOVE_ABSOLUTE,
            Self::CutAbsolute => Self::CUT_ABSOLUTE,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            Self::MOVE_ABSOLUTE => Some(Self::MoveAbsolute),
            Self::CUT_ABSOLUTE => Some(Self::CutAbsolute),
            _ => None,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveAbsolute => write!(f, "MOVE"),
            Self::CutAbsolute => write!(f, "CUT"),
        }
    }
}

/// One device command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceCommand {
    pub opcode: Opcode,
    pub x: i32,
    pub y: i32,
}

impl DeviceCommand {
    pub fn move_to(point: DevicePoint) -> Self {
        Self {
            opcode: Opcode::MoveAbsolute,
            x: point.x,
            y: point.y,
        }
    }

    pub fn cut_to(point: DevicePoint) -> Self {
        Self {
            opcode: Opcode::CutAbsolute,
            x: point.x,
            y: point.y,
        }
    }

    pub fn point(&self) -> DevicePoint {
        DevicePoint::new(self.x, self.y)
    }

    /// Append the 10-byte record to `out`
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.opcode.code().to_le_bytes());
        out.extend_from_slice(&self.x.to_le_bytes());
        out.extend_from_slice(&self.y.to_le_bytes());
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} X{} Y{}", self.opcode, self.x, self.y)
    }
}

/// Serializes device points into the raw (unscrambled) command stream
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandEncoder;

impl CommandEncoder {
    /// First point is a move, every later point a cut.
    pub fn commands(points: &[DevicePoint]) -> Vec<DeviceCommand> {
        points
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                if i == 0 {
                    DeviceCommand::move_to(p)
                } else {
                    DeviceCommand::cut_to(p)
                }
            })
            .collect()
    }

    /// Encode points straight to bytes; empty input gives empty output.
    pub fn encode(points: &[DevicePoint]) -> Vec<u8> {
        Self::encode_commands(&Self::commands(points))
    }

    pub fn encode_commands(commands: &[DeviceCommand]) -> Vec<u8> {
        let mut out = Vec::with_capacity(commands.len() * RECORD_LEN);
        for command in commands {
            command.write_to(&mut out);
        }
        out
    }
}

/// Decode a raw (unscrambled) command stream
pub fn decode_commands(body: &[u8]) -> DecodeResult<Vec<DeviceCommand>> {
    if body.len() % RECORD_LEN != 0 {
        return Err(DecodeError::RaggedBody {
            len: body.len(),
            record: RECORD_LEN,
        });
    }

    body.chunks_exact(RECORD_LEN)
        .enumerate()
        .map(|(i, rec)| {
            let code = u16::from_le_bytes([rec[0], rec[1]]);
            let opcode = Opcode::from_code(code).ok_or(DecodeError::UnknownOpcode {
                opcode: code,
                offset: i * RECORD_LEN,
            })?;
            let x = i32::from_le_bytes([rec[2], rec[3], rec[4], rec[5]]);
            let y = i32::from_le_bytes([rec[6], rec[7], rec[8], rec[9]]);
            Ok(DeviceCommand { opcode, x, y })
        })
        .collect()
}
