//! Ruida controller job format: command records, body scrambling and
//! container framing.

pub mod command;
pub mod container;
pub mod scrambler;

pub use command::{decode_commands, CommandEncoder, DeviceCommand, Opcode, RECORD_LEN};
pub use container::{
    decode_container, Container, ContainerAssembler, ContainerTemplate, DecodedContainer,
    HEADER_LEN, MIN_TEMPLATE_LEN, TRAILER_LEN,
};
pub use scrambler::{scramble, SCRAMBLE_KEY};
