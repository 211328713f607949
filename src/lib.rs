//! # RuidaKit
//!
//! Converts single-path SVG drawings into Ruida laser controller (`.rd`)
//! job files.
//!
//! ## Architecture
//!
//! RuidaKit is organized as a workspace with multiple crates:
//!
//! 1. **ruidakit-core** - Geometry types, units, shared errors
//! 2. **ruidakit-camtools** - Path parsing, coordinate mapping, Ruida encoding
//! 3. **ruidakit-settings** - Configuration files
//! 4. **ruidakit** - Command-line front-end and HTTP upload service
//!
//! ## Example
//!
//! ```no_run
//! use ruidakit::{ContainerTemplate, ConversionOptions, RuidaConverter};
//!
//! let template = ContainerTemplate::load("Demonstrations/example1/square.rd")?;
//! let converter = RuidaConverter::new(template, ConversionOptions::default());
//! let job = converter.convert_to_bytes(br#"<svg width="50mm" height="50mm"><path d="M0,0 L50,50"/></svg>"#)?;
//! std::fs::write("output.rd", job)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod server;

pub use ruidakit_core::{
    CanvasDimensions, DevicePoint, GeometryError, Point, RoundingMode, WorkArea,
};

pub use ruidakit_camtools::{
    decode_container, CoordinateMapper, ContainerTemplate, ConversionError, ConversionOptions,
    DecodeError, DecodedContainer, DeviceCommand, NumericParsePolicy, Opcode, PathTokenizer,
    RuidaConverter,
};

pub use ruidakit_settings::{Config, ConversionSettings, ServerSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Target triple the binary was built for
pub const BUILD_TARGET: &str = env!("BUILD_TARGET");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout to command output
/// - RUST_LOG environment variable support (default INFO)
/// - Human-readable lines, or JSON lines when `json` is set
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_names(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
