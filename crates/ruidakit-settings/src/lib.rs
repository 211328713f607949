//! RuidaKit Settings Crate
//!
//! Handles conversion and server configuration, loaded from JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, ConversionSettings, ServerSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
