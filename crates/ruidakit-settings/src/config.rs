//! Configuration for RuidaKit
//!
//! Settings are grouped in two sections:
//! - Conversion (work area, number handling, rounding, template file)
//! - Server (bind address, upload limit, download name)
//!
//! Files are JSON or TOML, chosen by extension. A missing file at the
//! default location means defaults.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use ruidakit_camtools::{ConversionOptions, NumericParsePolicy};
use ruidakit_core::{RoundingMode, WorkArea};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Template container shipped alongside the demonstration artwork
pub const DEFAULT_TEMPLATE_PATH: &str = "Demonstrations/example1/square.rd";

/// Conversion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    /// Work area width in millimeters
    pub work_area_width_mm: f64,
    /// Work area height in millimeters
    pub work_area_height_mm: f64,
    /// Malformed number handling in path data
    pub numeric_parse_policy: NumericParsePolicy,
    /// Float-to-integer policy for device coordinates
    pub rounding: RoundingMode,
    /// Container whose header and trailer frame every output
    pub template_path: PathBuf,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            work_area_width_mm: 50.0,
            work_area_height_mm: 50.0,
            numeric_parse_policy: NumericParsePolicy::default(),
            rounding: RoundingMode::default(),
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
        }
    }
}

impl ConversionSettings {
    pub fn work_area(&self) -> SettingsResult<WorkArea> {
        WorkArea::new(self.work_area_width_mm, self.work_area_height_mm).map_err(|e| {
            ConfigError::ValueOutOfRange {
                key: "conversion.work_area".to_string(),
                value: e.to_string(),
            }
            .into()
        })
    }

    /// Pipeline options for these settings
    pub fn to_options(&self) -> SettingsResult<ConversionOptions> {
        Ok(ConversionOptions {
            work_area: self.work_area()?,
            numeric_policy: self.numeric_parse_policy,
            rounding: self.rounding,
        })
    }
}

/// Upload server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body
    pub max_upload_bytes: u64,
    /// File name offered to the browser for the converted job
    pub download_filename: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            max_upload_bytes: 10 * 1024 * 1024,
            download_filename: "output.rd".to_string(),
        }
    }
}

impl ServerSettings {
    /// `host:port` bind address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub conversion: ConversionSettings,
    pub server: ServerSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config_dir>/ruidakit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("ruidakit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("No configuration directory on this platform".into())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        let path = match Self::default_path() {
            Ok(path) => path,
            Err(_) => return Ok(Self::default()),
        };
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e)))?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.conversion;
        if !(c.work_area_width_mm.is_finite() && c.work_area_width_mm > 0.0) {
            return Err(out_of_range("conversion.work_area_width_mm", c.work_area_width_mm));
        }
        if !(c.work_area_height_mm.is_finite() && c.work_area_height_mm > 0.0) {
            return Err(out_of_range("conversion.work_area_height_mm", c.work_area_height_mm));
        }
        if c.template_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingValue("conversion.template_path".to_string()));
        }

        if self.server.port == 0 {
            return Err(out_of_range("server.port", self.server.port));
        }
        if self.server.max_upload_bytes == 0 {
            return Err(out_of_range("server.max_upload_bytes", self.server.max_upload_bytes));
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::MissingValue("server.host".to_string()));
        }
        if self.server.download_filename.trim().is_empty() {
            return Err(ConfigError::MissingValue("server.download_filename".to_string()));
        }

        Ok(())
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
