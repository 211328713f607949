//! Command-line interface definitions and command runners.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ruidakit_camtools::{
    decode_container, ContainerTemplate, DecodedContainer, NumericParsePolicy, RuidaConverter,
};
use ruidakit_core::units::parse_length_mm;
use ruidakit_core::{RoundingMode, WorkArea};
use ruidakit_settings::Config;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::server::{self, ServerState};

/// SVG to Ruida laser job converter
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file path (default: <config dir>/ruidakit/config.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Convert an SVG drawing into an .rd job file
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Decode and list the commands in an .rd job file
    #[command(visible_alias = "i")]
    Inspect {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Start the upload web service
    #[command(visible_alias = "s")]
    Serve {
        /// Interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Convert command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Input SVG file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output file (default: input with an .rd extension)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Template container supplying header and trailer
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub template: Option<PathBuf>,

    /// Work area as WIDTHxHEIGHT in millimeters (e.g. 600x400)
    #[arg(short, long, value_parser = parse_work_area)]
    pub work_area: Option<WorkArea>,

    /// Fail on malformed numbers instead of using 0
    #[arg(long)]
    pub strict_numbers: bool,

    /// Coordinate rounding: truncate or nearest
    #[arg(long)]
    pub rounding: Option<RoundingMode>,
}

impl ConvertArgs {
    /// Override config values with the flags that were given.
    pub fn apply(&self, config: &mut Config) {
        let conversion = &mut config.conversion;
        if let Some(template) = &self.template {
            conversion.template_path = template.clone();
        }
        if let Some(area) = self.work_area {
            conversion.work_area_width_mm = area.width_mm();
            conversion.work_area_height_mm = area.height_mm();
        }
        if self.strict_numbers {
            conversion.numeric_parse_policy = NumericParsePolicy::Fail;
        }
        if let Some(rounding) = self.rounding {
            conversion.rounding = rounding;
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("rd"))
    }
}

/// Parse `WIDTHxHEIGHT`, each side optionally suffixed with `mm`.
pub fn parse_work_area(input: &str) -> Result<WorkArea, String> {
    let (w, h) = input
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", input))?;

    let side = |s: &str| -> Result<f64, String> {
        let s = s.trim();
        if s.ends_with("mm") {
            parse_length_mm(s).map_err(|e| e.to_string())
        } else {
            s.parse::<f64>()
                .map_err(|e| format!("invalid length '{}': {}", s, e))
        }
    };

    WorkArea::new(side(w)?, side(h)?).map_err(|e| e.to_string())
}

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let mut config =
        Config::load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Convert(args) => {
            args.apply(&mut config);
            convert(&config, &args.input, &args.output_path())
        }
        Commands::Inspect { file } => {
            let bytes =
                std::fs::read(&file).with_context(|| format!("Failed to read {}", file.display()))?;
            let decoded = decode_container(&bytes)
                .with_context(|| format!("{} is not a readable job file", file.display()))?;
            print!("{}", format_inspection(&decoded));
            Ok(())
        }
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config)
        }
    }
}

/// Build a converter from validated configuration.
pub fn build_converter(config: &Config) -> Result<RuidaConverter> {
    config.validate().context("Invalid configuration")?;
    let options = config.conversion.to_options()?;
    let template = ContainerTemplate::load(&config.conversion.template_path)
        .context("Failed to load template container")?;
    Ok(RuidaConverter::new(template, options))
}

fn convert(config: &Config, input: &Path, output: &Path) -> Result<()> {
    let converter = build_converter(config)?;
    let svg = std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;

    let bytes = converter
        .convert_to_bytes(&svg)
        .with_context(|| format!("No output for {}", input.display()))?;

    std::fs::write(output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Wrote {} bytes to {}", bytes.len(), output.display());
    Ok(())
}

fn serve(config: Config) -> Result<()> {
    let converter = build_converter(&config)?;
    let server = server::bind(ServerState::new(converter, config.server))?;
    server.run()
}

/// Human-readable listing of a decoded container
pub fn format_inspection(decoded: &DecodedContainer) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "header:   {} bytes", decoded.header.len());
    let _ = writeln!(out, "commands: {}", decoded.commands.len());
    for (i, command) in decoded.commands.iter().enumerate() {
        let _ = writeln!(out, "{:>6}  {}", i, command);
    }
    let _ = writeln!(out, "trailer:  {}", hex(&decoded.trailer));
    out
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
