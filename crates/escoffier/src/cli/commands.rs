//! CLI structure.

use clap::{Parser, Subcommand, ValueEnum};
use escoffier_core::{Cuisine, DEFAULT_TEMPERATURE, ExportFormat, MenuStyle};
use std::path::PathBuf;
use std::str::FromStr;

/// LLM-driven restaurant branding generator.
#[derive(Debug, Parser)]
#[command(name = "escoffier", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a restaurant concept for a cuisine
    Generate {
        /// Cuisine to generate for (see `escoffier cuisines`)
        #[arg(long, default_value = "Mexican", value_parser = parse_cuisine)]
        cuisine: Cuisine,

        /// Sampling temperature in [0.0, 1.2]
        #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
        temperature: f32,

        /// On-screen list style: bullets, numbered, or plain
        #[arg(long, default_value = "bullets", value_parser = parse_style)]
        style: MenuStyle,

        /// Export format: text or markdown
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: ExportFormat,

        /// API key; overrides OPENAI_API_KEY and the settings file
        #[arg(long)]
        api_key: Option<String>,

        /// Output mode for the generated result
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        output: OutputFormat,

        /// Write the export document, to PATH or to a name derived from
        /// the restaurant name
        #[arg(long, num_args = 0..=1, value_name = "PATH")]
        out: Option<Option<PathBuf>>,
    },
    /// List supported cuisines
    Cuisines,
}

/// Output mode for the generate command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Readable sections for the terminal
    Human,
    /// The full result as JSON
    Json,
}

fn parse_cuisine(s: &str) -> Result<Cuisine, String> {
    Cuisine::from_str(s).map_err(|_| format!("unknown cuisine '{s}'; run `escoffier cuisines`"))
}

fn parse_style(s: &str) -> Result<MenuStyle, String> {
    MenuStyle::from_str(s).map_err(|_| format!("unknown style '{s}' (bullets, numbered, plain)"))
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    ExportFormat::from_str(s).map_err(|_| format!("unknown format '{s}' (text, markdown)"))
}
