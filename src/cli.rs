use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::constants::{DEFAULT_FACE_INDEX, DEFAULT_FONT_SIZE};
use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "hb-outline")]
#[command(version)]
#[command(about = "Dump HarfBuzz glyph outlines for shaped text", long_about = None)]
#[command(after_help = "\
CONFIG:
    Defaults for --size, --index and --features are read from
    $XDG_CONFIG_HOME/hb-outline/config.toml when present. Flags given on
    the command line take precedence.")]
pub struct Cli {
    /// Font file (TrueType, OpenType or collection)
    pub font: PathBuf,

    /// Text to shape
    pub text: String,

    /// Font size; outline coordinates are in 1/64 of this unit
    #[arg(short, long)]
    pub size: Option<f32>,

    /// Face index inside a font collection
    #[arg(short, long)]
    pub index: Option<u32>,

    /// OpenType features to enable, comma separated (e.g. liga,ss01)
    #[arg(short, long, value_delimiter = ',')]
    pub features: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Commands)]
    pub format: OutputFormat,
}

/// Command line merged over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub font: PathBuf,
    pub text: String,
    pub size: f32,
    pub index: u32,
    pub features: Vec<String>,
    pub format: OutputFormat,
}

impl Cli {
    pub fn resolve(self, config: &Config) -> Settings {
        let features = if self.features.is_empty() {
            config.shaping.features.clone()
        } else {
            self.features
        };
        Settings {
            font: self.font,
            text: self.text,
            size: self.size.or(config.font.size).unwrap_or(DEFAULT_FONT_SIZE),
            index: self
                .index
                .or(config.font.index)
                .unwrap_or(DEFAULT_FACE_INDEX),
            features,
            format: self.format,
        }
    }
}
