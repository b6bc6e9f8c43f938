use std::path::PathBuf;

use ascii_banner::{BannerConfig, DEFAULT_PALETTE, OutputFormat, Palette, SvgLayout};
use clap::{Parser, ValueEnum};

/// Convert an image to ASCII art for a text or SVG banner.
#[derive(Parser, Debug)]
#[command(name = "ascii-banner", version, about, long_about = None)]
pub struct Cli {
    /// Path to the image file.
    pub image_path: PathBuf,

    /// Width in characters.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Height in characters.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Characters for brightness levels, dark to light.
    #[arg(long, default_value = DEFAULT_PALETTE)]
    pub chars: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// X position of every row in SVG output.
    #[arg(long, default_value_t = 15, allow_negative_numbers = true)]
    pub x: i32,

    /// Y position of the first row in SVG output.
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    pub y_start: i32,

    /// Distance between rows in SVG output.
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    pub line_height: i32,

    /// Reverse the palette (light glyphs for dark pixels).
    #[arg(long, default_value_t = false)]
    pub invert: bool,

    /// Log level: off, error, warn, info, debug, trace. Logs go to stderr.
    #[arg(long, default_value = "warn")]
    pub log_level: log::LevelFilter,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Svg,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Svg => OutputFormat::Svg,
        }
    }
}

impl Cli {
    /// Build the conversion config from the parsed arguments.
    ///
    /// # Errors
    /// Returns an error if `--chars` is empty.
    pub fn to_config(&self) -> anyhow::Result<BannerConfig> {
        Ok(BannerConfig {
            width: self.width,
            height: self.height,
            palette: Palette::new(&self.chars)?,
            invert: self.invert,
            format: self.format.into(),
            layout: SvgLayout {
                x: self.x,
                y_start: self.y_start,
                line_height: self.line_height,
            },
        })
    }
}
