use std::path::Path;

use log::trace;

use crate::ascii::{AsciiArt, quantize};
use crate::config::{BannerConfig, OutputFormat};
use crate::error::Error;
use crate::loader::{FileDecoder, ImageDecoder, load_with};
use crate::render::{render_svg, render_text};

/// Converts an image file to ASCII art
///
/// This runs the whole pipeline:
/// 1. Validate the configuration
/// 2. Decode the file and extract luminance
/// 3. Resample to the character grid (Lanczos3)
/// 4. Quantize each sample to a palette glyph
///
/// # Arguments
/// * `path` - Image file to convert
/// * `config` - Grid size, palette and output settings
///
/// # Returns
/// The quantized rows, ready for [`render`]
pub fn convert(path: impl AsRef<Path>, config: &BannerConfig) -> Result<AsciiArt, Error> {
    convert_with(&FileDecoder, path, config)
}

/// Same as [`convert`] with a caller-supplied decoder
pub fn convert_with<D: ImageDecoder + ?Sized>(
    decoder: &D,
    path: impl AsRef<Path>,
    config: &BannerConfig,
) -> Result<AsciiArt, Error> {
    config.validate()?;

    let grid = load_with(decoder, path, config.width, config.height)?;
    trace!("quantizing {}x{} grid", grid.width(), grid.height());

    Ok(quantize(&grid, &config.effective_palette()))
}

/// Formats ASCII art according to `config.format`
pub fn render(art: &AsciiArt, config: &BannerConfig) -> String {
    match config.format {
        OutputFormat::Text => render_text(art),
        OutputFormat::Svg => render_svg(art, &config.layout),
    }
}
