//! ASCII Banner - image to ASCII art for text and SVG banners
//!
//! Decodes an image, resamples it to a character grid, maps each luminance
//! sample to a glyph from a dark-to-light palette and renders the rows as
//! plain text or as positioned SVG `<tspan>` elements.
//!
//! # Example
//! ```no_run
//! use ascii_banner::{BannerConfig, OutputFormat, convert, render};
//!
//! let config = BannerConfig {
//!     format: OutputFormat::Svg,
//!     ..Default::default()
//! };
//! let art = convert("avatar.png", &config).unwrap();
//! println!("{}", render(&art, &config));
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod loader;
pub mod palette;
pub mod processor;
pub mod render;

// Re-export main types for convenience
pub use ascii::{AsciiArt, quantize};
pub use config::{BannerConfig, OutputFormat, SvgLayout};
pub use error::{ConfigError, Error, LoadError};
pub use loader::{FileDecoder, ImageDecoder, LuminanceGrid, load, load_with};
pub use palette::{DEFAULT_PALETTE, Palette};
pub use processor::{convert, convert_with, render};
pub use render::{escape_markup, render_svg, render_text};
