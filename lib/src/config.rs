use crate::error::ConfigError;
use crate::palette::Palette;

/// Output flavour of a rendered banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line of glyphs per row
    #[default]
    Text,
    /// One positioned `<tspan>` per row
    Svg,
}

/// Placement of rows inside an SVG `<text>` element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgLayout {
    pub x: i32,           // shared x of every row, default 15
    pub y_start: i32,     // y of the first row, default 30
    pub line_height: i32, // y step between rows, default 20
}

impl Default for SvgLayout {
    fn default() -> Self {
        Self {
            x: 15,
            y_start: 30,
            line_height: 20,
        }
    }
}

/// Configuration for a banner conversion
#[derive(Debug, Clone)]
pub struct BannerConfig {
    /// Character grid, not pixels
    pub width: u32,              // default 50
    pub height: u32,             // default 30

    /// Glyphs, dark to light
    pub palette: Palette,        // default "@%#*+=-:. "
    pub invert: bool,            // default false

    /// Rendering
    pub format: OutputFormat,    // default text
    pub layout: SvgLayout,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            // Grid
            width: 50,
            height: 30,

            // Glyphs
            palette: Palette::default(),
            invert: false,

            // Rendering
            format: OutputFormat::Text,
            layout: SvgLayout::default(),
        }
    }
}

impl BannerConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Palette in the order quantization should use it
    pub fn effective_palette(&self) -> Palette {
        if self.invert {
            self.palette.reversed()
        } else {
            self.palette.clone()
        }
    }
}
