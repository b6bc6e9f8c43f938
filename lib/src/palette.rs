//! Brightness palettes
//!
//! A palette is an ordered run of glyphs from darkest (index 0) to lightest
//! (last index). Quantization picks one glyph per luminance sample.

use crate::error::ConfigError;

/// Default palette: dense glyphs for dark samples, space for the background.
pub const DEFAULT_PALETTE: &str = "@%#*+=-:. ";

/// An ordered, non-empty set of glyphs with a precomputed luminance lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<char>,
    lut: [char; 256],
}

impl Palette {
    /// Build a palette from a dark-to-light string.
    ///
    /// # Errors
    /// Returns [`ConfigError::EmptyPalette`] if `glyphs` is empty.
    pub fn new(glyphs: &str) -> Result<Self, ConfigError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self::from_glyphs(glyphs))
    }

    /// Caller guarantees `glyphs` is non-empty.
    fn from_glyphs(glyphs: Vec<char>) -> Self {
        let mut lut = [glyphs[0]; 256];
        for (value, slot) in lut.iter_mut().enumerate() {
            *slot = glyphs[glyph_index(value as u8, glyphs.len())];
        }
        Self { glyphs, lut }
    }

    /// The same glyphs in light-to-dark order, for light ink on a dark background.
    pub fn reversed(&self) -> Self {
        Self::from_glyphs(self.glyphs.iter().rev().copied().collect())
    }

    /// Glyph for a luminance sample.
    #[inline]
    pub fn glyph(&self, luminance: u8) -> char {
        self.lut[luminance as usize]
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_glyphs(DEFAULT_PALETTE.chars().collect())
    }
}

/// Palette index for a luminance sample: `floor(value / 255 * (len - 1))`.
///
/// Computed in integers so it is exact; `value <= 255` keeps the result
/// within `0..len`.
#[inline]
pub fn glyph_index(value: u8, len: usize) -> usize {
    debug_assert!(len > 0, "palette length must be positive");
    value as usize * (len - 1) / 255
}
