use crate::loader::LuminanceGrid;
use crate::palette::Palette;
use rayon::prelude::*;

/// Quantized banner: one string per grid row, one glyph per sample
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AsciiArt {
    rows: Vec<String>,
}

impl AsciiArt {
    /// Wrap rows that were produced elsewhere
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Glyphs per row (rows are all the same width when quantized from a grid)
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.chars().count())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }
}

/// Map every luminance sample to a palette glyph
///
/// # Arguments
/// * `grid` - Luminance samples at character resolution
/// * `palette` - Glyphs, darkest first
///
/// # Returns
/// One row string per grid row, in grid order
pub fn quantize(grid: &LuminanceGrid, palette: &Palette) -> AsciiArt {
    let rows: Vec<&[u8]> = grid.rows().collect();

    // Parallelize row quantization; collect keeps row order
    let rows = rows
        .into_par_iter()
        .map(|samples| quantize_row(samples, palette))
        .collect();

    AsciiArt { rows }
}

/// Quantize one row of samples
pub fn quantize_row(samples: &[u8], palette: &Palette) -> String {
    samples.iter().map(|&v| palette.glyph(v)).collect()
}
