use std::path::Path;

use image::{DynamicImage, GrayImage, ImageReader, Luma, RgbaImage, imageops};
use log::debug;

use crate::error::LoadError;

/// Decodes an image file into pixels
///
/// The quantizer and renderers only ever see a [`LuminanceGrid`], so any
/// codec can sit behind this trait.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<DynamicImage, LoadError>;
}

/// Decoder backed by the `image` crate, format guessed from file contents
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDecoder;

impl ImageDecoder for FileDecoder {
    fn decode(&self, path: &Path) -> Result<DynamicImage, LoadError> {
        let io_err = |source: std::io::Error| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        ImageReader::open(path)
            .map_err(io_err)?
            .with_guessed_format()
            .map_err(io_err)?
            .decode()
            .map_err(|source| LoadError::Decode {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Luminance samples at character-grid resolution, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceGrid(GrayImage);

impl LuminanceGrid {
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// Sample at (x, y), 0 = darkest, 255 = lightest
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        self.0.get_pixel(x, y)[0]
    }

    /// Rows top to bottom, each `width` samples long
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> {
        self.0.as_raw().chunks_exact((self.0.width() as usize).max(1))
    }

    pub fn into_inner(self) -> GrayImage {
        self.0
    }
}

impl From<GrayImage> for LuminanceGrid {
    fn from(img: GrayImage) -> Self {
        Self(img)
    }
}

/// Load an image file as a `width`×`height` luminance grid
///
/// # Arguments
/// * `path` - Image file, any format the `image` crate can sniff
/// * `width` - Grid columns (characters, not pixels)
/// * `height` - Grid rows
pub fn load(path: impl AsRef<Path>, width: u32, height: u32) -> Result<LuminanceGrid, LoadError> {
    load_with(&FileDecoder, path, width, height)
}

/// Same as [`load`] with a caller-supplied decoder
pub fn load_with<D: ImageDecoder + ?Sized>(
    decoder: &D,
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
) -> Result<LuminanceGrid, LoadError> {
    if width == 0 || height == 0 {
        return Err(LoadError::InvalidDimensions { width, height });
    }

    let path = path.as_ref();
    let decoded = decoder.decode(path)?;
    debug!(
        "decoded {} ({}x{}), resampling to {}x{}",
        path.display(),
        decoded.width(),
        decoded.height(),
        width,
        height
    );

    let lum = calculate_luminance(&decoded.to_rgba8());
    Ok(LuminanceGrid(resize_to_grid(&lum, width, height)))
}

/// Calculate luminance from an RGBA image with ITU-R 601 weights
///
/// Formula: L = 0.299*R + 0.587*G + 0.114*B, in 16-bit fixed point so a gray
/// pixel keeps its exact value. Alpha is ignored.
pub fn calculate_luminance(img: &RgbaImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        let [r, g, b, _] = pixel.0;
        let weighted = 19595 * r as u32 + 38470 * g as u32 + 7471 * b as u32 + 0x8000;
        output.put_pixel(x, y, Luma([(weighted >> 16) as u8]));
    }

    output
}

/// Resample to exactly `width`×`height` with Lanczos3
///
/// Lanczos keeps a photo readable when it shrinks to a few dozen cells.
fn resize_to_grid(lum: &GrayImage, width: u32, height: u32) -> GrayImage {
    if lum.dimensions() == (width, height) {
        return lum.clone();
    }
    imageops::resize(lum, width, height, imageops::FilterType::Lanczos3)
}
