use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn an image file into a luminance grid.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bytes were read but are not a decodable image.
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The requested character grid has no cells.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Invalid conversion settings, caught before any file is touched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("palette must contain at least one character")]
    EmptyPalette,

    #[error("grid width and height must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
}

/// Any error the conversion pipeline can report.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),
}
