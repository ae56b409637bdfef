//! Error types

use thiserror::Error;

/// Result type alias for fallible operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside of rasterization
///
/// Scanning a shape never fails; these cover region combinators and
///   image input and output
#[derive(Error, Debug)]
pub enum Error {
    /// A region combinator was given no regions
    #[error("at least one region is required")]
    EmptyRegionList,

    /// Pixel data does not match the image dimensions
    #[error("buffer of {len} bytes does not hold a {width}x{height} image")]
    SizeMismatch { len: usize, width: usize, height: usize },

    /// Image encoding or decoding failed
    #[cfg(feature = "png")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// File system error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
