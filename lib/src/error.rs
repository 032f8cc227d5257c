//! Error type shared by every fallible operation in the crate.

/// Errors raised while validating input for an image conversion
///
/// All of these are detected before any pixel is touched; once a conversion
/// starts it always produces a complete grid.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("contrast must be between -255 and 255, got {0}")]
    InvalidContrast(i32),

    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("unsupported pixel format: {0}")]
    UnsupportedPixelFormat(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("unknown display mode `{0}` (expected ratio, shrink_w, shrink_h or fit)")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
