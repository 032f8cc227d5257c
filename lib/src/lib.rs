//! ASCII Tiles - image to text converter for terminals
//!
//! Splits a decoded image into tiles, maps each tile's average luminance to
//! a character ramp and, optionally, its average color to the xterm 256-color
//! palette.
//!
//! # Example
//! ```no_run
//! use ascii_tiles::{AsciiConfig, PixelBuffer, convert};
//!
//! let img = image::open("photo.jpg").unwrap();
//! let config = AsciiConfig {
//!     width: 100,
//!     color: true,
//!     ..Default::default()
//! };
//! let grid = convert(PixelBuffer::from_dynamic(img), &config).unwrap();
//! println!("{grid}");
//! ```

pub mod ascii;
pub mod color;
pub mod config;
pub mod contrast;
pub mod error;
pub mod lut;
pub mod pixels;
pub mod processor;
pub mod tiles;

// Re-export main types for convenience
pub use ascii::{Cell, OutputGrid};
pub use color::Color;
pub use config::{AsciiConfig, DisplayMode, RampKind};
pub use contrast::ContrastTable;
pub use error::ConvertError;
pub use lut::CharacterRamp;
pub use pixels::PixelBuffer;
pub use processor::{convert, convert_to_lines};
