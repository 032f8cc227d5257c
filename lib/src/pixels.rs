use crate::error::{ConvertError, Result};
use image::{DynamicImage, GrayImage, RgbImage, imageops};

/// Decoded image data the converter works on
///
/// Shape is fixed at creation. Contents are rewritten in place by the
/// contrast pass.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelBuffer {
    Gray(GrayImage),
    Rgb(RgbImage),
}

impl PixelBuffer {
    pub fn gray(img: GrayImage) -> Self {
        PixelBuffer::Gray(img)
    }

    pub fn rgb(img: RgbImage) -> Self {
        PixelBuffer::Rgb(img)
    }

    /// Convert a decoded image, dropping alpha
    ///
    /// Formats without color become `Gray`, everything else `Rgb`.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        if img.color().has_color() {
            PixelBuffer::Rgb(img.to_rgb8())
        } else {
            PixelBuffer::Gray(img.to_luma8())
        }
    }

    /// Wrap raw interleaved bytes with 1 (gray), 3 (RGB) or 4 (RGBA) channels
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConvertError::InvalidDimensions(format!(
                "pixel buffer must not be empty, got {width}x{height}"
            )));
        }
        if !matches!(channels, 1 | 3 | 4) {
            return Err(ConvertError::UnsupportedPixelFormat(format!(
                "{channels} channels per pixel"
            )));
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(ConvertError::InvalidDimensions(format!(
                "{width}x{height} with {channels} channels needs {expected} bytes, got {}",
                data.len()
            )));
        }

        let mismatch = || ConvertError::InvalidDimensions(format!("{width}x{height}"));
        match channels {
            1 => GrayImage::from_raw(width, height, data)
                .map(PixelBuffer::Gray)
                .ok_or_else(mismatch),
            3 => RgbImage::from_raw(width, height, data)
                .map(PixelBuffer::Rgb)
                .ok_or_else(mismatch),
            _ => {
                let rgb: Vec<u8> = data
                    .chunks_exact(4)
                    .flat_map(|px| [px[0], px[1], px[2]])
                    .collect();
                RgbImage::from_raw(width, height, rgb)
                    .map(PixelBuffer::Rgb)
                    .ok_or_else(mismatch)
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    pub fn height(&self) -> u32 {
        self.dimensions().1
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            PixelBuffer::Gray(img) => img.dimensions(),
            PixelBuffer::Rgb(img) => img.dimensions(),
        }
    }

    /// Number of bytes per pixel (1 or 3)
    pub fn channels(&self) -> u8 {
        match self {
            PixelBuffer::Gray(_) => 1,
            PixelBuffer::Rgb(_) => 3,
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(self, PixelBuffer::Rgb(_))
    }

    /// Every channel byte of every pixel, for in-place remapping
    pub fn samples_mut(&mut self) -> &mut [u8] {
        match self {
            PixelBuffer::Gray(img) => &mut **img,
            PixelBuffer::Rgb(img) => &mut **img,
        }
    }

    /// Resample to new dimensions, keeping the pixel format
    pub fn resized(&self, width: u32, height: u32, filter: imageops::FilterType) -> Self {
        match self {
            PixelBuffer::Gray(img) => {
                PixelBuffer::Gray(imageops::resize(img, width, height, filter))
            }
            PixelBuffer::Rgb(img) => PixelBuffer::Rgb(imageops::resize(img, width, height, filter)),
        }
    }
}
