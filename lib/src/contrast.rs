use crate::error::{ConvertError, Result};
use crate::pixels::PixelBuffer;

/// Lowest accepted contrast value
pub const MIN_CONTRAST: i32 = -255;
/// Highest accepted contrast value
pub const MAX_CONTRAST: i32 = 255;

/// Contrast correction factor
///
/// Formula: 259 * (c + 255) / (255 * (259 - c))
/// c = 0 gives exactly 1.0, c = -255 gives 0.0.
pub fn contrast_factor(contrast: i32) -> f64 {
    let c = contrast as f64;
    (259.0 * (c + 255.0)) / (255.0 * (259.0 - c))
}

/// Precomputed 256 entry intensity remapping for one contrast value
///
/// The table is built once per conversion and every channel of every pixel
/// goes through the same lookup. It is a one-shot transform: applying it
/// twice is not the same as applying it once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContrastTable {
    contrast: i32,
    table: [u8; 256],
}

impl ContrastTable {
    /// Build the table for a contrast value in [-255, 255]
    pub fn new(contrast: i32) -> Result<Self> {
        if !(MIN_CONTRAST..=MAX_CONTRAST).contains(&contrast) {
            return Err(ConvertError::InvalidContrast(contrast));
        }

        let factor = contrast_factor(contrast);
        let mut table = [0u8; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            let adjusted = factor * (i as f64 - 128.0) + 128.0;
            *slot = adjusted.clamp(0.0, 255.0) as u8;
        }

        Ok(Self { contrast, table })
    }

    pub fn contrast(&self) -> i32 {
        self.contrast
    }

    /// Adjusted value for one raw intensity
    #[inline]
    pub fn map(&self, intensity: u8) -> u8 {
        self.table[intensity as usize]
    }

    /// Rewrite every channel of every pixel in place
    pub fn apply(&self, buffer: &mut PixelBuffer) {
        for sample in buffer.samples_mut() {
            *sample = self.table[*sample as usize];
        }
    }
}

/// Apply a contrast adjustment to the buffer in place
///
/// A contrast of 0 leaves the buffer untouched without building a table.
/// Returns whether any pixel was rewritten.
pub fn adjust_contrast(buffer: &mut PixelBuffer, contrast: i32) -> Result<bool> {
    if contrast == 0 {
        return Ok(false);
    }
    let table = ContrastTable::new(contrast)?;
    table.apply(buffer);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn test_factor_identity_at_zero() {
        assert_eq!(contrast_factor(0), 1.0);
    }

    #[test]
    fn test_table_identity_at_zero() {
        let table = ContrastTable::new(0).unwrap();
        for i in 0..=255u8 {
            assert_eq!(table.map(i), i);
        }
    }

    #[test]
    fn test_table_minimum_flattens_to_mid_gray() {
        let table = ContrastTable::new(MIN_CONTRAST).unwrap();
        for i in 0..=255u8 {
            assert_eq!(table.map(i), 128);
        }
    }

    #[test]
    fn test_table_maximum_thresholds() {
        let table = ContrastTable::new(MAX_CONTRAST).unwrap();
        assert_eq!(table.map(0), 0);
        assert_eq!(table.map(127), 0);
        assert_eq!(table.map(128), 128);
        assert_eq!(table.map(129), 255);
        assert_eq!(table.map(255), 255);
    }

    #[test]
    fn test_table_positive_contrast_spreads_values() {
        let table = ContrastTable::new(100).unwrap();
        assert_eq!(table.contrast(), 100);
        assert!(table.map(64) < 64);
        assert!(table.map(192) > 192);
        assert_eq!(table.map(128), 128);
    }

    #[test]
    fn test_table_out_of_range() {
        assert_eq!(ContrastTable::new(256), Err(ConvertError::InvalidContrast(256)));
        assert_eq!(ContrastTable::new(-300), Err(ConvertError::InvalidContrast(-300)));
    }

    #[test]
    fn test_not_a_fixed_point() {
        let table = ContrastTable::new(100).unwrap();
        let once = table.map(100);
        let twice = table.map(once);
        assert_ne!(once, twice);
    }

    #[test]
    fn test_adjust_contrast_zero_is_noop() {
        let img = GrayImage::from_fn(16, 16, |x, y| Luma([(x * 16 + y) as u8]));
        let mut buf = PixelBuffer::gray(img.clone());
        assert!(!adjust_contrast(&mut buf, 0).unwrap());
        assert_eq!(buf, PixelBuffer::gray(img));
    }

    #[test]
    fn test_adjust_contrast_all_rgb_channels() {
        let mut buf = PixelBuffer::rgb(RgbImage::from_pixel(4, 4, Rgb([0, 100, 255])));
        assert!(adjust_contrast(&mut buf, MIN_CONTRAST).unwrap());
        match buf {
            PixelBuffer::Rgb(img) => {
                for px in img.pixels() {
                    assert_eq!(*px, Rgb([128, 128, 128]));
                }
            }
            PixelBuffer::Gray(_) => panic!("pixel format changed"),
        }
    }

    #[test]
    fn test_adjust_contrast_rejects_out_of_range() {
        let mut buf = PixelBuffer::gray(GrayImage::new(2, 2));
        assert!(adjust_contrast(&mut buf, 1000).is_err());
    }
}
