use crate::error::{ConvertError, Result};
use crate::lut::CharacterRamp;
use image::imageops::FilterType;
use std::fmt;
use std::str::FromStr;

/// How the source image is mapped onto the requested character dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Keep the source aspect ratio, no resize; height is derived
    #[default]
    Ratio,
    /// Resize so the output is exactly the requested width
    ShrinkWidth,
    /// Resize so the output is exactly the requested height
    ShrinkHeight,
    /// Resize to exactly the requested width and height
    Fit,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 4] = [
        DisplayMode::Ratio,
        DisplayMode::ShrinkWidth,
        DisplayMode::ShrinkHeight,
        DisplayMode::Fit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Ratio => "ratio",
            DisplayMode::ShrinkWidth => "shrink_w",
            DisplayMode::ShrinkHeight => "shrink_h",
            DisplayMode::Fit => "fit",
        }
    }

    /// Whether this mode needs a target height to work with
    pub fn needs_height(self) -> bool {
        matches!(self, DisplayMode::ShrinkHeight | DisplayMode::Fit)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "ratio" => Ok(DisplayMode::Ratio),
            "shrink_w" => Ok(DisplayMode::ShrinkWidth),
            "shrink_h" => Ok(DisplayMode::ShrinkHeight),
            "fit" => Ok(DisplayMode::Fit),
            _ => Err(ConvertError::UnknownMode(s.to_string())),
        }
    }
}

/// Which character ramp to draw tiles with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampKind {
    /// 10 glyphs
    #[default]
    Coarse,
    /// 70 glyphs, the extended grayscale ramp
    Fine,
}

impl RampKind {
    pub fn ramp(self) -> CharacterRamp {
        match self {
            RampKind::Coarse => CharacterRamp::coarse(),
            RampKind::Fine => CharacterRamp::fine(),
        }
    }
}

/// Configuration for image to text conversion
#[derive(Debug, Clone)]
pub struct AsciiConfig {
    /// Output geometry
    pub width: u32,              // target columns, default 80
    pub height: Option<u32>,     // target rows, required by shrink_h and fit
    pub scale: f64,              // character cell aspect correction, default 0.43
    pub mode: DisplayMode,       // default ratio
    pub resize_filter: FilterType, // default Lanczos3

    /// Tone
    pub contrast: i32,           // -255..=255, default 0 (untouched)
    pub invert: bool,            // default false

    /// Rendering
    pub ramp: RampKind,          // default coarse
    pub color: bool,             // 256-color escapes, default false
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            // Output geometry
            width: 80,
            height: None,
            scale: 0.43,
            mode: DisplayMode::Ratio,
            resize_filter: FilterType::Lanczos3,

            // Tone
            contrast: 0,
            invert: false,

            // Rendering
            ramp: RampKind::Coarse,
            color: false,
        }
    }
}

impl AsciiConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(-255..=255).contains(&self.contrast) {
            return Err(ConvertError::InvalidContrast(self.contrast));
        }
        if self.width == 0 {
            return Err(ConvertError::InvalidDimensions(
                "target width must be greater than 0".to_string(),
            ));
        }
        if self.height == Some(0) {
            return Err(ConvertError::InvalidDimensions(
                "target height must be greater than 0".to_string(),
            ));
        }
        if self.mode.needs_height() && self.height.is_none() {
            return Err(ConvertError::InvalidDimensions(format!(
                "display mode {} requires a target height",
                self.mode
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConvertError::InvalidDimensions(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}
