//! RGB colors and 256-color terminal palette quantization.

use crate::error::{ConvertError, Result};
use std::fmt;

/// Channel thresholds of the 6x6x6 cube in the xterm 256-color palette
pub const CUBE_THRESHOLDS: [u8; 5] = [0x2f, 0x73, 0x9b, 0xc3, 0xeb];

/// First palette index of the color cube; 0-15 are the system colors
pub const CUBE_OFFSET: u8 = 16;

/// Last palette index of the color cube; 232-255 are the gray ramp
pub const CUBE_LAST: u8 = 231;

const RESET: &str = "\x1b[0m";

/// A 24-bit color whose channels never leave [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

#[inline]
fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from arbitrary integers, clamping each channel
    pub fn from_channels(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Parse `#rrggbb`, `rrggbb` or the short `#rgb` form
    pub fn from_hex(hex: &str) -> Result<Self> {
        let h = hex.trim().trim_start_matches('#');
        if !h.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConvertError::InvalidColor(hex.to_string()));
        }
        let byte = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ConvertError::InvalidColor(hex.to_string()))
        };
        match h.len() {
            6 => Ok(Self::new(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?)),
            3 => {
                // #abc is #aabbcc
                let r = byte(&h[..1])?;
                let g = byte(&h[1..2])?;
                let b = byte(&h[2..])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(ConvertError::InvalidColor(hex.to_string())),
        }
    }

    pub fn red(&self) -> u8 {
        self.r
    }

    pub fn green(&self) -> u8 {
        self.g
    }

    pub fn blue(&self) -> u8 {
        self.b
    }

    pub fn set_red(&mut self, v: i32) {
        self.r = clamp_channel(v);
    }

    pub fn set_green(&mut self, v: i32) {
        self.g = clamp_channel(v);
    }

    pub fn set_blue(&mut self, v: i32) {
        self.b = clamp_channel(v);
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Index of this color in the 256-color palette, always within [16, 231]
    pub fn quantize(&self) -> u8 {
        cube_level(self.r) * 36 + cube_level(self.g) * 6 + cube_level(self.b) + CUBE_OFFSET
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Cube level (0-5) of one channel
///
/// Counts thresholds strictly below the value, so a value sitting exactly on
/// a threshold keeps the lower level.
#[inline]
pub fn cube_level(v: u8) -> u8 {
    let mut level = 0;
    while (level as usize) < CUBE_THRESHOLDS.len() && CUBE_THRESHOLDS[level as usize] < v {
        level += 1;
    }
    level
}

/// Wrap a glyph in a 256-color foreground escape followed by a reset
pub fn paint(glyph: char, index: u8) -> String {
    format!("\x1b[38;5;{index}m{glyph}{RESET}")
}
