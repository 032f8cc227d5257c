//! Character ramps
//!
//! Both ramps run from the densest glyph to the sparsest, so on a dark
//! terminal background a luminance of 0 lands on the heaviest character.

/// Paul Bourke's 70 level grayscale ramp
pub const FINE_CHARS: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// 10 level ramp
pub const COARSE_CHARS: [char; 10] = [
    '@', // 0: densest
    '%', // 1
    '#', // 2
    '*', // 3
    '+', // 4
    '=', // 5
    '-', // 6
    ':', // 7
    '.', // 8
    ' ', // 9: sparsest
];

/// An ordered, immutable sequence of glyphs chosen once per conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRamp {
    chars: Vec<char>,
}

impl CharacterRamp {
    /// The 70 glyph ramp
    pub fn fine() -> Self {
        Self {
            chars: FINE_CHARS.chars().collect(),
        }
    }

    /// The 10 glyph ramp
    pub fn coarse() -> Self {
        Self {
            chars: COARSE_CHARS.to_vec(),
        }
    }

    /// Number of glyphs in the ramp
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Get the glyph for an average luminance in [0, 255]
    ///
    /// index = floor(luminance * (len - 1) / 255), clamped to the ramp
    pub fn glyph(&self, luminance: u8) -> char {
        let last = self.chars.len() - 1;
        let index = (luminance as usize * last) / 255;
        self.chars[index.min(last)]
    }

    /// Same as [`glyph`](Self::glyph) but with the luminance mirrored first
    pub fn glyph_inverted(&self, luminance: u8, invert: bool) -> char {
        if invert {
            self.glyph(255 - luminance)
        } else {
            self.glyph(luminance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_lengths() {
        assert_eq!(CharacterRamp::fine().len(), 70);
        assert_eq!(CharacterRamp::coarse().len(), 10);
    }

    #[test]
    fn test_glyph_darkest() {
        assert_eq!(CharacterRamp::coarse().glyph(0), '@');
        assert_eq!(CharacterRamp::fine().glyph(0), '$');
    }

    #[test]
    fn test_glyph_brightest() {
        assert_eq!(CharacterRamp::coarse().glyph(255), ' ');
        assert_eq!(CharacterRamp::fine().glyph(255), ' ');
    }

    #[test]
    fn test_glyph_mid() {
        // 128 * 9 / 255 = 4
        assert_eq!(CharacterRamp::coarse().glyph(128), '+');
        // 128 * 69 / 255 = 34
        let fine = CharacterRamp::fine();
        assert_eq!(fine.glyph(128), fine.chars()[34]);
    }

    #[test]
    fn test_glyph_monotonic() {
        let ramp = CharacterRamp::fine();
        let mut prev = 0;
        for lum in 0..=255u8 {
            let ch = ramp.glyph(lum);
            let idx = ramp.chars().iter().position(|&c| c == ch).unwrap();
            assert!(idx >= prev, "ramp went backwards at luminance {lum}");
            prev = idx;
        }
    }

    #[test]
    fn test_glyph_inverted() {
        let ramp = CharacterRamp::coarse();
        assert_eq!(ramp.glyph_inverted(0, true), ' ');
        assert_eq!(ramp.glyph_inverted(255, true), '@');
        assert_eq!(ramp.glyph_inverted(0, false), '@');
    }
}
