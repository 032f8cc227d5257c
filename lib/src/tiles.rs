//! Tile geometry
//!
//! Splits an image into a rows x cols grid of tiles, one output character per
//! tile. All sizes use ceiling division so the grid always covers the whole
//! image; the last column and row are clipped to the image edge and may be
//! narrower than the nominal tile.

use crate::config::{AsciiConfig, DisplayMode};
use crate::error::{ConvertError, Result};

/// Slack applied before rounding `w / scale` up, so that quotients which are
/// mathematically whole (43 / 0.43) do not round past the integer.
const CEIL_EPSILON: f64 = 1e-9;

/// A rectangular region of source pixels mapped to one output character
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Tile {
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Grid of non-overlapping tiles covering an image exactly
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    pub image_width: u32,
    pub image_height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub cols: u32,
    pub rows: u32,
}

impl TileGrid {
    /// Lay out tiles of the given nominal size over an image
    ///
    /// Tile sizes below 1 are raised to 1.
    pub fn new(image_width: u32, image_height: u32, tile_width: u32, tile_height: u32) -> Self {
        let tile_width = tile_width.max(1);
        let tile_height = tile_height.max(1);
        Self {
            image_width,
            image_height,
            tile_width,
            tile_height,
            cols: image_width.div_ceil(tile_width),
            rows: image_height.div_ceil(tile_height),
        }
    }

    /// Total number of tiles, `cols * rows`
    pub fn len(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The tile at a grid position, clipped to the image boundary
    pub fn tile(&self, col: u32, row: u32) -> Tile {
        debug_assert!(col < self.cols && row < self.rows);
        let x = col * self.tile_width;
        let y = row * self.tile_height;
        Tile {
            x,
            y,
            width: self.tile_width.min(self.image_width - x),
            height: self.tile_height.min(self.image_height - y),
        }
    }

    /// The tile at a row-major index
    pub fn tile_at(&self, index: usize) -> Tile {
        let cols = self.cols as usize;
        self.tile((index % cols) as u32, (index / cols) as u32)
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.len()).map(move |i| self.tile_at(i))
    }
}

/// Tile height for a tile width under the character aspect correction
///
/// h = ceil(w / scale), at least 1
pub fn tile_height_for(tile_width: u32, scale: f64) -> u32 {
    let h = (tile_width as f64 / scale - CEIL_EPSILON).ceil();
    (h as u32).max(1)
}

/// Resize target and tile size for one conversion
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Dimensions to resample the source to before tiling, if any
    pub resize_to: Option<(u32, u32)>,
    pub tile_width: u32,
    pub tile_height: u32,
}

impl Layout {
    /// Dimensions of the image that gets tiled
    pub fn working_dimensions(&self, source: (u32, u32)) -> (u32, u32) {
        self.resize_to.unwrap_or(source)
    }

    pub fn grid(&self, source: (u32, u32)) -> TileGrid {
        let (w, h) = self.working_dimensions(source);
        TileGrid::new(w, h, self.tile_width, self.tile_height)
    }
}

/// Scale `value` by `num / den`, rounded, at least 1
///
/// `None` when the result does not fit in a `u32`.
fn proportional(value: u32, num: u64, den: u64) -> Option<u32> {
    let scaled = (value as u64 * num + den / 2) / den.max(1);
    u32::try_from(scaled.max(1)).ok()
}

/// Resize target side, `count` tiles of `size` pixels
fn span(count: u32, size: u32, axis: &str) -> Result<u32> {
    count.checked_mul(size).ok_or_else(|| {
        ConvertError::InvalidDimensions(format!(
            "{count} tiles of {size} pixels overflows the resize {axis}"
        ))
    })
}

fn scaled_side(value: u32, num: u32, den: u32, axis: &str) -> Result<u32> {
    proportional(value, num as u64, den as u64).ok_or_else(|| {
        ConvertError::InvalidDimensions(format!("resized {axis} does not fit in 32 bits"))
    })
}

/// Work out resizing and tile size for a source image
///
/// Expects a validated config: modes that need a target height fall back to
/// the target width when it is missing. Fails on an empty source or when the
/// resize target does not fit in 32 bits.
pub fn plan(source: (u32, u32), config: &AsciiConfig) -> Result<Layout> {
    let (src_w, src_h) = source;
    if src_w == 0 || src_h == 0 {
        return Err(ConvertError::InvalidDimensions(format!(
            "source image must not be empty, got {src_w}x{src_h}"
        )));
    }
    let cols = config.width.max(1);
    let rows = config.height.unwrap_or(cols).max(1);

    let (resize_to, tile_width, tile_height) = match config.mode {
        DisplayMode::Ratio => {
            let w = src_w.div_ceil(cols);
            (None, w, tile_height_for(w, config.scale))
        }
        DisplayMode::ShrinkWidth => {
            let w = (src_w / cols).max(1);
            let h = tile_height_for(w, config.scale);
            let new_w = span(cols, w, "width")?;
            let new_h = scaled_side(src_h, new_w, src_w, "height")?;
            (Some((new_w, new_h)), w, h)
        }
        DisplayMode::ShrinkHeight => {
            let nominal_h = (src_h / rows).max(1);
            let w = ((nominal_h as f64 * config.scale).floor() as u32).max(1);
            let h = tile_height_for(w, config.scale);
            let new_h = span(rows, h, "height")?;
            let new_w = scaled_side(src_w, new_h, src_h, "width")?;
            (Some((new_w, new_h)), w, h)
        }
        DisplayMode::Fit => {
            let w = (src_w / cols).max(1);
            let h = tile_height_for(w, config.scale);
            (Some((span(cols, w, "width")?, span(rows, h, "height")?)), w, h)
        }
    };

    // Skip the resample when it would be a no-op
    let resize_to = resize_to.filter(|&dims| dims != (src_w, src_h));

    Ok(Layout {
        resize_to,
        tile_width,
        tile_height,
    })
}
