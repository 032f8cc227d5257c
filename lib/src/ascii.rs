use crate::color::{Color, paint};
use crate::lut::CharacterRamp;
use crate::pixels::PixelBuffer;
use crate::tiles::{Tile, TileGrid};
use rayon::prelude::*;
use std::fmt;

/// Average luminance and color of one tile
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileStats {
    /// Mean gray value [0, 255]
    pub luminance: u8,
    /// Mean of each RGB channel
    pub color: Color,
}

/// ITU-R BT.601 luma of one RGB pixel
///
/// Formula: (299*R + 587*G + 114*B) / 1000
/// Used for every color image so the gray scale is the same across runs.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

/// Average a tile's pixels
///
/// Gray pixels average directly and report the gray value on all three color
/// channels. RGB pixels average their luma for luminance and each channel
/// separately for color.
pub fn tile_stats(buffer: &PixelBuffer, tile: Tile) -> TileStats {
    let count = tile.area().max(1);

    match buffer {
        PixelBuffer::Gray(img) => {
            let mut sum = 0u64;
            for y in tile.y..tile.y + tile.height {
                for x in tile.x..tile.x + tile.width {
                    sum += img.get_pixel(x, y)[0] as u64;
                }
            }
            let avg = (sum / count) as u8;
            TileStats {
                luminance: avg,
                color: Color::new(avg, avg, avg),
            }
        }
        PixelBuffer::Rgb(img) => {
            let mut lum = 0u64;
            let mut rgb = [0u64; 3];
            for y in tile.y..tile.y + tile.height {
                for x in tile.x..tile.x + tile.width {
                    let [r, g, b] = img.get_pixel(x, y).0;
                    lum += luma(r, g, b) as u64;
                    rgb[0] += r as u64;
                    rgb[1] += g as u64;
                    rgb[2] += b as u64;
                }
            }
            TileStats {
                luminance: (lum / count) as u8,
                color: Color::new(
                    (rgb[0] / count) as u8,
                    (rgb[1] / count) as u8,
                    (rgb[2] / count) as u8,
                ),
            }
        }
    }
}

/// Compute statistics for every tile, in row-major order
///
/// Tiles are independent, so the work is spread over the rayon pool; the
/// result order matches the grid regardless of scheduling.
pub fn sample_tiles(buffer: &PixelBuffer, grid: &TileGrid) -> Vec<TileStats> {
    assert_eq!(
        buffer.dimensions(),
        (grid.image_width, grid.image_height),
        "Tile grid does not match the buffer"
    );

    (0..grid.len())
        .into_par_iter()
        .map(|tile_idx| tile_stats(buffer, grid.tile_at(tile_idx)))
        .collect()
}

/// One output character with an optional 256-color palette index
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: Option<u8>,
}

impl Cell {
    /// Write the cell as plain text or as a foreground colored glyph
    pub fn render(&self) -> String {
        match self.color {
            Some(index) => paint(self.ch, index),
            None => self.ch.to_string(),
        }
    }
}

/// Select the output cell for a tile
pub fn select_cell(stats: &TileStats, ramp: &CharacterRamp, color: bool, invert: bool) -> Cell {
    Cell {
        ch: ramp.glyph_inverted(stats.luminance, invert),
        color: color.then(|| stats.color.quantize()),
    }
}

/// Finished rows of character cells
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct OutputGrid {
    rows: Vec<Vec<Cell>>,
}

impl OutputGrid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of text rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of characters per row
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// Each row rendered to a string, escapes included when colored
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Cell::render).collect())
            .collect()
    }

    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.rows
    }
}

impl fmt::Display for OutputGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Map tile statistics onto characters for the whole grid
///
/// # Arguments
/// * `stats` - One entry per tile, row-major
/// * `grid` - The tile grid the statistics were sampled from
/// * `ramp` - Characters to choose from
/// * `color` - Whether to attach palette indices
/// * `invert` - Whether to mirror luminance before choosing
pub fn select_ascii_chars(
    stats: &[TileStats],
    grid: &TileGrid,
    ramp: &CharacterRamp,
    color: bool,
    invert: bool,
) -> OutputGrid {
    assert_eq!(stats.len(), grid.len());

    let rows: Vec<Vec<Cell>> = stats
        .par_chunks(grid.cols.max(1) as usize)
        .map(|row| {
            row.iter()
                .map(|s| select_cell(s, ramp, color, invert))
                .collect::<Vec<Cell>>()
        })
        .collect();

    OutputGrid::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(128, 128, 128), 128);
        assert_eq!(luma(255, 0, 0), 76);
    }

    #[test]
    fn test_tile_stats_gray() {
        let img = GrayImage::from_fn(4, 4, |x, _| Luma([if x < 2 { 0 } else { 200 }]));
        let buf = PixelBuffer::gray(img);
        let stats = tile_stats(&buf, Tile { x: 0, y: 0, width: 4, height: 4 });
        assert_eq!(stats.luminance, 100);
        assert_eq!(stats.color, Color::new(100, 100, 100));
    }

    #[test]
    fn test_tile_stats_rgb() {
        let img = RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgb([255, 0, 0])
            } else {
                Rgb([0, 0, 255])
            }
        });
        let buf = PixelBuffer::rgb(img);
        let stats = tile_stats(&buf, Tile { x: 0, y: 0, width: 2, height: 1 });
        assert_eq!(stats.color, Color::new(127, 0, 127));
        // (76 + 29) / 2
        assert_eq!(stats.luminance, 52);
    }

    #[test]
    fn test_tile_stats_only_reads_tile() {
        let img = GrayImage::from_fn(4, 4, |x, y| Luma([if x >= 2 && y >= 2 { 255 } else { 0 }]));
        let buf = PixelBuffer::gray(img);
        let corner = tile_stats(&buf, Tile { x: 2, y: 2, width: 2, height: 2 });
        let origin = tile_stats(&buf, Tile { x: 0, y: 0, width: 2, height: 2 });
        assert_eq!(corner.luminance, 255);
        assert_eq!(origin.luminance, 0);
    }

    #[test]
    fn test_sample_tiles_order() {
        // Left half dark, right half bright
        let img = GrayImage::from_fn(16, 8, |x, _| Luma([if x < 8 { 0 } else { 255 }]));
        let buf = PixelBuffer::gray(img);
        let grid = TileGrid::new(16, 8, 8, 4);
        let stats = sample_tiles(&buf, &grid);

        assert_eq!(stats.len(), 4);
        let lums: Vec<u8> = stats.iter().map(|s| s.luminance).collect();
        assert_eq!(lums, vec![0, 255, 0, 255]);
    }

    #[test]
    #[should_panic(expected = "Tile grid does not match the buffer")]
    fn test_sample_tiles_mismatched_grid() {
        let buf = PixelBuffer::gray(GrayImage::new(8, 8));
        sample_tiles(&buf, &TileGrid::new(16, 8, 8, 8));
    }

    #[test]
    fn test_select_cell() {
        let ramp = CharacterRamp::coarse();
        let dark = TileStats {
            luminance: 0,
            color: Color::new(255, 0, 0),
        };
        assert_eq!(select_cell(&dark, &ramp, false, false), Cell { ch: '@', color: None });
        assert_eq!(
            select_cell(&dark, &ramp, true, false),
            Cell { ch: '@', color: Some(196) }
        );
        assert_eq!(select_cell(&dark, &ramp, false, true).ch, ' ');
    }

    #[test]
    fn test_select_ascii_chars_shape() {
        let grid = TileGrid::new(30, 20, 10, 10);
        let stats = vec![
            TileStats {
                luminance: 255,
                color: Color::default(),
            };
            grid.len()
        ];
        let out = select_ascii_chars(&stats, &grid, &CharacterRamp::coarse(), false, false);

        assert_eq!(out.height(), 2);
        assert_eq!(out.width(), 3);
        assert_eq!(out.lines(), vec!["   ".to_string(), "   ".to_string()]);

        let rows = out.into_rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().flatten().all(|c| c.ch == ' ' && c.color.is_none()));
    }

    #[test]
    fn test_output_grid_display() {
        let out = OutputGrid::new(vec![
            vec![Cell { ch: '@', color: None }, Cell { ch: '.', color: None }],
            vec![Cell { ch: '#', color: Some(16) }, Cell { ch: ' ', color: None }],
        ]);
        assert_eq!(out.to_string(), "@.\n\x1b[38;5;16m#\x1b[0m ");
    }
}
