use crate::ascii::{OutputGrid, sample_tiles, select_ascii_chars};
use crate::config::AsciiConfig;
use crate::contrast::adjust_contrast;
use crate::error::{ConvertError, Result};
use crate::pixels::PixelBuffer;
use crate::tiles::plan;

/// Converts an image into rows of text characters
///
/// Pipeline:
/// 1. Validate the configuration and the source dimensions
/// 2. Adjust contrast in place through a 256 entry lookup table
/// 3. Resize once if the display mode asks for it (fails only if the
///    target size overflows)
/// 4. Lay the tile grid over the working image
/// 5. Average luminance and color per tile
/// 6. Pick a ramp character (and palette index) for each tile
///
/// # Arguments
/// * `buffer` - Decoded image, consumed by the conversion
/// * `config` - Output geometry and rendering options
///
/// # Returns
/// The finished character grid, or the validation error that stopped it
pub fn convert(mut buffer: PixelBuffer, config: &AsciiConfig) -> Result<OutputGrid> {
    config.validate()?;
    let source = buffer.dimensions();
    if source.0 == 0 || source.1 == 0 {
        return Err(ConvertError::InvalidDimensions(format!(
            "source image must not be empty, got {}x{}",
            source.0, source.1
        )));
    }
    log::debug!(
        "loaded {}x{} {} image",
        source.0,
        source.1,
        if buffer.is_color() { "rgb" } else { "gray" }
    );

    // Step 2: Contrast
    if adjust_contrast(&mut buffer, config.contrast)? {
        log::debug!("contrast adjusted by {}", config.contrast);
    }

    // Step 3: Resize
    let layout = plan(source, config)?;
    let working = match layout.resize_to {
        Some((width, height)) => {
            log::debug!(
                "resizing {}x{} -> {}x{} for mode {}",
                source.0,
                source.1,
                width,
                height,
                config.mode
            );
            buffer.resized(width, height, config.resize_filter)
        }
        None => buffer,
    };

    // Step 4: Tile geometry
    let grid = layout.grid(working.dimensions());
    log::debug!(
        "tiling into {}x{} cells of {}x{} pixels",
        grid.cols,
        grid.rows,
        grid.tile_width,
        grid.tile_height
    );

    // Step 5: Per-tile statistics
    let stats = sample_tiles(&working, &grid);

    // Step 6: Character selection
    let ramp = config.ramp.ramp();
    let output = select_ascii_chars(&stats, &grid, &ramp, config.color, config.invert);
    log::debug!("rendered {} rows of {} cells", output.height(), output.width());

    Ok(output)
}

/// Same as [`convert`] but returns the rendered text lines directly
pub fn convert_to_lines(buffer: PixelBuffer, config: &AsciiConfig) -> Result<Vec<String>> {
    convert(buffer, config).map(|grid| grid.lines())
}
