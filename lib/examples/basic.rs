/// Basic example: Convert a simple test image to colored ASCII art
///
/// This creates a test image with some basic shapes and prints it to the terminal
use ascii_tiles::{AsciiConfig, PixelBuffer, RampKind, convert};
use image::{Rgb, RgbImage};

fn main() {
    println!("ASCII Tiles - Basic Example");
    println!("===========================\n");

    let width = 320;
    let height = 240;

    // Gray background with a white circle, black outline and a red diagonal
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 80.0;

    let img = RgbImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let dist = (dx * dx + dy * dy).sqrt();

        if x.abs_diff(y) < 4 {
            Rgb([255, 0, 0])
        } else if dist < radius {
            Rgb([255, 255, 255])
        } else if (dist - radius).abs() < 6.0 {
            Rgb([0, 0, 0])
        } else {
            Rgb([100, 100, 100])
        }
    });

    println!("Created test image: {}x{}", width, height);

    let config = AsciiConfig {
        width: 64,
        ramp: RampKind::Fine,
        color: true,
        contrast: 30,
        ..Default::default()
    };

    println!("Converting with config:");
    println!("  - Width: {}", config.width);
    println!("  - Mode: {}", config.mode);
    println!("  - Contrast: {}", config.contrast);
    println!();

    match convert(PixelBuffer::rgb(img), &config) {
        Ok(grid) => println!("{grid}"),
        Err(e) => eprintln!("conversion failed: {e}"),
    }
}
