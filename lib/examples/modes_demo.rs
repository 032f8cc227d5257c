use ascii_tiles::{AsciiConfig, DisplayMode, PixelBuffer, convert};
use image::{GrayImage, Luma};

fn main() {
    println!("ASCII Tiles - Display Mode Demo");
    println!("===============================\n");

    // A diagonal gradient with awkward dimensions
    let (width, height) = (317, 211);
    let img = GrayImage::from_fn(width, height, |x, y| Luma([((x + y) % 256) as u8]));

    for mode in DisplayMode::ALL {
        let config = AsciiConfig {
            width: 40,
            height: Some(12),
            mode,
            ..Default::default()
        };

        match convert(PixelBuffer::gray(img.clone()), &config) {
            Ok(grid) => {
                println!("{mode}: {}x{} characters", grid.width(), grid.height());
                println!("{grid}\n");
            }
            Err(e) => println!("{mode}: {e}\n"),
        }
    }

    println!("ratio keeps the source aspect, shrink_w/shrink_h pin one side, fit pins both.");
}
