use ascii_tiles::{AsciiConfig, DisplayMode, RampKind};
use clap::Parser;
use std::path::PathBuf;

/// Convert an image to ASCII art for the terminal
#[derive(Parser, Debug)]
#[command(name = "ascii-tiles", version, about)]
pub struct Cli {
    /// Image to convert (any format the image crate decodes)
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Output width in characters
    #[arg(short, long, default_value_t = 80)]
    pub width: u32,

    /// Output height in characters (needed by shrink_h and fit)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Character cell aspect correction
    #[arg(short, long, default_value_t = 0.43)]
    pub scale: f64,

    /// Use the 70 character grayscale ramp instead of the 10 character one
    #[arg(short, long)]
    pub extended: bool,

    /// Emit 256-color escape sequences
    #[arg(short, long)]
    pub color: bool,

    /// Contrast adjustment, -255 to 255
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub contrast: i32,

    /// How to fit the image: ratio, shrink_w, shrink_h or fit
    #[arg(short, long, default_value = "ratio")]
    pub mode: DisplayMode,

    /// Swap dense and sparse glyphs (for light backgrounds)
    #[arg(short, long)]
    pub invert: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn config(&self) -> AsciiConfig {
        AsciiConfig {
            width: self.width,
            height: self.height,
            scale: self.scale,
            mode: self.mode,
            contrast: self.contrast,
            invert: self.invert,
            ramp: if self.extended {
                RampKind::Fine
            } else {
                RampKind::Coarse
            },
            color: self.color,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ascii-tiles", "cat.png"]).unwrap();
        let config = cli.config();
        assert_eq!(config.width, 80);
        assert_eq!(config.mode, DisplayMode::Ratio);
        assert_eq!(config.ramp, RampKind::Coarse);
        assert!(!config.color);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "ascii-tiles",
            "cat.png",
            "-w",
            "120",
            "-H",
            "40",
            "--mode",
            "fit",
            "--contrast",
            "-60",
            "--extended",
            "--color",
            "--invert",
            "-o",
            "out.txt",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!((config.width, config.height), (120, Some(40)));
        assert_eq!(config.mode, DisplayMode::Fit);
        assert_eq!(config.contrast, -60);
        assert_eq!(config.ramp, RampKind::Fine);
        assert!(config.color && config.invert);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["ascii-tiles", "cat.png", "--mode", "zoom"]).is_err());
    }
}
