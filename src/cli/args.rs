//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

/// Parse and validate the luma cutoff (0-255).
fn parse_cutoff(s: &str) -> Result<u8, String> {
    s.parse::<u8>()
        .map_err(|_| format!("'{}' is not a valid cutoff; expected an integer from 0 to 255", s))
}

/// Parse and validate the size multiplier (> 0).
fn parse_size(s: &str) -> Result<f32, String> {
    let size: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !size.is_finite() || size <= 0.0 {
        return Err(format!("Size must be greater than 0, got {}", size));
    }
    Ok(size)
}

/// Render images as Unicode braille art for terminals and IRC
#[derive(Parser, Debug)]
#[command(name = "braillify")]
#[command(version, about = "Render images as Unicode braille art for terminals and IRC")]
#[command(after_help = "EXAMPLES:
    # Monochrome render to out.txt and stdout
    braillify photo.png

    # ANSI color at a smaller size
    braillify photo.png --color -s 0.8

    # IRC colors with a custom luma cutoff
    braillify logo.png --color --irc -c 64

    # Two-color background mode for flat-color artwork
    braillify logo.png --ext")]
pub struct Args {
    /// The image file to render
    pub file: PathBuf,

    /// Luma cutoff from 0 to 255; sub-pixels at or below it stay dark
    #[arg(short = 'c', value_parser = parse_cutoff)]
    pub cutoff: Option<u8>,

    /// Size modifier for the 90x40 output bounding box
    #[arg(short = 's', value_parser = parse_size)]
    pub size: Option<f32>,

    /// Output file
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Use color escapes
    #[arg(long)]
    pub color: bool,

    /// Disable color escapes (overrides --color and the config file)
    #[arg(long)]
    pub nocolor: bool,

    /// Don't resize the image
    #[arg(long)]
    pub noresize: bool,

    /// Use IRC color escapes instead of ANSI
    #[arg(long)]
    pub irc: bool,

    /// Invert the image colors
    #[arg(long)]
    pub invert: bool,

    /// Palette color name shown for fully transparent pixels
    #[arg(long)]
    pub background: Option<String>,

    /// Two-color mode: quantize each cell to a background/foreground pair
    #[arg(long)]
    pub ext: bool,

    /// Config file path (default: ~/.config/braillify/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["braillify", "image.png"]);
        assert_eq!(args.file, PathBuf::from("image.png"));
        assert!(args.cutoff.is_none());
        assert!(args.size.is_none());
        assert!(args.output.is_none());
        assert!(!args.color);
        assert!(!args.nocolor);
        assert!(!args.noresize);
        assert!(!args.irc);
        assert!(!args.invert);
        assert!(args.background.is_none());
        assert!(!args.ext);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_args_file_required() {
        assert!(Args::try_parse_from(["braillify"]).is_err());
    }

    #[test]
    fn test_args_cutoff() {
        let args = Args::parse_from(["braillify", "image.png", "-c", "64"]);
        assert_eq!(args.cutoff, Some(64));
    }

    #[test]
    fn test_args_cutoff_out_of_range() {
        assert!(Args::try_parse_from(["braillify", "image.png", "-c", "256"]).is_err());
        assert!(Args::try_parse_from(["braillify", "image.png", "-c", "-1"]).is_err());
        assert!(Args::try_parse_from(["braillify", "image.png", "-c", "abc"]).is_err());
    }

    #[test]
    fn test_args_cutoff_boundaries() {
        assert_eq!(
            Args::parse_from(["braillify", "image.png", "-c", "0"]).cutoff,
            Some(0)
        );
        assert_eq!(
            Args::parse_from(["braillify", "image.png", "-c", "255"]).cutoff,
            Some(255)
        );
    }

    #[test]
    fn test_args_size() {
        let args = Args::parse_from(["braillify", "image.png", "-s", "0.5"]);
        assert_eq!(args.size, Some(0.5));
    }

    #[test]
    fn test_args_size_rejects_nonpositive() {
        assert!(Args::try_parse_from(["braillify", "image.png", "-s", "0"]).is_err());
        assert!(Args::try_parse_from(["braillify", "image.png", "-s", "nan"]).is_err());
        assert!(Args::try_parse_from(["braillify", "image.png", "-s", "x"]).is_err());
    }

    #[test]
    fn test_args_output() {
        let args = Args::parse_from(["braillify", "image.png", "-o", "render.txt"]);
        assert_eq!(args.output, Some(PathBuf::from("render.txt")));

        let args = Args::parse_from(["braillify", "image.png", "--output", "render.txt"]);
        assert_eq!(args.output, Some(PathBuf::from("render.txt")));
    }

    #[test]
    fn test_args_flags() {
        let args = Args::parse_from([
            "braillify",
            "image.png",
            "--color",
            "--noresize",
            "--irc",
            "--invert",
            "--ext",
        ]);
        assert!(args.color);
        assert!(args.noresize);
        assert!(args.irc);
        assert!(args.invert);
        assert!(args.ext);
    }

    #[test]
    fn test_args_nocolor_and_color_can_coexist() {
        // Precedence is resolved during the merge in main, not by clap.
        let args = Args::parse_from(["braillify", "image.png", "--color", "--nocolor"]);
        assert!(args.color);
        assert!(args.nocolor);
    }

    #[test]
    fn test_args_background() {
        let args = Args::parse_from(["braillify", "image.png", "--background", "white"]);
        assert_eq!(args.background.as_deref(), Some("white"));
    }

    #[test]
    fn test_args_config_path() {
        let args = Args::parse_from(["braillify", "image.png", "--config", "/tmp/b.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/b.toml")));
    }

    // ==================== Value parser tests ====================

    #[test]
    fn test_parse_cutoff_valid() {
        assert_eq!(parse_cutoff("0").unwrap(), 0);
        assert_eq!(parse_cutoff("100").unwrap(), 100);
        assert_eq!(parse_cutoff("255").unwrap(), 255);
    }

    #[test]
    fn test_parse_cutoff_invalid() {
        assert!(parse_cutoff("256").is_err());
        assert!(parse_cutoff("").is_err());
        assert!(parse_cutoff("12.5").is_err());
    }

    #[test]
    fn test_parse_size_valid() {
        assert_eq!(parse_size("1.52").unwrap(), 1.52);
        assert_eq!(parse_size("0.1").unwrap(), 0.1);
        assert_eq!(parse_size("3").unwrap(), 3.0);
    }

    #[test]
    fn test_parse_size_invalid() {
        let err = parse_size("-1").unwrap_err();
        assert!(err.contains("greater than 0"));
        assert!(parse_size("inf").is_err());
        assert!(parse_size("").is_err());
    }
}
