//! Image-to-braille conversion pipeline.
//!
//! The converter maps every 2x4 pixel block of the (possibly resized)
//! source to one braille glyph (U+2800..U+28FF), thresholding each
//! sub-pixel against a luma cutoff and optionally prefixing cells with
//! ANSI or IRC color escapes:
//!
//! 1. **Resize** - fit inside a `90*size x 40*size` bounding box
//! 2. **Sample** - 8 sub-pixels per cell in braille dot order
//! 3. **Decide** - luma threshold lights individual dots
//! 4. **Colorize** - average + nearest palette entry, or a two-color
//!    background/foreground pair in extended mode

mod cell;
mod cluster;
mod convert;
pub mod escape;
mod options;
pub mod palette;

pub use cell::{glyph, BLANK_GLYPH, BRAILLE_BASE, DOT_OFFSETS};
pub use cluster::{ColorCluster, FrequencyCluster};
pub use convert::{convert, convert_with, fit_dimensions, render, BOX_HEIGHT, BOX_WIDTH};
pub use options::RenderOptions;
pub use palette::{nearest, PaletteEntry, Rgb, BACKGROUND_PALETTE, PALETTE};
