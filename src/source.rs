//! Pixel access and image file glue.
//!
//! The converter only needs per-pixel RGBA reads, so it goes through the
//! small [`PixelGrid`] trait instead of depending on `image` types
//! directly. Decoding and resizing stay here at the edge.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Read-only pixel access for the converter.
pub trait PixelGrid {
    /// Image dimensions as (width, height).
    fn dimensions(&self) -> (u32, u32);

    /// RGBA channels at (x, y). Callers stay in bounds; sources with
    /// fewer than four channels pad the missing ones with zeros.
    fn pixel(&self, x: u32, y: u32) -> [u8; 4];
}

impl PixelGrid for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel(x, y).0
    }
}

/// Decode an image file into RGBA pixels. Decoding errors are the
/// caller's to surface; there is no recovery at this layer.
pub fn load(path: &Path) -> Result<RgbaImage, image::ImageError> {
    Ok(image::open(path)?.to_rgba8())
}

/// Resize to exact target dimensions with bilinear filtering.
pub fn resize(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    imageops::resize(img, width, height, FilterType::Triangle)
}
