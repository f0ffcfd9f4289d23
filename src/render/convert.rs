//! The pixel-to-glyph conversion core.
//!
//! Three stages run per output cell: sample up to 8 sub-pixels, decide
//! per sub-pixel whether its braille dot is lit (luma threshold), then
//! pick the cell's display color and emit the glyph with any escape
//! prefix. Rows advance by 4 source pixels, columns by 2.

use image::RgbaImage;

use super::cell::{glyph, BLANK_GLYPH, DOT_OFFSETS};
use super::cluster::{ColorCluster, FrequencyCluster};
use super::escape;
use super::options::RenderOptions;
use super::palette::{self, Rgb, BACKGROUND_PALETTE, BLACK_CODE, PALETTE};
use crate::source::{self, PixelGrid};

/// Nominal output bounding box at size 1.0, in pixels.
pub const BOX_WIDTH: u32 = 90;
pub const BOX_HEIGHT: u32 = 40;

/// Compute the resize target for a source image.
///
/// Fits the source inside `floor(90*size) x floor(40*size)` preserving
/// aspect ratio. The width-fit candidate is tried first; when its height
/// overflows the box, the height-fit candidate is used instead. Returns
/// `None` for degenerate inputs: a zero source dimension, a bounding box
/// that floors to zero, or a fit that collapses to zero.
pub fn fit_dimensions(src_width: u32, src_height: u32, size: f32) -> Option<(u32, u32)> {
    let box_w = (BOX_WIDTH as f32 * size) as u32;
    let box_h = (BOX_HEIGHT as f32 * size) as u32;
    if src_width == 0 || src_height == 0 || box_w == 0 || box_h == 0 {
        return None;
    }

    let fit_h = (src_height as f64 / (src_width as f64 / box_w as f64)).round() as u32;
    let (width, height) = if fit_h > box_h {
        let fit_w = (src_width as f64 / (src_height as f64 / box_h as f64)).round() as u32;
        (fit_w, box_h)
    } else {
        (box_w, fit_h)
    };

    if width == 0 || height == 0 {
        return None;
    }
    Some((width, height))
}

/// Render a decoded image to braille lines, applying the resize policy.
///
/// This is the whole pipeline: fit, resize, convert. An empty vector
/// means there was nothing to render, not an error.
pub fn render(img: &RgbaImage, opts: &RenderOptions) -> Vec<String> {
    if opts.no_resize {
        return convert(img, opts);
    }
    match fit_dimensions(img.width(), img.height(), opts.size) {
        Some((width, height)) => {
            log::debug!(
                "resizing {}x{} to {}x{}",
                img.width(),
                img.height(),
                width,
                height
            );
            convert(&source::resize(img, width, height), opts)
        }
        None => Vec::new(),
    }
}

/// Convert pixels to braille lines at the grid's native resolution.
pub fn convert<G: PixelGrid>(grid: &G, opts: &RenderOptions) -> Vec<String> {
    convert_with(grid, opts, &FrequencyCluster)
}

/// Convert with a caller-provided color clusterer for extended mode.
pub fn convert_with<G, C>(grid: &G, opts: &RenderOptions, clusterer: &C) -> Vec<String>
where
    G: PixelGrid,
    C: ColorCluster,
{
    let (width, height) = grid.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(height.div_ceil(4) as usize);

    for row in (0..height).step_by(4) {
        let mut line = String::new();
        // Last emitted protocol code; escapes repeat only on change.
        let mut last_code: Option<u8> = None;

        for col in (0..width).step_by(2) {
            let cell = sample_cell(grid, opts, col, row);

            if opts.extended {
                let ranked = clusterer.cluster(&cell.samples, 2);
                if let Some(&(dominant, _)) = ranked.first() {
                    // A flat cell reuses its one dominant color for both
                    // the background and the foreground.
                    let runner_up = ranked.get(1).map_or(dominant, |&(c, _)| c);
                    let bg = palette::nearest(&BACKGROUND_PALETTE, dominant);
                    let fg = palette::nearest(&PALETTE, runner_up);
                    line.push_str(&escape::color_pair(bg, fg, opts.irc));
                }
                line.push(glyph(cell.mask));
                continue;
            }

            match (opts.color, cell.average()) {
                (true, Some(avg)) => {
                    let entry = palette::nearest(&PALETTE, avg);
                    if entry.irc == BLACK_CODE || last_code == Some(entry.irc) {
                        // Black cells and repeats skip the escape; only a
                        // change of color closes the run with a reset.
                        if last_code.is_some() && last_code != Some(entry.irc) {
                            line.push_str(escape::reset(opts.irc));
                        }
                        line.push(glyph(cell.mask));
                    } else {
                        line.push_str(&escape::color(entry, opts.irc));
                        line.push(glyph(cell.mask));
                    }
                    last_code = Some(entry.irc);
                }
                _ => {
                    // No color requested, or nothing lit to average.
                    line.push(if cell.mask == 0 { BLANK_GLYPH } else { glyph(cell.mask) });
                }
            }
        }

        lines.push(line);
    }

    lines
}

/// One sampled 2x4 block.
struct Cell {
    mask: u8,
    sum: [u32; 3],
    lit: u32,
    samples: Vec<Rgb>,
}

impl Cell {
    /// Mean color of the lit sub-pixels, if any are lit.
    fn average(&self) -> Option<Rgb> {
        if self.lit == 0 {
            return None;
        }
        Some(Rgb {
            r: (self.sum[0] / self.lit) as u8,
            g: (self.sum[1] / self.lit) as u8,
            b: (self.sum[2] / self.lit) as u8,
        })
    }
}

fn sample_cell<G: PixelGrid>(grid: &G, opts: &RenderOptions, col: u32, row: u32) -> Cell {
    let mut cell = Cell {
        mask: 0,
        sum: [0; 3],
        lit: 0,
        samples: Vec::with_capacity(if opts.extended { DOT_OFFSETS.len() } else { 0 }),
    };

    for (bit, &(dx, dy)) in DOT_OFFSETS.iter().enumerate() {
        let rgb = resolve_pixel(grid, opts, col + dx, row + dy);
        if opts.extended {
            cell.samples.push(rgb);
        }

        // ITU-R BT.709 perceptual luma.
        let luma = 0.2126 * rgb.r as f32 + 0.7152 * rgb.g as f32 + 0.0722 * rgb.b as f32;
        if luma > opts.cutoff as f32 {
            cell.mask |= 1 << bit;
            cell.sum[0] += rgb.r as u32;
            cell.sum[1] += rgb.g as u32;
            cell.sum[2] += rgb.b as u32;
            cell.lit += 1;
        }
    }

    cell
}

/// Read one sub-pixel, applying the bounds, transparency, and inversion
/// rules. Out-of-bounds reads are opaque black.
fn resolve_pixel<G: PixelGrid>(grid: &G, opts: &RenderOptions, x: u32, y: u32) -> Rgb {
    let (width, height) = grid.dimensions();
    if x >= width || y >= height {
        return Rgb::BLACK;
    }

    let [r, g, b, a] = grid.pixel(x, y);
    if opts.invert && a > 0 {
        Rgb::new(255 - r, 255 - g, 255 - b)
    } else if a == 0 {
        opts.alpha_fill
    } else {
        Rgb::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Resize policy ====================

    #[test]
    fn test_fit_square_source_is_height_constrained() {
        // 100x100 -> width-fit (90, 90) overflows the 40-row box, so the
        // height-fit candidate (40, 40) wins.
        assert_eq!(fit_dimensions(100, 100, 1.0), Some((40, 40)));
    }

    #[test]
    fn test_fit_wide_source_keeps_full_width() {
        // 300x100 -> width-fit: (90, round(100 / (300/90)) = 30) fits.
        assert_eq!(fit_dimensions(300, 100, 1.0), Some((90, 30)));
    }

    #[test]
    fn test_fit_falls_back_to_height_fit() {
        // 200x100 -> width-fit (90, 45) overflows the 40 box height;
        // height-fit gives (80, 40).
        assert_eq!(fit_dimensions(200, 100, 1.0), Some((80, 40)));
    }

    #[test]
    fn test_fit_box_scales_with_size() {
        // size 2.0 -> box 180x80; 200x100 width-fit (180, 90) overflows,
        // height-fit (160, 80).
        assert_eq!(fit_dimensions(200, 100, 2.0), Some((160, 80)));
        // size floors: 0.01 -> box 0x0.
        assert_eq!(fit_dimensions(200, 100, 0.01), None);
    }

    #[test]
    fn test_fit_zero_source_is_degenerate() {
        assert_eq!(fit_dimensions(0, 100, 1.0), None);
        assert_eq!(fit_dimensions(100, 0, 1.0), None);
    }

    #[test]
    fn test_fit_extreme_aspect_collapses_to_none() {
        // 10000x1 -> width-fit height rounds to 0.
        assert_eq!(fit_dimensions(10000, 1, 1.0), None);
    }
}
