//! Conversion options.

use super::palette::Rgb;

/// Options for one conversion run. Built once from CLI/config input and
/// passed by reference; nothing here mutates during rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Emit color escapes.
    pub color: bool,
    /// Use IRC `\x03` escapes instead of ANSI CSI sequences.
    pub irc: bool,
    /// Skip resizing and sample the image at native resolution.
    pub no_resize: bool,
    /// Luma threshold; sub-pixels at or below it stay dark.
    pub cutoff: u8,
    /// Multiplier for the 90x40 output bounding box.
    pub size: f32,
    /// Invert sampled colors.
    pub invert: bool,
    /// Substitute color for fully transparent pixels.
    pub alpha_fill: Rgb,
    /// Two-color background+foreground mode via color clustering.
    pub extended: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            color: false,
            irc: false,
            no_resize: false,
            cutoff: 100,
            size: 1.52,
            invert: false,
            alpha_fill: Rgb::BLACK,
            extended: false,
        }
    }
}

impl RenderOptions {
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_cutoff(mut self, cutoff: u8) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let opts = RenderOptions::default();
        assert!(!opts.color);
        assert!(!opts.irc);
        assert!(!opts.extended);
        assert_eq!(opts.cutoff, 100);
        assert_eq!(opts.size, 1.52);
        assert_eq!(opts.alpha_fill, Rgb::BLACK);
    }

    #[test]
    fn test_builder_chain() {
        let opts = RenderOptions::default()
            .with_color(true)
            .with_cutoff(64)
            .with_size(0.5)
            .with_invert(true);
        assert!(opts.color);
        assert_eq!(opts.cutoff, 64);
        assert_eq!(opts.size, 0.5);
        assert!(opts.invert);
    }
}
