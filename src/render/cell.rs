//! Braille glyph construction.
//!
//! Each output character covers a 2x4 pixel block. The bit weights for
//! the 8 dots follow braille dot numbering, not raster order:
//!
//! ```text
//! (0,0)=0x01   (1,0)=0x08
//! (0,1)=0x02   (1,1)=0x10
//! (0,2)=0x04   (1,2)=0x20
//! (0,3)=0x40   (1,3)=0x80
//! ```

/// Base of the Unicode braille block (U+2800, blank pattern).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Glyph used for an empty cell when no color escape marks the spot.
/// The lone dot-3 pattern keeps column alignment visible where U+2800
/// can collapse into whitespace in some fonts.
pub const BLANK_GLYPH: char = '\u{2804}';

/// Sub-pixel offsets (dx, dy) in braille dot order. Bit `1 << i`
/// corresponds to `DOT_OFFSETS[i]`; the two bottom-row dots come last.
pub const DOT_OFFSETS: [(u32, u32); 8] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (0, 3),
    (1, 3),
];

/// Convert a dot bitmask to its braille character.
pub fn glyph(mask: u8) -> char {
    char::from_u32(BRAILLE_BASE + mask as u32).unwrap_or('\u{2800}')
}
