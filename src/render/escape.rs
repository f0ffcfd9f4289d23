//! Color escape sequences for the ANSI and IRC targets.

use super::palette::PaletteEntry;

/// IRC color control character. Followed by a numeric color code, or
/// bare to reset colors.
pub const IRC_COLOR: char = '\u{3}';

/// Escape prefix selecting `entry` as the foreground color.
pub fn color(entry: &PaletteEntry, irc: bool) -> String {
    if irc {
        format!("{}{}", IRC_COLOR, entry.irc)
    } else {
        format!("\x1b[{}m", entry.ansi)
    }
}

/// Escape prefix selecting a background and foreground pair.
///
/// The IRC form is `\x03<fg>,<bg>`; the ANSI form stacks both SGR
/// parameters in one sequence.
pub fn color_pair(bg: &PaletteEntry, fg: &PaletteEntry, irc: bool) -> String {
    if irc {
        format!("{}{},{}", IRC_COLOR, fg.irc, bg.irc)
    } else {
        format!("\x1b[{};{}m", bg.ansi, fg.ansi)
    }
}

/// Reset sequence for the target protocol.
pub fn reset(irc: bool) -> &'static str {
    if irc {
        "\u{3}"
    } else {
        "\x1b[0m"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::palette::{BACKGROUND_PALETTE, PALETTE};

    #[test]
    fn test_ansi_color_escape() {
        // light red
        assert_eq!(color(&PALETTE[4], false), "\x1b[91m");
    }

    #[test]
    fn test_irc_color_escape() {
        assert_eq!(color(&PALETTE[4], true), "\u{3}4");
        assert_eq!(color(&PALETTE[12], true), "\u{3}12");
    }

    #[test]
    fn test_ansi_color_pair_background_first() {
        // blue background, white foreground
        let bg = &BACKGROUND_PALETTE[4];
        let fg = &PALETTE[0];
        assert_eq!(color_pair(bg, fg, false), "\x1b[44;97m");
    }

    #[test]
    fn test_irc_color_pair_foreground_first() {
        let bg = &BACKGROUND_PALETTE[4];
        let fg = &PALETTE[0];
        assert_eq!(color_pair(bg, fg, true), "\u{3}0,2");
    }

    #[test]
    fn test_reset_sequences() {
        assert_eq!(reset(true), "\u{3}");
        assert_eq!(reset(false), "\x1b[0m");
    }
}
