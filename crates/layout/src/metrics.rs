//! Advance-width metrics for the built-in fonts.
//!
//! Widths come from the Adobe font metrics for the standard 14 fonts, in
//! 1/1000 em units, covering the printable ASCII range `0x20..=0x7E`. The
//! generated content is ASCII apart from the `·` separator, which falls back
//! to a per-font default width.

use playbook_types::Font;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

fn widths(font: Font) -> (&'static [u16; 95], u16) {
    match font {
        Font::Helvetica => (&HELVETICA, 556),
        Font::HelveticaBold => (&HELVETICA_BOLD, 556),
        Font::TimesRoman => (&TIMES_ROMAN, 500),
    }
}

/// Advance width of one character at the given size, in points.
pub fn char_width(font: Font, size: f32, c: char) -> f32 {
    let (table, default) = widths(font);
    let units = match c as u32 {
        0x20..=0x7E => table[c as usize - 0x20],
        _ => default,
    };
    units as f32 * size / 1000.0
}

/// Advance width of a whole string at the given size, in points.
pub fn text_width(font: Font, size: f32, text: &str) -> f32 {
    text.chars().map(|c| char_width(font, size, c)).sum()
}

/// Vertical advance for one line of text at the given size.
pub fn line_height(size: f32) -> f32 {
    size * 1.15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_widths() {
        // "Hi" in Helvetica 10pt: H = 722, i = 222.
        let w = text_width(Font::Helvetica, 10.0, "Hi");
        assert!((w - 9.44).abs() < 1e-4);
    }

    #[test]
    fn bold_is_at_least_as_wide_as_regular() {
        let text = "Implementation Checklist";
        let regular = text_width(Font::Helvetica, 12.0, text);
        let bold = text_width(Font::HelveticaBold, 12.0, text);
        assert!(bold >= regular);
    }

    #[test]
    fn non_ascii_uses_fallback_width() {
        assert_eq!(char_width(Font::TimesRoman, 10.0, '·'), 5.0);
    }
}
