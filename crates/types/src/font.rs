use crate::Color;
use serde::{Deserialize, Serialize};

/// The built-in PDF fonts used by the generator. All three are part of the
/// standard 14 set, so no font program is embedded in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    TimesRoman,
}

impl Font {
    pub const ALL: [Font; 3] = [Font::Helvetica, Font::HelveticaBold, Font::TimesRoman];

    /// The PostScript name written into the font dictionary.
    pub fn postscript_name(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::TimesRoman => "Times-Roman",
        }
    }

    /// The internal resource name used in content streams (`/F1 12 Tf`).
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::TimesRoman => "F3",
        }
    }
}

/// The full text state for one drawing command: face, size and fill color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn new(font: Font, size: f32, color: Color) -> Self {
        Self { font, size, color }
    }
}
