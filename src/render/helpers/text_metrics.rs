//! Text measurement for layout decisions
//!
//! Two measurers share the `TextMeasure` trait: one for the bundled TrueType
//! card font (shaped with rustybuzz) and one for PDF builtin Helvetica,
//! which is the fallback when the bundled font cannot be loaded.

use printpdf::BuiltinFont;
use rustybuzz::{Face, UnicodeBuffer};

use crate::config::defaults::PT_TO_MM;

/// Trait for text measurement operations
pub trait TextMeasure {
    /// Measure text width in mm at a given font size
    fn measure_text(&self, text: &str, font_size: f32) -> f32;

    /// Get descender depth in mm (positive value)
    fn descender_mm(&self, font_size: f32) -> f32;
}

/// Font metrics for layout calculations
#[derive(Debug, Clone)]
pub struct FontMetrics {
    /// Units per em (for scaling)
    pub units_per_em: i32,
    /// Descender depth in font units (typically negative)
    pub descender: i16,
}

impl FontMetrics {
    /// Create metrics from a font face
    pub fn from_face(face: &Face) -> Self {
        Self {
            units_per_em: face.units_per_em(),
            descender: face.descender(),
        }
    }

    /// Convert font units to mm at a given font size
    pub fn to_mm(&self, font_units: i16, font_size: f32) -> f32 {
        (font_units as f32 / self.units_per_em as f32) * font_size * PT_TO_MM
    }
}

// =============================================================================
// TrueType measurer
// =============================================================================

/// Measurer for a TrueType font loaded at runtime
pub struct TtfMeasurer {
    data: Vec<u8>,
    metrics: FontMetrics,
}

impl TtfMeasurer {
    /// Create a measurer from font bytes; `None` if the bytes are not a usable font
    pub fn new(data: Vec<u8>) -> Option<Self> {
        let metrics = FontMetrics::from_face(&Face::from_slice(&data, 0)?);
        Some(Self { data, metrics })
    }

    /// Measure the shaped width of text in points
    pub fn measure_width_pt(&self, text: &str, font_size: f32) -> f32 {
        // Bytes were validated in new()
        let Some(face) = Face::from_slice(&self.data, 0) else {
            return 0.0;
        };

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        let output = rustybuzz::shape(&face, &[], buffer);

        let total_advance: i32 = output
            .glyph_positions()
            .iter()
            .map(|pos| pos.x_advance)
            .sum();

        total_advance as f32 * font_size / self.metrics.units_per_em as f32
    }
}

impl TextMeasure for TtfMeasurer {
    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        self.measure_width_pt(text, font_size) * PT_TO_MM
    }

    fn descender_mm(&self, font_size: f32) -> f32 {
        self.metrics.to_mm(-self.metrics.descender, font_size)
    }
}

// =============================================================================
// Builtin PDF Font Metrics
// =============================================================================
//
// PDF's Standard 14 fonts have well-defined metrics from Adobe's AFM files.
// Character widths are in 1000 units per em.

/// Text measurer for PDF builtin Helvetica
pub struct BuiltinFontMeasurer {
    font: BuiltinFont,
}

impl BuiltinFontMeasurer {
    pub fn new(font: BuiltinFont) -> Self {
        Self { font }
    }

    /// Get character width in 1000 units per em
    fn char_width(&self, c: char) -> u16 {
        // ASCII printable range only - builtin fonts are Win-1252
        if !c.is_ascii() {
            return 556; // Typical lowercase width for accented letters
        }

        let table = match self.font {
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
                &HELVETICA_BOLD_WIDTHS
            }
            _ => &HELVETICA_WIDTHS,
        };
        table.get(c as usize).copied().unwrap_or(278)
    }

    /// Measure text width in points
    pub fn measure_width_pt(&self, text: &str, font_size: f32) -> f32 {
        let total_width: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        (total_width as f32 / 1000.0) * font_size
    }
}

impl TextMeasure for BuiltinFontMeasurer {
    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        self.measure_width_pt(text, font_size) * PT_TO_MM
    }

    fn descender_mm(&self, font_size: f32) -> f32 {
        (207.0 / 1000.0) * font_size * PT_TO_MM
    }
}

/// Helvetica character widths (indices 0-127, only 32-126 are valid)
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
];

/// Helvetica-Bold character widths
#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
];
