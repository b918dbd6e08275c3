//! Shrink-to-fit text layout for fixed-size boxes
//!
//! Fitting is side-effect free: `TextFitter::fit` only measures and wraps, and
//! returns the chosen layout. Nothing reaches the page until
//! `TextFitter::draw` is called with that layout.

use printpdf::Mm;

use crate::config::defaults::{
    ABILITY_FONT_SIZE, ABILITY_FONT_STEP, ABILITY_MIN_FONT_SIZE, LINE_LEADING, PT_TO_MM,
};
use crate::render::helpers::fonts::CardFont;
use crate::render::helpers::layer::LayerBuilder;
use crate::render::helpers::text_metrics::TextMeasure;

/// Rounding slack when comparing measured lengths against the box
const FIT_TOLERANCE: f32 = 0.01;

/// A rectangle in page coordinates (mm, lower-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl TextBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink the rectangle by `padding` on every side
    pub fn inset(&self, padding: f32) -> Self {
        Self {
            x: self.x + padding,
            y: self.y + padding,
            width: (self.width - 2.0 * padding).max(0.0),
            height: (self.height - 2.0 * padding).max(0.0),
        }
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// The outcome of fitting: a size and the lines wrapped at that size
#[derive(Debug, Clone, PartialEq)]
pub struct FittedText {
    pub font_size: f32,
    pub lines: Vec<String>,
    /// True when the text still does not fit at the minimum size
    pub overflows: bool,
}

/// Line height in mm for a font size
pub fn line_height_mm(font_size: f32) -> f32 {
    font_size * LINE_LEADING * PT_TO_MM
}

/// Greedy word wrap.
///
/// Explicit newlines start a new line; blank lines inside the text are kept,
/// leading and trailing ones are dropped. Words wider than the line on their
/// own are broken between characters.
pub fn wrap_text(
    text: &str,
    measurer: &dyn TextMeasure,
    font_size: f32,
    max_width: f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let text = text.trim();
    if text.is_empty() {
        return lines;
    }

    let fits = |s: &str| measurer.measure_text(s, font_size) <= max_width + FIT_TOLERANCE;

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if fits(&candidate) {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if fits(word) {
                current = word.to_string();
            } else {
                // Break an over-long word; every piece keeps at least one char
                for c in word.chars() {
                    let mut piece = current.clone();
                    piece.push(c);
                    if current.is_empty() || fits(&piece) {
                        current = piece;
                    } else {
                        lines.push(std::mem::replace(&mut current, c.to_string()));
                    }
                }
            }
        }

        lines.push(current);
    }

    lines
}

/// Finds the largest font size at which text fits a box
pub struct TextFitter<'a> {
    font: &'a CardFont,
    start_size: f32,
    min_size: f32,
    step: f32,
}

impl<'a> TextFitter<'a> {
    /// Fitter with the card ability sizes (8pt down to 4pt in 0.5pt steps)
    pub fn new(font: &'a CardFont) -> Self {
        Self::with_sizes(font, ABILITY_FONT_SIZE, ABILITY_MIN_FONT_SIZE, ABILITY_FONT_STEP)
    }

    pub fn with_sizes(font: &'a CardFont, start_size: f32, min_size: f32, step: f32) -> Self {
        Self {
            font,
            start_size,
            min_size: min_size.min(start_size),
            step: step.max(0.01),
        }
    }

    /// Whether wrapped lines at `font_size` fit inside `bounds`
    pub fn fits(&self, lines: &[String], font_size: f32, bounds: &TextBounds) -> bool {
        let measurer = self.font.measurer();
        let total_height = lines.len() as f32 * line_height_mm(font_size);

        total_height <= bounds.height + FIT_TOLERANCE
            && lines
                .iter()
                .all(|line| measurer.measure_text(line, font_size) <= bounds.width + FIT_TOLERANCE)
    }

    /// Try sizes from the start size downwards until the text fits.
    ///
    /// Linear search; at the minimum size the layout is accepted even if it
    /// overflows.
    pub fn fit(&self, text: &str, bounds: &TextBounds) -> FittedText {
        let measurer = self.font.measurer();
        let mut font_size = self.start_size;

        loop {
            let lines = wrap_text(text, measurer, font_size, bounds.width);
            let fits = self.fits(&lines, font_size, bounds);

            if fits || font_size <= self.min_size {
                if !fits {
                    log::debug!(
                        "Text does not fit at {}pt, drawing anyway: {:?}",
                        font_size,
                        text
                    );
                }
                return FittedText {
                    font_size,
                    lines,
                    overflows: !fits,
                };
            }

            font_size = (font_size - self.step).max(self.min_size);
        }
    }

    /// Draw a fitted layout, each line centered horizontally, from the top of `bounds`
    pub fn draw(&self, fitted: &FittedText, bounds: &TextBounds, layer: &mut LayerBuilder) {
        let measurer = self.font.measurer();
        let line_height = line_height_mm(fitted.font_size);
        let descender = measurer.descender_mm(fitted.font_size);

        for (i, line) in fitted.lines.iter().enumerate() {
            let width = measurer.measure_text(line, fitted.font_size);
            let x = bounds.x + (bounds.width - width) / 2.0;
            let baseline = bounds.top() - (i + 1) as f32 * line_height + descender;

            layer.use_text(
                line.as_str(),
                fitted.font_size,
                Mm(x),
                Mm(baseline),
                &self.font.handle,
            );
        }
    }

    /// Fit then draw; returns the layout that was drawn
    pub fn fit_and_draw(
        &self,
        text: &str,
        bounds: &TextBounds,
        layer: &mut LayerBuilder,
    ) -> FittedText {
        let fitted = self.fit(text, bounds);
        self.draw(&fitted, bounds, layer);
        fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{PANEL_HEIGHT, PANEL_TEXT_PADDING, PANEL_WIDTH};
    use crate::render::helpers::text_metrics::BuiltinFontMeasurer;
    use printpdf::{BuiltinFont, Op};

    fn panel() -> TextBounds {
        TextBounds::new(10.0, 10.0, PANEL_WIDTH, PANEL_HEIGHT).inset(PANEL_TEXT_PADDING)
    }

    #[test]
    fn test_wrap_respects_width() {
        let measurer = &BuiltinFontMeasurer::new(BuiltinFont::Helvetica);
        let text = "Move two extra spaces whenever another racer passes you on the track.";
        let lines = wrap_text(text, measurer, 8.0, 30.0);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(measurer.measure_text(line, 8.0) <= 30.0 + FIT_TOLERANCE);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        let measurer = &BuiltinFontMeasurer::new(BuiltinFont::Helvetica);
        let word = "W".repeat(60);
        let lines = wrap_text(&word, measurer, 8.0, 20.0);

        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn test_wrap_keeps_explicit_newlines() {
        let measurer = &BuiltinFontMeasurer::new(BuiltinFont::Helvetica);
        let lines = wrap_text("First.\nSecond.", measurer, 8.0, 100.0);
        assert_eq!(lines, vec!["First.", "Second."]);
    }

    #[test]
    fn test_wrap_drops_surrounding_blank_lines() {
        let measurer = &BuiltinFontMeasurer::new(BuiltinFont::Helvetica);
        assert_eq!(wrap_text("First.\n  ", measurer, 8.0, 100.0), vec!["First."]);
        assert_eq!(
            wrap_text("\nFirst.\n\nSecond.\n\n", measurer, 8.0, 100.0),
            vec!["First.", "", "Second."]
        );
    }

    #[test]
    fn test_trailing_blank_lines_do_not_shrink_text() {
        let font = CardFont::builtin(BuiltinFont::Helvetica);
        let fitter = TextFitter::new(&font);
        let text = "Swap places with the racer directly ahead of you. ".repeat(3);

        let plain = fitter.fit(&text, &panel());
        let padded = fitter.fit(&format!("{}\n \n\t\n   ", text), &panel());
        assert_eq!(plain, padded);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        let measurer = &BuiltinFontMeasurer::new(BuiltinFont::Helvetica);
        assert!(wrap_text("", measurer, 8.0, 50.0).is_empty());
        assert!(wrap_text("   ", measurer, 8.0, 50.0).is_empty());
    }

    #[test]
    fn test_short_text_keeps_baseline_size() {
        let font = CardFont::builtin(BuiltinFont::Helvetica);
        let fitter = TextFitter::new(&font);

        let fitted = fitter.fit("Roll twice and keep the higher result.", &panel());
        assert_eq!(fitted.font_size, ABILITY_FONT_SIZE);
        assert!(!fitted.overflows);
    }

    #[test]
    fn test_medium_text_shrinks() {
        let font = CardFont::builtin(BuiltinFont::Helvetica);
        let fitter = TextFitter::new(&font);
        let text = "When you would move, you may instead swap places with any racer. ".repeat(4);

        let fitted = fitter.fit(&text, &panel());
        assert!(fitted.font_size < ABILITY_FONT_SIZE);
        assert!(fitted.font_size >= ABILITY_MIN_FONT_SIZE);
        assert!(!fitted.overflows);
        assert!(fitter.fits(&fitted.lines, fitted.font_size, &panel()));
    }

    #[test]
    fn test_overlong_text_stops_at_floor() {
        let font = CardFont::builtin(BuiltinFont::Helvetica);
        let fitter = TextFitter::new(&font);
        let text = "Far too much text for one small card panel. ".repeat(80);

        let mut layer = LayerBuilder::new();
        let fitted = fitter.fit_and_draw(&text, &panel(), &mut layer);

        assert_eq!(fitted.font_size, ABILITY_MIN_FONT_SIZE);
        assert!(fitted.overflows);
        // Nothing is truncated
        assert_eq!(fitted.lines.join(" ").split_whitespace().count(), 9 * 80);
        assert!(!layer.is_empty());
    }

    #[test]
    fn test_fit_matches_committed_layout() {
        let font = CardFont::builtin(BuiltinFont::Helvetica);
        let fitter = TextFitter::new(&font);
        let text = "Swap places with the racer directly ahead of you. ".repeat(3);

        let measured = fitter.fit(&text, &panel());
        let mut layer = LayerBuilder::new();
        let drawn = fitter.fit_and_draw(&text, &panel(), &mut layer);

        assert_eq!(measured, drawn);
    }

    #[test]
    fn test_draw_emits_one_text_section_per_line() {
        let font = CardFont::builtin(BuiltinFont::Helvetica);
        let fitter = TextFitter::new(&font);
        let fitted = FittedText {
            font_size: 8.0,
            lines: vec!["one".to_string(), "two".to_string()],
            overflows: false,
        };

        let mut layer = LayerBuilder::new();
        fitter.draw(&fitted, &panel(), &mut layer);

        let sections = layer
            .ops()
            .iter()
            .filter(|op| matches!(op, Op::StartTextSection))
            .count();
        assert_eq!(sections, 2);
    }
}
