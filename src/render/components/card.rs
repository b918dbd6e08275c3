use printpdf::{Color, Mm, PaintMode};

use crate::config::defaults::*;
use crate::config::RenderConfig;
use crate::model::CharacterRecord;
use crate::render::helpers::colors::BLACK;
use crate::render::helpers::fonts::FontManager;
use crate::render::helpers::layer::LayerBuilder;

use super::text_fit::{FittedText, TextBounds, TextFitter};

/// Draws a single card: cut outline, inner panel, optional name, ability text
pub struct CardRenderer<'a> {
    config: &'a RenderConfig,
    fonts: &'a FontManager,
}

impl<'a> CardRenderer<'a> {
    pub fn new(config: &'a RenderConfig, fonts: &'a FontManager) -> Self {
        Self { config, fonts }
    }

    /// Inner panel rectangle for a card whose lower-left corner is (x, y)
    pub fn panel_bounds(x: f32, y: f32) -> TextBounds {
        TextBounds::new(
            x + (CARD_WIDTH - PANEL_WIDTH) / 2.0,
            y + PANEL_MARGIN_BOTTOM,
            PANEL_WIDTH,
            PANEL_HEIGHT,
        )
    }

    /// Draw `character` with the card's lower-left corner at `origin`.
    ///
    /// Returns the ability text layout that was drawn.
    pub fn render(
        &self,
        layer: &mut LayerBuilder,
        character: &CharacterRecord,
        origin: (Mm, Mm),
    ) -> FittedText {
        let (x, y) = (origin.0 .0, origin.1 .0);
        let text_color = self.config.text_color.to_pdf_color();

        layer.save_graphics_state();

        // Cut guide
        layer.set_outline_thickness(CARD_OUTLINE_THICKNESS);
        layer.set_outline_color(Color::Rgb(BLACK));
        layer.add_rect(
            Mm(x),
            Mm(y),
            Mm(x + CARD_WIDTH),
            Mm(y + CARD_HEIGHT),
            PaintMode::Stroke,
        );

        // Inner panel: fill first, then border on top
        let panel = Self::panel_bounds(x, y);
        layer.set_fill_color(self.config.background_color.to_pdf_color());
        layer.add_rounded_rect(
            Mm(panel.x),
            Mm(panel.y),
            Mm(panel.width),
            Mm(panel.height),
            Mm(PANEL_CORNER_RADIUS),
            PaintMode::Fill,
        );
        layer.set_outline_color(text_color.clone());
        layer.add_rounded_rect(
            Mm(panel.x),
            Mm(panel.y),
            Mm(panel.width),
            Mm(panel.height),
            Mm(PANEL_CORNER_RADIUS),
            PaintMode::Stroke,
        );

        layer.set_fill_color(text_color);

        if self.config.show_name {
            self.render_name(layer, &character.display_name, x, y);
        }

        let fitter = TextFitter::new(&self.fonts.regular);
        let fitted =
            fitter.fit_and_draw(&character.ability_text, &panel.inset(PANEL_TEXT_PADDING), layer);
        if fitted.overflows {
            log::warn!(
                "Ability of {} overflows its panel even at {}pt",
                character,
                fitted.font_size
            );
        }

        layer.restore_graphics_state();
        fitted
    }

    fn render_name(&self, layer: &mut LayerBuilder, name: &str, x: f32, y: f32) {
        let font = &self.fonts.bold;
        let width = font.measurer().measure_text(name, NAME_FONT_SIZE);
        let name_x = x + (CARD_WIDTH - width) / 2.0;
        let baseline = y + CARD_HEIGHT - NAME_OFFSET_FROM_TOP;

        layer.use_text(name, NAME_FONT_SIZE, Mm(name_x), Mm(baseline), &font.handle);
    }
}
