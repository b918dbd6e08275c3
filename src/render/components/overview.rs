//! Overview page: every character in a two-column table sorted by name
//!
//! The table ignores the card color scheme and is drawn in black.

use printpdf::{Color, Mm, PaintMode};

use crate::config::defaults::*;
use crate::model::{sorted_by_name, CharacterRecord};
use crate::render::helpers::colors::BLACK;
use crate::render::helpers::fonts::{CardFont, FontManager};
use crate::render::helpers::layer::LayerBuilder;

use super::text_fit::{line_height_mm, wrap_text};

/// One laid-out table row
struct Row {
    name_lines: Vec<String>,
    ability_lines: Vec<String>,
    height: f32,
}

pub struct OverviewRenderer<'a> {
    fonts: &'a FontManager,
}

impl<'a> OverviewRenderer<'a> {
    pub fn new(fonts: &'a FontManager) -> Self {
        Self { fonts }
    }

    fn column_widths() -> (f32, f32) {
        let content_width = PAGE_WIDTH - 2.0 * PAGE_MARGIN;
        let (name_part, ability_part) = OVERVIEW_COLUMN_RATIO;
        let unit = content_width / (name_part + ability_part);
        (unit * name_part, unit * ability_part)
    }

    fn layout_row(&self, character: &CharacterRecord, name_width: f32, ability_width: f32) -> Row {
        let text_width = |w: f32| (w - 2.0 * OVERVIEW_CELL_PADDING).max(0.0);

        let name_lines = wrap_text(
            &character.display_name,
            self.fonts.bold.measurer(),
            OVERVIEW_NAME_FONT_SIZE,
            text_width(name_width),
        );
        let ability_lines = wrap_text(
            &character.ability_text,
            self.fonts.regular.measurer(),
            OVERVIEW_ABILITY_FONT_SIZE,
            text_width(ability_width),
        );

        let name_height = name_lines.len().max(1) as f32 * line_height_mm(OVERVIEW_NAME_FONT_SIZE);
        let ability_height =
            ability_lines.len().max(1) as f32 * line_height_mm(OVERVIEW_ABILITY_FONT_SIZE);

        Row {
            name_lines,
            ability_lines,
            height: name_height.max(ability_height) + 2.0 * OVERVIEW_CELL_PADDING,
        }
    }

    /// Lay out the table, returning one layer per page.
    ///
    /// Rows that do not fit continue on a new page. The deck is not reordered.
    pub fn render_pages(&self, deck: &[CharacterRecord]) -> Vec<LayerBuilder> {
        let (name_width, ability_width) = Self::column_widths();
        let left = PAGE_MARGIN;
        let bottom = PAGE_MARGIN;

        let mut pages = Vec::new();
        let mut layer = Self::start_page();
        let mut cursor = PAGE_HEIGHT - PAGE_MARGIN - OVERVIEW_SPACING_BEFORE;
        let mut rows_on_page = 0;

        for character in sorted_by_name(deck) {
            let row = self.layout_row(character, name_width, ability_width);

            if rows_on_page > 0 && cursor - row.height < bottom {
                pages.push(std::mem::replace(&mut layer, Self::start_page()));
                cursor = PAGE_HEIGHT - PAGE_MARGIN;
                rows_on_page = 0;
            }

            let row_bottom = cursor - row.height;
            layer.add_rect(
                Mm(left),
                Mm(row_bottom),
                Mm(left + name_width),
                Mm(cursor),
                PaintMode::Stroke,
            );
            layer.add_rect(
                Mm(left + name_width),
                Mm(row_bottom),
                Mm(left + name_width + ability_width),
                Mm(cursor),
                PaintMode::Stroke,
            );

            Self::draw_cell_text(
                &mut layer,
                &row.name_lines,
                &self.fonts.bold,
                OVERVIEW_NAME_FONT_SIZE,
                left,
                cursor,
            );
            Self::draw_cell_text(
                &mut layer,
                &row.ability_lines,
                &self.fonts.regular,
                OVERVIEW_ABILITY_FONT_SIZE,
                left + name_width,
                cursor,
            );

            cursor = row_bottom;
            rows_on_page += 1;
        }

        pages.push(layer);
        if pages.len() > 1 {
            log::info!("Overview table continues over {} pages", pages.len());
        }
        pages
    }

    fn start_page() -> LayerBuilder {
        let mut layer = LayerBuilder::new();
        layer.set_outline_color(Color::Rgb(BLACK));
        layer.set_outline_thickness(OVERVIEW_BORDER_THICKNESS);
        layer.set_fill_color(Color::Rgb(BLACK));
        layer
    }

    /// Left-aligned lines starting at the padded top-left of a cell
    fn draw_cell_text(
        layer: &mut LayerBuilder,
        lines: &[String],
        font: &CardFont,
        font_size: f32,
        cell_x: f32,
        cell_top: f32,
    ) {
        let line_height = line_height_mm(font_size);
        let descender = font.measurer().descender_mm(font_size);
        let x = cell_x + OVERVIEW_CELL_PADDING;

        for (i, line) in lines.iter().enumerate() {
            let baseline =
                cell_top - OVERVIEW_CELL_PADDING - (i + 1) as f32 * line_height + descender;
            layer.use_text(line.as_str(), font_size, Mm(x), Mm(baseline), &font.handle);
        }
    }
}
