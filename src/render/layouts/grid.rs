use printpdf::Mm;

use crate::config::defaults::*;

/// Card placement on a page: a 3x3 grid centered on A4
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    horizontal_gap: f32,
    vertical_gap: f32,
    start_x: f32,
    /// Bottom edge of the top row
    start_y: f32,
}

impl GridLayout {
    /// Grid with the base gaps widened by `spacing_cm`
    pub fn new(spacing_cm: f32) -> Self {
        let extra = spacing_cm.max(0.0) * 10.0;
        let horizontal_gap = HORIZONTAL_GAP + extra;
        let vertical_gap = VERTICAL_GAP + extra;

        let grid_width =
            GRID_COLUMNS as f32 * CARD_WIDTH + (GRID_COLUMNS - 1) as f32 * horizontal_gap;
        let grid_height = GRID_ROWS as f32 * CARD_HEIGHT + (GRID_ROWS - 1) as f32 * vertical_gap;

        if grid_width > PAGE_WIDTH || grid_height > PAGE_HEIGHT {
            log::warn!(
                "Card grid ({:.1} x {:.1} mm) is larger than the page; cards will be cut off",
                grid_width,
                grid_height
            );
        }

        Self {
            horizontal_gap,
            vertical_gap,
            start_x: (PAGE_WIDTH - grid_width) / 2.0,
            start_y: (PAGE_HEIGHT - grid_height) / 2.0 + grid_height - CARD_HEIGHT,
        }
    }

    /// Lower-left corner of the card in `slot` (0..9, row-major from the top left)
    pub fn origin(&self, slot: usize) -> (Mm, Mm) {
        let slot = slot % CARDS_PER_PAGE;
        let col = slot % GRID_COLUMNS;
        let row = slot / GRID_COLUMNS;

        let x = self.start_x + col as f32 * (CARD_WIDTH + self.horizontal_gap);
        let y = self.start_y - row as f32 * (CARD_HEIGHT + self.vertical_gap);
        (Mm(x), Mm(y))
    }

    /// Pages needed for `card_count` cards
    pub fn card_pages(card_count: usize) -> usize {
        card_count.div_ceil(CARDS_PER_PAGE)
    }
}
