//! Deck layout renderer
//!
//! Tiles cards nine to a page in deck order, then appends the overview
//! table. Generates one PDF document per call.

use std::path::PathBuf;

use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions};

use crate::config::defaults::{CARDS_PER_PAGE, PAGE_HEIGHT, PAGE_WIDTH};
use crate::config::RenderConfig;
use crate::error::{ConfigWarning, RenderError};
use crate::model::CharacterRecord;

use crate::render::components::card::CardRenderer;
use crate::render::components::overview::OverviewRenderer;
use crate::render::helpers::compress::compress_pdf;
use crate::render::helpers::fonts::FontManager;
use crate::render::helpers::layer::LayerBuilder;

use super::grid::GridLayout;

/// Where one card ended up
#[derive(Debug, Clone, PartialEq)]
pub struct CardPlacement {
    pub id: String,
    /// Zero-based page index
    pub page: usize,
    /// Zero-based grid slot on that page
    pub slot: usize,
    /// Lower-left corner in mm
    pub origin: (f32, f32),
    /// Ability font size chosen by the text fitter
    pub font_size: f32,
}

/// What a render pass produced, for logging and tests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderSummary {
    pub card_pages: usize,
    pub overview_pages: usize,
    pub placements: Vec<CardPlacement>,
}

impl RenderSummary {
    pub fn cards_drawn(&self) -> usize {
        self.placements.len()
    }

    pub fn total_pages(&self) -> usize {
        self.card_pages + self.overview_pages
    }
}

/// A finished document
#[derive(Debug)]
pub struct RenderedDeck {
    pub pdf: Vec<u8>,
    pub summary: RenderSummary,
    /// Recoverable problems met while rendering (font fallback)
    pub warnings: Vec<ConfigWarning>,
}

/// Card deck renderer
pub struct DeckRenderer {
    config: RenderConfig,
    font_path: Option<PathBuf>,
}

impl DeckRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            font_path: None,
        }
    }

    /// Use a bundled TrueType font instead of builtin Helvetica
    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Generate the PDF for `deck`
    pub fn render(&self, deck: &[CharacterRecord]) -> Result<RenderedDeck, RenderError> {
        if deck.is_empty() {
            return Err(RenderError::EmptyDeck);
        }

        let mut doc = PdfDocument::new(&format!("Characters ({})", self.config.language));

        let mut warnings = Vec::new();
        let fonts = FontManager::load(&mut doc, self.font_path.as_deref(), &mut warnings);

        let (layers, summary) = self.layout_pages(deck, &fonts);
        let pages: Vec<PdfPage> = layers
            .into_iter()
            .map(|layer| PdfPage::new(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), layer.into_ops()))
            .collect();

        doc.with_pages(pages);

        let mut save_warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut save_warnings);
        if bytes.is_empty() {
            return Err(RenderError::PdfGeneration(
                "printpdf produced an empty document".to_string(),
            ));
        }

        // Compress PDF streams to reduce file size
        let pdf = match compress_pdf(&bytes) {
            Ok(compressed) => compressed,
            Err(e) => {
                log::warn!("{}; writing uncompressed PDF", e);
                bytes
            }
        };

        log::info!(
            "Rendered {} cards on {} pages ({} overview)",
            summary.cards_drawn(),
            summary.total_pages(),
            summary.overview_pages
        );

        Ok(RenderedDeck {
            pdf,
            summary,
            warnings,
        })
    }

    /// Lay out card pages followed by the overview, without building a PDF.
    ///
    /// A new page is started after a full grid only when another card
    /// follows, so there is never a trailing blank page.
    pub fn layout_pages(
        &self,
        deck: &[CharacterRecord],
        fonts: &FontManager,
    ) -> (Vec<LayerBuilder>, RenderSummary) {
        let grid = GridLayout::new(self.config.card_spacing_cm);
        let card_renderer = CardRenderer::new(&self.config, fonts);

        let card_limit = if self.config.dry_run { 1 } else { deck.len() };
        log::debug!(
            "Laying out {} cards on {} pages",
            card_limit.min(deck.len()),
            GridLayout::card_pages(card_limit.min(deck.len()))
        );

        let mut pages = Vec::new();
        let mut summary = RenderSummary::default();
        let mut layer = LayerBuilder::new();
        let mut slot = 0;

        let mut cards = deck.iter().take(card_limit).peekable();
        while let Some(character) = cards.next() {
            let origin = grid.origin(slot);
            let fitted = card_renderer.render(&mut layer, character, origin);

            summary.placements.push(CardPlacement {
                id: character.id.clone(),
                page: pages.len(),
                slot,
                origin: (origin.0 .0, origin.1 .0),
                font_size: fitted.font_size,
            });

            slot += 1;
            if slot == CARDS_PER_PAGE && cards.peek().is_some() {
                pages.push(std::mem::take(&mut layer));
                slot = 0;
            }
        }

        pages.push(layer);
        summary.card_pages = pages.len();

        if self.config.wants_overview() {
            let overview = OverviewRenderer::new(fonts).render_pages(deck);
            summary.overview_pages = overview.len();
            pages.extend(overview);
        }

        (pages, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(size: usize) -> Vec<CharacterRecord> {
        (0..size)
            .map(|i| {
                CharacterRecord::new(
                    format!("c{}", i),
                    format!("Character {}", i),
                    "Move one extra space.",
                )
            })
            .collect()
    }

    fn summary_for(size: usize, config: RenderConfig) -> RenderSummary {
        let fonts = FontManager::builtin();
        let (pages, summary) = DeckRenderer::new(config).layout_pages(&deck(size), &fonts);
        assert_eq!(pages.len(), summary.total_pages());
        summary
    }

    #[test]
    fn test_card_page_count_is_ceiling() {
        let config = RenderConfig {
            print_overview: false,
            ..RenderConfig::default()
        };
        for size in 1..=28 {
            let summary = summary_for(size, config.clone());
            assert_eq!(summary.card_pages, size.div_ceil(9), "deck of {}", size);
            assert_eq!(summary.cards_drawn(), size);
            assert_eq!(summary.overview_pages, 0);
        }
    }

    #[test]
    fn test_nine_cards_fill_one_page() {
        let summary = summary_for(9, RenderConfig::default());
        assert_eq!(summary.card_pages, 1);
        assert_eq!(summary.overview_pages, 1);
        assert_eq!(summary.placements.last().map(|p| p.slot), Some(8));
    }

    #[test]
    fn test_tenth_card_starts_second_page() {
        let summary = summary_for(10, RenderConfig::default());
        assert_eq!(summary.card_pages, 2);

        let tenth = &summary.placements[9];
        assert_eq!((tenth.page, tenth.slot), (1, 0));
        assert_eq!(tenth.origin, summary.placements[0].origin);
    }

    #[test]
    fn test_dry_run_draws_one_card_only() {
        let config = RenderConfig {
            dry_run: true,
            print_overview: true,
            show_name: true,
            ..RenderConfig::default()
        };
        let summary = summary_for(20, config);

        assert_eq!(summary.cards_drawn(), 1);
        assert_eq!(summary.card_pages, 1);
        assert_eq!(summary.overview_pages, 0);
    }

    #[test]
    fn test_overview_does_not_disturb_card_order() {
        let fonts = FontManager::builtin();
        let mut cards = deck(12);
        cards.reverse();

        let without = DeckRenderer::new(RenderConfig {
            print_overview: false,
            ..RenderConfig::default()
        });
        let with = DeckRenderer::new(RenderConfig::default());

        let (_, before) = without.layout_pages(&cards, &fonts);
        let (_, after) = with.layout_pages(&cards, &fonts);
        assert_eq!(before.placements, after.placements);

        let (_, again) = without.layout_pages(&cards, &fonts);
        assert_eq!(before.placements, again.placements);
        assert_eq!(cards[0].id, "c11");
    }

    #[test]
    fn test_empty_deck_is_an_error() {
        let renderer = DeckRenderer::new(RenderConfig::default());
        assert!(matches!(renderer.render(&[]), Err(RenderError::EmptyDeck)));
    }
}
