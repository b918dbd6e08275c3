pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod output;
pub mod render;

pub use config::{CardColor, RenderConfig};
pub use error::{ConfigError, ConfigWarning, DataError, RenderError};
pub use loader::load_deck;
pub use model::CharacterRecord;
pub use output::write_document;
pub use render::{DeckRenderer, RenderSummary, RenderedDeck};

use std::path::Path;

/// High-level API for rendering a deck to PDF.
///
/// Loads the canonical character list and the overlay for
/// `config.language` from `data_dir`, then renders the cards and (unless
/// disabled) the overview. When `font` is `None` or cannot be loaded the
/// builtin Helvetica fonts are used. Recoverable problems such as a font
/// fallback are returned in `RenderedDeck::warnings`, not logged.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use athlete_cards::{render_deck, RenderConfig};
///
/// let config = RenderConfig {
///     language: "de".to_string(),
///     show_name: true,
///     ..RenderConfig::default()
/// };
///
/// let rendered = render_deck(Path::new("assets/data"), None, &config).unwrap();
/// std::fs::write(config.output_file_name(), rendered.pdf).unwrap();
/// ```
pub fn render_deck(
    data_dir: &Path,
    font: Option<&Path>,
    config: &RenderConfig,
) -> anyhow::Result<RenderedDeck> {
    let deck = load_deck(data_dir, &config.language)?;

    let mut renderer = DeckRenderer::new(config.clone());
    if let Some(path) = font {
        renderer = renderer.with_font(path);
    }

    Ok(renderer.render(&deck)?)
}
