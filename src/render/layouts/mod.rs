//! Page layouts

pub mod deck;
pub mod grid;

pub use deck::{CardPlacement, DeckRenderer, RenderSummary, RenderedDeck};
pub use grid::GridLayout;
