//! Rendering components for PDF generation

pub mod card;
pub mod overview;
pub mod text_fit;

pub use card::CardRenderer;
pub use overview::OverviewRenderer;
pub use text_fit::{FittedText, TextBounds, TextFitter};
