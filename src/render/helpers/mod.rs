//! Helper utilities for PDF rendering

pub mod colors;
pub mod compress;
pub mod fonts;
pub mod layer;
pub mod text_metrics;

pub use colors::BLACK;
pub use compress::{compress_pdf, count_pages};
pub use fonts::{CardFont, FontManager, FontSource};
pub use layer::LayerBuilder;
pub use text_metrics::{BuiltinFontMeasurer, FontMetrics, TextMeasure, TtfMeasurer};
