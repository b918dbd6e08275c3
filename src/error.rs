use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Data file not found: {}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Character entry {index} has an empty id")]
    EmptyId { index: usize },

    #[error("No characters defined in {}", path.display())]
    NoCharacters { path: PathBuf },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Deck is empty: nothing to render")]
    EmptyDeck,

    #[error("Failed to load font: {0}")]
    FontLoad(String),

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid color specification: {0}")]
    InvalidColor(String),

    #[error("Invalid card spacing: {0}")]
    InvalidSpacing(String),
}

/// A recoverable configuration problem.
///
/// Resolvers record these in a caller-provided list instead of failing or
/// logging; each one names the value that was replaced by its default.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    #[error("Invalid {option} '{value}', using default {fallback}")]
    InvalidColor {
        option: &'static str,
        value: String,
        fallback: String,
    },

    #[error("Invalid card spacing '{value}', using 0 cm")]
    InvalidSpacing { value: String },

    #[error("Could not load card font ({reason}), using Helvetica")]
    FontFallback { reason: String },
}
