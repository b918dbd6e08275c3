use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use printpdf::{BuiltinFont, ParsedFont, PdfDocument, PdfFontHandle};

use crate::error::{ConfigWarning, RenderError};

use super::text_metrics::{BuiltinFontMeasurer, TextMeasure, TtfMeasurer};

/// A font usable for drawing, paired with the measurer that matches it
#[derive(Clone)]
pub struct CardFont {
    pub handle: PdfFontHandle,
    measurer: Rc<dyn TextMeasure>,
}

impl CardFont {
    pub fn builtin(font: BuiltinFont) -> Self {
        Self {
            handle: PdfFontHandle::Builtin(font),
            measurer: Rc::new(BuiltinFontMeasurer::new(font)),
        }
    }

    pub fn measurer(&self) -> &dyn TextMeasure {
        self.measurer.as_ref()
    }
}

/// Where the card fonts came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    Bundled(PathBuf),
    Builtin,
}

/// Regular and bold fonts for one document
///
/// The bundled TrueType font is embedded when it loads; otherwise the
/// builtin Helvetica pair is used.
#[derive(Clone)]
pub struct FontManager {
    pub regular: CardFont,
    pub bold: CardFont,
    source: FontSource,
}

impl FontManager {
    /// Builtin Helvetica / Helvetica-Bold, needing no document resources
    pub fn builtin() -> Self {
        Self {
            regular: CardFont::builtin(BuiltinFont::Helvetica),
            bold: CardFont::builtin(BuiltinFont::HelveticaBold),
            source: FontSource::Builtin,
        }
    }

    /// Load the bundled font into the document, falling back to builtin fonts.
    ///
    /// Never fails; a fallback is recorded in `warnings`. A bold variant is
    /// looked up next to the regular file and the regular font is reused for
    /// names when it is missing.
    pub fn load(
        doc: &mut PdfDocument,
        font_path: Option<&Path>,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Self {
        let Some(path) = font_path else {
            log::info!("No card font configured, using Helvetica");
            return Self::builtin();
        };

        let regular = match load_ttf(doc, path) {
            Ok(font) => font,
            Err(e) => {
                log::debug!("Card font rejected: {}", e);
                warnings.push(ConfigWarning::FontFallback {
                    reason: e.to_string(),
                });
                return Self::builtin();
            }
        };

        let bold_path = bold_sibling(path);
        let bold = match load_ttf(doc, &bold_path) {
            Ok(font) => font,
            Err(e) => {
                log::debug!("No bold card font ({}), names use the regular face", e);
                regular.clone()
            }
        };

        log::info!("Loaded card font {}", path.display());
        Self {
            regular,
            bold,
            source: FontSource::Bundled(path.to_path_buf()),
        }
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }
}

/// `Farro-Regular.ttf` -> `Farro-Bold.ttf`, `DejaVuSans.ttf` -> `DejaVuSans-Bold.ttf`
fn bold_sibling(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = stem.strip_suffix("-Regular").unwrap_or(&stem);

    let mut name = format!("{}-Bold", base);
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    path.with_file_name(name)
}

fn load_ttf(doc: &mut PdfDocument, path: &Path) -> Result<CardFont, RenderError> {
    let data = fs::read(path)
        .map_err(|e| RenderError::FontLoad(format!("{}: {}", path.display(), e)))?;

    let mut warnings = Vec::new();
    let parsed = ParsedFont::from_bytes(&data, 0, &mut warnings)
        .ok_or_else(|| RenderError::FontLoad(format!("Failed to parse {}", path.display())))?;
    let measurer = TtfMeasurer::new(data)
        .ok_or_else(|| RenderError::FontLoad(format!("Failed to shape {}", path.display())))?;

    let id = doc.add_font(&parsed);
    Ok(CardFont {
        handle: PdfFontHandle::External(id),
        measurer: Rc::new(measurer),
    })
}
