//! Writing the finished document to disk

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::RenderError;

/// Write `pdf` to `path` atomically.
///
/// The bytes go to a temporary file in the destination directory which is
/// then renamed over `path`. On failure nothing is left at `path`.
pub fn write_document(path: &Path, pdf: &[u8]) -> Result<(), RenderError> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(pdf)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    log::debug!("Wrote {} bytes to {}", pdf.len(), path.display());
    Ok(())
}
