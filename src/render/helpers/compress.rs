//! PDF post-processing with lopdf
//!
//! printpdf writes uncompressed content streams; card pages repeat the same
//! drawing ops many times, so compressing them shrinks the file a lot.

use std::io::Cursor;

use crate::error::RenderError;

/// Compress all PDF streams and re-save the document.
pub fn compress_pdf(uncompressed: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut doc = lopdf::Document::load_mem(uncompressed).map_err(|e| {
        RenderError::PdfGeneration(format!("Failed to parse PDF for compression: {}", e))
    })?;

    doc.compress();

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output)
        .map_err(|e| RenderError::PdfGeneration(format!("Failed to save compressed PDF: {}", e)))?;

    Ok(output.into_inner())
}

/// Number of pages in a finished PDF
pub fn count_pages(pdf: &[u8]) -> Result<usize, RenderError> {
    let doc = lopdf::Document::load_mem(pdf)
        .map_err(|e| RenderError::PdfGeneration(format!("Failed to parse PDF: {}", e)))?;
    Ok(doc.get_pages().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_rejected() {
        assert!(compress_pdf(b"not a pdf").is_err());
        assert!(count_pages(b"not a pdf").is_err());
    }
}
