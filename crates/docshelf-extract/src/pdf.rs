//! PDF text extraction via the pdf-extract crate.

use docshelf_core::{Error, Result};

/// Extract the text of every page, in page order. Pages without extractable
/// text contribute nothing. Trailing whitespace is trimmed.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| Error::ExtractionFailed(format!("PDF: {}", e)))?;

    Ok(text.trim_end().to_string())
}
