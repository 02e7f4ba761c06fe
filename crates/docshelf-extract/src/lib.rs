//! Docshelf Extract — text extraction from uploaded document bytes.
//!
//! Supports the two media types the upload endpoint accepts: PDF and DOCX.
//! Parser-library failures are wrapped into `Error::ExtractionFailed` so raw
//! library errors never cross the crate boundary.

mod docx;
mod pdf;

use std::path::Path;

use docshelf_core::{Error, Result};

/// MIME type for PDF uploads.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";
/// MIME type for DOCX uploads (Office Open XML word processing).
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Media types the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Docx,
}

impl MediaType {
    /// Map a declared content type onto a supported media type. Returns
    /// `None` for anything else; the caller rejects those before reading
    /// the file body.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type {
            PDF_CONTENT_TYPE => Some(Self::Pdf),
            DOCX_CONTENT_TYPE => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Extract plain text from document bytes.
///
/// Fails with `EmptyFile` on a zero-byte payload before any parser runs.
/// An extraction that succeeds but yields no text returns `Ok("")` — the
/// upload pipeline turns that into `NoContent`.
pub fn extract(bytes: &[u8], media_type: MediaType) -> Result<String> {
    if bytes.is_empty() {
        return Err(Error::EmptyFile);
    }

    let text = match media_type {
        MediaType::Pdf => pdf::extract_text(bytes)?,
        MediaType::Docx => docx::extract_text(bytes)?,
    };

    tracing::debug!(
        "extracted {} characters from {} byte {:?} payload",
        text.len(),
        bytes.len(),
        media_type
    );

    Ok(text)
}

/// Extract plain text from a file on disk. Used by the upload pipeline after
/// spooling the payload to a transient file.
pub fn extract_file(path: &Path, media_type: MediaType) -> Result<String> {
    let bytes = std::fs::read(path)?;
    extract(&bytes, media_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_recognizes_pdf_and_docx() {
        assert_eq!(
            MediaType::from_content_type("application/pdf"),
            Some(MediaType::Pdf)
        );
        assert_eq!(
            MediaType::from_content_type(DOCX_CONTENT_TYPE),
            Some(MediaType::Docx)
        );
        assert_eq!(MediaType::from_content_type("text/plain"), None);
        assert_eq!(MediaType::from_content_type("application/msword"), None);
        assert_eq!(MediaType::from_content_type(""), None);
    }

    #[test]
    fn test_empty_payload_fails_before_parsing() {
        for mt in [MediaType::Pdf, MediaType::Docx] {
            match extract(&[], mt) {
                Err(Error::EmptyFile) => {}
                other => panic!("expected EmptyFile, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_garbage_pdf_is_wrapped() {
        let result = extract(b"not a pdf at all", MediaType::Pdf);
        match result {
            Err(Error::ExtractionFailed(_)) => {}
            other => panic!("expected ExtractionFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_file_reads_from_disk() {
        use std::io::Write;

        // Minimal DOCX: a ZIP with a one-paragraph document body.
        let xml = "<w:document xmlns:w=\"x\"><w:body>\
                   <w:p><w:r><w:t>Hello World</w:t></w:r></w:p>\
                   </w:body></w:document>";
        let mut cursor = std::io::Cursor::new(Vec::new());
        {
            let mut archive = zip::ZipWriter::new(&mut cursor);
            let options = zip::write::SimpleFileOptions::default();
            archive.start_file("word/document.xml", options).unwrap();
            archive.write_all(xml.as_bytes()).unwrap();
            archive.finish().unwrap();
        }

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&cursor.into_inner()).unwrap();

        let text = extract_file(file.path(), MediaType::Docx).unwrap();
        assert_eq!(text, "Hello World");
    }

    #[test]
    fn test_garbage_docx_is_wrapped() {
        let result = extract(b"not a zip archive", MediaType::Docx);
        match result {
            Err(Error::ExtractionFailed(_)) => {}
            other => panic!("expected ExtractionFailed, got {:?}", other),
        }
    }
}
