//! DOCX text extraction.
//!
//! A DOCX file is a ZIP archive; the document body lives in
//! `word/document.xml`. Paragraphs are `w:p` elements and their text runs
//! are `w:t` elements. We stream the XML and collect text per paragraph.

use std::io::{Cursor, Read};

use docshelf_core::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Extract the text of every paragraph, in document order, joined by
/// newlines. Paragraphs with empty text are skipped. Trailing whitespace
/// is trimmed.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| Error::ExtractionFailed(format!("DOCX: {}", e)))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| Error::ExtractionFailed(format!("DOCX: {}", e)))?
        .read_to_string(&mut document_xml)
        .map_err(|e| Error::ExtractionFailed(format!("DOCX: {}", e)))?;

    parse_document_xml(&document_xml)
}

/// Walk the document XML, accumulating `w:t` text within each `w:p`.
fn parse_document_xml(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = true,
                b"w:p" => current.clear(),
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => {
                    if !current.is_empty() {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                let text = e
                    .unescape()
                    .map_err(|e| Error::ExtractionFailed(format!("DOCX: {}", e)))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::ExtractionFailed(format!("DOCX: {}", e))),
            _ => {}
        }
    }

    Ok(paragraphs.join("\n").trim_end().to_string())
}
