//! Text extraction for uploaded resumes and job postings.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// Body of a DOCX package: every paragraph of the main document lives here.
const DOCX_BODY: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read DOCX: {0}")]
    Docx(String),

    #[error("File is not valid UTF-8 text")]
    NotUtf8,

    #[error("Unsupported file type '{0}'; upload a PDF, DOCX or plain-text file")]
    Unsupported(String),

    #[error("No text found in file")]
    Empty,
}

/// Extracts plain text from an uploaded file, dispatching on its extension.
///
/// `.pdf` goes through pdf-extract and `.docx` through its document XML. Legacy Word,
/// OpenDocument and RTF are rejected; everything else must be UTF-8 text. Output is sanitized and never blank.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    let raw = match extension.as_str() {
        "pdf" => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Pdf(format!("{e:?}")))?,
        "docx" => extract_docx(bytes)?,
        "doc" | "odt" | "rtf" => return Err(ExtractError::Unsupported(extension)),
        _ => String::from_utf8(bytes.to_vec()).map_err(|_| ExtractError::NotUtf8)?,
    };

    let text = sanitize_text(&raw);
    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(text)
}

/// Reads the paragraph text of a DOCX package, one line per paragraph.
///
/// Only runs of `w:t` carry text; `w:tab` becomes a tab and `w:br`/`w:cr` a line break.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Docx(format!("not a DOCX package ({e})")))?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY)
        .map_err(|e| ExtractError::Docx(format!("{DOCX_BODY} missing ({e})")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(format!("{DOCX_BODY} unreadable ({e})")))?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_text_run = false;
    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractError::Docx(format!("malformed {DOCX_BODY} ({e})")))?;
        match event {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" | b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                let unescaped = t
                    .unescape()
                    .map_err(|e| ExtractError::Docx(format!("bad text in {DOCX_BODY} ({e})")))?;
                text.push_str(&unescaped);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text.trim_end().to_string())
}

/// Replaces typographic punctuation with ASCII equivalents and strips NULs that
/// PDF extraction sometimes leaves behind.
pub fn sanitize_text(text: &str) -> String {
    const REPLACEMENTS: &[(&str, &str)] = &[
        ("\u{2013}", "-"),
        ("\u{2014}", "--"),
        ("\u{2018}", "'"),
        ("\u{2019}", "'"),
        ("\u{201c}", "\""),
        ("\u{201d}", "\""),
        ("\u{2022}", "-"),
        ("\u{2026}", "..."),
        ("\u{a0}", " "),
        // UTF-8 ellipsis decoded as Windows-1252
        ("\u{e2}\u{20ac}\u{a6}", "..."),
    ];

    let mut out = text.replace('\u{0}', "");
    for (from, to) in REPLACEMENTS {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}

/// Builds minimal DOCX packages in memory.
#[cfg(test)]
pub(crate) mod test_docx {
    use std::io::{Cursor, Write};

    use zip::write::FileOptions;
    use zip::{CompressionMethod, ZipWriter};

    /// A package holding only the given files.
    pub fn package(files: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Stored);
        for (name, content) in files {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    /// Wraps raw `w:body` content in a document.
    pub fn with_body(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        );
        package(&[("word/document.xml", &xml)])
    }

    /// One single-run paragraph per line.
    pub fn paragraphs(lines: &[&str]) -> Vec<u8> {
        let body: String = lines
            .iter()
            .map(|line| {
                format!(
                    r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                    quick_xml::escape::escape(*line)
                )
            })
            .collect();
        with_body(&body)
    }
}
