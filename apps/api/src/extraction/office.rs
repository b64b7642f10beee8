//! Text extraction for Office Open XML documents (DOCX, PPTX).
//!
//! Both formats are zip archives of XML parts. Text lives in run elements
//! (`<w:t>` for Word, `<a:t>` for slides) grouped into paragraphs.

use std::io::{Cursor, Read};
use std::sync::OnceLock;

use html_escape::decode_html_entities;
use regex::Regex;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::extraction::ExtractionError;

const DOCX_BODY: &str = "word/document.xml";

struct Markup {
    paragraph: Regex,
    run: Regex,
}

fn word_markup() -> &'static Markup {
    static MARKUP: OnceLock<Markup> = OnceLock::new();
    MARKUP.get_or_init(|| Markup {
        paragraph: Regex::new(r"(?s)<w:p[\s>].*?</w:p>").expect("valid paragraph regex"),
        run: Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:tab/>").expect("valid run regex"),
    })
}

fn slide_markup() -> &'static Markup {
    static MARKUP: OnceLock<Markup> = OnceLock::new();
    MARKUP.get_or_init(|| Markup {
        paragraph: Regex::new(r"(?s)<a:p[\s>].*?</a:p>").expect("valid paragraph regex"),
        run: Regex::new(r"<a:t(?:\s[^>]*)?>([^<]*)</a:t>").expect("valid run regex"),
    })
}

fn slide_name() -> &'static Regex {
    static NAME: OnceLock<Regex> = OnceLock::new();
    NAME.get_or_init(|| Regex::new(r"^ppt/slides/slide(\d+)\.xml$").expect("valid slide regex"))
}

/// Extracts paragraph text from a Word document, one paragraph per line.
///
/// `max_bytes` caps the decompressed size of the XML read from the archive.
pub fn extract_docx_text(data: &[u8], max_bytes: usize) -> Result<String, ExtractionError> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    let xml = read_part(&mut archive, DOCX_BODY, max_bytes)?;
    Ok(paragraphs(&xml, word_markup()).join("\n"))
}

/// Extracts text from every slide in slide order. Slides are separated by a blank line.
///
/// `max_bytes` caps the decompressed size of all slides together.
pub fn extract_pptx_text(data: &[u8], max_bytes: usize) -> Result<String, ExtractionError> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;

    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| {
            let number = slide_name().captures(name)?.get(1)?.as_str().parse().ok()?;
            Some((number, name.to_string()))
        })
        .collect();
    slides.sort_by_key(|(number, _)| *number);

    if slides.is_empty() {
        return Err(ExtractionError::MissingPart("ppt/slides/slide1.xml".to_string()));
    }

    let mut remaining = max_bytes;
    let mut texts = Vec::with_capacity(slides.len());
    for (_, name) in &slides {
        let xml = read_part(&mut archive, name, remaining)?;
        remaining -= xml.len();
        let text = paragraphs(&xml, slide_markup()).join("\n");
        if !text.is_empty() {
            texts.push(text);
        }
    }

    Ok(texts.join("\n\n"))
}

/// Reads one XML part, refusing to inflate more than `max_bytes`.
///
/// The declared size is checked first; the read itself is also bounded because the
/// central directory can understate it.
fn read_part(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    name: &str,
    max_bytes: usize,
) -> Result<String, ExtractionError> {
    let part = archive.by_name(name).map_err(|e| match e {
        ZipError::FileNotFound => ExtractionError::MissingPart(name.to_string()),
        other => ExtractionError::Archive(other),
    })?;

    let too_large = || ExtractionError::PartTooLarge {
        part: name.to_string(),
        limit: max_bytes,
    };
    if part.size() > max_bytes as u64 {
        return Err(too_large());
    }

    let mut raw = Vec::new();
    part.take(max_bytes as u64 + 1).read_to_end(&mut raw)?;
    if raw.len() > max_bytes {
        return Err(too_large());
    }
    String::from_utf8(raw).map_err(|_| ExtractionError::InvalidUtf8)
}

/// Concatenates the runs of each paragraph; empty paragraphs are dropped.
/// A run match without a text capture is a tab.
fn paragraphs(xml: &str, markup: &Markup) -> Vec<String> {
    markup
        .paragraph
        .find_iter(xml)
        .map(|p| {
            markup
                .run
                .captures_iter(p.as_str())
                .map(|c| match c.get(1) {
                    Some(m) => decode_html_entities(m.as_str()).into_owned(),
                    None => "\t".to_string(),
                })
                .collect::<String>()
        })
        .filter(|text| !text.trim().is_empty())
        .collect()
}
