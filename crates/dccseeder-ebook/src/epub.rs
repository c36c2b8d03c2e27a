/// EPUB (Electronic Publication) section reader
///
/// Supports EPUB 2.0.1 and EPUB 3.x formats
/// Uses the `epub` crate for container and package parsing
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use epub::doc::EpubDoc;
use scraper::{Html, Selector};

use crate::error::{EbookError, Result};
use crate::types::{ParsedEbook, Section};

type Doc = EpubDoc<BufReader<File>>;

/// Parse an EPUB file from path, failing on the first unreadable section
///
/// # Errors
///
/// Returns an error if:
/// - The EPUB file cannot be opened or is invalid
/// - Any spine item cannot be read
#[must_use = "this function returns a parsed ebook that should be processed"]
pub fn parse_epub<P: AsRef<Path>>(path: P) -> Result<ParsedEbook> {
    let (book, mut skipped) = read_book(path.as_ref(), true)?;
    match skipped.pop() {
        Some(err) => Err(err),
        None => Ok(book),
    }
}

/// Parse an EPUB file from path, skipping sections that cannot be read
///
/// The skipped sections are returned alongside the book, each as a
/// [`EbookError::SectionUnreadable`] naming its href.
///
/// # Errors
///
/// Returns an error if the EPUB file cannot be opened or is invalid.
#[must_use = "this function returns a parsed ebook that should be processed"]
pub fn parse_epub_lossy<P: AsRef<Path>>(path: P) -> Result<(ParsedEbook, Vec<EbookError>)> {
    read_book(path.as_ref(), false)
}

fn read_book(path: &Path, stop_on_error: bool) -> Result<(ParsedEbook, Vec<EbookError>)> {
    let path_str = path.to_string_lossy().to_string();

    let mut doc = EpubDoc::new(path).map_err(|e| EbookError::Open {
        path: path_str.clone(),
        reason: e.to_string(),
    })?;

    let title = doc.mdata("title").map(|m| m.value.clone());
    log::info!("Reading {}", title.as_deref().unwrap_or(&path_str));

    let mut sections = Vec::new();
    let mut skipped = Vec::new();

    for spine_order in 0..doc.get_num_chapters() {
        match read_section(&mut doc, &path_str, spine_order) {
            Ok(section) => sections.push(section),
            Err(err) => {
                skipped.push(err);
                if stop_on_error {
                    break;
                }
            }
        }
    }

    Ok((ParsedEbook { title, sections }, skipped))
}

/// Read one spine item by position
fn read_section(doc: &mut Doc, path: &str, spine_order: usize) -> Result<Section> {
    let positioned = doc.set_current_chapter(spine_order);

    let href = doc.get_current_path().map_or_else(
        || format!("chapter_{spine_order}.xhtml"),
        |p| p.to_string_lossy().to_string(),
    );

    let content = positioned
        .then(|| doc.get_current_str())
        .flatten()
        .map(|(content, _media_type)| content)
        .ok_or_else(|| EbookError::SectionUnreadable {
            path: path.to_string(),
            href: href.clone(),
            spine_order,
        })?;

    let mut section = Section::new(content, href, spine_order);
    section.title = extract_title_from_html(&section.content);
    log::debug!("Section {spine_order}: {}", section.label());

    Ok(section)
}

/// Extract title from HTML content (first h1, h2 or title tag)
fn extract_title_from_html(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    ["h1", "h2", "title"].iter().find_map(|tag| {
        let selector = Selector::parse(tag).ok()?;
        let element = document.select(&selector).next()?;
        let title = element
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();
        (!title.is_empty()).then_some(title)
    })
}
