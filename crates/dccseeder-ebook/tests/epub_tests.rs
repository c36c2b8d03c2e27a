//! EPUB reader integration tests against generated archives.

mod fixture;

use dccseeder_ebook::{parse_epub, parse_epub_lossy, EbookError};
use fixture::EpubFixture;
use tempfile::TempDir;

#[test]
fn test_sections_in_spine_order() {
    let dir = TempDir::new().unwrap();
    let path = EpubFixture::new("Dungeon Crawler Carl")
        .chapter("<h1>Prologue</h1>\n<p>Crawler #4,122. “Carl.”</p>")
        .chapter("<h2>Floor Two</h2>\n<p>Nothing to see.</p>")
        .write(dir.path(), "book.epub");

    let book = parse_epub(&path).unwrap();

    assert_eq!(book.title.as_deref(), Some("Dungeon Crawler Carl"));
    assert_eq!(book.sections.len(), 2);
    assert_eq!(book.sections[0].spine_order, 0);
    assert_eq!(book.sections[1].spine_order, 1);
    assert!(book.sections[0].href.ends_with("ch0.xhtml"));
    assert_eq!(book.sections[0].title.as_deref(), Some("Prologue"));
    assert_eq!(book.sections[1].title.as_deref(), Some("Floor Two"));
}

#[test]
fn test_lines_are_raw_markup() {
    let dir = TempDir::new().unwrap();
    let path = EpubFixture::new("Lines")
        .chapter("<p>Crawler #12. “Donut.”</p>\n<p>second</p>")
        .write(dir.path(), "lines.epub");

    let book = parse_epub(&path).unwrap();
    let lines: Vec<&str> = book
        .sections
        .iter()
        .flat_map(|section| section.lines())
        .collect();

    assert!(lines.contains(&"<p>Crawler #12. “Donut.”</p>"));
    assert!(lines.contains(&"<p>second</p>"));
    let crawler_line = lines.iter().position(|l| l.contains("Donut")).unwrap();
    let second_line = lines.iter().position(|l| l.contains("second")).unwrap();
    assert!(crawler_line < second_line);
}

#[test]
fn test_not_an_epub() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.epub");
    std::fs::write(&path, "not a zip archive").unwrap();

    let err = parse_epub(&path).unwrap_err();
    assert!(matches!(err, EbookError::Open { .. }));
    assert!(err.to_string().contains("plain.epub"));
}

#[test]
fn test_unreadable_section_is_fatal_in_strict_mode() {
    let dir = TempDir::new().unwrap();
    let path = EpubFixture::new("Damaged")
        .chapter("<p>fine</p>")
        .missing_chapter("gone.xhtml")
        .write(dir.path(), "damaged.epub");

    match parse_epub(&path) {
        Err(EbookError::SectionUnreadable {
            path: book_path,
            spine_order,
            ..
        }) => {
            assert!(book_path.ends_with("damaged.epub"));
            assert_eq!(spine_order, 1);
        }
        other => panic!("expected SectionUnreadable, got {other:?}"),
    }
}

#[test]
fn test_unreadable_section_is_skipped_in_lossy_mode() {
    let dir = TempDir::new().unwrap();
    let path = EpubFixture::new("Damaged")
        .chapter("<p>fine</p>")
        .missing_chapter("gone.xhtml")
        .chapter("<p>also fine</p>")
        .write(dir.path(), "damaged.epub");

    let (book, skipped) = parse_epub_lossy(&path).unwrap();

    assert_eq!(book.sections.len(), 2);
    assert_eq!(skipped.len(), 1);
    let message = skipped[0].to_string();
    assert!(message.contains("damaged.epub"), "message was: {message}");
    assert!(message.contains("spine #"), "message was: {message}");
}
