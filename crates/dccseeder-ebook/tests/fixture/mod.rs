//! Minimal EPUB 2 archives for tests.
//!
//! Shared with the CLI integration tests via `#[path]`.
#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A book to be written: title plus one XHTML body per chapter
pub struct EpubFixture {
    pub title: String,
    pub chapters: Vec<String>,
    /// Manifest entries listed in the spine but absent from the archive
    pub missing: Vec<String>,
}

impl EpubFixture {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            chapters: Vec::new(),
            missing: Vec::new(),
        }
    }

    /// Add a chapter whose `<body>` holds `body` verbatim.
    pub fn chapter(mut self, body: &str) -> Self {
        self.chapters.push(body.to_string());
        self
    }

    /// Add a spine item whose file is not in the archive.
    pub fn missing_chapter(mut self, href: &str) -> Self {
        self.missing.push(href.to_string());
        self
    }

    /// Write the archive to `dir/file_name` and return its path.
    pub fn write(&self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        let file = File::create(&path).unwrap();
        let mut zip = ZipWriter::new(file);

        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        let deflated = SimpleFileOptions::default();

        zip.start_file("mimetype", stored).unwrap();
        zip.write_all(b"application/epub+zip").unwrap();

        zip.start_file("META-INF/container.xml", deflated).unwrap();
        zip.write_all(CONTAINER_XML.as_bytes()).unwrap();

        zip.start_file("OEBPS/content.opf", deflated).unwrap();
        zip.write_all(self.opf().as_bytes()).unwrap();

        zip.start_file("OEBPS/toc.ncx", deflated).unwrap();
        zip.write_all(self.ncx().as_bytes()).unwrap();

        for (i, body) in self.chapters.iter().enumerate() {
            zip.start_file(format!("OEBPS/ch{i}.xhtml"), deflated).unwrap();
            zip.write_all(chapter_xhtml(i, body).as_bytes()).unwrap();
        }

        zip.finish().unwrap();
        path
    }

    fn opf(&self) -> String {
        let mut manifest = String::from(
            r#"<item id="ncx" href="toc.ncx" media-type="application/x-dtbncx+xml"/>"#,
        );
        let mut spine = String::new();

        for i in 0..self.chapters.len() {
            manifest.push_str(&format!(
                r#"<item id="ch{i}" href="ch{i}.xhtml" media-type="application/xhtml+xml"/>"#
            ));
            spine.push_str(&format!(r#"<itemref idref="ch{i}"/>"#));
        }
        for (i, href) in self.missing.iter().enumerate() {
            manifest.push_str(&format!(
                r#"<item id="missing{i}" href="{href}" media-type="application/xhtml+xml"/>"#
            ));
            spine.push_str(&format!(r#"<itemref idref="missing{i}"/>"#));
        }

        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0" unique-identifier="bookid">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:opf="http://www.idpf.org/2007/opf">
    <dc:title>{title}</dc:title>
    <dc:identifier id="bookid">urn:uuid:00000000-0000-0000-0000-000000000000</dc:identifier>
    <dc:language>en</dc:language>
  </metadata>
  <manifest>{manifest}</manifest>
  <spine toc="ncx">{spine}</spine>
</package>
"#,
            title = self.title
        )
    }

    fn ncx(&self) -> String {
        let points: String = (0..self.chapters.len())
            .map(|i| {
                let order = i + 1;
                format!(
                    "<navPoint id=\"np{i}\" playOrder=\"{order}\">\
                     <navLabel><text>Chapter {order}</text></navLabel>\
                     <content src=\"ch{i}.xhtml\"/></navPoint>"
                )
            })
            .collect();

        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head><meta name="dtb:uid" content="urn:uuid:00000000-0000-0000-0000-000000000000"/></head>
  <docTitle><text>{title}</text></docTitle>
  <navMap>{points}</navMap>
</ncx>
"#,
            title = self.title
        )
    }
}

const CONTAINER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>
"#;

fn chapter_xhtml(index: usize, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml">
<head><title>Chapter {index}</title></head>
<body>
{body}
</body>
</html>
"#
    )
}
