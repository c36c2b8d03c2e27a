/// Common types for parsed e-book content
use serde::{Deserialize, Serialize};

/// One spine item of a book
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    /// Section title (first heading), if any
    pub title: Option<String>,

    /// Raw XHTML content
    pub content: String,

    /// File path within the e-book
    pub href: String,

    /// Position in the spine
    pub spine_order: usize,
}

impl Section {
    /// Creates a new section with the given content, href, and spine order.
    #[inline]
    #[must_use = "creates section with content"]
    pub const fn new(content: String, href: String, spine_order: usize) -> Self {
        Self {
            title: None,
            content,
            href,
            spine_order,
        }
    }

    /// Content lines in document order, without line terminators.
    ///
    /// Both `\n` and `\r\n` endings are accepted.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }

    /// Label for diagnostics: the title when known, otherwise the href.
    #[must_use]
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.href)
    }
}

/// A book reduced to what the crawler scan needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedEbook {
    /// Book title from the package metadata
    pub title: Option<String>,

    /// Sections in reading order
    pub sections: Vec<Section>,
}

impl ParsedEbook {
    /// Title for log lines, falling back to "Untitled".
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_lines_strip_terminators() {
        let section = Section::new("one\r\ntwo\nthree".to_string(), "a.xhtml".to_string(), 0);
        assert_eq!(section.lines().collect::<Vec<_>>(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_section_label() {
        let mut section = Section::new(String::new(), "text/ch1.xhtml".to_string(), 3);
        assert_eq!(section.label(), "text/ch1.xhtml");
        section.title = Some("Chapter One".to_string());
        assert_eq!(section.label(), "Chapter One");
    }

    #[test]
    fn test_book_sections_keep_reading_order() {
        let book = ParsedEbook {
            title: None,
            sections: vec![
                Section::new("a\nb".to_string(), "1.xhtml".to_string(), 0),
                Section::new("c".to_string(), "2.xhtml".to_string(), 1),
            ],
        };
        let lines: Vec<&str> = book
            .sections
            .iter()
            .flat_map(|section| section.lines())
            .collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
        assert_eq!(book.display_title(), "Untitled");
    }
}
