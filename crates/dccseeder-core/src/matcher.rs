/// Crawler reference pattern matching
///
/// Recognizes `crawler <sp> [#]<digits/commas>[.] <sp> “<name>[.]”`,
/// case-insensitively, with typographic double quotes only.
use std::sync::LazyLock;

use regex::Regex;

use crate::crawler::Crawler;

// Character classes are ASCII-scoped so non-breaking spaces and non-Latin
// letters do not widen what counts as a reference.
static RE_CRAWLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)crawler(?-u:\s)+#?([0-9,]+)\.?(?-u:\s)+“((?-u:[\w\s])+)\.?”")
        .expect("valid crawler pattern")
});

/// Extract the first crawler reference on a single line.
///
/// A line with several references yields only the first. Both id and name are
/// trimmed.
#[must_use = "returns the extracted crawler, if any"]
pub fn extract_line(line: &str) -> Option<Crawler> {
    let caps = RE_CRAWLER.captures(line)?;

    let (Some(id), Some(name)) = (caps.get(1), caps.get(2)) else {
        log::warn!("Invalid crawler format in line: {line}");
        return None;
    };

    let crawler = Crawler::new(id.as_str().trim(), name.as_str().trim());
    log::debug!("Found crawler reference: {line}");
    log::debug!("Crawler ID: {}, Name: {}", crawler.id, crawler.name);
    Some(crawler)
}

/// Extract crawler references from a sequence of lines, in line order.
///
/// Matching never spans a line break.
#[must_use = "returns the extracted crawlers"]
pub fn extract<I, S>(lines: I) -> Vec<Crawler>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| extract_line(line.as_ref()))
        .collect()
}
