use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::{BookmarksError, Result};
use crate::core::types::LinkRecord;

use std::fs;
use std::path::Path;

/// Anchor with a double-quoted href, matched within a single line.
const ANCHOR_PATTERN: &str = r#"(?i)<a\s[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#;

static ANCHOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(ANCHOR_PATTERN).expect("Failed to compile anchor regex pattern"));

pub trait LinkExtractor {
    fn extract_links(&self, content: &str) -> Vec<LinkRecord>;
}

#[derive(Default, Debug)]
pub struct BookmarkExtractor {}

impl LinkExtractor for BookmarkExtractor {
    fn extract_links(&self, content: &str) -> Vec<LinkRecord> {
        content.lines().filter_map(Self::parse_line).collect()
    }
}

impl BookmarkExtractor {
    /// First anchor on the line with a non-empty href, if any.
    fn parse_line(line: &str) -> Option<LinkRecord> {
        ANCHOR_REGEX.captures_iter(line).find_map(|caps| {
            let url = caps.get(1)?.as_str();
            let title = caps.get(2).map_or("", |m| m.as_str());
            LinkRecord::new(url, title).ok()
        })
    }

    /// Read a bookmarks export and extract its links.
    ///
    /// Fails when the file cannot be read or when it yields no links at all;
    /// both are fatal for a run.
    pub fn extract_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<LinkRecord>> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let bytes = fs::read(path).map_err(|e| {
            debug!("Could not read {display}: {e}");
            BookmarksError::FileNotReadable(display.clone())
        })?;
        // Exports are UTF-8, but a stray byte must not sink the whole file
        let content = String::from_utf8_lossy(&bytes);

        let links = self.extract_links(&content);
        if links.is_empty() {
            return Err(BookmarksError::NoLinks(display));
        }

        Ok(links)
    }
}

/// Drop records whose scheme is in `skip_schemes` (compared case-insensitively).
///
/// Browser exports carry `place:` queries and `file:` links that cannot be
/// checked over HTTP.
pub fn dispatchable(records: Vec<LinkRecord>, skip_schemes: &[String]) -> Vec<LinkRecord> {
    records
        .into_iter()
        .filter(|record| match record.scheme() {
            Some(scheme) => !skip_schemes
                .iter()
                .any(|skip| skip.eq_ignore_ascii_case(&scheme)),
            None => true,
        })
        .collect()
}
