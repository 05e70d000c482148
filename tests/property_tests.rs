//! Property-based tests for bookmarks-checker using proptest
//!
//! These tests generate random bookmark exports to check that extraction
//! stays faithful to the anchor pattern, and that fatal inputs never
//! reach the network.

use assert_cmd::prelude::*;
use bookmarks_checker::{BookmarkExtractor, LinkExtractor, LinkIndex};
use proptest::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const NAME: &str = "bookmarks-checker";

/// Generate urls of the kind found in bookmark exports
fn url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (r"[a-z]{3,10}", prop::collection::vec(r"[a-z0-9]{1,8}", 0..4)).prop_map(
            |(domain, path)| {
                if path.is_empty() {
                    format!("https://{domain}.com")
                } else {
                    format!("https://{domain}.com/{}", path.join("/"))
                }
            }
        ),
        (r"[a-z]{3,8}", 1024..65535u16)
            .prop_map(|(domain, port)| format!("http://{domain}.org:{port}/")),
        Just("place:sort=8&maxResults=10".to_string()),
    ]
}

fn title_strategy() -> impl Strategy<Value = String> {
    r"[A-Za-z0-9 .,:'-]{0,24}"
}

/// One line of an export, tagged with the record it should yield.
fn line_strategy() -> impl Strategy<Value = (String, Option<(String, String)>)> {
    prop_oneof![
        (url_strategy(), title_strategy()).prop_map(|(url, title)| {
            let line = format!("    <DT><A HREF=\"{url}\" ADD_DATE=\"1505990001\">{title}</A>");
            (line, Some((url, title)))
        }),
        (url_strategy(), title_strategy()).prop_map(|(url, title)| {
            let line = format!("<a class=\"x\" href=\"{url}\">{title}</a>");
            (line, Some((url, title)))
        }),
        title_strategy().prop_map(|name| (format!("    <DT><H3>{name}</H3>"), None)),
        Just(("<DL><p>".to_string(), None)),
        Just(("</DL><p>".to_string(), None)),
        Just(("".to_string(), None)),
        url_strategy().prop_map(|url| (format!("bare text {url}"), None)),
    ]
}

proptest! {
    #[test]
    fn test_extraction_matches_anchor_lines(
        lines in prop::collection::vec(line_strategy(), 0..40)
    ) {
        let content = lines.iter().map(|(line, _)| line.as_str()).collect::<Vec<_>>().join("\n");
        let expected: Vec<(String, String)> = lines.iter().filter_map(|(_, rec)| rec.clone()).collect();

        let extracted = BookmarkExtractor::default().extract_links(&content);
        let actual: Vec<(String, String)> = extracted
            .iter()
            .map(|r| (r.url.clone(), r.title.clone()))
            .collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_extraction_is_deterministic(
        lines in prop::collection::vec(line_strategy(), 0..40)
    ) {
        let content = lines.iter().map(|(line, _)| line.as_str()).collect::<Vec<_>>().join("\n");
        let extractor = BookmarkExtractor::default();

        prop_assert_eq!(extractor.extract_links(&content), extractor.extract_links(&content));
    }

    #[test]
    fn test_index_never_exceeds_records(
        lines in prop::collection::vec(line_strategy(), 0..40)
    ) {
        let content = lines.iter().map(|(line, _)| line.as_str()).collect::<Vec<_>>().join("\n");
        let records = BookmarkExtractor::default().extract_links(&content);
        let index = LinkIndex::from_records(&records);

        prop_assert!(index.len() <= records.len());
        if let Some(last) = records.last() {
            prop_assert_eq!(index.title(&last.url), Some(last.title.as_str()));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))] // Each case spawns the binary

    #[test]
    fn test_linkless_content_fails_before_checking(
        lines in prop::collection::vec(r"[A-Za-z0-9 <>/=]{0,40}", 0..10)
    ) {
        // Without a quoted href nothing can match
        let content = lines.join("\n").replace("href", "ref");
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let output = Command::cargo_bin(NAME)
            .unwrap()
            .arg("--no-config")
            .arg("-f")
            .arg(file.path())
            .output()
            .unwrap();

        prop_assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        prop_assert!(stderr.contains("No links extracted from"));
        prop_assert!(output.stdout.is_empty());
    }
}
