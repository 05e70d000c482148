use serde::Serialize;
use std::fmt;

/// A link found in a bookmarks export.
///
/// Records are created once during extraction and never mutated; the url
/// is the key of the url → title lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    /// The href of the anchor
    pub url: String,
    /// The inner text of the anchor
    pub title: String,
}

/// Errors that can occur when creating a `LinkRecord`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkRecordError {
    /// URL is missing or empty
    MissingUrl,
}

impl fmt::Display for LinkRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUrl => write!(f, "URL is required and cannot be empty"),
        }
    }
}

impl std::error::Error for LinkRecordError {}

impl LinkRecord {
    /// Create a new LinkRecord.
    ///
    /// The url must not be empty; the title may be (untitled bookmarks are
    /// common in exports).
    ///
    /// # Examples
    /// ```
    /// use bookmarks_checker::core::types::LinkRecord;
    ///
    /// let record = LinkRecord::new("https://example.com", "Example").unwrap();
    /// assert_eq!(record.url(), "https://example.com");
    /// assert_eq!(record.title(), "Example");
    /// ```
    pub fn new<U: Into<String>, T: Into<String>>(
        url: U,
        title: T,
    ) -> Result<Self, LinkRecordError> {
        let url = url.into();
        if url.is_empty() {
            return Err(LinkRecordError::MissingUrl);
        }

        Ok(Self {
            url,
            title: title.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Lowercased scheme of the url, if it has one.
    pub fn scheme(&self) -> Option<String> {
        let (scheme, _) = self.url.split_once(':')?;
        let valid = !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        valid.then(|| scheme.to_ascii_lowercase())
    }
}

/// Classification of a single reachability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Success,
    Failure { reason: String },
}

impl CheckOutcome {
    pub fn failure<S: Into<String>>(reason: S) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The failure reason, `None` for a success.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure { reason } => Some(reason),
        }
    }
}
