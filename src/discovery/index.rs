use rustc_hash::FxHashMap;

use crate::core::types::LinkRecord;

/// Url → title lookup built from extracted records.
///
/// A url that appears more than once keeps the title of its last
/// occurrence; earlier titles for the same url are not retained.
#[derive(Debug, Default, Clone)]
pub struct LinkIndex {
    titles: FxHashMap<String, String>,
}

impl LinkIndex {
    pub fn from_records(records: &[LinkRecord]) -> Self {
        let mut titles = FxHashMap::with_capacity_and_hasher(records.len(), Default::default());
        for record in records {
            titles.insert(record.url.clone(), record.title.clone());
        }
        Self { titles }
    }

    pub fn title(&self, url: &str) -> Option<&str> {
        self.titles.get(url).map(String::as_str)
    }

    /// Number of distinct urls.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
