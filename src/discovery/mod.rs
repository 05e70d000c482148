//! Link discovery
//!
//! This module turns the raw markup of a bookmarks export into
//! link records and the url → title lookup table.

pub mod extractor;
pub mod index;

// Re-export commonly used items
pub use extractor::{BookmarkExtractor, LinkExtractor, dispatchable};
pub use index::LinkIndex;
