use std::fmt;

/// Error types for bookmarks-checker operations
#[derive(Debug)]
pub enum BookmarksError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Bookmarks file is missing or cannot be read
    FileNotReadable(String),

    /// Bookmarks file contains no recognizable anchors
    NoLinks(String),

    /// Configuration error
    Config(String),

    /// HTTP client error
    Http(reqwest::Error),
}

impl fmt::Display for BookmarksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarksError::Io(err) => write!(f, "IO error: {err}"),
            BookmarksError::FileNotReadable(path) => {
                write!(f, "{path} cannot be found or cannot be read.")
            }
            BookmarksError::NoLinks(path) => write!(f, "No links extracted from {path}"),
            BookmarksError::Config(msg) => write!(f, "Configuration error: {msg}"),
            BookmarksError::Http(err) => write!(f, "HTTP error: {err}"),
        }
    }
}

impl std::error::Error for BookmarksError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BookmarksError::Io(err) => Some(err),
            BookmarksError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BookmarksError {
    fn from(err: std::io::Error) -> Self {
        BookmarksError::Io(err)
    }
}

impl From<reqwest::Error> for BookmarksError {
    fn from(err: reqwest::Error) -> Self {
        BookmarksError::Http(err)
    }
}

/// Type alias for Results using BookmarksError
pub type Result<T> = std::result::Result<T, BookmarksError>;
