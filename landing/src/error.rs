//! Error types for the site controller.
//!
//! None of these ever reach the visitor as a failure: search errors become
//! toasts, DOM errors are logged and skipped, config errors stop the mount.

use thiserror::Error;

use crate::router::PageId;

/// Rejected search submission. The `Display` text is the toast message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Please enter a search term.")]
    Empty,
    #[error("Maximum {max} characters exceeded.")]
    TooLong { len: usize, max: usize },
}

/// Invalid site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("page `{0}` is declared more than once")]
    DuplicatePage(PageId),
    #[error("home page `{0}` is not a declared page")]
    UnknownHome(PageId),
    #[error("{origin} points at unknown page `{page}`")]
    UnknownTarget { origin: String, page: PageId },
    #[error("search limit `{0}` must be greater than zero")]
    ZeroLimit(&'static str),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

/// Something the browser shell expected in the document was not there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no window object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_errors_read_as_toast_messages() {
        assert_eq!(SearchError::Empty.to_string(), "Please enter a search term.");
        assert_eq!(
            SearchError::TooLong { len: 28, max: 27 }.to_string(),
            "Maximum 27 characters exceeded."
        );
    }

    #[test]
    fn config_error_names_the_dangling_reference() {
        let err = ConfigError::UnknownTarget {
            origin: "search entry `Cogito`".into(),
            page: PageId::from("prod-missing"),
        };
        assert_eq!(
            err.to_string(),
            "search entry `Cogito` points at unknown page `prod-missing`"
        );
    }
}
