use thiserror::Error;

/// Errors that can occur while loading a filing or writing extracted grants.
///
/// Per-group problems (a missing name, an amount that does not parse) are not
/// errors; they are reported as [`SkipReason`](crate::core::SkipReason)s.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GrantError {
    /// The input is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// Reading the filing or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization or deserialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The extractor configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),

    /// The document parsed but no grant rows survived filtering.
    #[error("no grants extracted (0 rows from {groups_found} candidate groups)")]
    EmptyResult {
        /// Number of candidate group elements that were inspected.
        groups_found: usize,
    },
}

impl GrantError {
    /// Whether this is the zero-rows outcome rather than a load/write failure.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, GrantError::EmptyResult { .. })
    }
}
