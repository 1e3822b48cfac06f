use thiserror::Error;

/// Failure of a single school search.
///
/// "No results" is not an error: it is an empty [`crate::SearchOutcome`].
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Network(String),

    #[error("search timed out after {0} seconds")]
    Timeout(u64),

    #[error("search API returned status {0}")]
    Status(u16),

    #[error("could not parse search response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Parse(err.to_string())
    }
}
