use finder_core::error::FinderError;
use finder_search::SearchError;
use thiserror::Error;

/// Failure while handling one dialog turn.
///
/// The skill turns any of these into a contextual spoken error; they never
/// reach the voice platform as transport errors.
#[derive(Debug, Error)]
pub enum DialogError {
    #[error("message '{key}' missing for locale {locale}")]
    MissingMessage { key: String, locale: String },

    #[error("required slot '{0}' missing")]
    MissingSlot(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("search error: {0}")]
    Search(#[from] SearchError),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<FinderError> for DialogError {
    fn from(err: FinderError) -> Self {
        DialogError::Storage(err.to_string())
    }
}
