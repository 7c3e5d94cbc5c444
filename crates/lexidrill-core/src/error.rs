//! Dictionary error types.
//!
//! These error types represent failures when resolving a word against the
//! remote dictionary. Defined in `lexidrill-core` so callers can tell a
//! missing word apart from a transport failure without string matching.

use thiserror::Error;

/// Errors that can occur when looking up a word.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The API answered but had no entry for the word. Carries the API's
    /// own message for display.
    #[error("word not found: {message}")]
    NotFound { message: String },

    /// The endpoint returned a non-success HTTP status.
    #[error("dictionary request failed (HTTP {status})")]
    HttpStatus { status: u16 },

    /// The response body could not be parsed.
    #[error("malformed dictionary response: {0}")]
    InvalidResponse(String),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),
}

impl DictionaryError {
    /// Returns `true` if the word simply wasn't in the dictionary, as
    /// opposed to the request itself failing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DictionaryError::NotFound { .. })
    }
}
