//! Translation error types.

use thiserror::Error;

/// Errors raised by the translation backends.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The API key environment variable is unset or empty.
    #[error("API key not found\nMake sure you have set the {var} environment variable")]
    MissingApiKey { var: &'static str },

    /// The remote rejected the API key.
    #[error(
        "API key rejected ({status}): {message}\nCheck the value of the {var} environment variable"
    )]
    AuthRejected {
        var: &'static str,
        status: u16,
        message: String,
    },

    /// The target language is not a well-formed language tag.
    #[error("Invalid language code: '{0}'")]
    InvalidLanguageCode(String),

    /// The active backend cannot perform the requested operation.
    #[error("{operation} is not supported by the {backend} backend")]
    UnsupportedOperation {
        operation: &'static str,
        backend: &'static str,
    },

    /// Transport failure talking to the backend.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with an error status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The backend answered with a body we could not use.
    #[error("Unexpected response: {0}")]
    Parse(String),
}

impl TranslationError {
    /// Returns `true` for missing or rejected credentials.
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::MissingApiKey { .. } | Self::AuthRejected { .. })
    }
}
