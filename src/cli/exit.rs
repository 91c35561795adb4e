//! Mapping from errors to process exit codes.

use crate::clipboard::ClipboardError;
use crate::translation::TranslationError;

/// Picks the exit code for an error that ended the run.
///
/// The first recognized error in the chain wins.
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    for cause in err.chain() {
        if let Some(err) = cause.downcast_ref::<TranslationError>() {
            return translation_exit_code(err);
        }
        if cause.is::<ClipboardError>() {
            return exitcode::IOERR;
        }
        if cause.is::<toml::de::Error>() {
            return exitcode::CONFIG;
        }
    }
    exitcode::SOFTWARE
}

const fn translation_exit_code(err: &TranslationError) -> exitcode::ExitCode {
    match err {
        TranslationError::MissingApiKey { .. } | TranslationError::AuthRejected { .. } => {
            exitcode::CONFIG
        }
        TranslationError::InvalidLanguageCode(_) => exitcode::USAGE,
        TranslationError::UnsupportedOperation { .. }
        | TranslationError::Network(_)
        | TranslationError::Api { .. }
        | TranslationError::Parse(_) => exitcode::UNAVAILABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_missing_key_is_config_error() {
        let err: anyhow::Error = TranslationError::MissingApiKey {
            var: "GEMINI_APIKEY",
        }
        .into();
        assert_eq!(exit_code(&err), exitcode::CONFIG);
    }

    #[test]
    fn test_code_found_through_context() {
        let result: Result<(), TranslationError> =
            Err(TranslationError::InvalidLanguageCode("12".to_string()));
        let err = result.context("Failed to translate").unwrap_err();
        assert_eq!(exit_code(&err), exitcode::USAGE);
    }

    #[test]
    fn test_backend_failure_is_unavailable() {
        let err: anyhow::Error = TranslationError::Api {
            status: 503,
            message: "overloaded".to_string(),
        }
        .into();
        assert_eq!(exit_code(&err), exitcode::UNAVAILABLE);
    }

    #[test]
    fn test_unknown_error_is_software() {
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), exitcode::SOFTWARE);
    }
}
