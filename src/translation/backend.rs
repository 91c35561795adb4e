//! Backend selection and dispatch.

use std::fmt;

use super::classical::ClassicalClient;
use super::gemini::LlmClient;
use super::language::Language;
use super::TranslationError;

/// Default Cloud Translation v2 endpoint.
pub const DEFAULT_TRANSLATE_ENDPOINT: &str =
    "https://translation.googleapis.com/language/translate/v2";

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Which kind of backend a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Dedicated NMT translation API with explicit detection.
    Classical,
    /// Generative chat model driven by a fixed system instruction.
    Llm,
}

impl Mode {
    pub const fn from_llm_flag(use_llm: bool) -> Self {
        if use_llm { Self::Llm } else { Self::Classical }
    }

    /// Environment variable holding this mode's API key.
    pub const fn api_key_var(self) -> &'static str {
        match self {
            Self::Classical => "GOOGLE_TRANSLATE_APIKEY",
            Self::Llm => "GEMINI_APIKEY",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Classical => "classical",
            Self::Llm => "LLM",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Endpoint settings for both backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    pub translate_endpoint: String,
    pub gemini_endpoint: String,
    pub gemini_model: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            translate_endpoint: DEFAULT_TRANSLATE_ENDPOINT.to_string(),
            gemini_endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }
}

/// Reads the API key for `mode` from the environment.
///
/// Empty values count as unset.
pub fn api_key_from_env(mode: Mode) -> Option<String> {
    std::env::var(mode.api_key_var())
        .ok()
        .filter(|key| !key.trim().is_empty())
}

/// The operations the orchestrator needs from a translation backend.
#[allow(async_fn_in_trait)]
pub trait Translator {
    fn mode(&self) -> Mode;

    async fn translate(&self, target: &str, text: &str) -> Result<String, TranslationError>;

    async fn detect_language(&self, text: &str) -> Result<String, TranslationError>;

    async fn supported_languages(&self, target: &str)
    -> Result<Vec<Language>, TranslationError>;
}

/// A connected backend. Exactly one client kind is live per run.
#[derive(Debug)]
pub enum Backend {
    Classical(ClassicalClient),
    Llm(LlmClient),
}

impl Backend {
    /// Builds the client for `mode`, failing when no API key is available.
    pub fn connect(
        mode: Mode,
        settings: &BackendSettings,
        api_key: Option<String>,
    ) -> Result<Self, TranslationError> {
        let api_key = api_key.ok_or(TranslationError::MissingApiKey {
            var: mode.api_key_var(),
        })?;

        match mode {
            Mode::Classical => Ok(Self::Classical(ClassicalClient::new(
                &settings.translate_endpoint,
                api_key,
            )?)),
            Mode::Llm => Ok(Self::Llm(LlmClient::new(
                &settings.gemini_endpoint,
                &settings.gemini_model,
                api_key,
            )?)),
        }
    }

    /// Releases the underlying client.
    pub fn close(self) {
        drop(self);
    }

    fn unsupported(&self, operation: &'static str) -> TranslationError {
        TranslationError::UnsupportedOperation {
            operation,
            backend: self.mode().label(),
        }
    }
}

impl Translator for Backend {
    fn mode(&self) -> Mode {
        match self {
            Self::Classical(_) => Mode::Classical,
            Self::Llm(_) => Mode::Llm,
        }
    }

    async fn translate(&self, target: &str, text: &str) -> Result<String, TranslationError> {
        match self {
            Self::Classical(client) => client.translate(target, text).await,
            Self::Llm(client) => client.translate(target, text).await,
        }
    }

    async fn detect_language(&self, text: &str) -> Result<String, TranslationError> {
        match self {
            Self::Classical(client) => client.detect_language(text).await,
            Self::Llm(_) => Err(self.unsupported("language detection")),
        }
    }

    async fn supported_languages(
        &self,
        target: &str,
    ) -> Result<Vec<Language>, TranslationError> {
        match self {
            Self::Classical(client) => client.supported_languages(target).await,
            Self::Llm(_) => Err(self.unsupported("listing supported languages")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_key_variables() {
        assert_eq!(Mode::Classical.api_key_var(), "GOOGLE_TRANSLATE_APIKEY");
        assert_eq!(Mode::Llm.api_key_var(), "GEMINI_APIKEY");
        assert_eq!(Mode::from_llm_flag(true), Mode::Llm);
        assert_eq!(Mode::from_llm_flag(false), Mode::Classical);
    }

    #[test]
    fn test_connect_without_key_names_the_requested_mode_variable() {
        let settings = BackendSettings::default();

        let err = Backend::connect(Mode::Llm, &settings, None).unwrap_err();
        assert!(err.to_string().contains("GEMINI_APIKEY"));

        let err = Backend::connect(Mode::Classical, &settings, None).unwrap_err();
        assert!(err.to_string().contains("GOOGLE_TRANSLATE_APIKEY"));
    }

    #[test]
    fn test_connect_picks_client_kind() {
        let settings = BackendSettings::default();

        let backend = Backend::connect(Mode::Llm, &settings, Some("k".to_string())).unwrap();
        assert!(matches!(backend, Backend::Llm(ref c) if c.model() == DEFAULT_GEMINI_MODEL));
        backend.close();

        let backend = Backend::connect(Mode::Classical, &settings, Some("k".to_string())).unwrap();
        assert_eq!(backend.mode(), Mode::Classical);
    }

    #[tokio::test]
    async fn test_llm_backend_rejects_detection_and_listing() {
        let backend =
            Backend::connect(Mode::Llm, &BackendSettings::default(), Some("k".to_string()))
                .unwrap();

        let err = backend.detect_language("hello").await.unwrap_err();
        assert!(matches!(err, TranslationError::UnsupportedOperation { .. }));

        let err = backend.supported_languages("en").await.unwrap_err();
        assert!(matches!(err, TranslationError::UnsupportedOperation { .. }));
    }
}
