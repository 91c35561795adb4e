mod backend;
mod classical;
mod error;
mod gemini;
mod http;
mod language;
mod prompt;

pub use backend::{
    Backend, BackendSettings, DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL,
    DEFAULT_TRANSLATE_ENDPOINT, Mode, Translator, api_key_from_env,
};
pub use classical::ClassicalClient;
pub use error::TranslationError;
pub use gemini::LlmClient;
pub use language::{
    Language, format_language_line, parse_language_tag, print_languages, validate_language,
};
pub use prompt::SYSTEM_INSTRUCTION;
