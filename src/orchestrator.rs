//! One clipboard translation run.
//!
//! The run is a straight line: read the selection, connect a backend,
//! detect and translate, write the clipboard, notify. Every collaborator is
//! passed in, so the whole flow runs against fakes in tests.

use std::fmt;

use anyhow::{Context, Result};

use crate::clipboard::Clipboard;
use crate::config::ResolvedConfig;
use crate::notify::{Notice, Notifier};
use crate::translation::{Language, Mode, TranslationError, Translator};
use crate::ui::{Spinner, Style};
use crate::{status, warn};

/// Line placed between the original text and the translation in append mode.
pub const APPEND_SEPARATOR: &str = "\n---\n";

/// Per-run options taken from the resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub known: String,
    pub learn: String,
    pub mode: Mode,
    pub append: bool,
    pub list: bool,
}

impl From<&ResolvedConfig> for RunOptions {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            known: config.known.clone(),
            learn: config.learn.clone(),
            mode: config.mode,
            append: config.append,
            list: config.list,
        }
    }
}

/// The text to translate plus the language pair it is judged against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_text: String,
    pub known: String,
    pub learn: String,
    pub mode: Mode,
}

impl TranslationRequest {
    /// Target for text detected as `detected`: text already in the known
    /// language goes to the learn language, anything else to the known one.
    pub fn target_for(&self, detected: &str) -> &str {
        if detected == self.known {
            &self.learn
        } else {
            &self.known
        }
    }
}

/// How the source language was established.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// The chat model decided on its own.
    Llm,
    /// The classical backend detected this language code.
    Detected(String),
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Llm => f.write_str("with LLM"),
            Self::Detected(code) => write!(f, "from {code}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub translated_text: String,
    pub detection: Detection,
}

/// How a run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    ClipboardUnreadable,
    EmptyClipboard,
    Languages(Vec<Language>),
    Translated {
        result: TranslationResult,
        clipboard_text: String,
    },
}

/// Builds the text written back to the clipboard.
pub fn compose_output(original: &str, translation: &str, append: bool) -> String {
    if append {
        format!("{original}{APPEND_SEPARATOR}{translation}")
    } else {
        translation.to_string()
    }
}

pub struct Orchestrator<C, N> {
    clipboard: C,
    notifier: N,
    options: RunOptions,
}

impl<C: Clipboard, N: Notifier> Orchestrator<C, N> {
    pub const fn new(clipboard: C, notifier: N, options: RunOptions) -> Self {
        Self {
            clipboard,
            notifier,
            options,
        }
    }

    pub fn into_parts(self) -> (C, N) {
        (self.clipboard, self.notifier)
    }

    /// Runs the whole flow once.
    ///
    /// `connect` builds the backend for the configured mode. It is only
    /// called once the selection holds text, and the backend is dropped when
    /// the run returns.
    pub async fn run<T, F>(&mut self, connect: F) -> Result<Outcome>
    where
        T: Translator,
        F: FnOnce(Mode) -> Result<T, TranslationError>,
    {
        self.clipboard.set_primary(true);

        let text = match self.clipboard.read_text() {
            Ok(text) => text,
            Err(e) => {
                warn!("failed to read the clipboard: {e}");
                self.notify(&Notice::new("Error reading the clipboard", e.to_string()));
                return Ok(Outcome::ClipboardUnreadable);
            }
        };

        if text.is_empty() {
            self.notify(&Notice::new("Error", "No text selected"));
            return Ok(Outcome::EmptyClipboard);
        }
        status!("{} {text}", Style::label("selected text:"));

        let backend = match connect(self.options.mode) {
            Ok(backend) => backend,
            Err(e) => {
                self.notify(&Notice::new("Error", e.to_string()));
                return Err(e).context("Failed to create the translation client");
            }
        };

        if self.options.list {
            let languages = {
                let _spinner = Spinner::new("Fetching supported languages...");
                backend.supported_languages(&self.options.known).await
            };
            return languages
                .map(Outcome::Languages)
                .map_err(|e| self.fail("Unable to list the supported languages", e));
        }

        let request = TranslationRequest {
            source_text: text,
            known: self.options.known.clone(),
            learn: self.options.learn.clone(),
            mode: backend.mode(),
        };
        let result = self.translate(&backend, &request).await?;
        status!("{} {}", Style::label("translated text:"), result.translated_text);

        self.clipboard.set_primary(false);

        let output = compose_output(
            &request.source_text,
            &result.translated_text,
            self.options.append,
        );
        if let Err(e) = self.clipboard.write_text(&output) {
            self.notify(&Notice::new("Error", "Unable to write the clipboard"));
            return Err(e).context("Failed to write the clipboard");
        }

        self.notify(&Notice::new(
            format!("Translating {}: {}", result.detection, request.source_text),
            result.translated_text.clone(),
        ));

        Ok(Outcome::Translated {
            result,
            clipboard_text: output,
        })
    }

    async fn translate<T: Translator>(
        &mut self,
        backend: &T,
        request: &TranslationRequest,
    ) -> Result<TranslationResult> {
        match request.mode {
            // The system instruction picks the direction; `learn` is not consulted.
            Mode::Llm => {
                let translated = {
                    let _spinner = Spinner::new("Translating...");
                    backend.translate(&request.known, &request.source_text).await
                };
                let translated_text =
                    translated.map_err(|e| self.fail("Unable to translate the language", e))?;
                Ok(TranslationResult {
                    translated_text,
                    detection: Detection::Llm,
                })
            }
            Mode::Classical => {
                let detected = {
                    let _spinner = Spinner::new("Detecting language...");
                    backend.detect_language(&request.source_text).await
                };
                let detected = detected.map_err(|e| self.fail("Unable to detect the language", e))?;
                status!("{} {}", Style::label("detected language:"), Style::code(&detected));

                let target = request.target_for(&detected);
                let translated = {
                    let _spinner = Spinner::new("Translating...");
                    backend.translate(target, &request.source_text).await
                };
                let translated_text =
                    translated.map_err(|e| self.fail("Unable to translate the language", e))?;
                Ok(TranslationResult {
                    translated_text,
                    detection: Detection::Detected(detected),
                })
            }
        }
    }

    /// Notifies about a failed step and returns the error for propagation.
    fn fail(&mut self, body: &'static str, err: TranslationError) -> anyhow::Error {
        self.notify(&Notice::new("Error", body));
        anyhow::Error::new(err).context(body)
    }

    fn notify(&mut self, notice: &Notice) {
        if let Err(e) = self.notifier.push(notice) {
            warn!("{e:#}");
        }
    }
}
