//! Client for the Google Cloud Translation Basic (v2) REST API.

use html_escape::decode_html_entities;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::http::{API_KEY_HEADER, build_client, decode};
use super::language::{Language, parse_language_tag};
use super::{Mode, TranslationError};

/// Translation model requested from the API.
const MODEL: &str = "nmt";

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: [&'a str; 1],
    target: &'a str,
    model: &'static str,
}

#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    q: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct DetectData {
    detections: Vec<Vec<Detection>>,
}

#[derive(Debug, Deserialize)]
struct Detection {
    language: String,
}

#[derive(Debug, Deserialize)]
struct LanguagesData {
    languages: Vec<Language>,
}

/// Classical NMT client: translation, detection and the language catalog.
#[derive(Debug)]
pub struct ClassicalClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl ClassicalClient {
    pub fn new(endpoint: &str, api_key: String) -> Result<Self, TranslationError> {
        Ok(Self {
            client: build_client()?,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub async fn translate(&self, target: &str, text: &str) -> Result<String, TranslationError> {
        let target = parse_language_tag(target)?;
        let request = TranslateRequest {
            q: [text],
            target: &target,
            model: MODEL,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let envelope: Envelope<TranslateData> =
            decode(response, Mode::Classical.api_key_var()).await?;
        envelope
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| decode_html_entities(&t.translated_text).into_owned())
            .ok_or_else(|| TranslationError::Parse("Empty translation list".to_string()))
    }

    /// Returns the top-ranked detected language code.
    pub async fn detect_language(&self, text: &str) -> Result<String, TranslationError> {
        let url = format!("{}/detect", self.endpoint);
        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&DetectRequest { q: [text] })
            .send()
            .await?;

        let envelope: Envelope<DetectData> =
            decode(response, Mode::Classical.api_key_var()).await?;
        envelope
            .data
            .detections
            .into_iter()
            .next()
            .and_then(|ranked| ranked.into_iter().next())
            .map(|d| d.language)
            .ok_or_else(|| TranslationError::Parse("Empty detection list".to_string()))
    }

    /// Fetches the catalog with display names localized into `target`.
    pub async fn supported_languages(
        &self,
        target: &str,
    ) -> Result<Vec<Language>, TranslationError> {
        let target = parse_language_tag(target)?;
        let url = format!("{}/languages", self.endpoint);
        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[("target", target.as_str()), ("model", MODEL)])
            .send()
            .await?;

        let envelope: Envelope<LanguagesData> =
            decode(response, Mode::Classical.api_key_var()).await?;
        Ok(envelope.data.languages)
    }
}
