//! Client for the Gemini `generateContent` endpoint, used as a translator.

use html_escape::decode_html_entities;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::http::{API_KEY_HEADER, build_client, decode};
use super::language::parse_language_tag;
use super::prompt::SYSTEM_INSTRUCTION;
use super::{Mode, TranslationError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Chat-model client preconfigured with the translator system instruction.
#[derive(Debug)]
pub struct LlmClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(endpoint: &str, model: &str, api_key: String) -> Result<Self, TranslationError> {
        Ok(Self {
            client: build_client()?,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        })
    }

    /// Sends `text` as a single user turn and returns the first candidate.
    ///
    /// `target` is validated but otherwise unused: the system instruction
    /// decides the direction.
    pub async fn translate(&self, target: &str, text: &str) -> Result<String, TranslationError> {
        parse_language_tag(target)?;

        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let request = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: [Part {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            contents: [Content {
                role: Some("user"),
                parts: [Part { text }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let result: GenerateResponse = decode(response, Mode::Llm.api_key_var()).await?;
        result
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|text| !text.is_empty())
            .map(|text| decode_html_entities(&text).into_owned())
            .ok_or_else(|| TranslationError::Parse("Empty response".to_string()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}
