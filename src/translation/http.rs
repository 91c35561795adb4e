//! Request plumbing shared by both backends.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::TranslationError;

/// Default timeout for backend requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the API key on every Google API request.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

pub fn build_client() -> Result<Client, TranslationError> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    details: Vec<ErrorDetail>,
}

/// One `google.rpc` detail entry; only `ErrorInfo` carries a reason.
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    reason: Option<String>,
}

/// Reason Google APIs report for a missing, malformed or revoked key.
const API_KEY_INVALID: &str = "API_KEY_INVALID";

/// Decodes a successful JSON response, or maps an error status onto
/// [`TranslationError`].
///
/// `key_var` names the environment variable the key came from, so a rejected
/// key can point the user at it.
pub async fn decode<T: DeserializeOwned>(
    response: Response,
    key_var: &'static str,
) -> Result<T, TranslationError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(classify_error(status.as_u16(), &body, key_var));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| TranslationError::Parse(e.to_string()))
}

fn classify_error(status: u16, body: &str, key_var: &'static str) -> TranslationError {
    let (message, reasons) = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let reasons: Vec<String> = envelope
                .error
                .details
                .into_iter()
                .filter_map(|detail| detail.reason)
                .collect();
            (envelope.error.message, reasons)
        }
        Err(_) => (body.trim().to_string(), Vec::new()),
    };

    // Older responses carry no reason; fall back to the message text then.
    let key_rejected = matches!(status, 401 | 403)
        || if reasons.is_empty() {
            status == 400 && message.contains("API key")
        } else {
            reasons.iter().any(|reason| reason == API_KEY_INVALID)
        };

    if key_rejected {
        TranslationError::AuthRejected {
            var: key_var,
            status,
            message,
        }
    } else {
        TranslationError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_invalid_key_reason() {
        let body = r#"{"error":{"code":400,"message":"API key expired. Please renew the API key.","status":"INVALID_ARGUMENT","details":[{"@type":"type.googleapis.com/google.rpc.ErrorInfo","reason":"API_KEY_INVALID","domain":"googleapis.com"}]}}"#;
        let err = classify_error(400, body, "GEMINI_APIKEY");
        assert!(matches!(
            err,
            TranslationError::AuthRejected {
                var: "GEMINI_APIKEY",
                status: 400,
                ..
            }
        ));
    }

    #[test]
    fn test_classify_other_reason_is_not_auth() {
        let body = r#"{"error":{"code":400,"message":"Invalid API key format for field q.","details":[{"@type":"type.googleapis.com/google.rpc.BadRequest"},{"@type":"type.googleapis.com/google.rpc.ErrorInfo","reason":"INVALID_VALUE"}]}}"#;
        let err = classify_error(400, body, "GOOGLE_TRANSLATE_APIKEY");
        assert!(!err.is_auth());
        assert!(matches!(err, TranslationError::Api { status: 400, .. }));
    }

    #[test]
    fn test_classify_invalid_key_message_without_reason() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        let err = classify_error(400, body, "GOOGLE_TRANSLATE_APIKEY");
        assert!(matches!(
            err,
            TranslationError::AuthRejected {
                var: "GOOGLE_TRANSLATE_APIKEY",
                status: 400,
                ..
            }
        ));
    }

    #[test]
    fn test_classify_forbidden_is_auth() {
        let err = classify_error(403, "", "GEMINI_APIKEY");
        assert!(err.is_auth());
    }

    #[test]
    fn test_classify_server_error() {
        let body = r#"{"error":{"code":500,"message":"Internal error encountered."}}"#;
        let err = classify_error(500, body, "GEMINI_APIKEY");
        let TranslationError::Api { status, message } = err else {
            panic!("expected an API error");
        };
        assert_eq!(status, 500);
        assert_eq!(message, "Internal error encountered.");
    }

    #[test]
    fn test_classify_plain_text_body() {
        let err = classify_error(502, "  bad gateway \n", "GEMINI_APIKEY");
        assert_eq!(err.to_string(), "API error (502): bad gateway");
    }
}
