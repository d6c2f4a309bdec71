//! Wire types for the `generateContent` REST endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

use brandcraft_core::prelude::*;
use brandcraft_core::BrandIdentity;

/// MIME type requested for the model output
pub const JSON_MIME_TYPE: &str = "application/json";

// ─────────────────────────────────────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// A single-turn user prompt asking for JSON matching `schema`
    pub fn json(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            contents: vec![Content::user(prompt)],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE.to_string(),
                response_schema: schema,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

/// A conversation turn
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response
// ─────────────────────────────────────────────────────────────────────────────

/// Successful response body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    ///
    /// Returns `None` when there is no candidate or it carries no text.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Why the prompt was blocked, if it was
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl ApiErrorEnvelope {
    /// Best-effort message for a failed response body
    pub fn message_from_body(body: &str) -> String {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => match envelope.error.status {
                Some(status) => format!("{} ({})", envelope.error.message, status),
                None => envelope.error.message,
            },
            Err(_) => body.trim().chars().take(200).collect(),
        }
    }
}

/// Parse the model's JSON text into a [`BrandIdentity`].
///
/// Only the shape is checked; field contents are trusted.
pub fn parse_identity(text: &str) -> Result<BrandIdentity> {
    serde_json::from_str(text.trim()).map_err(|e| Error::malformed_identity(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateContentRequest::json("hello", json!({"type": "OBJECT"}));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_response_text_joins_parts() {
        let body = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"a\":"}, {"text": "1}"}]},
                "finishReason": "STOP"
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"a\":1}"));
        assert_eq!(response.candidates[0].finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert!(response.text().is_none());
        assert_eq!(response.block_reason(), Some("SAFETY"));
    }

    #[test]
    fn test_error_message_from_envelope() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(
            ApiErrorEnvelope::message_from_body(body),
            "API key not valid (INVALID_ARGUMENT)"
        );
    }

    #[test]
    fn test_error_message_from_plain_body() {
        assert_eq!(
            ApiErrorEnvelope::message_from_body("  upstream unavailable \n"),
            "upstream unavailable"
        );
    }

    #[test]
    fn test_parse_identity_rejects_non_json() {
        let err = parse_identity("Sorry, I can't help with that.").unwrap_err();
        assert!(matches!(err, Error::MalformedIdentity { .. }));
    }

    #[test]
    fn test_parse_identity_rejects_wrong_shape() {
        let err = parse_identity(r#"{"name": "Nestly", "colors": "red"}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedIdentity { .. }));
    }
}
