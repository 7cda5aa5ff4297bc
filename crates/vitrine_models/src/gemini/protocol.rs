//! Message types for the Gemini `generateContent` REST protocol.
//!
//! Request and response structures serialize to the camelCase JSON the API
//! expects. Only the fields this library uses are modeled; unknown response
//! fields are ignored on deserialization.

use serde::{Deserialize, Serialize};
use vitrine_core::{Candidate, InlineImage, ModelResponse, ResponsePart};

/// Body of a `generateContent` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents (a single user turn for one-shot calls)
    pub contents: Vec<Content>,

    /// Generation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// One-shot request with a single user content block.
    pub fn one_shot(parts: Vec<Part>, config: GenerationConfig) -> Self {
        Self {
            contents: vec![Content { parts, role: None }],
            generation_config: Some(config),
        }
    }
}

/// A block of content parts with an optional role.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Content parts in order
    #[serde(default)]
    pub parts: Vec<Part>,

    /// Role of the author ("user" or "model")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// One part of a content block: text or inline binary data.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Plain text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Inline binary payload (base64)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// A text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// An inline-data part from a base64 payload.
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// Binary payload embedded directly in a part.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type, e.g., "image/png"
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// Generation parameters for a request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Response modalities to request (e.g., `["IMAGE"]`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,

    /// MIME type the response must conform to (e.g., "application/json")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,

    /// JSON schema constraining the response body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

impl GenerationConfig {
    /// Configuration requesting image output as the only modality.
    pub fn image_only() -> Self {
        Self {
            response_modalities: Some(vec!["IMAGE".to_string()]),
            ..Self::default()
        }
    }

    /// Configuration requesting JSON output constrained to `schema`.
    pub fn structured(schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema),
            ..Self::default()
        }
    }
}

/// Body of a `generateContent` response.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates in the order the model returned them
    #[serde(default)]
    pub candidates: Vec<ResponseCandidate>,
}

/// One candidate in a `generateContent` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCandidate {
    /// Generated content, absent when the candidate was filtered
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Normalize the wire shape into the backend-neutral [`ModelResponse`].
    pub fn into_model_response(self) -> ModelResponse {
        let candidates = self
            .candidates
            .into_iter()
            .map(|candidate| Candidate {
                parts: candidate
                    .content
                    .into_iter()
                    .flat_map(|content| content.parts)
                    .filter_map(|part| {
                        if let Some(inline) = part.inline_data {
                            Some(ResponsePart::Inline(InlineImage::new(
                                inline.mime_type,
                                inline.data,
                            )))
                        } else {
                            part.text.map(ResponsePart::Text)
                        }
                    })
                    .collect(),
            })
            .collect();
        ModelResponse { candidates }
    }
}
