//! Replicate adapter for the provider-abstraction path.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::instrument;
use vitrine_core::ReferenceImage;
use vitrine_error::{ProviderError, ProviderErrorKind, VitrineResult};
use vitrine_interface::{ImageGenerator, ImageHandle};

const REPLICATE_API_BASE: &str = "https://api.replicate.com/v1";
const TOKEN_VAR: &str = "REPLICATE_API_TOKEN";
const DEFAULT_MODEL: &str = "black-forest-labs/flux-schnell";

/// Adapter for Replicate-hosted image models.
///
/// Issues a single blocking-mode prediction (`Prefer: wait`) and returns the
/// first output URL. Fails loudly with a `ProviderError` carrying the
/// upstream status.
pub struct ReplicateGenerator {
    http: reqwest::Client,
    token: String,
    model: String,
}

impl std::fmt::Debug for ReplicateGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplicateGenerator")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl ReplicateGenerator {
    /// Create an adapter from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a provider error when `REPLICATE_API_TOKEN` is absent.
    pub fn new() -> VitrineResult<Self> {
        let token = env::var(TOKEN_VAR).map_err(|_| {
            ProviderError::new(
                "replicate",
                ProviderErrorKind::MissingCredential(TOKEN_VAR.to_string()),
            )
        })?;
        Ok(Self::with_token(token))
    }

    /// Create an adapter with an explicit token and the default model.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::with_model(token, DEFAULT_MODEL)
    }

    /// Create an adapter with an explicit token and model.
    pub fn with_model(token: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            model: model.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct PredictionRequest<'a> {
    input: PredictionInput<'a>,
}

#[derive(Debug, Serialize)]
struct PredictionInput<'a> {
    prompt: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    image_input: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    status: String,
    #[serde(default)]
    output: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

impl Prediction {
    /// First output URL; Replicate returns either a string or a list.
    fn first_output_url(&self) -> Option<String> {
        match self.output.as_ref()? {
            serde_json::Value::String(url) => Some(url.clone()),
            serde_json::Value::Array(urls) => urls
                .iter()
                .find_map(|value| value.as_str().map(str::to_string)),
            _ => None,
        }
    }
}

#[async_trait]
impl ImageGenerator for ReplicateGenerator {
    #[instrument(
        name = "replicate_generate",
        skip(self, prompt, reference_images),
        fields(model = %self.model, references = reference_images.len())
    )]
    async fn generate(
        &self,
        prompt: &str,
        reference_images: &[ReferenceImage],
    ) -> VitrineResult<ImageHandle> {
        let url = format!("{REPLICATE_API_BASE}/models/{}/predictions", self.model);
        let request = PredictionRequest {
            input: PredictionInput {
                prompt,
                image_input: reference_images
                    .iter()
                    .map(|image| format!("data:{};base64,{}", image.mime_type, image.data))
                    .collect(),
            },
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header("Prefer", "wait")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ProviderError::new("replicate", ProviderErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ProviderError::new("replicate", ProviderErrorKind::Transport(e.to_string()))
        })?;

        if !status.is_success() {
            return Err(ProviderError::new(
                "replicate",
                ProviderErrorKind::Http {
                    status: status.as_u16(),
                    message: body,
                },
            )
            .into());
        }

        let prediction: Prediction = serde_json::from_str(&body).map_err(|e| {
            ProviderError::new(
                "replicate",
                ProviderErrorKind::Payload(format!("failed to decode prediction body: {e}")),
            )
        })?;

        if let Some(error) = &prediction.error {
            return Err(ProviderError::new(
                "replicate",
                ProviderErrorKind::Payload(format!("prediction failed: {error}")),
            )
            .into());
        }

        prediction
            .first_output_url()
            .map(ImageHandle::Url)
            .ok_or_else(|| {
                ProviderError::new(
                    "replicate",
                    ProviderErrorKind::Payload(format!(
                        "prediction ended with status '{}' and no output",
                        prediction.status
                    )),
                )
                .into()
            })
    }

    fn backend_name(&self) -> &'static str {
        "replicate"
    }
}
