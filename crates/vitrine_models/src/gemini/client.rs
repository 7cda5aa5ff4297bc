//! REST client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use std::env;
use tracing::instrument;

use vitrine_core::{ModelResponse, ReferenceImage};
use vitrine_error::{ConfigError, ProviderError, ProviderErrorKind, VitrineResult};
use vitrine_interface::{Vision, VitrineDriver};

use super::protocol::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Environment variable holding the required API credential.
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable overriding the text model identifier.
const TEXT_MODEL_VAR: &str = "VITRINE_TEXT_MODEL";

/// Environment variable overriding the image model identifier.
const IMAGE_MODEL_VAR: &str = "VITRINE_IMAGE_MODEL";

const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Client for the Gemini API.
///
/// Holds one model identifier per call shape: a text model for structured
/// JSON calls and an image model for image-modality calls. Both are
/// configuration values with environment overrides, never per-call literals.
///
/// # Examples
///
/// ```no_run
/// use vitrine_interface::VitrineDriver;
/// use vitrine_models::GeminiClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Reads GEMINI_API_KEY; absence is a fatal configuration error.
/// let client = GeminiClient::new()?;
/// let response = client.generate_image("a quiet cafe at dawn", &[]).await?;
/// # Ok(())
/// # }
/// ```
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    text_model: String,
    image_model: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client from the process environment.
    ///
    /// Reads the API key from `GEMINI_API_KEY`; a missing key refuses to
    /// initialize the client. Model identifiers default to one consistent
    /// pair and may be overridden with `VITRINE_TEXT_MODEL` and
    /// `VITRINE_IMAGE_MODEL`.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> VitrineResult<Self> {
        let api_key = env::var(API_KEY_VAR)
            .map_err(|_| ConfigError::new("GEMINI_API_KEY environment variable not set"))?;
        Ok(Self::with_api_key(api_key))
    }

    /// Create a client with an explicit key, reading model overrides from
    /// the environment.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let text_model =
            env::var(TEXT_MODEL_VAR).unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string());
        let image_model =
            env::var(IMAGE_MODEL_VAR).unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());
        Self::with_models(api_key, text_model, image_model)
    }

    /// Create a client with explicit key and model identifiers.
    pub fn with_models(
        api_key: impl Into<String>,
        text_model: impl Into<String>,
        image_model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            text_model: text_model.into(),
            image_model: image_model.into(),
        }
    }

    /// The model identifier used for image-modality calls.
    pub fn image_model(&self) -> &str {
        &self.image_model
    }

    /// Strip an optional "models/" prefix so both spellings address the
    /// same endpoint path.
    fn model_path(name: &str) -> &str {
        name.strip_prefix("models/").unwrap_or(name)
    }

    async fn post_generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> VitrineResult<GenerateContentResponse> {
        let url = format!(
            "{GEMINI_API_BASE}/{}:generateContent",
            Self::model_path(model)
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                ProviderError::new("gemini", ProviderErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ProviderError::new("gemini", ProviderErrorKind::Transport(e.to_string()))
        })?;

        if !status.is_success() {
            return Err(ProviderError::new(
                "gemini",
                ProviderErrorKind::Http {
                    status: status.as_u16(),
                    message: body,
                },
            )
            .into());
        }

        serde_json::from_str(&body).map_err(|e| {
            ProviderError::new(
                "gemini",
                ProviderErrorKind::Payload(format!("failed to decode generateContent body: {e}")),
            )
            .into()
        })
    }
}

#[async_trait]
impl VitrineDriver for GeminiClient {
    #[instrument(
        name = "gemini_generate_image",
        skip(self, prompt, reference_images),
        fields(model = %self.image_model, references = reference_images.len())
    )]
    async fn generate_image(
        &self,
        prompt: &str,
        reference_images: &[ReferenceImage],
    ) -> VitrineResult<ModelResponse> {
        let mut parts = vec![Part::text(prompt)];
        parts.extend(
            reference_images
                .iter()
                .map(|image| Part::inline(image.mime_type.as_str(), image.data.as_str())),
        );

        let request = GenerateContentRequest::one_shot(parts, GenerationConfig::image_only());
        let response = self.post_generate(&self.image_model, &request).await?;
        Ok(response.into_model_response())
    }

    #[instrument(
        name = "gemini_generate_structured",
        skip(self, prompt, schema),
        fields(model = %self.text_model)
    )]
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> VitrineResult<ModelResponse> {
        let request = GenerateContentRequest::one_shot(
            vec![Part::text(prompt)],
            GenerationConfig::structured(schema.clone()),
        );
        let response = self.post_generate(&self.text_model, &request).await?;
        Ok(response.into_model_response())
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.text_model
    }
}

impl Vision for GeminiClient {
    fn max_images_per_request(&self) -> usize {
        16 // Gemini supports multiple images
    }

    fn supported_image_formats(&self) -> &[&'static str] {
        &[
            "image/png",
            "image/jpeg",
            "image/webp",
            "image/heic",
            "image/heif",
        ]
    }

    fn max_image_size_bytes(&self) -> usize {
        20 * 1024 * 1024 // 20MB
    }
}
