//! Gemini adapter for the provider-abstraction path.

use async_trait::async_trait;
use vitrine_core::ReferenceImage;
use vitrine_error::{ProviderError, ProviderErrorKind, VitrineResult};
use vitrine_interface::{ImageGenerator, ImageHandle, VitrineDriver};

use crate::GeminiClient;

/// Adapter exposing [`GeminiClient`]'s image call as an [`ImageGenerator`].
///
/// Unlike the demo backend this fails loudly: an upstream error or a
/// response without inline image data is a `ProviderError`.
pub struct GeminiImageProvider {
    client: GeminiClient,
}

impl GeminiImageProvider {
    /// Create an adapter from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `GEMINI_API_KEY` is absent.
    pub fn new() -> VitrineResult<Self> {
        Ok(Self::with_client(GeminiClient::new()?))
    }

    /// Create an adapter around an existing client.
    pub fn with_client(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageGenerator for GeminiImageProvider {
    async fn generate(
        &self,
        prompt: &str,
        reference_images: &[ReferenceImage],
    ) -> VitrineResult<ImageHandle> {
        let response = self.client.generate_image(prompt, reference_images).await?;
        let image = response.first_inline_image().ok_or_else(|| {
            ProviderError::new(
                "gemini",
                ProviderErrorKind::Payload("no candidate carried inline image data".to_string()),
            )
        })?;
        Ok(ImageHandle::Inline(image.clone()))
    }

    fn backend_name(&self) -> &'static str {
        "gemini"
    }
}
