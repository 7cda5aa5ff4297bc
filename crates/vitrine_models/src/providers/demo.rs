//! Demo backend: no network, always returns the placeholder asset.

use async_trait::async_trait;
use vitrine_core::ReferenceImage;
use vitrine_error::VitrineResult;
use vitrine_interface::{ImageGenerator, ImageHandle};

/// Backend used for demos and as the router's fail-open default.
///
/// Never fails and never touches the network: callers always get something
/// visual back.
///
/// # Examples
///
/// ```
/// use vitrine_interface::ImageGenerator;
/// use vitrine_models::DemoGenerator;
///
/// # #[tokio::main]
/// # async fn main() {
/// let backend = DemoGenerator;
/// let handle = backend.generate("a quiet cafe at dawn", &[]).await.unwrap();
/// assert!(handle.to_uri().starts_with("data:image/png;base64,"));
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoGenerator;

#[async_trait]
impl ImageGenerator for DemoGenerator {
    async fn generate(
        &self,
        prompt: &str,
        _reference_images: &[ReferenceImage],
    ) -> VitrineResult<ImageHandle> {
        tracing::debug!(
            prompt_chars = prompt.len(),
            "demo backend active, returning placeholder image"
        );
        Ok(ImageHandle::placeholder())
    }

    fn backend_name(&self) -> &'static str {
        "demo"
    }
}
