//! Tests for provider selection.

use async_trait::async_trait;
use std::sync::Arc;
use vitrine_core::ReferenceImage;
use vitrine_error::VitrineResult;
use vitrine_interface::{ImageGenerator, ImageHandle};
use vitrine_models::{ProviderId, ProviderRouter};

/// Stub backend returning a fixed URL, for checking unmodified forwarding.
struct FixedUrlGenerator(&'static str);

#[async_trait]
impl ImageGenerator for FixedUrlGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _reference_images: &[ReferenceImage],
    ) -> VitrineResult<ImageHandle> {
        Ok(ImageHandle::Url(self.0.to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "fixed"
    }
}

#[tokio::test]
async fn unspecified_provider_resolves_to_demo() {
    let router = ProviderRouter::new();
    let handle = router.generate(None, "prompt", &[]).await.unwrap();
    assert_eq!(handle, ImageHandle::placeholder());
}

#[tokio::test]
async fn unregistered_provider_falls_back_to_demo() {
    let router = ProviderRouter::new();
    let handle = router
        .generate(Some(ProviderId::Replicate), "prompt", &[])
        .await
        .unwrap();
    assert_eq!(handle, ImageHandle::placeholder());
}

#[test]
fn unrecognized_provider_name_parses_to_none() {
    assert_eq!(ProviderId::parse("dall-e"), None);
    assert_eq!(ProviderId::parse(""), None);
    assert_eq!(ProviderId::parse("gemini"), Some(ProviderId::Gemini));
}

#[tokio::test]
async fn registered_adapter_output_is_forwarded_unmodified() {
    let router = ProviderRouter::new().with_adapter(
        ProviderId::Replicate,
        Arc::new(FixedUrlGenerator("https://example.com/out.png")),
    );

    let handle = router
        .generate(Some(ProviderId::Replicate), "prompt", &[])
        .await
        .unwrap();
    assert_eq!(
        handle,
        ImageHandle::Url("https://example.com/out.png".to_string())
    );

    // Other identifiers still reach the fallback.
    let fallback = router.generate(None, "prompt", &[]).await.unwrap();
    assert_eq!(fallback, ImageHandle::placeholder());
}

#[test]
fn resolve_reports_backend_names() {
    let router = ProviderRouter::new();
    assert_eq!(router.resolve(None).backend_name(), "demo");
    assert_eq!(
        router.resolve(Some(ProviderId::Demo)).backend_name(),
        "demo"
    );
}
