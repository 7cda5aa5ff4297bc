//! Trait definitions for content-model drivers and image backends.

use crate::ImageHandle;
use async_trait::async_trait;
use vitrine_core::{ModelResponse, ReferenceImage};
use vitrine_error::VitrineResult;

/// Core trait for multimodal content-model backends.
///
/// A driver issues one-shot request/response calls against a generative
/// model and normalizes the wire format into [`ModelResponse`]. Drivers are
/// stateless beyond the outbound network call and must not mutate the
/// reference-image sequence. Retry policy, if any, belongs to the caller.
#[async_trait]
pub trait VitrineDriver: Send + Sync {
    /// Issue a call requesting image output only, with the reference images
    /// attached as inline payloads in order.
    async fn generate_image(
        &self,
        prompt: &str,
        reference_images: &[ReferenceImage],
    ) -> VitrineResult<ModelResponse>;

    /// Issue a call requesting output constrained to the given JSON schema.
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> VitrineResult<ModelResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used for text calls.
    fn model_name(&self) -> &str;
}

/// Trait for drivers that accept image inputs (multimodal vision).
pub trait Vision: VitrineDriver {
    /// Maximum number of reference images per request.
    fn max_images_per_request(&self) -> usize {
        1
    }

    /// Supported image formats (MIME types).
    fn supported_image_formats(&self) -> &[&'static str] {
        &["image/png", "image/jpeg", "image/webp", "image/gif"]
    }

    /// Maximum image size in bytes.
    fn max_image_size_bytes(&self) -> usize {
        5 * 1024 * 1024 // 5MB default
    }
}

/// Uniform signature for pluggable image-generation backends.
///
/// One implementation exists per backend. Adapters return an image handle or
/// fail with a `ProviderError` carrying the backend name and upstream
/// status; they never retry and never mutate `reference_images`.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image from a rendered prompt and optional references.
    async fn generate(
        &self,
        prompt: &str,
        reference_images: &[ReferenceImage],
    ) -> VitrineResult<ImageHandle>;

    /// Backend name (e.g., "demo", "gemini", "replicate").
    fn backend_name(&self) -> &'static str;
}
