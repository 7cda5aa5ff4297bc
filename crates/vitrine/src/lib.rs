//! Vitrine - social-media content generation over multimodal generative APIs.
//!
//! Vitrine turns a product description, reference images, and style
//! preferences into a ready-to-publish social-media post (or a 3-post
//! campaign): one AI-generated image plus a structured set of captions,
//! hashtags, and posting guidance.
//!
//! # Features
//!
//! - **Typed results**: posts and campaigns come back as validated records,
//!   never best-effort field access
//! - **Two call shapes**: image-modality calls with inline reference
//!   attachments, and schema-constrained JSON calls
//! - **Pluggable backends**: a uniform `ImageGenerator` trait with a
//!   registry-based router and a fail-open demo adapter
//! - **Graceful campaigns**: a failed per-post image call downgrades that
//!   post to a local placeholder instead of aborting the campaign
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vitrine::{
//!     CaptionTone, ContentGenerator, GeminiClient, GenerationRequest, ImageStyle,
//!     ReferenceImage, StyleGuide,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = ContentGenerator::new(GeminiClient::new()?);
//!
//!     let request = GenerationRequest::builder()
//!         .description("Artisanal coffee shop")
//!         .image_style(ImageStyle::Realistic)
//!         .caption_tone(CaptionTone::Friendly)
//!         .style_guide(StyleGuide {
//!             brand_colors: "brown, cream".to_string(),
//!             key_elements: "coffee beans, natural light".to_string(),
//!             keywords_to_avoid: "plastic".to_string(),
//!         })
//!         .reference_images(vec![ReferenceImage::jpeg("...base64...")])
//!         .build()?;
//!
//!     let post = generator.generate_post(&request).await?;
//!     println!("image: {} bytes of data URI", post.image_url.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Vitrine is organized as a workspace with focused crates:
//!
//! - `vitrine_core` - Data model, prompt builder, telemetry
//! - `vitrine_interface` - Driver and provider trait definitions
//! - `vitrine_error` - Error types
//! - `vitrine_models` - Gemini client, provider adapters, router
//! - `vitrine_studio` - Content generation orchestration
//!
//! This crate (`vitrine`) re-exports everything for convenience.

#![forbid(unsafe_code)]

pub use vitrine_core::*;
pub use vitrine_error::*;
pub use vitrine_interface::*;
pub use vitrine_models::*;
pub use vitrine_studio::*;
