//! Generative backend integrations for Vitrine.
//!
//! This crate provides the Gemini REST client implementing
//! [`vitrine_interface::VitrineDriver`], the pluggable image-generation
//! adapters, and the provider router that selects among them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod providers;
mod router;

pub use gemini::{
    Content, GeminiClient, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, Part, ResponseCandidate,
};
pub use providers::{DemoGenerator, GeminiImageProvider, ProviderId, ReplicateGenerator};
pub use router::ProviderRouter;
