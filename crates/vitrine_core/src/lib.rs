//! Core data types for the Vitrine content generation library.
//!
//! This crate provides the foundation data types used across all Vitrine
//! interfaces: the generation request and style vocabulary, reference-image
//! payloads, the model-call response shapes, the generated post/campaign
//! records, and the deterministic prompt builder.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod post;
mod prompt;
mod request;
mod response;
mod style;
mod telemetry;

pub use media::{InlineImage, ReferenceImage};
pub use post::{Campaign, CampaignPlan, Caption, PlannedPost, Post, PostCopy};
pub use prompt::{
    NO_TEXT_RULE, SQUARE_FORMAT_RULE, campaign_image_prompt, campaign_text_prompt, image_prompt,
    text_prompt,
};
pub use request::{GenerationRequest, GenerationRequestBuilder, GenerationRequestBuilderError};
pub use response::{Candidate, ModelResponse, ResponsePart};
pub use style::{CaptionTone, ImageStyle, StyleGuide};
pub use telemetry::{init_telemetry, shutdown_telemetry};
