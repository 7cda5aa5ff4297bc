//! Trait definitions for the Vitrine content generation library.
//!
//! This crate provides the seams between the orchestration layer and the
//! backends: the multimodal driver trait, the pluggable image-provider
//! trait, and the image-handle type they exchange.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ImageGenerator, Vision, VitrineDriver};
pub use types::ImageHandle;
