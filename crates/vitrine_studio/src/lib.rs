//! Content generation orchestration for Vitrine.
//!
//! The [`ContentGenerator`] drives a [`vitrine_interface::VitrineDriver`]
//! through the single-post and campaign flows: prompt rendering, the
//! image-modality and schema-constrained calls, response validation, and
//! assembly of the typed result.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
mod schema;
mod validate;

pub use generator::{CAMPAIGN_POST_COUNT, ContentGenerator};
pub use schema::{campaign_schema, caption_schema, post_copy_schema};
pub use validate::{first_inline_image, parse_campaign_plan, parse_post_copy};
