//! Pluggable image-generation backends.
//!
//! One adapter per backend behind [`vitrine_interface::ImageGenerator`].
//! The demo adapter always produces something visual; the real backends
//! fail loudly with a `ProviderError`.

mod demo;
mod gemini;
mod replicate;

pub use demo::DemoGenerator;
pub use gemini::GeminiImageProvider;
pub use replicate::ReplicateGenerator;

use serde::{Deserialize, Serialize};

/// Identifier for an image-generation backend.
///
/// Unknown names parse to `None`; the router resolves `None` to the demo
/// adapter.
///
/// # Examples
///
/// ```
/// use vitrine_models::ProviderId;
///
/// assert_eq!(ProviderId::parse("replicate"), Some(ProviderId::Replicate));
/// assert_eq!(ProviderId::parse("dall-e"), None);
/// assert_eq!(format!("{}", ProviderId::Demo), "demo");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Local demo backend returning the placeholder asset
    Demo,
    /// Google Gemini image model
    Gemini,
    /// Replicate-hosted image model
    Replicate,
}

impl ProviderId {
    /// Parse a lowercase backend name; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}
