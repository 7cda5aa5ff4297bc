//! Style vocabulary for generation requests.

use serde::{Deserialize, Serialize};

/// Visual style for the generated image.
///
/// The display string is embedded verbatim into every image prompt.
///
/// # Examples
///
/// ```
/// use vitrine_core::ImageStyle;
///
/// assert_eq!(format!("{}", ImageStyle::Realistic), "realistic photography");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum ImageStyle {
    /// Photographic rendering with natural lighting
    #[display("realistic photography")]
    Realistic,
    /// Soft illustrated rendering
    #[display("soft illustration")]
    Illustration,
    /// Clean professional minimalism
    #[display("professional minimalism")]
    Minimalist,
}

/// Tone of voice for the generated captions.
///
/// The display string is embedded verbatim into every text prompt.
///
/// # Examples
///
/// ```
/// use vitrine_core::CaptionTone;
///
/// assert_eq!(format!("{}", CaptionTone::Friendly), "friendly");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum CaptionTone {
    /// Polished, business-appropriate voice
    #[display("professional")]
    Professional,
    /// Warm, approachable voice
    #[display("friendly")]
    Friendly,
    /// Fact-forward, educational voice
    #[display("informative")]
    Informative,
    /// Uplifting, aspirational voice
    #[display("inspirational")]
    Inspirational,
}

/// User-supplied brand constraints threaded into every prompt.
///
/// All three fields are embedded verbatim so the downstream model has no
/// missing context.
///
/// # Examples
///
/// ```
/// use vitrine_core::StyleGuide;
///
/// let guide = StyleGuide {
///     brand_colors: "brown, cream".to_string(),
///     key_elements: "coffee beans, natural light".to_string(),
///     keywords_to_avoid: "plastic".to_string(),
/// };
/// assert!(guide.brand_colors.contains("brown"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct StyleGuide {
    /// Brand color palette, free text
    pub brand_colors: String,
    /// Key visual elements to incorporate
    pub key_elements: String,
    /// Concepts and terms the model must avoid
    pub keywords_to_avoid: String,
}
