//! Generation request types.

use crate::{CaptionTone, ImageStyle, ReferenceImage, StyleGuide};
use serde::{Deserialize, Serialize};

/// Longest product description accepted by the builder.
pub(crate) const MAX_DESCRIPTION_CHARS: usize = 300;

/// A single submission of everything the generator needs.
///
/// Immutable once built; the content generator consumes it whole. Use
/// [`GenerationRequest::builder`] to construct one. The builder rejects an
/// empty reference-image list and an over-long description.
///
/// # Examples
///
/// ```
/// use vitrine_core::{
///     CaptionTone, GenerationRequest, ImageStyle, ReferenceImage, StyleGuide,
/// };
///
/// let request = GenerationRequest::builder()
///     .description("Artisanal coffee shop")
///     .image_style(ImageStyle::Realistic)
///     .caption_tone(CaptionTone::Friendly)
///     .style_guide(StyleGuide {
///         brand_colors: "brown, cream".to_string(),
///         key_elements: "coffee beans, natural light".to_string(),
///         keywords_to_avoid: "plastic".to_string(),
///     })
///     .reference_images(vec![ReferenceImage::jpeg("/9j/4AAQ...")])
///     .build()
///     .unwrap();
///
/// assert_eq!(request.reference_images().len(), 1);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct GenerationRequest {
    /// Free-text description of the product or topic (at most 300 chars)
    description: String,
    /// Desired visual style for the generated image
    image_style: ImageStyle,
    /// Desired tone for the generated captions
    caption_tone: CaptionTone,
    /// Brand constraints threaded into every prompt
    style_guide: StyleGuide,
    /// Reference images, in submission order (must be non-empty)
    reference_images: Vec<ReferenceImage>,
}

impl GenerationRequest {
    /// Start building a request.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

impl GenerationRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(description) = &self.description
            && description.chars().count() > MAX_DESCRIPTION_CHARS
        {
            return Err(format!(
                "description exceeds {MAX_DESCRIPTION_CHARS} characters"
            ));
        }
        if let Some(images) = &self.reference_images
            && images.is_empty()
        {
            return Err("at least one reference image is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> GenerationRequestBuilder {
        GenerationRequest::builder()
            .description("Artisanal coffee shop")
            .image_style(ImageStyle::Realistic)
            .caption_tone(CaptionTone::Friendly)
            .style_guide(StyleGuide::default())
            .reference_images(vec![ReferenceImage::jpeg("abc")])
            .clone()
    }

    #[test]
    fn builder_accepts_valid_request() {
        let request = base_builder().build().unwrap();
        assert_eq!(request.description(), "Artisanal coffee shop");
        assert_eq!(*request.image_style(), ImageStyle::Realistic);
    }

    #[test]
    fn builder_rejects_empty_reference_images() {
        let result = base_builder()
            .reference_images(Vec::<ReferenceImage>::new())
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_rejects_long_description() {
        let result = base_builder().description("x".repeat(301)).build();
        assert!(result.is_err());
    }
}
