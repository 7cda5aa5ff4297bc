//! Response validation.
//!
//! Two synchronous, pure checks applied uniformly to model responses: the
//! image-candidate check and the structured-text check. Failures are
//! classified, never repaired.

use serde::de::DeserializeOwned;
use vitrine_core::{CampaignPlan, Caption, InlineImage, ModelResponse, PostCopy};
use vitrine_error::{GenerationError, GenerationErrorKind, VitrineResult};

/// How many alternative captions every post carries.
const CAPTION_VARIATIONS: usize = 2;

/// Accepted bounds for the suggested emoji list.
const EMOJI_RANGE: std::ops::RangeInclusive<usize> = 3..=5;

/// The first response part carrying inline binary image data.
///
/// # Errors
///
/// `GenerationError(NoImageReturned)` when no candidate contains an
/// inline-data part.
pub fn first_inline_image(response: &ModelResponse) -> VitrineResult<&InlineImage> {
    response
        .first_inline_image()
        .ok_or_else(|| GenerationError::new(GenerationErrorKind::NoImageReturned).into())
}

/// Parse and check the single-post text assets.
///
/// # Errors
///
/// `GenerationError(MalformedResponse)` when the text does not parse, a
/// required field is absent, or the shape violates the caption-variation
/// and emoji counts.
pub fn parse_post_copy(response: &ModelResponse) -> VitrineResult<PostCopy> {
    let copy: PostCopy = parse_json(response)?;
    check_copy(&copy)?;
    Ok(copy)
}

/// Parse and check the campaign plan.
///
/// # Errors
///
/// `GenerationError(MalformedResponse)` when the text does not parse, the
/// post count differs from 3, or any post descriptor is incomplete.
pub fn parse_campaign_plan(response: &ModelResponse) -> VitrineResult<CampaignPlan> {
    let plan: CampaignPlan = parse_json(response)?;
    if plan.posts.len() != crate::CAMPAIGN_POST_COUNT {
        return Err(GenerationError::malformed(format!(
            "campaign plan contained {} posts, expected {}",
            plan.posts.len(),
            crate::CAMPAIGN_POST_COUNT
        ))
        .into());
    }
    for planned in &plan.posts {
        if planned.post_goal.is_empty() {
            return Err(GenerationError::malformed("campaign post has empty postGoal").into());
        }
        if planned.image_description.is_empty() {
            return Err(
                GenerationError::malformed("campaign post has empty imageDescription").into(),
            );
        }
        check_copy(&planned.copy)?;
    }
    Ok(plan)
}

fn parse_json<T: DeserializeOwned>(response: &ModelResponse) -> VitrineResult<T> {
    let text = response.text();
    if text.is_empty() {
        return Err(GenerationError::malformed("response contained no text").into());
    }
    serde_json::from_str(&text)
        .map_err(|e| GenerationError::malformed(format!("invalid JSON: {e}")).into())
}

fn check_copy(copy: &PostCopy) -> VitrineResult<()> {
    check_caption(&copy.main_caption, "mainCaption")?;
    if copy.caption_variations.len() != CAPTION_VARIATIONS {
        return Err(GenerationError::malformed(format!(
            "expected {} caption variations, got {}",
            CAPTION_VARIATIONS,
            copy.caption_variations.len()
        ))
        .into());
    }
    for variation in &copy.caption_variations {
        check_caption(variation, "captionVariations")?;
    }
    if !EMOJI_RANGE.contains(&copy.suggested_emojis.len()) {
        return Err(GenerationError::malformed(format!(
            "expected 3 to 5 suggested emojis, got {}",
            copy.suggested_emojis.len()
        ))
        .into());
    }
    Ok(())
}

fn check_caption(caption: &Caption, field: &str) -> VitrineResult<()> {
    if caption.text.is_empty() || caption.cta.is_empty() {
        return Err(
            GenerationError::malformed(format!("{field} has an empty text or cta field")).into(),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{Candidate, ResponsePart};

    fn text_response(text: &str) -> ModelResponse {
        ModelResponse {
            candidates: vec![Candidate {
                parts: vec![ResponsePart::Text(text.to_string())],
            }],
        }
    }

    const VALID_COPY: &str = r#"{
        "altText": "a cup of coffee on a wooden table",
        "mainCaption": {"text": "Fresh roast.", "hashtags": ["coffee"], "cta": "Stop by"},
        "captionVariations": [
            {"text": "Morning fuel.", "hashtags": ["espresso"], "cta": "Try it"},
            {"text": "Slow mornings.", "hashtags": ["cafe"], "cta": "Visit us"}
        ],
        "postingSuggestion": "weekday mornings",
        "suggestedEmojis": ["a", "b", "c"]
    }"#;

    #[test]
    fn valid_copy_parses() {
        let copy = parse_post_copy(&text_response(VALID_COPY)).unwrap();
        assert_eq!(copy.caption_variations.len(), 2);
    }

    #[test]
    fn missing_cta_is_malformed() {
        let json = VALID_COPY.replace(r#", "cta": "Stop by""#, "");
        let err = parse_post_copy(&text_response(&json)).unwrap_err();
        assert!(format!("{err}").contains("Generation Error"));
    }

    #[test]
    fn empty_response_is_malformed() {
        let response = ModelResponse { candidates: vec![] };
        assert!(parse_post_copy(&response).is_err());
    }

    #[test]
    fn no_inline_image_is_classified() {
        let response = text_response("just words");
        let err = first_inline_image(&response).unwrap_err();
        assert!(format!("{err}").contains("no candidate with inline image data"));
    }
}
