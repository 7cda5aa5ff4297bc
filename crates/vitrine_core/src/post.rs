//! Generated post and campaign records.
//!
//! The `*Copy` and `*Plan` types mirror the JSON shapes the model is asked
//! to produce (camelCase on the wire); [`Post`] and [`Campaign`] are the
//! assembled results returned to callers.

use serde::{Deserialize, Serialize};

/// One caption option: body text, hashtags, and a call to action.
///
/// All three fields are required and non-empty after generation. Hashtags
/// carry no leading '#'.
///
/// # Examples
///
/// ```
/// use vitrine_core::Caption;
///
/// let caption: Caption = serde_json::from_str(
///     r#"{"text": "Fresh roast, every morning.", "hashtags": ["coffee"], "cta": "Visit us today"}"#,
/// )
/// .unwrap();
/// assert_eq!(caption.hashtags, vec!["coffee"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    /// Main caption body
    pub text: String,
    /// Relevant hashtags, without the '#' symbol
    pub hashtags: Vec<String>,
    /// A compelling call to action
    pub cta: String,
}

/// The text assets produced by the single-post structured call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCopy {
    /// Descriptive alt text for the generated image
    pub alt_text: String,
    /// The primary caption
    pub main_caption: Caption,
    /// Exactly two alternative captions
    pub caption_variations: Vec<Caption>,
    /// When or in what context to publish
    pub posting_suggestion: String,
    /// Three to five emoji glyphs
    pub suggested_emojis: Vec<String>,
}

/// One post descriptor inside a campaign plan.
///
/// Campaign items additionally carry the post's goal within the narrative
/// arc and the description that drives its image call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedPost {
    /// This post's goal within the campaign (e.g., spark curiosity)
    pub post_goal: String,
    /// Detailed description for the image model, unique per post
    pub image_description: String,
    /// The shared text assets
    #[serde(flatten)]
    pub copy: PostCopy,
}

/// The structured output of the campaign planning call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPlan {
    /// Brief description of the overall 3-post strategy
    pub campaign_strategy: String,
    /// Exactly three post descriptors, teaser to call-to-action
    pub posts: Vec<PlannedPost>,
}

/// A fully assembled social-media post.
///
/// Never exposed without both an image and a complete caption set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Data URI or remote URL of the post image
    pub image_url: String,
    /// Descriptive alt text for accessibility
    pub alt_text: String,
    /// The primary caption
    pub main_caption: Caption,
    /// Exactly two alternative captions
    pub caption_variations: Vec<Caption>,
    /// When or in what context to publish
    pub posting_suggestion: String,
    /// Three to five emoji glyphs
    pub suggested_emojis: Vec<String>,
    /// Present only inside a campaign
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_goal: Option<String>,
    /// Internal: the description that drove this post's image call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_description: Option<String>,
}

impl Post {
    /// Assemble a standalone post from an image and its text assets.
    pub fn from_copy(image_url: impl Into<String>, copy: PostCopy) -> Self {
        Self {
            image_url: image_url.into(),
            alt_text: copy.alt_text,
            main_caption: copy.main_caption,
            caption_variations: copy.caption_variations,
            posting_suggestion: copy.posting_suggestion,
            suggested_emojis: copy.suggested_emojis,
            post_goal: None,
            image_description: None,
        }
    }

    /// Assemble a campaign post from an image and its planned descriptor.
    pub fn from_plan(image_url: impl Into<String>, plan: PlannedPost) -> Self {
        let mut post = Self::from_copy(image_url, plan.copy);
        post.post_goal = Some(plan.post_goal);
        post.image_description = Some(plan.image_description);
        post
    }
}

/// An ordered 3-post sequence following a teaser, detail, call-to-action arc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Brief description of the overall strategy
    pub campaign_strategy: String,
    /// Exactly three assembled posts
    pub posts: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planned_post_parses_camel_case_with_flattened_copy() {
        let json = r#"{
            "postGoal": "spark curiosity",
            "imageDescription": "a steaming cup at dawn",
            "altText": "coffee cup on a wooden table",
            "mainCaption": {"text": "t", "hashtags": ["a"], "cta": "c"},
            "captionVariations": [
                {"text": "u", "hashtags": ["b"], "cta": "d"},
                {"text": "v", "hashtags": ["e"], "cta": "f"}
            ],
            "postingSuggestion": "weekday mornings",
            "suggestedEmojis": ["x", "y", "z"]
        }"#;
        let planned: PlannedPost = serde_json::from_str(json).unwrap();
        assert_eq!(planned.post_goal, "spark curiosity");
        assert_eq!(planned.copy.caption_variations.len(), 2);
    }

    #[test]
    fn campaign_post_carries_goal_and_image_description() {
        let copy = PostCopy {
            alt_text: "alt".to_string(),
            main_caption: Caption {
                text: "t".to_string(),
                hashtags: vec!["a".to_string()],
                cta: "c".to_string(),
            },
            caption_variations: vec![],
            posting_suggestion: "s".to_string(),
            suggested_emojis: vec![],
        };
        let plan = PlannedPost {
            post_goal: "convert".to_string(),
            image_description: "closing shot".to_string(),
            copy,
        };
        let post = Post::from_plan("data:image/png;base64,AAAA", plan);
        assert_eq!(post.post_goal.as_deref(), Some("convert"));
        assert_eq!(post.image_description.as_deref(), Some("closing shot"));
    }
}
