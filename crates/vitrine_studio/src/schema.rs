//! JSON response schemas for the structured calls.
//!
//! These are the schema values sent with `responseSchema`; the model's
//! output is constrained to parse against them. Field names match the
//! camelCase serde shapes in `vitrine_core::post`.

use serde_json::{Value, json};

/// Schema for a single caption: text, hashtags, and a call to action.
pub fn caption_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "text": {
                "type": "STRING",
                "description": "The main body text of the caption.",
            },
            "hashtags": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of relevant hashtags, without the '#' symbol.",
            },
            "cta": {
                "type": "STRING",
                "description": "A compelling call to action for the post.",
            },
        },
        "required": ["text", "hashtags", "cta"],
    })
}

/// Schema for the single-post text assets.
pub fn post_copy_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "altText": {
                "type": "STRING",
                "description": "Descriptive alt text for the generated image, focused on accessibility.",
            },
            "mainCaption": caption_schema(),
            "captionVariations": {
                "type": "ARRAY",
                "items": caption_schema(),
                "description": "Two alternative caption variations.",
            },
            "postingSuggestion": {
                "type": "STRING",
                "description": "A brief suggestion for the best time or context to publish this post.",
            },
            "suggestedEmojis": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of 3 to 5 relevant emojis to enhance the post.",
            },
        },
        "required": [
            "altText",
            "mainCaption",
            "captionVariations",
            "postingSuggestion",
            "suggestedEmojis",
        ],
    })
}

/// Schema for the campaign planning call: strategy plus exactly three
/// post descriptors, each additionally carrying its goal and the
/// description that drives its image call.
pub fn campaign_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "campaignStrategy": {
                "type": "STRING",
                "description": "A brief description of the overall 3-post campaign strategy.",
            },
            "posts": {
                "type": "ARRAY",
                "description": "A list containing exactly 3 post objects.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "postGoal": {
                            "type": "STRING",
                            "description": "This post's specific goal within the campaign (e.g., spark curiosity).",
                        },
                        "imageDescription": {
                            "type": "STRING",
                            "description": "A detailed description for generating this specific post's image.",
                        },
                        "altText": { "type": "STRING" },
                        "mainCaption": caption_schema(),
                        "captionVariations": {
                            "type": "ARRAY",
                            "items": caption_schema(),
                        },
                        "postingSuggestion": { "type": "STRING" },
                        "suggestedEmojis": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                        },
                    },
                    "required": [
                        "postGoal",
                        "imageDescription",
                        "altText",
                        "mainCaption",
                        "captionVariations",
                        "postingSuggestion",
                        "suggestedEmojis",
                    ],
                },
            },
        },
        "required": ["campaignStrategy", "posts"],
    })
}
