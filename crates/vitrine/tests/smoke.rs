//! Smoke tests exercising the re-exported surface end to end.

use vitrine::{
    CaptionTone, GenerationRequest, ImageStyle, NO_TEXT_RULE, ProviderRouter, ReferenceImage,
    StyleGuide, campaign_schema, image_prompt,
};

fn request() -> GenerationRequest {
    GenerationRequest::builder()
        .description("Artisanal coffee shop")
        .image_style(ImageStyle::Minimalist)
        .caption_tone(CaptionTone::Professional)
        .style_guide(StyleGuide {
            brand_colors: "brown, cream".to_string(),
            key_elements: "coffee beans, natural light".to_string(),
            keywords_to_avoid: "plastic".to_string(),
        })
        .reference_images(vec![ReferenceImage::jpeg("/9j/4AAQSkZJRg==")])
        .build()
        .unwrap()
}

#[test]
fn prompt_builder_is_reachable_through_the_facade() {
    let prompt = image_prompt(&request());
    assert!(prompt.contains(NO_TEXT_RULE));
    assert!(prompt.contains("professional minimalism"));
}

#[test]
fn campaign_schema_names_the_per_post_fields() {
    let schema = campaign_schema();
    let required = schema["properties"]["posts"]["items"]["required"]
        .as_array()
        .unwrap();
    let required: Vec<&str> = required.iter().filter_map(|v| v.as_str()).collect();
    assert!(required.contains(&"postGoal"));
    assert!(required.contains(&"imageDescription"));
    assert!(required.contains(&"mainCaption"));
}

#[tokio::test]
async fn default_router_produces_a_visual_result() {
    let router = ProviderRouter::new();
    let prompt = image_prompt(&request());
    let handle = router
        .generate(None, &prompt, request().reference_images())
        .await
        .unwrap();
    assert!(handle.to_uri().starts_with("data:image/png;base64,"));
}
