//! Deterministic prompt rendering.
//!
//! Pure functions from a [`GenerationRequest`] to instruction text. No
//! randomness, no I/O, no failure modes: identical input always renders
//! identical output, and every style-guide field appears verbatim so the
//! downstream model has no missing context.

use crate::GenerationRequest;

/// Constraint forbidding rendered text inside generated images.
///
/// Embedded in every image prompt.
pub const NO_TEXT_RULE: &str = "Absolute rule: the generated image must not contain any text, \
     letters, or words under any circumstances. It must be purely visual.";

/// Fixed aspect-ratio requirement embedded in every image prompt.
pub const SQUARE_FORMAT_RULE: &str =
    "The final image must be professional quality, visually striking, and in square (1:1) format.";

/// Render the image instruction for a standalone post.
pub fn image_prompt(request: &GenerationRequest) -> String {
    let guide = request.style_guide();
    format!(
        "Critical image analysis and social media content generation.\n\
         \n\
         Step 1: identify the main subject.\n\
         First, analyze the attached reference images carefully to identify the main \
         product, service, or subject. The post must be about this specific subject.\n\
         \n\
         Step 2: generate the new image.\n\
         Based on the identified subject, generate a completely new image for a social \
         media post that combines the subject with the idea of the post. The new image must:\n\
         - Clearly feature the subject identified in step 1 as the main focus.\n\
         - Reflect the context or message of the post: \"{description}\".\n\
         - Follow the visual style: \"{style}\".\n\
         - Adhere to the brand style guide:\n\
         \x20   - Brand colors: {brand_colors}.\n\
         \x20   - Key elements to incorporate: {key_elements}.\n\
         \x20   - Concepts to avoid: {keywords_to_avoid}.\n\
         - {no_text}\n\
         - {square} Do not copy the reference images; create an original scene that \
         represents the product in the requested context.\n",
        description = request.description(),
        style = request.image_style(),
        brand_colors = guide.brand_colors,
        key_elements = guide.key_elements,
        keywords_to_avoid = guide.keywords_to_avoid,
        no_text = NO_TEXT_RULE,
        square = SQUARE_FORMAT_RULE,
    )
}

/// Render the text instruction for a standalone post.
///
/// The structured call pairs this prompt with the single-post response
/// schema; the prompt itself only sets context and voice.
pub fn text_prompt(request: &GenerationRequest) -> String {
    let guide = request.style_guide();
    format!(
        "You are a social media marketing expert. Based on the following product \
         description and style guide, create a complete set of text assets for a social \
         media post. The target audience is general consumers.\n\
         \n\
         Product/topic description:\n\
         {description}\n\
         \n\
         Desired image style:\n\
         {style}\n\
         \n\
         Desired caption tone:\n\
         {tone}\n\
         \n\
         Style guide:\n\
         - Brand colors: {brand_colors}\n\
         - Key elements: {key_elements}\n\
         - Keywords to avoid: {keywords_to_avoid}\n\
         \n\
         Provide the output in JSON format.\n",
        description = request.description(),
        style = request.image_style(),
        tone = request.caption_tone(),
        brand_colors = guide.brand_colors,
        key_elements = guide.key_elements,
        keywords_to_avoid = guide.keywords_to_avoid,
    )
}

/// Render the planning instruction for a 3-post campaign.
///
/// Encodes the narrative contract: teaser, detail, then call to action.
pub fn campaign_text_prompt(request: &GenerationRequest) -> String {
    let guide = request.style_guide();
    format!(
        "You are a social media marketing strategist. Your task is to create a 3-post \
         mini campaign.\n\
         The campaign must follow a logical narrative:\n\
         1. Post 1 (teaser/awareness): spark curiosity about the topic.\n\
         2. Post 2 (detail/consideration): provide more information and benefits.\n\
         3. Post 3 (action/conversion): encourage a specific action (purchase, visit, signup).\n\
         \n\
         Central campaign topic:\n\
         {description}\n\
         \n\
         Overall style guide:\n\
         - Visual style: {style}\n\
         - Caption tone: {tone}\n\
         - Brand colors: {brand_colors}\n\
         - Key elements: {key_elements}\n\
         - Keywords to avoid: {keywords_to_avoid}\n\
         \n\
         For each of the 3 posts, provide:\n\
         - The goal of the post within the campaign.\n\
         - A detailed description for the image model to generate that post's image \
         (unique per post and aligned with the strategy).\n\
         - Alt text.\n\
         - A main caption (text, hashtags, cta).\n\
         - Two caption variations.\n\
         - A posting suggestion.\n\
         - Suggested emojis.\n\
         \n\
         Provide the output as a single JSON object.\n",
        description = request.description(),
        style = request.image_style(),
        tone = request.caption_tone(),
        brand_colors = guide.brand_colors,
        key_elements = guide.key_elements,
        keywords_to_avoid = guide.keywords_to_avoid,
    )
}

/// Render the image instruction for one campaign post.
///
/// The per-post `image_description` comes from the campaign plan; the shared
/// style and brand context comes from the request.
pub fn campaign_image_prompt(request: &GenerationRequest, image_description: &str) -> String {
    let guide = request.style_guide();
    format!(
        "Critical image analysis and social media content generation.\n\
         \n\
         Step 1: identify the main subject.\n\
         Analyze the attached reference images carefully to identify the main product \
         or service.\n\
         \n\
         Step 2: generate the new image.\n\
         Based on the identified subject and the description below, generate an image \
         for one post:\n\
         Image description: \"{image_description}\"\n\
         \n\
         Image requirements:\n\
         - Follow the visual style: \"{style}\".\n\
         - Adhere to the brand style guide: colors ({brand_colors}), elements \
         ({key_elements}), avoid ({keywords_to_avoid}).\n\
         - {no_text}\n\
         - {square}\n",
        style = request.image_style(),
        brand_colors = guide.brand_colors,
        key_elements = guide.key_elements,
        keywords_to_avoid = guide.keywords_to_avoid,
        no_text = NO_TEXT_RULE,
        square = SQUARE_FORMAT_RULE,
    )
}
