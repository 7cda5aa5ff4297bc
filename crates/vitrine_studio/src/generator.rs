//! Content generation flows.

use tracing::instrument;
use vitrine_core::{
    Campaign, GenerationRequest, Post, campaign_image_prompt, campaign_text_prompt, image_prompt,
    text_prompt,
};
use vitrine_error::VitrineResult;
use vitrine_interface::{ImageHandle, VitrineDriver};

use crate::{schema, validate};

/// How many posts a campaign always contains.
pub const CAMPAIGN_POST_COUNT: usize = 3;

/// Orchestrates a driver through the single-post and campaign flows.
///
/// The generator owns no state beyond the driver; every call builds its own
/// prompts and owns its own response buffers. It performs no retries: all
/// non-tolerated failures propagate unmodified to the caller.
///
/// # Examples
///
/// ```no_run
/// use vitrine_core::{
///     CaptionTone, GenerationRequest, ImageStyle, ReferenceImage, StyleGuide,
/// };
/// use vitrine_models::GeminiClient;
/// use vitrine_studio::ContentGenerator;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let generator = ContentGenerator::new(GeminiClient::new()?);
/// let request = GenerationRequest::builder()
///     .description("Artisanal coffee shop")
///     .image_style(ImageStyle::Realistic)
///     .caption_tone(CaptionTone::Friendly)
///     .style_guide(StyleGuide::default())
///     .reference_images(vec![ReferenceImage::jpeg("/9j/4AAQ...")])
///     .build()?;
///
/// let post = generator.generate_post(&request).await?;
/// println!("alt text: {}", post.alt_text);
/// # Ok(())
/// # }
/// ```
pub struct ContentGenerator<D> {
    driver: D,
}

impl<D: VitrineDriver> ContentGenerator<D> {
    /// Create a generator around a driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Generate one post: an image plus a full set of text assets.
    ///
    /// The image call and the structured text call are independent and run
    /// concurrently.
    ///
    /// # Errors
    ///
    /// Propagates the driver's `ProviderError`s,
    /// `GenerationError(NoImageReturned)` when the image response carries no
    /// inline data, and `GenerationError(MalformedResponse)` when the text
    /// response does not match the expected shape.
    #[instrument(name = "generate_post", skip(self, request))]
    pub async fn generate_post(&self, request: &GenerationRequest) -> VitrineResult<Post> {
        let image_instruction = image_prompt(request);
        let text_instruction = text_prompt(request);
        let copy_schema = schema::post_copy_schema();

        let (image_response, text_response) = tokio::try_join!(
            self.driver
                .generate_image(&image_instruction, request.reference_images()),
            self.driver
                .generate_structured(&text_instruction, &copy_schema),
        )?;

        let image = validate::first_inline_image(&image_response)?;
        let copy = validate::parse_post_copy(&text_response)?;
        Ok(Post::from_copy(image.to_data_uri(), copy))
    }

    /// Generate a 3-post campaign.
    ///
    /// One structured call plans the whole campaign; the three image calls
    /// then run in sequence. A failed image call downgrades that post to
    /// the local placeholder instead of aborting the campaign.
    ///
    /// # Errors
    ///
    /// `GenerationError(MalformedResponse)` when the plan does not parse or
    /// does not contain exactly 3 complete posts; the planning call's
    /// `ProviderError`s propagate unmodified.
    #[instrument(name = "generate_campaign", skip(self, request))]
    pub async fn generate_campaign(&self, request: &GenerationRequest) -> VitrineResult<Campaign> {
        let plan_instruction = campaign_text_prompt(request);
        let plan_schema = schema::campaign_schema();
        let plan_response = self
            .driver
            .generate_structured(&plan_instruction, &plan_schema)
            .await?;
        let plan = validate::parse_campaign_plan(&plan_response)?;

        let mut posts = Vec::with_capacity(CAMPAIGN_POST_COUNT);
        for planned in plan.posts {
            let instruction = campaign_image_prompt(request, &planned.image_description);
            let image_url = match self.campaign_image(&instruction, request).await {
                Ok(uri) => uri,
                Err(error) => {
                    tracing::warn!(
                        goal = %planned.post_goal,
                        %error,
                        "image call failed for campaign post, substituting placeholder"
                    );
                    ImageHandle::placeholder().to_uri()
                }
            };
            posts.push(Post::from_plan(image_url, planned));
        }

        Ok(Campaign {
            campaign_strategy: plan.campaign_strategy,
            posts,
        })
    }

    /// One per-post image call: request, validate, render as a data URI.
    async fn campaign_image(
        &self,
        instruction: &str,
        request: &GenerationRequest,
    ) -> VitrineResult<String> {
        let response = self
            .driver
            .generate_image(instruction, request.reference_images())
            .await?;
        let image = validate::first_inline_image(&response)?;
        Ok(image.to_data_uri())
    }
}
