//! Mock driver for testing the content generator.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use vitrine_core::{Candidate, InlineImage, ModelResponse, ReferenceImage, ResponsePart};
use vitrine_error::{ProviderError, ProviderErrorKind, VitrineResult};
use vitrine_interface::VitrineDriver;

/// One scripted response for a mock call.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// A response whose single candidate carries inline image data
    Inline {
        mime_type: &'static str,
        data: &'static str,
    },
    /// A response whose single candidate carries one text part
    Text(String),
    /// A response with an empty candidates list
    Empty,
    /// A provider error with the given upstream status
    HttpError(u16),
}

/// Mock driver with separately scripted image and structured queues.
///
/// This mock allows tests to control responses and verify call ordering
/// without making actual API calls. Queues drain front-to-back; an
/// exhausted queue answers with an empty candidates list.
pub struct MockDriver {
    image_responses: Mutex<VecDeque<MockResponse>>,
    text_responses: Mutex<VecDeque<MockResponse>>,
    image_calls: Mutex<usize>,
    text_calls: Mutex<usize>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self {
            image_responses: Mutex::new(VecDeque::new()),
            text_responses: Mutex::new(VecDeque::new()),
            image_calls: Mutex::new(0),
            text_calls: Mutex::new(0),
        }
    }

    /// Queue a response for the next image call.
    pub fn push_image(&self, response: MockResponse) {
        self.image_responses.lock().unwrap().push_back(response);
    }

    /// Queue a response for the next structured call.
    pub fn push_text(&self, response: MockResponse) {
        self.text_responses.lock().unwrap().push_back(response);
    }

    /// Number of image calls issued so far.
    pub fn image_call_count(&self) -> usize {
        *self.image_calls.lock().unwrap()
    }

    /// Number of structured calls issued so far.
    #[allow(dead_code)]
    pub fn text_call_count(&self) -> usize {
        *self.text_calls.lock().unwrap()
    }

    fn respond(queue: &Mutex<VecDeque<MockResponse>>) -> VitrineResult<ModelResponse> {
        let next = queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockResponse::Empty);
        match next {
            MockResponse::Inline { mime_type, data } => Ok(ModelResponse {
                candidates: vec![Candidate {
                    parts: vec![ResponsePart::Inline(InlineImage::new(mime_type, data))],
                }],
            }),
            MockResponse::Text(text) => Ok(ModelResponse {
                candidates: vec![Candidate {
                    parts: vec![ResponsePart::Text(text)],
                }],
            }),
            MockResponse::Empty => Ok(ModelResponse { candidates: vec![] }),
            MockResponse::HttpError(status) => Err(ProviderError::new(
                "mock",
                ProviderErrorKind::Http {
                    status,
                    message: "mock failure".to_string(),
                },
            )
            .into()),
        }
    }
}

#[async_trait]
impl VitrineDriver for MockDriver {
    async fn generate_image(
        &self,
        _prompt: &str,
        _reference_images: &[ReferenceImage],
    ) -> VitrineResult<ModelResponse> {
        *self.image_calls.lock().unwrap() += 1;
        Self::respond(&self.image_responses)
    }

    async fn generate_structured(
        &self,
        _prompt: &str,
        _schema: &serde_json::Value,
    ) -> VitrineResult<ModelResponse> {
        *self.text_calls.lock().unwrap() += 1;
        Self::respond(&self.text_responses)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
