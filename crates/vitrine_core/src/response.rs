//! Model-call response shapes shared by all drivers.
//!
//! Every driver normalizes its wire format into [`ModelResponse`] so the
//! validator and generator never see backend-specific types.

use crate::InlineImage;
use serde::{Deserialize, Serialize};

/// One alternative response returned by the model for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Content parts in the order the model produced them
    pub parts: Vec<ResponsePart>,
}

/// A single content part within a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ResponsePart {
    /// Plain text content
    Text(String),
    /// Inline binary image data, base64-encoded
    Inline(InlineImage),
}

/// The unified response from one model call.
///
/// # Examples
///
/// ```
/// use vitrine_core::{Candidate, InlineImage, ModelResponse, ResponsePart};
///
/// let response = ModelResponse {
///     candidates: vec![Candidate {
///         parts: vec![
///             ResponsePart::Text("here you go".to_string()),
///             ResponsePart::Inline(InlineImage::new("image/png", "iVBOR...")),
///         ],
///     }],
/// };
///
/// assert!(response.first_inline_image().is_some());
/// assert_eq!(response.text(), "here you go");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Candidates in the order the model returned them
    pub candidates: Vec<Candidate>,
}

impl ModelResponse {
    /// The first part across all candidates carrying inline image data.
    ///
    /// Remaining parts and candidates are ignored.
    pub fn first_inline_image(&self) -> Option<&InlineImage> {
        self.candidates
            .iter()
            .flat_map(|candidate| &candidate.parts)
            .find_map(|part| match part {
                ResponsePart::Inline(image) => Some(image),
                ResponsePart::Text(_) => None,
            })
    }

    /// All text parts across all candidates, concatenated in order.
    pub fn text(&self) -> String {
        self.candidates
            .iter()
            .flat_map(|candidate| &candidate.parts)
            .filter_map(|part| match part {
                ResponsePart::Text(text) => Some(text.as_str()),
                ResponsePart::Inline(_) => None,
            })
            .collect()
    }
}
