//! Google Gemini API client implementation.
//!
//! The client speaks the `generateContent` REST endpoint directly. The two
//! call shapes this library needs (an image-only response modality with
//! inline reference attachments, and schema-constrained JSON output) are
//! expressed through a small hand-rolled protocol module.

mod client;
mod protocol;

pub use client::GeminiClient;
pub use protocol::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part,
    ResponseCandidate,
};
