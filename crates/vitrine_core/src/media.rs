//! Media payload types for reference images and generated images.

use serde::{Deserialize, Serialize};

/// A user-supplied reference image, already encoded for transport.
///
/// Reference images are never mutated by the core; adapters attach them to
/// outbound requests as-is.
///
/// # Examples
///
/// ```
/// use vitrine_core::ReferenceImage;
///
/// let img = ReferenceImage::new("image/jpeg", "/9j/4AAQSkZJRg...");
/// assert_eq!(img.mime_type, "image/jpeg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceImage {
    /// MIME type, e.g., "image/jpeg" or "image/png"
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl ReferenceImage {
    /// Create a reference image from a MIME type and base64 payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Create a JPEG reference image from a base64 payload.
    pub fn jpeg(data: impl Into<String>) -> Self {
        Self::new("image/jpeg", data)
    }
}

/// Inline image data returned by the model.
///
/// # Examples
///
/// ```
/// use vitrine_core::InlineImage;
///
/// let img = InlineImage::new("image/png", "iVBORw0KGgo=");
/// assert!(img.to_data_uri().starts_with("data:image/png;base64,"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InlineImage {
    /// MIME type reported by the model
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl InlineImage {
    /// Create an inline image from a MIME type and base64 payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Render as a `data:` URI suitable for direct display.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}
