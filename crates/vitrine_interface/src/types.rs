//! Shared types for the Vitrine interface.

use serde::{Deserialize, Serialize};
use vitrine_core::InlineImage;

/// A locally owned 1x1 transparent PNG, used when an image call fails inside
/// a campaign. Keeping the asset in-crate avoids depending on an external
/// placeholder service for a pure failure-handling path.
const PLACEHOLDER_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// Handle to a generated image: a remote URL or embedded data.
///
/// # Examples
///
/// ```
/// use vitrine_interface::ImageHandle;
///
/// let handle = ImageHandle::Url("https://example.com/out.png".to_string());
/// assert_eq!(handle.to_uri(), "https://example.com/out.png");
///
/// let placeholder = ImageHandle::placeholder();
/// assert!(placeholder.to_uri().starts_with("data:image/png;base64,"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageHandle {
    /// Remote URL returned by a backend
    Url(String),
    /// Inline image data returned by a backend
    Inline(InlineImage),
}

impl ImageHandle {
    /// The locally defined placeholder image.
    pub fn placeholder() -> Self {
        Self::Inline(InlineImage::new("image/png", PLACEHOLDER_PNG_BASE64))
    }

    /// Render as a displayable URI (the URL itself, or a `data:` URI).
    pub fn to_uri(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Inline(image) => image.to_data_uri(),
        }
    }
}
