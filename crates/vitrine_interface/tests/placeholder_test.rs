//! Tests for the image handle and its placeholder asset.

use base64::Engine;
use vitrine_interface::ImageHandle;

#[test]
fn placeholder_is_a_locally_embedded_png() {
    let uri = ImageHandle::placeholder().to_uri();
    let payload = uri
        .strip_prefix("data:image/png;base64,")
        .expect("placeholder should be a PNG data URI");

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .expect("placeholder payload should be valid base64");
    // PNG magic bytes.
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
}

#[test]
fn placeholder_is_stable_across_calls() {
    assert_eq!(ImageHandle::placeholder(), ImageHandle::placeholder());
}

#[test]
fn url_handles_render_unchanged() {
    let handle = ImageHandle::Url("https://example.com/out.png".to_string());
    assert_eq!(handle.to_uri(), "https://example.com/out.png");
}
