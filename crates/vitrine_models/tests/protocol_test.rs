//! Tests for the Gemini wire protocol shapes.

use vitrine_models::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

//
// ─── REQUEST SERIALIZATION ──────────────────────────────────────────────────────
//

#[test]
fn image_request_serializes_camel_case_with_modality() {
    let request = GenerateContentRequest::one_shot(
        vec![
            Part::text("generate a cafe scene"),
            Part::inline("image/jpeg", "/9j/4AAQ=="),
        ],
        GenerationConfig::image_only(),
    );

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json["generationConfig"]["responseModalities"][0],
        "IMAGE"
    );
    assert_eq!(json["contents"][0]["parts"][0]["text"], "generate a cafe scene");
    assert_eq!(
        json["contents"][0]["parts"][1]["inlineData"]["mimeType"],
        "image/jpeg"
    );
    // Unset optionals stay off the wire.
    assert!(json["generationConfig"].get("responseMimeType").is_none());
}

#[test]
fn structured_request_carries_mime_type_and_schema() {
    let schema = serde_json::json!({
        "type": "OBJECT",
        "properties": { "text": { "type": "STRING" } },
        "required": ["text"],
    });
    let request = GenerateContentRequest::one_shot(
        vec![Part::text("describe the product")],
        GenerationConfig::structured(schema.clone()),
    );

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json["generationConfig"]["responseMimeType"],
        "application/json"
    );
    assert_eq!(json["generationConfig"]["responseSchema"], schema);
    assert!(json["generationConfig"].get("responseModalities").is_none());
}

//
// ─── RESPONSE DESERIALIZATION ───────────────────────────────────────────────────
//

#[test]
fn response_with_inline_data_normalizes_to_model_response() {
    let body = r#"{
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    { "text": "here is your image" },
                    { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
                ]
            }
        }],
        "modelVersion": "test"
    }"#;

    let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
    let response = parsed.into_model_response();

    let image = response.first_inline_image().unwrap();
    assert_eq!(image.mime_type, "image/png");
    assert_eq!(image.data, "iVBORw0KGgo=");
    assert_eq!(response.text(), "here is your image");
}

#[test]
fn response_with_filtered_candidate_yields_no_parts() {
    let body = r#"{ "candidates": [{ "finishReason": "SAFETY" }] }"#;

    let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
    let response = parsed.into_model_response();

    assert_eq!(response.candidates.len(), 1);
    assert!(response.first_inline_image().is_none());
    assert!(response.text().is_empty());
}

#[test]
fn empty_body_deserializes_to_no_candidates() {
    let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
    assert!(parsed.candidates.is_empty());
}
