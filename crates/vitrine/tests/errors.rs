//! Tests for the error taxonomy, exercised through the facade.

use vitrine::{
    ConfigError, GenerationError, GenerationErrorKind, ProviderError, ProviderErrorKind,
    VitrineError, VitrineErrorKind,
};

//
// ─── DISPLAY ────────────────────────────────────────────────────────────────────
//

#[test]
fn test_config_error_display() {
    let error = ConfigError::new("GEMINI_API_KEY environment variable not set");
    let display = format!("{}", error);
    assert!(display.contains("GEMINI_API_KEY environment variable not set"));
    assert!(display.contains("Configuration Error:"));
    assert!(display.contains("at line"));
}

#[test]
fn test_provider_error_display_carries_backend_and_status() {
    let error = ProviderError::new(
        "gemini",
        ProviderErrorKind::Http {
            status: 429,
            message: "quota exceeded".to_string(),
        },
    );
    let display = format!("{}", error);
    assert!(display.contains("gemini"));
    assert!(display.contains("429"));
    assert!(display.contains("quota exceeded"));
}

#[test]
fn test_generation_error_kind_display() {
    let cases = vec![
        (
            GenerationErrorKind::NoImageReturned,
            "image call returned no candidate with inline image data",
        ),
        (
            GenerationErrorKind::MalformedResponse("missing field `cta`".to_string()),
            "structured response did not match the expected shape: missing field `cta`",
        ),
    ];

    for (kind, expected) in cases {
        let display = format!("{}", kind);
        assert_eq!(display, expected, "Error kind display mismatch");
    }
}

#[test]
fn test_error_source_location_tracking() {
    let error = GenerationError::new(GenerationErrorKind::NoImageReturned);
    assert!(error.line > 0, "Error should capture line number");
    assert!(
        error.file.contains("errors.rs"),
        "Error should capture file name"
    );
}

//
// ─── CONVERSION ─────────────────────────────────────────────────────────────────
//

#[test]
fn test_kinds_convert_into_vitrine_error() {
    let config: VitrineError = ConfigError::new("missing").into();
    assert!(matches!(config.kind(), VitrineErrorKind::Config(_)));

    let provider: VitrineError = ProviderError::new(
        "replicate",
        ProviderErrorKind::Transport("connection refused".to_string()),
    )
    .into();
    assert!(matches!(provider.kind(), VitrineErrorKind::Provider(_)));

    let generation: VitrineError =
        GenerationError::new(GenerationErrorKind::NoImageReturned).into();
    assert!(matches!(
        generation.kind(),
        VitrineErrorKind::Generation(_)
    ));
}

#[test]
fn test_question_mark_propagation() {
    fn fails() -> vitrine::VitrineResult<()> {
        Err(GenerationError::new(GenerationErrorKind::NoImageReturned))?
    }
    assert!(fails().is_err());
}
