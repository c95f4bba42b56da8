//! Error case tests.
//!
//! Verifies error handling across scanner edge cases, failure
//! classification, and the error type conversions.

use car_ai_rust::api::{classify_failure, TRANSPORT_MESSAGE};
use car_ai_rust::error::CarAiError;
use car_ai_rust::scanner;
use std::path::PathBuf;
use tempfile::tempdir;

/// Scanning a nonexistent folder.
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::collect_image_paths(&[PathBuf::from("/nonexistent/path/12345")]);
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, CarAiError::FileNotFound(_)));
}

/// Scanning an empty folder returns an empty list, not an error.
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::collect_image_paths(&[dir.path().to_path_buf()]);

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// Folders with no image files yield nothing.
#[test]
fn test_scan_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");

    std::fs::write(dir.path().join("test.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("data.json"), "{}").unwrap();

    let result = scanner::collect_image_paths(&[dir.path().to_path_buf()]);
    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// CarAiError Display never produces an empty message.
#[test]
fn test_error_display() {
    let errors = vec![
        CarAiError::Config("bad config value".to_string()),
        CarAiError::FileNotFound("test.jpg".to_string()),
        CarAiError::NoImagesFound("/path/to/folder".to_string()),
        CarAiError::ImageLoad("truncated file".to_string()),
        CarAiError::Validation("photo.pdf is not an image file".to_string()),
        CarAiError::Transport(TRANSPORT_MESSAGE.to_string()),
        CarAiError::ApiParse("unexpected shape".to_string()),
        CarAiError::PdfGeneration("render failed".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty error message: {:?}", err);
    }
}

/// A 404 is classified as an endpoint problem, not a generic server error.
#[test]
fn test_classify_not_found() {
    let err = classify_failure(404, None, "http://localhost:8000/analyze");
    let display = format!("{}", err);

    assert!(matches!(err, CarAiError::Service { status: 404, .. }));
    assert!(display.contains("endpoint"));
    assert!(display.contains("http://localhost:8000/analyze"));
}

/// Server-side failures surface the connectivity guidance.
#[test]
fn test_classify_server_errors() {
    for status in [500, 502, 503] {
        let err = classify_failure(status, None, "http://localhost:8000/analyze");
        let display = format!("{}", err);
        assert!(
            display.contains("Cannot connect"),
            "status {status} should read as connectivity: {display}"
        );
    }
}

/// A service-provided detail wins for ordinary client errors.
#[test]
fn test_classify_detail_passthrough() {
    let err = classify_failure(
        400,
        Some("File must be an image".to_string()),
        "http://localhost:8000/analyze",
    );
    assert_eq!(format!("{}", err), "File must be an image");
}

/// Validation errors display the message verbatim, no prefix.
#[test]
fn test_validation_error_is_verbatim() {
    let err = CarAiError::Validation("huge.jpg is larger than 10MB".to_string());
    assert_eq!(format!("{}", err), "huge.jpg is larger than 10MB");
}

/// CarAiError Debug output names the variant.
#[test]
fn test_error_debug() {
    let err = CarAiError::Config("test".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("test"));
}

/// Conversion from std::io::Error.
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CarAiError = io_err.into();

    assert!(matches!(err, CarAiError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// Conversion from serde_json::Error.
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: CarAiError = json_err.into();

    assert!(matches!(err, CarAiError::JsonParse(_)));
}
