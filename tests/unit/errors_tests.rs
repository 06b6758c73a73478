/*!
 * Tests for error types and conversions
 */

use subconv::{AppError, SubtitleError};

#[test]
fn test_subtitleError_invalidContent_shouldDisplayCorrectly() {
    let error = SubtitleError::invalid("no cues");
    let display = format!("{}", error);
    assert!(display.contains("Invalid subtitle contents"));
    assert!(display.contains("no cues"));
}

#[test]
fn test_subtitleError_unknownFormat_shouldDisplayCorrectly() {
    let error = SubtitleError::UnknownFormat("ass".to_string());
    assert_eq!(format!("{}", error), "Unknown subtitle format: ass");
}

#[test]
fn test_appError_fromSubtitleError_shouldWrapCorrectly() {
    let app_error: AppError = SubtitleError::invalid("bad time").into();
    let display = format!("{}", app_error);
    assert!(display.contains("Subtitle error"));
    assert!(display.contains("bad time"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.srt");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(_)));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(ref message) if message == "something odd"));
}
