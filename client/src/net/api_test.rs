#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;
use prep::SourceMode;
use prep::source::InterviewStatusKind;

use super::*;

#[test]
fn remote_is_unavailable_outside_browser() {
    let err = block_on(RemoteSource.initialize(&InitializeRequest::default())).unwrap_err();
    assert_eq!(err, SourceError::Unavailable);
    assert_eq!(block_on(RemoteSource.status("int_1")).unwrap_err(), SourceError::Unavailable);
}

#[test]
fn interview_source_falls_back_to_mock_handle() {
    let source = interview_source(&AppConfig::default());
    let handle = block_on(source.initialize(&InitializeRequest::default())).unwrap();
    assert!(handle.interview_id.starts_with("int_"));
    assert!(handle.room_name.starts_with("room_"));
    assert_eq!(handle.status, InterviewStatusKind::Initialized);
}

#[test]
fn interview_source_log_never_fails() {
    let source = interview_source(&AppConfig::default());
    let request = LogRequest { message: "Hello".to_owned(), role: "user".to_owned() };
    assert!(block_on(source.log_message("room_a", &request)).is_ok());
}

#[test]
fn synthetic_mode_returns_mock_context() {
    let config = AppConfig { source_mode: SourceMode::Synthetic, ..AppConfig::default() };
    let context = block_on(interview_source(&config).context("room_z")).unwrap();
    assert_eq!(context.room_name, "room_z");
    assert_eq!(context.total_questions, 12);
}
