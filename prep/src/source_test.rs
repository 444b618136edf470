use std::cell::Cell;

use futures::executor::block_on;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use time::macros::datetime;

use super::*;

const NOW: OffsetDateTime = datetime!(2025-06-15 14:00 UTC);

/// Remote that always fails and counts how often it was asked.
#[derive(Default)]
struct DownRemote {
    calls: Cell<u32>,
}

impl DownRemote {
    fn fail<T>(&self) -> Result<T, SourceError> {
        self.calls.set(self.calls.get() + 1);
        Err(SourceError::Status(502))
    }
}

impl InterviewSource for DownRemote {
    async fn initialize(&self, _request: &InitializeRequest) -> Result<InitializeResponse, SourceError> {
        self.fail()
    }

    async fn log_message(&self, _room: &str, _request: &LogRequest) -> Result<(), SourceError> {
        self.fail()
    }

    async fn status(&self, _interview_id: &str) -> Result<InterviewStatus, SourceError> {
        self.fail()
    }

    async fn context(&self, _room: &str) -> Result<InterviewContext, SourceError> {
        self.fail()
    }
}

/// Remote that answers `initialize` with a fixed handle.
struct UpRemote;

fn remote_handle() -> InitializeResponse {
    InitializeResponse {
        interview_id: "int_remote".to_owned(),
        room_name: "room_remote".to_owned(),
        status: InterviewStatusKind::InProgress,
    }
}

impl InterviewSource for UpRemote {
    async fn initialize(&self, _request: &InitializeRequest) -> Result<InitializeResponse, SourceError> {
        Ok(remote_handle())
    }

    async fn log_message(&self, _room: &str, _request: &LogRequest) -> Result<(), SourceError> {
        Ok(())
    }

    async fn status(&self, _interview_id: &str) -> Result<InterviewStatus, SourceError> {
        Err(SourceError::Unavailable)
    }

    async fn context(&self, room: &str) -> Result<InterviewContext, SourceError> {
        let mut context = mock_context(room);
        context.question_number = 1;
        Ok(context)
    }
}

fn synthetic() -> SyntheticSource {
    SyntheticSource::new(NOW, 42)
}

// =============================================================
// Endpoints and wire format
// =============================================================

#[test]
fn endpoints_embed_identifiers() {
    assert_eq!(INITIALIZE_ENDPOINT, "/api/interview/initialize");
    assert_eq!(log_endpoint("room_abc"), "/api/interview/room_abc/log");
    assert_eq!(status_endpoint("int_1"), "/api/interview/int_1/status");
    assert_eq!(context_endpoint(" room_abc "), "/api/interview/context/room_abc");
}

#[test]
fn initialize_request_serializes_camel_case() {
    let request = InitializeRequest { job_description: "Backend".to_owned(), ..InitializeRequest::default() };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["jobDescription"], "Backend");
    assert_eq!(json["interviewType"], "behavioral");
    assert_eq!(json["duration"], "medium");
}

#[test]
fn status_kind_uses_snake_case() {
    let json = serde_json::to_string(&InterviewStatusKind::InProgress).unwrap();
    assert_eq!(json, "\"in_progress\"");
    assert_eq!(InterviewStatusKind::Ended.as_str(), "ended");
    let parsed: InterviewStatusKind = serde_json::from_str("\"completed\"").unwrap();
    assert_eq!(parsed, InterviewStatusKind::Completed);
}

#[test]
fn initialize_response_reads_backend_shape() {
    let raw = r#"{"interview_id":"int_9","room_name":"room_x","status":"initialized"}"#;
    let handle: InitializeResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(handle.room_name, "room_x");
    assert_eq!(handle.status, InterviewStatusKind::Initialized);
}

// =============================================================
// Synthetic payloads
// =============================================================

#[test]
fn mock_room_name_is_nine_base36_chars() {
    let mut rng = SmallRng::seed_from_u64(1);
    let room = mock_room_name(&mut rng);
    let suffix = room.strip_prefix("room_").unwrap();
    assert_eq!(suffix.len(), 9);
    assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn mock_interview_id_uses_millis() {
    assert_eq!(mock_interview_id(datetime!(1970-01-01 00:00:01.5 UTC)), "int_1500");
}

#[test]
fn mock_status_is_in_progress_with_fixed_offsets() {
    let mut rng = SmallRng::seed_from_u64(3);
    let status = mock_status("int_7", NOW, &mut rng);
    assert_eq!(status.interview_id, "int_7");
    assert_eq!(status.status, InterviewStatusKind::InProgress);
    assert_eq!(status.total_questions_asked, 5);
    assert!(!status.feedback_available);
    assert_eq!(NOW - status.created_at, Duration::minutes(30));
    assert_eq!(NOW - status.last_activity, Duration::minutes(5));
}

#[test]
fn mock_context_is_question_seven_of_twelve() {
    let context = mock_context("room_q");
    assert_eq!(context.room_name, "room_q");
    assert_eq!((context.question_number, context.total_questions), (7, 12));
    assert_eq!(context.interview_type, "behavioral");
    assert_eq!(context.participant_count, 1);
}

#[test]
fn synthetic_source_never_fails() {
    let source = synthetic();
    let handle = block_on(source.initialize(&InitializeRequest::default())).unwrap();
    assert_eq!(handle.status, InterviewStatusKind::Initialized);
    assert!(handle.interview_id.starts_with("int_"));
    assert!(block_on(source.log_message("room_a", &LogRequest { message: "hi".to_owned(), role: "user".to_owned() })).is_ok());
    assert_eq!(block_on(source.context("room_a")).unwrap(), mock_context("room_a"));
}

// =============================================================
// Fallback
// =============================================================

#[test]
fn fallback_substitutes_synthetic_when_remote_fails() {
    let source = FallbackSource::new(SourceMode::Remote, DownRemote::default(), synthetic());
    let handle = block_on(source.initialize(&InitializeRequest::default())).unwrap();
    assert!(handle.room_name.starts_with("room_"));
    assert_eq!(handle.status, InterviewStatusKind::Initialized);

    let status = block_on(source.status("int_1")).unwrap();
    assert_eq!(status.total_questions_asked, 5);
    assert_eq!(block_on(source.context("room_1")).unwrap().question_number, 7);
    assert_eq!(source.remote.calls.get(), 3);
}

#[test]
fn fallback_prefers_remote_answer() {
    let source = FallbackSource::new(SourceMode::Remote, UpRemote, synthetic());
    assert_eq!(block_on(source.initialize(&InitializeRequest::default())).unwrap(), remote_handle());
    assert_eq!(block_on(source.context("room_r")).unwrap().question_number, 1);
    assert_eq!(block_on(source.status("int_r")).unwrap().status, InterviewStatusKind::InProgress);
}

#[test]
fn synthetic_mode_skips_remote() {
    let source = FallbackSource::new(SourceMode::Synthetic, DownRemote::default(), synthetic());
    block_on(source.initialize(&InitializeRequest::default())).unwrap();
    block_on(source.log_message("room_s", &LogRequest { message: "x".to_owned(), role: "user".to_owned() })).unwrap();
    assert_eq!(source.remote.calls.get(), 0);
}

#[test]
fn source_mode_defaults_to_remote() {
    assert_eq!(SourceMode::default(), SourceMode::Remote);
}
