//! Interview backend contract and its synthetic fallback.
//!
//! ARCHITECTURE
//! ============
//! [`InterviewSource`] abstracts the four REST calls. The browser provides a
//! remote implementation over HTTP; [`SyntheticSource`] fabricates payloads of
//! the same shape locally. [`FallbackSource`] tries the remote and, on any
//! error, substitutes the synthetic value, so the UI never sees a failure.
//! [`SourceMode`] is the single switch that decides whether the remote is
//! attempted at all.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::cell::RefCell;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

pub const INITIALIZE_ENDPOINT: &str = "/api/interview/initialize";

#[must_use]
pub fn log_endpoint(room: &str) -> String {
    format!("/api/interview/{}/log", room.trim())
}

#[must_use]
pub fn status_endpoint(interview_id: &str) -> String {
    format!("/api/interview/{}/status", interview_id.trim())
}

#[must_use]
pub fn context_endpoint(room: &str) -> String {
    format!("/api/interview/context/{}", room.trim())
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Body of `POST /api/interview/initialize`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeRequest {
    pub job_description: String,
    pub interview_type: String,
    /// `short`, `medium`, or `long`.
    pub duration: String,
    pub resume: String,
}

impl Default for InitializeRequest {
    fn default() -> Self {
        Self {
            job_description: String::new(),
            interview_type: "behavioral".to_owned(),
            duration: "medium".to_owned(),
            resume: String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatusKind {
    #[default]
    Initialized,
    InProgress,
    Completed,
    Ended,
}

impl InterviewStatusKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initialized => "initialized",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Ended => "ended",
        }
    }
}

/// Handle returned when a room is created; also persisted as the current
/// interview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeResponse {
    pub interview_id: String,
    pub room_name: String,
    pub status: InterviewStatusKind,
}

/// Body of `POST /api/interview/{room}/log`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRequest {
    pub message: String,
    pub role: String,
}

/// Response of `GET /api/interview/{id}/status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewStatus {
    pub interview_id: String,
    pub room_name: String,
    pub status: InterviewStatusKind,
    pub current_question: String,
    pub total_questions_asked: u32,
    pub feedback_available: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_activity: OffsetDateTime,
}

/// Response of `GET /api/interview/context/{room}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewContext {
    pub room_name: String,
    pub current_question: String,
    pub question_number: u32,
    pub total_questions: u32,
    pub interview_type: String,
    pub duration: String,
    pub participant_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("remote source unavailable")]
    Unavailable,
}

// =============================================================================
// CAPABILITY
// =============================================================================

/// The interview backend as seen by the UI.
pub trait InterviewSource {
    /// # Errors
    ///
    /// Implementation-defined; see [`SourceError`].
    async fn initialize(&self, request: &InitializeRequest) -> Result<InitializeResponse, SourceError>;

    /// # Errors
    ///
    /// Implementation-defined; see [`SourceError`].
    async fn log_message(&self, room: &str, request: &LogRequest) -> Result<(), SourceError>;

    /// # Errors
    ///
    /// Implementation-defined; see [`SourceError`].
    async fn status(&self, interview_id: &str) -> Result<InterviewStatus, SourceError>;

    /// # Errors
    ///
    /// Implementation-defined; see [`SourceError`].
    async fn context(&self, room: &str) -> Result<InterviewContext, SourceError>;
}

/// Whether [`FallbackSource`] attempts the remote at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SourceMode {
    #[default]
    Remote,
    Synthetic,
}

// =============================================================================
// SYNTHETIC
// =============================================================================

const ROOM_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `room_` followed by nine base-36 characters.
pub fn mock_room_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..9)
        .map(|_| char::from(ROOM_ALPHABET[rng.random_range(0..ROOM_ALPHABET.len())]))
        .collect();
    format!("room_{suffix}")
}

/// `int_` followed by the Unix timestamp in milliseconds.
#[must_use]
pub fn mock_interview_id(now: OffsetDateTime) -> String {
    let millis = now.unix_timestamp_nanos() / 1_000_000;
    format!("int_{millis}")
}

pub fn mock_initialize<R: Rng + ?Sized>(now: OffsetDateTime, rng: &mut R) -> InitializeResponse {
    InitializeResponse {
        interview_id: mock_interview_id(now),
        room_name: mock_room_name(rng),
        status: InterviewStatusKind::Initialized,
    }
}

pub fn mock_status<R: Rng + ?Sized>(interview_id: &str, now: OffsetDateTime, rng: &mut R) -> InterviewStatus {
    InterviewStatus {
        interview_id: interview_id.trim().to_owned(),
        room_name: mock_room_name(rng),
        status: InterviewStatusKind::InProgress,
        current_question: "Can you tell me about a time when you had to work with a difficult team member?".to_owned(),
        total_questions_asked: 5,
        feedback_available: false,
        created_at: now - Duration::minutes(30),
        last_activity: now - Duration::minutes(5),
    }
}

#[must_use]
pub fn mock_context(room: &str) -> InterviewContext {
    InterviewContext {
        room_name: room.trim().to_owned(),
        current_question: "What's your approach to handling tight deadlines and multiple priorities?".to_owned(),
        question_number: 7,
        total_questions: 12,
        interview_type: "behavioral".to_owned(),
        duration: "medium".to_owned(),
        participant_count: 1,
    }
}

/// Never-failing source that fabricates every response locally.
pub struct SyntheticSource {
    now: OffsetDateTime,
    rng: RefCell<SmallRng>,
}

impl SyntheticSource {
    #[must_use]
    pub fn new(now: OffsetDateTime, seed: u64) -> Self {
        Self { now, rng: RefCell::new(SmallRng::seed_from_u64(seed)) }
    }
}

impl InterviewSource for SyntheticSource {
    async fn initialize(&self, _request: &InitializeRequest) -> Result<InitializeResponse, SourceError> {
        Ok(mock_initialize(self.now, &mut *self.rng.borrow_mut()))
    }

    async fn log_message(&self, _room: &str, _request: &LogRequest) -> Result<(), SourceError> {
        Ok(())
    }

    async fn status(&self, interview_id: &str) -> Result<InterviewStatus, SourceError> {
        Ok(mock_status(interview_id, self.now, &mut *self.rng.borrow_mut()))
    }

    async fn context(&self, room: &str) -> Result<InterviewContext, SourceError> {
        Ok(mock_context(room))
    }
}

// =============================================================================
// FALLBACK
// =============================================================================

/// Remote-first source that degrades to [`SyntheticSource`] on any error.
pub struct FallbackSource<R> {
    mode: SourceMode,
    remote: R,
    synthetic: SyntheticSource,
}

impl<R: InterviewSource> FallbackSource<R> {
    #[must_use]
    pub fn new(mode: SourceMode, remote: R, synthetic: SyntheticSource) -> Self {
        Self { mode, remote, synthetic }
    }

    fn use_remote(&self) -> bool {
        self.mode == SourceMode::Remote
    }
}

fn note_fallback(operation: &str, err: &SourceError) {
    log::warn!("{operation} failed ({err}); using synthetic data");
}

impl<R: InterviewSource> InterviewSource for FallbackSource<R> {
    async fn initialize(&self, request: &InitializeRequest) -> Result<InitializeResponse, SourceError> {
        if self.use_remote() {
            match self.remote.initialize(request).await {
                Ok(response) => return Ok(response),
                Err(e) => note_fallback("initialize", &e),
            }
        }
        self.synthetic.initialize(request).await
    }

    async fn log_message(&self, room: &str, request: &LogRequest) -> Result<(), SourceError> {
        if self.use_remote() {
            match self.remote.log_message(room, request).await {
                Ok(()) => return Ok(()),
                Err(e) => note_fallback("log", &e),
            }
        }
        self.synthetic.log_message(room, request).await
    }

    async fn status(&self, interview_id: &str) -> Result<InterviewStatus, SourceError> {
        if self.use_remote() {
            match self.remote.status(interview_id).await {
                Ok(status) => return Ok(status),
                Err(e) => note_fallback("status", &e),
            }
        }
        self.synthetic.status(interview_id).await
    }

    async fn context(&self, room: &str) -> Result<InterviewContext, SourceError> {
        if self.use_remote() {
            match self.remote.context(room).await {
                Ok(context) => return Ok(context),
                Err(e) => note_fallback("context", &e),
            }
        }
        self.synthetic.context(room).await
    }
}
