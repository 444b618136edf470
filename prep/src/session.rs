//! Mock-interview session state machine.
//!
//! DESIGN
//! ======
//! `NotStarted -> InProgress(i) -> Finished`, forward only. Each question has
//! its own countdown that the view ticks once per second. Under the default
//! [`TimeoutPolicy::Advisory`] reaching zero changes nothing but the display;
//! [`TimeoutPolicy::AutoAdvance`] submits the current draft instead.
//!
//! The machine never reads the clock itself. Callers pass `now` into
//! [`Session::start`] and [`Session::next`] so elapsed duration is testable.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::model::{InterviewSetup, SessionQuestion};

/// Countdown used when a question has no limit of its own.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 900;

/// Where the session is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    /// 0-based index of the question being answered.
    InProgress(usize),
    Finished,
}

/// What happens when a question's countdown reaches zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeoutPolicy {
    /// Display only; the candidate keeps answering.
    #[default]
    Advisory,
    /// Submit the current draft and move on.
    AutoAdvance,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session has no questions")]
    NoQuestions,
    #[error("session already started")]
    AlreadyStarted,
    #[error("session not started")]
    NotStarted,
    #[error("session already finished")]
    AlreadyFinished,
}

/// Everything the results screen needs once the last answer is in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOutcome {
    pub setup: InterviewSetup,
    pub questions: Vec<SessionQuestion>,
    /// One entry per question, in question order.
    pub responses: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub duration_minutes: u32,
}

/// Result of submitting an answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index.
    Next(usize),
    Finished(SessionOutcome),
}

/// Result of one countdown tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Not in progress, or already at zero.
    Idle,
    /// Seconds left after this tick.
    Counting(u32),
    /// Countdown hit zero on this tick (advisory policy).
    Expired,
    /// Countdown hit zero and the draft was submitted.
    Advanced(Advance),
}

/// A single run through an ordered question list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    setup: InterviewSetup,
    questions: Vec<SessionQuestion>,
    responses: Vec<String>,
    phase: SessionPhase,
    remaining_secs: u32,
    started_at: Option<OffsetDateTime>,
    policy: TimeoutPolicy,
}

impl Session {
    #[must_use]
    pub fn new(setup: InterviewSetup, questions: Vec<SessionQuestion>) -> Self {
        let remaining_secs = time_limit(questions.first());
        let responses = vec![String::new(); questions.len()];
        Self {
            setup,
            questions,
            responses,
            phase: SessionPhase::NotStarted,
            remaining_secs,
            started_at: None,
            policy: TimeoutPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: TimeoutPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn setup(&self) -> &InterviewSetup {
        &self.setup
    }

    #[must_use]
    pub fn questions(&self) -> &[SessionQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self.phase, SessionPhase::InProgress(_))
    }

    /// Index of the question on screen: the active one, or 0 before start.
    #[must_use]
    pub fn current_index(&self) -> usize {
        match self.phase {
            SessionPhase::InProgress(index) => index,
            SessionPhase::NotStarted => 0,
            SessionPhase::Finished => self.questions.len().saturating_sub(1),
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&SessionQuestion> {
        self.questions.get(self.current_index())
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    #[must_use]
    pub fn started_at(&self) -> Option<OffsetDateTime> {
        self.started_at
    }

    /// Whether the active question is the final one.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_index() + 1 >= self.questions.len()
    }

    /// 1-based question number over total, as a rounded percentage.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        let current = match self.phase {
            SessionPhase::NotStarted => 0,
            SessionPhase::InProgress(index) => u32::try_from(index + 1).unwrap_or(u32::MAX),
            SessionPhase::Finished => total,
        };
        crate::stats::percentage(current, total)
    }

    /// Begin the first question.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoQuestions`] for an empty session, otherwise
    /// [`SessionError::AlreadyStarted`] / [`SessionError::AlreadyFinished`]
    /// when not in `NotStarted`.
    pub fn start(&mut self, now: OffsetDateTime) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::InProgress(_) => return Err(SessionError::AlreadyStarted),
            SessionPhase::Finished => return Err(SessionError::AlreadyFinished),
            SessionPhase::NotStarted => {}
        }
        if self.questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        self.phase = SessionPhase::InProgress(0);
        self.started_at = Some(now);
        self.remaining_secs = time_limit(self.questions.first());
        log::info!(
            "interview session started: type={} questions={}",
            self.setup.interview_type.as_str(),
            self.questions.len()
        );
        Ok(())
    }

    /// Store `response` for the active question and advance.
    ///
    /// Finishes the session when called on the last question.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotStarted`] or [`SessionError::AlreadyFinished`]
    /// outside `InProgress`.
    pub fn next(&mut self, response: impl Into<String>, now: OffsetDateTime) -> Result<Advance, SessionError> {
        let index = self.active_index()?;
        self.store(index, response.into());
        let next_index = index + 1;
        if next_index < self.questions.len() {
            self.phase = SessionPhase::InProgress(next_index);
            self.remaining_secs = time_limit(self.questions.get(next_index));
            return Ok(Advance::Next(next_index));
        }
        Ok(Advance::Finished(self.complete(now)))
    }

    /// Store `response` for the active question and end the session now,
    /// leaving any later questions unanswered.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotStarted`] or [`SessionError::AlreadyFinished`]
    /// outside `InProgress`.
    pub fn finish(&mut self, response: impl Into<String>, now: OffsetDateTime) -> Result<SessionOutcome, SessionError> {
        let index = self.active_index()?;
        self.store(index, response.into());
        Ok(self.complete(now))
    }

    /// Advance the countdown by one second.
    ///
    /// `draft` is only used under [`TimeoutPolicy::AutoAdvance`].
    ///
    /// # Errors
    ///
    /// Propagates [`Session::next`] errors when auto-advancing; never fails
    /// under the advisory policy.
    pub fn tick(&mut self, draft: &str, now: OffsetDateTime) -> Result<Tick, SessionError> {
        if !self.is_in_progress() || self.remaining_secs == 0 {
            return Ok(Tick::Idle);
        }
        self.remaining_secs -= 1;
        if self.remaining_secs > 0 {
            return Ok(Tick::Counting(self.remaining_secs));
        }
        match self.policy {
            TimeoutPolicy::Advisory => Ok(Tick::Expired),
            TimeoutPolicy::AutoAdvance => {
                log::info!("question {} timed out, auto-advancing", self.current_index() + 1);
                self.next(draft, now).map(Tick::Advanced)
            }
        }
    }

    fn active_index(&self) -> Result<usize, SessionError> {
        match self.phase {
            SessionPhase::InProgress(index) => Ok(index),
            SessionPhase::NotStarted => Err(SessionError::NotStarted),
            SessionPhase::Finished => Err(SessionError::AlreadyFinished),
        }
    }

    fn store(&mut self, index: usize, response: String) {
        if let Some(slot) = self.responses.get_mut(index) {
            *slot = response;
        }
    }

    fn complete(&mut self, now: OffsetDateTime) -> SessionOutcome {
        self.phase = SessionPhase::Finished;
        self.remaining_secs = 0;
        let started_at = self.started_at.unwrap_or(now);
        let duration_minutes = rounded_minutes(now - started_at);
        log::info!("interview session finished after {duration_minutes} min");
        SessionOutcome {
            setup: self.setup.clone(),
            questions: self.questions.clone(),
            responses: self.responses.clone(),
            started_at,
            finished_at: now,
            duration_minutes,
        }
    }
}

fn time_limit(question: Option<&SessionQuestion>) -> u32 {
    question
        .and_then(|q| q.time_limit_secs)
        .filter(|&secs| secs > 0)
        .unwrap_or(DEFAULT_TIME_LIMIT_SECS)
}

fn rounded_minutes(elapsed: time::Duration) -> u32 {
    let secs = elapsed.whole_seconds().max(0);
    u32::try_from((secs + 30) / 60).unwrap_or(u32::MAX)
}

/// Render seconds as `m:ss`.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
