//! Mock-interview flow: setup form, live session page, results hand-off.
//!
//! DESIGN
//! ======
//! The setup form only builds a link; the session page owns a
//! [`prep::Session`] plus the answer being typed. When the session finishes,
//! its [`SessionOutcome`] is parked in the `ResultsState` context so the
//! results route can render it and record history exactly once.

#[cfg(test)]
#[path = "interview_test.rs"]
mod interview_test;

use time::OffsetDateTime;

use prep::analysis::AnalysisReport;
use prep::{
    Advance, ExperienceLevel, InterviewRecord, InterviewSetup, InterviewType, Session, SessionError, SessionOutcome,
    Tick, TimeoutPolicy,
};

use crate::util::links;

// =============================================================================
// SETUP
// =============================================================================

/// Selections on the `/interview` setup page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MockSetupState {
    pub interview_type: Option<InterviewType>,
    pub company: String,
    pub level: Option<ExperienceLevel>,
}

impl MockSetupState {
    #[must_use]
    pub fn setup(&self) -> Option<InterviewSetup> {
        let company = self.company.trim();
        if company.is_empty() {
            return None;
        }
        Some(InterviewSetup::new(self.interview_type?, company, self.level?))
    }

    #[must_use]
    pub fn can_start(&self) -> bool {
        self.setup().is_some()
    }

    /// Session URL for the current selections.
    #[must_use]
    pub fn link(&self) -> Option<String> {
        self.setup().map(|setup| links::session(&setup))
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// State of the `/interview/session` page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionPageState {
    pub generating: bool,
    pub session: Option<Session>,
    pub draft: String,
    /// Set once the advisory countdown has reached zero for this question.
    pub overtime: bool,
}

impl SessionPageState {
    #[must_use]
    pub fn generating() -> Self {
        Self { generating: true, ..Self::default() }
    }

    pub fn prepared(&mut self, session: Session) {
        self.generating = false;
        self.session = Some(session);
        self.draft.clear();
        self.overtime = false;
    }

    /// Start the countdown on the prepared session.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotStarted`] when nothing is prepared, otherwise
    /// whatever [`Session::start`] rejects.
    pub fn start(&mut self, now: OffsetDateTime) -> Result<(), SessionError> {
        self.session.as_mut().ok_or(SessionError::NotStarted)?.start(now)
    }

    /// Submit the draft and advance. Returns the outcome once the last
    /// question is answered.
    ///
    /// # Errors
    ///
    /// Propagates [`Session::next`] errors.
    pub fn submit(&mut self, now: OffsetDateTime) -> Result<Option<SessionOutcome>, SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NotStarted)?;
        let draft = std::mem::take(&mut self.draft);
        self.overtime = false;
        match session.next(draft, now)? {
            Advance::Next(_) => Ok(None),
            Advance::Finished(outcome) => Ok(Some(outcome)),
        }
    }

    /// End early, keeping the draft as the current answer.
    ///
    /// # Errors
    ///
    /// Propagates [`Session::finish`] errors.
    pub fn end(&mut self, now: OffsetDateTime) -> Result<SessionOutcome, SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NotStarted)?;
        let draft = std::mem::take(&mut self.draft);
        session.finish(draft, now)
    }

    /// One countdown second. Returns the outcome when an auto-advance ends
    /// the session.
    ///
    /// # Errors
    ///
    /// Propagates [`Session::tick`] errors.
    pub fn tick(&mut self, now: OffsetDateTime) -> Result<Option<SessionOutcome>, SessionError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };
        match session.tick(&self.draft, now)? {
            Tick::Idle | Tick::Counting(_) => Ok(None),
            Tick::Expired => {
                self.overtime = true;
                Ok(None)
            }
            Tick::Advanced(Advance::Next(_)) => {
                self.draft.clear();
                Ok(None)
            }
            Tick::Advanced(Advance::Finished(outcome)) => Ok(Some(outcome)),
        }
    }
}

/// Build a not-yet-started session for `setup` under `policy`.
#[must_use]
pub fn prepare_session(setup: &InterviewSetup, policy: TimeoutPolicy) -> Session {
    let questions = prep::catalog::generate_questions(setup.interview_type, &setup.company, setup.experience_level);
    Session::new(setup.clone(), questions).with_policy(policy)
}

// =============================================================================
// RESULTS
// =============================================================================

/// Hand-off from the session page to `/interview/results`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultsState {
    pub outcome: Option<SessionOutcome>,
    pub report: Option<AnalysisReport>,
    recorded: bool,
}

impl ResultsState {
    pub fn finished(&mut self, outcome: SessionOutcome) {
        self.outcome = Some(outcome);
        self.report = None;
        self.recorded = false;
    }

    /// Attach the analysis and return the history record to persist, once.
    pub fn analysed(&mut self, report: AnalysisReport) -> Option<InterviewRecord> {
        let record = match (&self.outcome, self.recorded) {
            (Some(outcome), false) => Some(InterviewRecord::from_outcome(outcome, &report)),
            _ => None,
        };
        self.recorded |= record.is_some();
        self.report = Some(report);
        record
    }

    #[must_use]
    pub fn is_recorded(&self) -> bool {
        self.recorded
    }
}
