//! Persisted user progress: problems, interview history, and feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<ProgressState>`. The first render uses
//! [`ProgressState::initial`] on server and client alike; the persisted copy
//! replaces it once after hydration. Every mutation writes through to the store; if
//! the write fails the in-memory copy still changes so the current visit
//! stays consistent, and the error is returned for logging.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use prep::achievements::{self, Achievement};
use prep::stats::{self, ActivityItem, CodingSummary, InterviewSummary, MonthlyActivity};
use prep::{
    CodingProblem, Difficulty, Feedback, InterviewRecord, KeyValueStore, MemoryStore, StoreError, Testimonial, catalog,
    storage,
};
use time::OffsetDateTime;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressState {
    pub problems: Vec<CodingProblem>,
    pub history: Vec<InterviewRecord>,
    /// Newest first.
    pub feedback: Vec<Feedback>,
}

impl ProgressState {
    /// Default catalog with no history: what an empty store yields.
    #[must_use]
    pub fn initial() -> Self {
        Self::load(&MemoryStore::new())
    }

    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            problems: storage::load_problems(store),
            history: storage::load_history(store),
            feedback: storage::load_feedback(store),
        }
    }

    #[must_use]
    pub fn coding_summary(&self, now: OffsetDateTime) -> CodingSummary {
        stats::coding_summary(&self.problems, now)
    }

    #[must_use]
    pub fn interview_summary(&self, now: OffsetDateTime) -> InterviewSummary {
        stats::interview_summary(&self.history, now)
    }

    #[must_use]
    pub fn achievements(&self, now: OffsetDateTime) -> Vec<Achievement> {
        achievements::achievements(&self.coding_summary(now), &self.interview_summary(now))
    }

    #[must_use]
    pub fn recent_activity(&self, limit: usize) -> Vec<ActivityItem> {
        stats::recent_activity(&self.problems, &self.history, limit)
    }

    #[must_use]
    pub fn monthly_activity(&self) -> Vec<MonthlyActivity> {
        stats::monthly_activity(&self.problems, &self.history)
    }

    #[must_use]
    pub fn testimonials(&self) -> Vec<Testimonial> {
        catalog::testimonials(&self.feedback)
    }

    /// Record a solver run against the listed problem with the same
    /// difficulty and category. Returns whether a problem matched.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the updated list could not be saved.
    pub fn record_run(
        &mut self,
        difficulty: Difficulty,
        category: &str,
        passed: bool,
        now: OffsetDateTime,
        store: &mut impl KeyValueStore,
    ) -> Result<bool, StoreError> {
        let Some(problem) = self
            .problems
            .iter_mut()
            .find(|p| p.difficulty == difficulty && p.category == category)
        else {
            return Ok(false);
        };
        if passed {
            catalog::record_solve(problem, now);
        } else {
            catalog::record_attempt(problem);
        }
        storage::save_problems(store, &self.problems)?;
        Ok(true)
    }

    /// # Errors
    ///
    /// Returns the store's error; the record is kept in memory regardless.
    pub fn record_interview(&mut self, record: InterviewRecord, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        match storage::append_history(store, record.clone()) {
            Ok(history) => {
                self.history = history;
                Ok(())
            }
            Err(e) => {
                self.history.push(record.normalized());
                Err(e)
            }
        }
    }

    /// # Errors
    ///
    /// Returns the store's error; the feedback is kept in memory regardless.
    pub fn add_feedback(&mut self, feedback: Feedback, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        match storage::prepend_feedback(store, feedback.clone()) {
            Ok(list) => {
                self.feedback = list;
                Ok(())
            }
            Err(e) => {
                self.feedback.insert(0, feedback);
                Err(e)
            }
        }
    }
}
