//! Records persisted in browser storage and passed between screens.
//!
//! DESIGN
//! ======
//! JSON field names are camelCase because the stored blobs are the only
//! schema; whatever these structs serialize to is the on-disk format.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

// =============================================================================
// ENUMS
// =============================================================================

/// Coding problem difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Case-insensitive parse of `"easy"`, `"Medium"`, etc.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of mock interview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterviewType {
    #[default]
    Technical,
    Behavioral,
    SystemDesign,
}

impl InterviewType {
    pub const ALL: [Self; 3] = [Self::Technical, Self::Behavioral, Self::SystemDesign];

    /// Slug used in URLs and storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Behavioral => "behavioral",
            Self::SystemDesign => "system-design",
        }
    }

    /// Short display name, e.g. `"System Design"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Behavioral => "Behavioral",
            Self::SystemDesign => "System Design",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Technical => "Coding problems and system design questions",
            Self::Behavioral => "Situational questions and soft skills assessment",
            Self::SystemDesign => "Architecture and scalability discussions",
        }
    }

    /// Whole-interview time budget in seconds.
    #[must_use]
    pub fn total_duration_secs(self) -> u32 {
        match self {
            Self::SystemDesign => 3600,
            Self::Technical => 2700,
            Self::Behavioral => 1800,
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(raw) || t.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Candidate seniority bracket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Entry,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub const ALL: [Self; 3] = [Self::Entry, Self::Mid, Self::Senior];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Mid => "mid",
            Self::Senior => "senior",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Entry => "Entry Level (0-2 years)",
            Self::Mid => "Mid Level (3-5 years)",
            Self::Senior => "Senior Level (6+ years)",
        }
    }

    /// Accepts either the slug or the full label.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(raw) || l.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// CODING PROBLEMS
// =============================================================================

/// A coding problem together with the user's attempt history on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodingProblem {
    pub id: u32,
    pub title: String,
    pub difficulty: Difficulty,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub solved: bool,
    pub attempts: u32,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_solved: Option<OffsetDateTime>,
    #[serde(default)]
    pub time_spent_minutes: Option<u32>,
    /// Percentage, 0-100.
    pub success_rate: u32,
    #[serde(default)]
    pub time_complexity: String,
    #[serde(default)]
    pub space_complexity: String,
}

/// Worked example shown in the problem statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemExample {
    pub input: String,
    pub output: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
    pub hidden: bool,
}

/// Full statement for the solver page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetail {
    pub title: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub description: String,
    pub examples: Vec<ProblemExample>,
    pub constraints: Vec<String>,
    pub hints: Vec<String>,
    pub starter_code: String,
    pub test_cases: Vec<TestCase>,
}

/// Outcome of running one test case against submitted code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// 1-based case number.
    pub case: usize,
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
    pub hidden: bool,
}

// =============================================================================
// INTERVIEWS
// =============================================================================

/// Parameters chosen on the mock-interview setup screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSetup {
    #[serde(rename = "type")]
    pub interview_type: InterviewType,
    pub company: String,
    pub experience_level: ExperienceLevel,
}

impl InterviewSetup {
    #[must_use]
    pub fn new(interview_type: InterviewType, company: impl Into<String>, experience_level: ExperienceLevel) -> Self {
        Self { interview_type, company: company.into(), experience_level }
    }

    #[must_use]
    pub fn total_duration_secs(&self) -> u32 {
        self.interview_type.total_duration_secs()
    }
}

/// One question in an interview session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionQuestion {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: InterviewType,
    pub prompt: String,
    #[serde(default)]
    pub follow_up: Vec<String>,
    #[serde(default)]
    pub expected_points: Vec<String>,
    #[serde(default)]
    pub time_limit_secs: Option<u32>,
}

/// A completed mock interview as stored in history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    #[serde(rename = "type")]
    pub interview_type: InterviewType,
    pub company: String,
    pub experience_level: ExperienceLevel,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Overall score, 0-100.
    pub score: u8,
    pub duration_minutes: u32,
    pub feedback: String,
    pub questions_answered: u32,
    pub total_questions: u32,
}

impl InterviewRecord {
    /// Build a record, clamping `score` to 100 and `questions_answered` to
    /// `total_questions`.
    #[must_use]
    pub fn new(
        setup: &InterviewSetup,
        date: OffsetDateTime,
        score: u8,
        duration_minutes: u32,
        feedback: impl Into<String>,
        questions_answered: u32,
        total_questions: u32,
    ) -> Self {
        Self {
            interview_type: setup.interview_type,
            company: setup.company.clone(),
            experience_level: setup.experience_level,
            date,
            score,
            duration_minutes,
            feedback: feedback.into(),
            questions_answered,
            total_questions,
        }
        .normalized()
    }

    /// Re-apply the record invariants. Used on records read back from storage.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.score = self.score.min(100);
        self.questions_answered = self.questions_answered.min(self.total_questions);
        self
    }

    /// Whether every question was answered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_questions > 0 && self.questions_answered == self.total_questions
    }
}

// =============================================================================
// FEEDBACK
// =============================================================================

/// Validation failure for a feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// User-submitted testimonial, newest first in storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

impl Feedback {
    /// Validate and trim a submission.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError`] when the rating is outside 1-5 or any text
    /// field is blank.
    pub fn new(name: &str, role: &str, content: &str, rating: u8, date: OffsetDateTime) -> Result<Self, FeedbackError> {
        if !(1..=5).contains(&rating) {
            return Err(FeedbackError::RatingOutOfRange(rating));
        }
        let name = required(name, "name")?;
        let role = required(role, "role")?;
        let content = required(content, "comment")?;
        Ok(Self { name, role, content, rating, date })
    }
}

fn required(raw: &str, field: &'static str) -> Result<String, FeedbackError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FeedbackError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

/// A testimonial card as rendered on the home page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
}

impl From<&Feedback> for Testimonial {
    fn from(feedback: &Feedback) -> Self {
        Self {
            name: feedback.name.clone(),
            role: feedback.role.clone(),
            content: feedback.content.clone(),
            rating: feedback.rating,
        }
    }
}
