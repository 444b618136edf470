//! Post-interview analysis shown on the results screen.
//!
//! There is no grading backend, so [`AnalysisReport::mock`] returns a fixed
//! report. The rest of the module is presentation math over scores and the
//! conversion from a finished session into a history record.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use serde::{Deserialize, Serialize};

use crate::model::InterviewRecord;
use crate::session::SessionOutcome;

/// Per-area scores, each 0-100.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub communication: u8,
    pub technical_knowledge: u8,
    pub problem_solving: u8,
    pub cultural_fit: u8,
}

impl ScoreBreakdown {
    /// `(label, score)` rows in display order.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, u8); 4] {
        [
            ("Communication", self.communication),
            ("Technical Knowledge", self.technical_knowledge),
            ("Problem Solving", self.problem_solving),
            ("Cultural Fit", self.cultural_fit),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub overall_score: u8,
    pub breakdown: ScoreBreakdown,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub feedback: String,
    pub next_steps: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

impl AnalysisReport {
    #[must_use]
    pub fn mock() -> Self {
        Self {
            overall_score: 85,
            breakdown: ScoreBreakdown { communication: 92, technical_knowledge: 78, problem_solving: 88, cultural_fit: 85 },
            strengths: owned(&[
                "Clear and structured communication",
                "Good understanding of system design principles",
                "Effective problem-solving approach",
                "Strong examples from past experience",
            ]),
            improvements: owned(&[
                "Could provide more specific technical details",
                "Consider discussing trade-offs more thoroughly",
                "Practice explaining complex concepts more simply",
                "Include more quantitative results in examples",
            ]),
            feedback: "Overall strong performance with good technical foundation. Focus on providing more detailed \
                       explanations and considering edge cases in your solutions."
                .to_owned(),
            next_steps: owned(&[
                "Practice system design problems with larger scale",
                "Review advanced algorithms and data structures",
                "Prepare more STAR method examples",
                "Study company-specific technologies and practices",
            ]),
        }
    }
}

/// Colour bucket for a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreBand {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            80..=89 => Self::Good,
            70..=79 => Self::Fair,
            _ => Self::NeedsWork,
        }
    }

    /// CSS modifier used by the results page.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Excellent => "score--excellent",
            Self::Good => "score--good",
            Self::Fair => "score--fair",
            Self::NeedsWork => "score--needs-work",
        }
    }
}

/// Filled stars out of five.
#[must_use]
pub fn stars(score: u8) -> u8 {
    (score / 20).min(5)
}

impl InterviewRecord {
    /// History entry for a finished session graded by `report`.
    #[must_use]
    pub fn from_outcome(outcome: &SessionOutcome, report: &AnalysisReport) -> Self {
        let answered = outcome.responses.iter().filter(|r| !r.trim().is_empty()).count();
        Self::new(
            &outcome.setup,
            outcome.finished_at,
            report.overall_score,
            outcome.duration_minutes,
            report.feedback.clone(),
            u32::try_from(answered).unwrap_or(u32::MAX),
            u32::try_from(outcome.questions.len()).unwrap_or(u32::MAX),
        )
    }
}
