use time::macros::datetime;

use super::*;
use crate::model::{ExperienceLevel, InterviewSetup, InterviewType};

fn outcome(responses: &[&str]) -> SessionOutcome {
    let setup = InterviewSetup::new(InterviewType::Behavioral, "Netflix", ExperienceLevel::Senior);
    let questions = crate::catalog::generate_questions(setup.interview_type, &setup.company, setup.experience_level);
    SessionOutcome {
        setup,
        questions,
        responses: responses.iter().map(|r| (*r).to_owned()).collect(),
        started_at: datetime!(2025-06-15 14:00 UTC),
        finished_at: datetime!(2025-06-15 14:18 UTC),
        duration_minutes: 18,
    }
}

#[test]
fn mock_report_matches_fixed_scores() {
    let report = AnalysisReport::mock();
    assert_eq!(report.overall_score, 85);
    assert_eq!(report.breakdown.rows()[0], ("Communication", 92));
    assert_eq!(report.breakdown.rows()[1], ("Technical Knowledge", 78));
    assert_eq!(report.strengths.len(), 4);
    assert_eq!(report.next_steps.len(), 4);
}

#[test]
fn score_band_thresholds() {
    assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
    assert_eq!(ScoreBand::from_score(90), ScoreBand::Excellent);
    assert_eq!(ScoreBand::from_score(89), ScoreBand::Good);
    assert_eq!(ScoreBand::from_score(80), ScoreBand::Good);
    assert_eq!(ScoreBand::from_score(70), ScoreBand::Fair);
    assert_eq!(ScoreBand::from_score(69), ScoreBand::NeedsWork);
    assert_eq!(ScoreBand::from_score(0).css_class(), "score--needs-work");
}

#[test]
fn stars_floor_score_over_twenty() {
    assert_eq!(stars(85), 4);
    assert_eq!(stars(100), 5);
    assert_eq!(stars(19), 0);
    assert_eq!(stars(255), 5);
}

#[test]
fn record_counts_non_blank_answers() {
    let record = InterviewRecord::from_outcome(&outcome(&["I calmed things down", "  "]), &AnalysisReport::mock());
    assert_eq!(record.questions_answered, 1);
    assert_eq!(record.total_questions, 2);
    assert_eq!(record.score, 85);
    assert_eq!(record.duration_minutes, 18);
    assert_eq!(record.company, "Netflix");
    assert_eq!(record.date, datetime!(2025-06-15 14:18 UTC));
    assert!(record.feedback.starts_with("Overall strong performance"));
}

#[test]
fn fully_answered_outcome_is_complete() {
    let record = InterviewRecord::from_outcome(&outcome(&["a", "b"]), &AnalysisReport::mock());
    assert!(record.is_complete());
}
