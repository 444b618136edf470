use time::macros::datetime;

use super::*;

// =============================================================
// Enum parsing
// =============================================================

#[test]
fn difficulty_parse_is_case_insensitive() {
    assert_eq!(Difficulty::parse("easy"), Some(Difficulty::Easy));
    assert_eq!(Difficulty::parse(" HARD "), Some(Difficulty::Hard));
    assert_eq!(Difficulty::parse("extreme"), None);
}

#[test]
fn interview_type_parses_slug_and_label() {
    assert_eq!(InterviewType::parse("system-design"), Some(InterviewType::SystemDesign));
    assert_eq!(InterviewType::parse("System Design"), Some(InterviewType::SystemDesign));
    assert_eq!(InterviewType::parse("behavioral"), Some(InterviewType::Behavioral));
    assert_eq!(InterviewType::parse("pairing"), None);
}

#[test]
fn interview_type_serializes_as_kebab_slug() {
    let json = serde_json::to_string(&InterviewType::SystemDesign).unwrap();
    assert_eq!(json, "\"system-design\"");
}

#[test]
fn interview_type_durations() {
    assert_eq!(InterviewType::SystemDesign.total_duration_secs(), 3600);
    assert_eq!(InterviewType::Technical.total_duration_secs(), 2700);
    assert_eq!(InterviewType::Behavioral.total_duration_secs(), 1800);
}

#[test]
fn experience_level_parses_slug_and_label() {
    assert_eq!(ExperienceLevel::parse("mid"), Some(ExperienceLevel::Mid));
    assert_eq!(ExperienceLevel::parse("Senior Level (6+ years)"), Some(ExperienceLevel::Senior));
    assert_eq!(ExperienceLevel::parse(""), None);
}

// =============================================================
// InterviewRecord
// =============================================================

fn setup() -> InterviewSetup {
    InterviewSetup::new(InterviewType::Behavioral, "Meta", ExperienceLevel::Mid)
}

#[test]
fn interview_record_clamps_answered_to_total() {
    let record = InterviewRecord::new(&setup(), datetime!(2025-03-01 10:00 UTC), 92, 30, "", 5, 2);
    assert_eq!(record.questions_answered, 2);
    assert_eq!(record.total_questions, 2);
    assert!(record.is_complete());
}

#[test]
fn interview_record_clamps_score() {
    let record = InterviewRecord::new(&setup(), datetime!(2025-03-01 10:00 UTC), 140, 30, "", 1, 2);
    assert_eq!(record.score, 100);
    assert!(!record.is_complete());
}

#[test]
fn normalized_repairs_deserialized_record() {
    let json = r#"{
        "type": "technical",
        "company": "Google",
        "experienceLevel": "entry",
        "date": "2025-03-01T10:00:00Z",
        "score": 85,
        "durationMinutes": 40,
        "feedback": "Strong problem-solving skills",
        "questionsAnswered": 9,
        "totalQuestions": 2
    }"#;
    let record: InterviewRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.questions_answered, 9);
    let record = record.normalized();
    assert_eq!(record.questions_answered, 2);
    assert_eq!(record.interview_type, InterviewType::Technical);
}

#[test]
fn empty_interview_is_never_complete() {
    let record = InterviewRecord::new(&setup(), datetime!(2025-03-01 10:00 UTC), 0, 0, "", 0, 0);
    assert!(!record.is_complete());
}

// =============================================================
// Feedback
// =============================================================

#[test]
fn feedback_trims_fields() {
    let fb = Feedback::new("  Ada ", " Engineer ", " Great ", 5, datetime!(2025-03-01 10:00 UTC)).unwrap();
    assert_eq!(fb.name, "Ada");
    assert_eq!(fb.role, "Engineer");
    assert_eq!(fb.content, "Great");
}

#[test]
fn feedback_rejects_zero_rating() {
    let err = Feedback::new("Ada", "Engineer", "Great", 0, datetime!(2025-03-01 10:00 UTC)).unwrap_err();
    assert_eq!(err, FeedbackError::RatingOutOfRange(0));
}

#[test]
fn feedback_rejects_blank_comment() {
    let err = Feedback::new("Ada", "Engineer", "   ", 4, datetime!(2025-03-01 10:00 UTC)).unwrap_err();
    assert_eq!(err, FeedbackError::MissingField("comment"));
    assert_eq!(err.to_string(), "comment is required");
}

#[test]
fn testimonial_from_feedback_drops_date() {
    let fb = Feedback::new("Ada", "Engineer", "Great", 5, datetime!(2025-03-01 10:00 UTC)).unwrap();
    let t = Testimonial::from(&fb);
    assert_eq!(t.name, "Ada");
    assert_eq!(t.rating, 5);
}

#[test]
fn coding_problem_defaults_optional_fields() {
    let json = r#"{
        "id": 7,
        "title": "Two Sum",
        "difficulty": "Easy",
        "category": "Array",
        "solved": false,
        "attempts": 0,
        "successRate": 0
    }"#;
    let problem: CodingProblem = serde_json::from_str(json).unwrap();
    assert_eq!(problem.last_solved, None);
    assert_eq!(problem.time_spent_minutes, None);
    assert!(problem.description.is_empty());
}
