use time::macros::datetime;

use super::*;

const START: OffsetDateTime = datetime!(2025-06-15 10:00 UTC);

fn setup() -> InterviewSetup {
    InterviewSetup::new(InterviewType::Technical, "Google", ExperienceLevel::Senior)
}

fn started(policy: TimeoutPolicy) -> SessionPageState {
    let mut page = SessionPageState::generating();
    page.prepared(prepare_session(&setup(), policy));
    page.start(START).unwrap();
    page
}

#[test]
fn setup_needs_every_selection() {
    let mut form = MockSetupState::default();
    assert!(!form.can_start());
    form.interview_type = Some(InterviewType::Behavioral);
    form.level = Some(ExperienceLevel::Entry);
    assert!(!form.can_start());
    form.company = "  Meta ".to_owned();
    assert!(form.can_start());
    assert_eq!(form.setup().unwrap().company, "Meta");
}

#[test]
fn setup_link_points_at_session_page() {
    let form = MockSetupState {
        interview_type: Some(InterviewType::Technical),
        company: "Google".to_owned(),
        level: Some(ExperienceLevel::Mid),
    };
    assert_eq!(form.link().unwrap(), "/interview/session?type=technical&company=Google&level=mid");
}

#[test]
fn generating_page_has_no_session() {
    let mut page = SessionPageState::generating();
    assert!(page.generating);
    assert_eq!(page.start(START), Err(SessionError::NotStarted));
}

#[test]
fn submitting_every_answer_yields_outcome_in_order() {
    let mut page = started(TimeoutPolicy::Advisory);
    page.draft = "first".to_owned();
    assert_eq!(page.submit(START).unwrap(), None);
    assert!(page.draft.is_empty());
    page.draft = "second".to_owned();
    let outcome = page.submit(datetime!(2025-06-15 10:20 UTC)).unwrap().unwrap();
    assert_eq!(outcome.responses, ["first", "second"]);
    assert_eq!(outcome.duration_minutes, 20);
}

#[test]
fn ending_early_keeps_draft() {
    let mut page = started(TimeoutPolicy::Advisory);
    page.draft = "partial".to_owned();
    let outcome = page.end(START).unwrap();
    assert_eq!(outcome.responses[0], "partial");
    assert_eq!(outcome.responses[1], "");
}

#[test]
fn advisory_timeout_flags_overtime_and_stays() {
    let mut page = started(TimeoutPolicy::Advisory);
    for _ in 0..1200 {
        assert_eq!(page.tick(START).unwrap(), None);
    }
    assert!(page.overtime);
    assert_eq!(page.session.as_ref().unwrap().current_index(), 0);
}

#[test]
fn auto_advance_moves_on_when_time_runs_out() {
    let mut page = started(TimeoutPolicy::AutoAdvance);
    page.draft = "ran out".to_owned();
    for _ in 0..1200 {
        page.tick(START).unwrap();
    }
    let session = page.session.as_ref().unwrap();
    assert_eq!(session.current_index(), 1);
    assert_eq!(session.responses()[0], "ran out");
    assert!(page.draft.is_empty());
}

#[test]
fn results_record_history_once() {
    let mut page = started(TimeoutPolicy::Advisory);
    page.draft = "answer".to_owned();
    let outcome = page.end(START).unwrap();

    let mut results = ResultsState::default();
    results.finished(outcome);
    let record = results.analysed(AnalysisReport::mock()).unwrap();
    assert_eq!(record.score, 85);
    assert_eq!(record.questions_answered, 1);
    assert_eq!(record.total_questions, 2);
    assert!(results.is_recorded());
    assert!(results.analysed(AnalysisReport::mock()).is_none());
}

#[test]
fn results_without_outcome_record_nothing() {
    let mut results = ResultsState::default();
    assert!(results.analysed(AnalysisReport::mock()).is_none());
    assert!(results.report.is_some());
}
