use prep::source::{InterviewStatusKind, mock_context, mock_status};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use time::macros::datetime;

use super::*;

fn handle() -> InitializeResponse {
    InitializeResponse {
        interview_id: "int_1".to_owned(),
        room_name: "room_x".to_owned(),
        status: InterviewStatusKind::Initialized,
    }
}

#[test]
fn handle_prefills_blank_fields() {
    let mut state = StatusState::with_id(None);
    assert_eq!(state, StatusState::default());
    state.prefill(&handle());
    assert_eq!(state.interview_id, "int_1");
    assert_eq!(state.room_name, "room_x");
}

#[test]
fn url_id_wins_over_stored_handle() {
    let mut state = StatusState::with_id(Some(" int_42 "));
    assert_eq!(state.interview_id, "int_42");
    state.prefill(&handle());
    assert_eq!(state.interview_id, "int_42");
    assert_eq!(state.room_name, "room_x");
}

#[test]
fn blank_id_does_not_load() {
    let mut state = StatusState { interview_id: "  ".to_owned(), ..StatusState::default() };
    assert!(state.begin_status().is_none());
    assert!(!state.loading);
}

#[test]
fn status_lookup_fills_room_when_empty() {
    let mut state = StatusState { interview_id: " int_9 ".to_owned(), ..StatusState::default() };
    assert_eq!(state.begin_status().as_deref(), Some("int_9"));
    assert!(state.begin_context().is_none());

    let mut rng = SmallRng::seed_from_u64(3);
    let status = mock_status("int_9", datetime!(2025-06-15 12:00 UTC), &mut rng);
    let room = status.room_name.clone();
    state.status_loaded(status);
    assert!(!state.loading);
    assert_eq!(state.room_name, room);

    assert_eq!(state.begin_context(), Some(room.clone()));
    state.context_loaded(mock_context(&room));
    assert_eq!(state.context.as_ref().unwrap().question_number, 7);
}
