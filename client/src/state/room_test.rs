use time::macros::datetime;

use super::*;

const NOW: OffsetDateTime = datetime!(2025-06-15 12:00 UTC);

#[test]
fn open_posts_greeting_then_question() {
    let room = RoomState::open("room_abc", "technical", NOW);
    assert_eq!(room.room_name, "room_abc");
    assert_eq!(room.messages.len(), 2);
    assert_eq!(room.messages[0].role, ChatRole::System);
    assert!(room.messages[0].content.contains("technical interview"));
    assert_eq!(room.messages[1].role, ChatRole::Assistant);
    assert_eq!(room.messages[1].content, catalog::ROOM_OPENING_QUESTION);
    assert_ne!(room.messages[0].id, room.messages[1].id);
}

#[test]
fn blank_draft_is_not_sent() {
    let mut room = RoomState::open("r", "", NOW);
    room.draft = "   ".to_owned();
    assert!(room.send(NOW).is_none());
    assert_eq!(room.messages.len(), 2);
}

#[test]
fn send_blocks_until_reply() {
    let mut room = RoomState::open("r", "behavioral", NOW);
    room.draft = "  I build compilers. ".to_owned();
    let sent = room.send(NOW).unwrap();
    assert_eq!(sent.content, "I build compilers.");
    assert_eq!(sent.log_request().role, "user");
    assert!(room.draft.is_empty());
    assert!(room.awaiting_reply);

    room.draft = "more".to_owned();
    assert!(room.send(NOW).is_none());

    let reply = room.receive_reply("Interesting.", NOW);
    assert_eq!(reply.role, ChatRole::Assistant);
    assert!(!room.awaiting_reply);
    assert_eq!(room.messages.len(), 4);
    assert!(room.send(NOW).is_some());
}

#[test]
fn log_request_matches_wire_shape() {
    let mut room = RoomState::open("r", "technical", NOW);
    room.draft = "hello".to_owned();
    let sent = room.send(NOW).unwrap();
    let body = serde_json::to_value(sent.log_request()).unwrap();
    assert_eq!(body, serde_json::json!({ "message": "hello", "role": "user" }));
}

#[test]
fn end_link_targets_stored_interview() {
    let handle = InitializeResponse {
        interview_id: "int_1700000000000".to_owned(),
        room_name: "room_abc".to_owned(),
        status: prep::source::InterviewStatusKind::Initialized,
    };
    assert_eq!(end_link(Some(&handle)), "/status?id=int_1700000000000");
    assert_eq!(end_link(None), "/status");
}
