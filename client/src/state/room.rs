//! Chat-style interview room transcript.
//!
//! DESIGN
//! ======
//! Messages are append-only. `send` moves the draft into the transcript and
//! blocks further sends until `receive_reply` posts the interviewer's answer,
//! so the transcript always alternates user/assistant after the opening pair.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use time::OffsetDateTime;
use uuid::Uuid;

use prep::catalog;
use prep::source::{InitializeResponse, LogRequest};

use crate::util::links;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

impl ChatRole {
    /// Role string sent to the log endpoint.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub at: OffsetDateTime,
}

impl ChatMessage {
    #[must_use]
    pub fn new(role: ChatRole, content: impl Into<String>, at: OffsetDateTime) -> Self {
        Self { id: Uuid::new_v4(), role, content: content.into(), at }
    }

    #[must_use]
    pub fn log_request(&self) -> LogRequest {
        LogRequest { message: self.content.clone(), role: self.role.as_str().to_owned() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomState {
    pub room_name: String,
    pub messages: Vec<ChatMessage>,
    pub draft: String,
    pub awaiting_reply: bool,
}

impl RoomState {
    /// Fresh transcript with the greeting and the opening question.
    #[must_use]
    pub fn open(room_name: impl Into<String>, interview_type: &str, now: OffsetDateTime) -> Self {
        Self {
            room_name: room_name.into(),
            messages: vec![
                ChatMessage::new(ChatRole::System, catalog::room_intro(interview_type), now),
                ChatMessage::new(ChatRole::Assistant, catalog::ROOM_OPENING_QUESTION, now),
            ],
            draft: String::new(),
            awaiting_reply: false,
        }
    }

    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.awaiting_reply && !self.draft.trim().is_empty()
    }

    /// Post the draft as a user message and wait for a reply.
    pub fn send(&mut self, now: OffsetDateTime) -> Option<ChatMessage> {
        if !self.can_send() {
            return None;
        }
        let content = std::mem::take(&mut self.draft).trim().to_owned();
        let message = ChatMessage::new(ChatRole::User, content, now);
        self.messages.push(message.clone());
        self.awaiting_reply = true;
        Some(message)
    }

    pub fn receive_reply(&mut self, content: &str, now: OffsetDateTime) -> ChatMessage {
        let message = ChatMessage::new(ChatRole::Assistant, content, now);
        self.messages.push(message.clone());
        self.awaiting_reply = false;
        message
    }
}

/// Where "End Interview" leads: the status page for the stored interview.
#[must_use]
pub fn end_link(handle: Option<&InitializeResponse>) -> String {
    handle.map_or_else(|| links::STATUS.to_owned(), |h| links::status_for(&h.interview_id))
}
