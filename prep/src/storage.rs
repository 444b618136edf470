//! Key-value persistence for theme, problems, history, and feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build backs [`KeyValueStore`] with `localStorage`; tests and
//! server rendering use [`MemoryStore`]. Values are JSON blobs with no schema
//! version. Anything absent or malformed reads back as the hard-coded default.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: a bad blob is logged and replaced by the default. Writes
//! return [`StoreError`] so callers can log them; the UI does not surface them.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::catalog;
use crate::model::{CodingProblem, Feedback, InterviewRecord};
use crate::source::InitializeResponse;

pub const THEME_KEY: &str = "prepify_theme";
pub const PROBLEMS_KEY: &str = "prepify_problems";
pub const HISTORY_KEY: &str = "interviewHistory";
pub const FEEDBACK_KEY: &str = "userFeedback";
pub const CURRENT_INTERVIEW_KEY: &str = "currentInterview";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to serialize value for {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage write failed for {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("storage unavailable")]
    Unavailable,
}

/// String-keyed, string-valued storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Implementations return [`StoreError`] when the write is rejected.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store used by tests and server-side rendering.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// JSON HELPERS
// =============================================================================

/// Decode the JSON blob at `key`. Absent or malformed values yield `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed value for {key}: {e}");
            None
        }
    }
}

/// Encode `value` as JSON under `key`.
///
/// # Errors
///
/// Returns [`StoreError::Serialize`] or the store's own write error.
pub fn save_json<T: Serialize + ?Sized>(store: &mut impl KeyValueStore, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize { key: key.to_owned(), source })?;
    store.set(key, &raw)
}

/// [`load_json`] with a fallback.
pub fn load_or<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str, default: impl FnOnce() -> T) -> T {
    load_json(store, key).unwrap_or_else(default)
}

// =============================================================================
// THEME
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }
}

/// Stored theme, or `None` when the user never chose one.
pub fn load_theme(store: &impl KeyValueStore) -> Option<Theme> {
    match store.get(THEME_KEY)?.as_str() {
        "dark" => Some(Theme::Dark),
        "light" => Some(Theme::Light),
        other => {
            log::warn!("ignoring unknown theme value {other:?}");
            None
        }
    }
}

/// # Errors
///
/// Propagates the store's write error.
pub fn save_theme(store: &mut impl KeyValueStore, theme: Theme) -> Result<(), StoreError> {
    store.set(THEME_KEY, theme.as_str())
}

// =============================================================================
// DOMAIN LISTS
// =============================================================================

/// Stored problem list, or the built-in catalog.
pub fn load_problems(store: &impl KeyValueStore) -> Vec<CodingProblem> {
    load_or(store, PROBLEMS_KEY, catalog::default_problems)
}

/// # Errors
///
/// See [`save_json`].
pub fn save_problems(store: &mut impl KeyValueStore, problems: &[CodingProblem]) -> Result<(), StoreError> {
    save_json(store, PROBLEMS_KEY, problems)
}

/// Stored interview history with record invariants re-applied.
pub fn load_history(store: &impl KeyValueStore) -> Vec<InterviewRecord> {
    load_or::<Vec<InterviewRecord>>(store, HISTORY_KEY, Vec::new)
        .into_iter()
        .map(InterviewRecord::normalized)
        .collect()
}

/// Append `record` to the stored history and return the new list.
///
/// # Errors
///
/// See [`save_json`].
pub fn append_history(store: &mut impl KeyValueStore, record: InterviewRecord) -> Result<Vec<InterviewRecord>, StoreError> {
    let mut history = load_history(&*store);
    history.push(record.normalized());
    save_json(store, HISTORY_KEY, &history)?;
    Ok(history)
}

/// Stored user feedback, newest first.
pub fn load_feedback(store: &impl KeyValueStore) -> Vec<Feedback> {
    load_or(store, FEEDBACK_KEY, Vec::new)
}

/// Insert `feedback` at the front of the stored list and return the new list.
///
/// # Errors
///
/// See [`save_json`].
pub fn prepend_feedback(store: &mut impl KeyValueStore, feedback: Feedback) -> Result<Vec<Feedback>, StoreError> {
    let mut list = load_feedback(&*store);
    list.insert(0, feedback);
    save_json(store, FEEDBACK_KEY, &list)?;
    Ok(list)
}

/// # Errors
///
/// See [`save_json`].
pub fn save_current_interview(store: &mut impl KeyValueStore, handle: &InitializeResponse) -> Result<(), StoreError> {
    save_json(store, CURRENT_INTERVIEW_KEY, handle)
}

pub fn load_current_interview(store: &impl KeyValueStore) -> Option<InitializeResponse> {
    load_json(store, CURRENT_INTERVIEW_KEY)
}
