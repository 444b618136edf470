//! Domain models and derivation helpers for the Prepify interview-prep app.
//!
//! This crate is UI-framework agnostic so the Leptos client (and its tests)
//! can consume it directly. Nothing here touches the browser: persistence goes
//! through [`storage::KeyValueStore`], time is passed in by the caller, and
//! randomness comes from an injected [`rand::Rng`].

pub mod achievements;
pub mod analysis;
pub mod catalog;
pub mod model;
pub mod session;
pub mod source;
pub mod stats;
pub mod storage;

pub use model::{
    CodingProblem, Difficulty, ExperienceLevel, Feedback, FeedbackError, InterviewRecord, InterviewSetup,
    InterviewType, ProblemDetail, SessionQuestion, Testimonial, TestCase, TestResult,
};
pub use session::{Advance, Session, SessionError, SessionOutcome, SessionPhase, Tick, TimeoutPolicy};
pub use source::{InterviewSource, SourceError, SourceMode};
pub use storage::{KeyValueStore, MemoryStore, StoreError, Theme};
