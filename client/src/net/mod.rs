//! Networking for the interview backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements `prep::source::InterviewSource` over HTTP and wraps it in
//! the synthetic fallback. Wire types live in `prep::source`.

pub mod api;
