//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (query parsing, simulated
//! latency, backend calls) and keeps its screen state in a `crate::state`
//! model behind an `RwSignal`. Rendering details live in the page or in
//! `components`.

pub mod dashboard;
pub mod home;
pub mod mock_interview;
pub mod practice;
pub mod profile;
pub mod results;
pub mod room;
pub mod session;
pub mod solver;
pub mod status;
