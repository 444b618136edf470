//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen (`practice`, `solver`, `interview`, ...) so each
//! page depends on a small plain-struct model that tests can drive without a
//! browser. `ui` and `progress` are app-wide and provided as context by
//! `App`; the rest are created per page inside an `RwSignal`.

pub mod feedback;
pub mod home;
pub mod interview;
pub mod practice;
pub mod progress;
pub mod room;
pub mod solver;
pub mod status;
pub mod ui;
