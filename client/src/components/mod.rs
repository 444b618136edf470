//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and small display widgets. The header and
//! feedback modal read/write the shared `UiState` and `ProgressState`
//! contexts; the rest take plain props.

pub mod feedback_modal;
pub mod header;
pub mod star_rating;
pub mod stat_card;
pub mod theme_toggle;
