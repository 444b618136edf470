//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! document attributes, URLs) from page and component logic so the latter
//! stay testable natively.

pub mod clock;
pub mod dark_mode;
pub mod links;
pub mod storage;
pub mod timer;
