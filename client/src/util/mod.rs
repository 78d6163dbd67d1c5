//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, scroll
//! listeners) and cross-feature signaling from component logic.

pub mod dark_mode;
pub mod event_bus;
pub mod scroll;
