//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (dialogs, console logging) and
//! pure geometry from page and component logic to keep them testable.

pub mod alert;
pub mod chart_math;
