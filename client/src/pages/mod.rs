//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page keeps its state in one `RwSignal` over an `inventory` page
//! model and only wires browser events and async loads to it. Rendering
//! details live in `components`.

pub mod assets;
pub mod categories;
pub mod dashboard;
pub mod reports;
