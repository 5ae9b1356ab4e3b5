//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render props and report user intent through callbacks; data
//! fetching stays in `pages` except for the detail drawer, which owns its
//! own load and upload sequence.

pub mod app_layout;
pub mod asset_form;
pub mod button;
pub mod chart;
pub mod detail_drawer;
pub mod entity_table_card;
pub mod kpi_card;
