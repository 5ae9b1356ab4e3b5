//! Networking for the asset admin UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the shared `inventory::AssetApi` seam over browser
//! `fetch` so pages can hand it to the `inventory` sequencing helpers.

pub mod api;
