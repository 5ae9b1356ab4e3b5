//! Shared asset-admin domain model and view logic.
//!
//! This crate owns everything the UI and the CLI agree on: the REST DTOs,
//! the endpoint catalogue and [`api::AssetApi`] seam, the client-side asset
//! filter, form normalization, and the request bookkeeping that keeps late
//! responses from clobbering newer state. It has no UI framework dependency
//! so all of it is testable natively.
//!
//! ARCHITECTURE
//! ============
//! - `model`: passthrough DTOs for assets, categories, history, dashboard.
//! - `api`: endpoint paths, base-URL config, [`api::AssetApi`], [`api::ApiError`].
//! - `filter`: search + status filtering over a loaded asset list.
//! - `form`: controlled form state and submit-time normalization.
//! - `request`: `Idle -> Loading -> Ready | Failed` with stale-ticket rejection.
//! - `detail`: concurrent detail load and the two-step image upload.
//! - `pages`, `table`, `dashboard`: page view models consumed by renderers.
//! - `format`: number/date presentation.

pub mod api;
pub mod dashboard;
pub mod detail;
pub mod filter;
pub mod form;
pub mod format;
pub mod model;
pub mod pages;
pub mod request;
pub mod table;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use api::{ApiConfig, ApiError, AssetApi, AssetQuery, UploadFile};
pub use filter::{AssetFilter, filter_assets};
pub use form::{AssetForm, CategoryForm, FormError};
pub use model::{
    Asset, AssetPayload, AssetStatus, Category, CategoryPayload, DashboardSummary, HistoryEntry, UploadedFile,
};
pub use request::{Request, RequestState, RequestTracker, Ticket};
