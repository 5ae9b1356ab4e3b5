//! REST endpoint catalogue and the transport-agnostic API seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client implements [`AssetApi`] over `gloo-net`, the CLI over
//! `reqwest`. Both build URLs through [`ApiConfig`] and the path helpers
//! here so the two front-ends can never disagree about the wire surface.
//!
//! ERROR HANDLING
//! ==============
//! Implementations map every failure into [`ApiError`]; callers decide
//! whether that becomes an alert, a log line, or nothing at all.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::model::{
    Asset, AssetPayload, Category, CategoryPayload, DashboardSummary, HistoryEntry, UploadedFile,
};

pub const ASSETS_PATH: &str = "/api/assets";
pub const CATEGORIES_PATH: &str = "/api/categories";
pub const DASHBOARD_SUMMARY_PATH: &str = "/api/dashboard/summary";
pub const FILE_UPLOAD_PATH: &str = "/api/files/upload";
pub const FILES_PATH: &str = "/api/files";

/// Multipart field name expected by the upload endpoint.
pub const UPLOAD_FIELD: &str = "file";

/// Failure talking to the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("API is not available in this environment")]
    Unavailable,
}

/// Server-side narrowing for `GET /api/assets`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetQuery {
    pub status: Option<String>,
    pub category_id: Option<i64>,
}

impl AssetQuery {
    /// Query pairs in a stable order, skipping unset and empty values.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("status", status.to_owned()));
        }
        if let Some(category_id) = self.category_id {
            pairs.push(("category_id", category_id.to_string()));
        }
        pairs
    }
}

/// Base URL the API paths are resolved against.
///
/// An empty base means same-origin: paths are used as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Environment variable naming the API base URL.
    pub const ENV_VAR: &'static str = "ASSET_API_URL";

    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn same_origin() -> Self {
        Self::default()
    }

    /// Build from an optional raw value such as `option_env!` or `env::var`.
    #[must_use]
    pub fn from_value(raw: Option<&str>) -> Self {
        raw.map_or_else(Self::same_origin, Self::new)
    }

    /// Read [`ApiConfig::ENV_VAR`] from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(Self::ENV_VAR).ok().as_deref())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn is_same_origin(&self) -> bool {
        self.base_url.is_empty()
    }

    /// Absolute (or same-origin) URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// URL for an asset list request including query parameters.
    #[must_use]
    pub fn assets_url(&self, query: &AssetQuery) -> String {
        let pairs = query.pairs();
        if pairs.is_empty() {
            return self.url(ASSETS_PATH);
        }
        let encoded = pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", encode_uri_component(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{encoded}", self.url(ASSETS_PATH))
    }

    /// URL an `<img>` uses to display a stored file.
    #[must_use]
    pub fn file_url(&self, blob_path: &str) -> String {
        self.url(&file_path(blob_path))
    }
}

#[must_use]
pub fn asset_path(id: i64) -> String {
    format!("{ASSETS_PATH}/{id}")
}

#[must_use]
pub fn asset_history_path(id: i64) -> String {
    format!("{ASSETS_PATH}/{id}/history")
}

#[must_use]
pub fn category_path(id: i64) -> String {
    format!("{CATEGORIES_PATH}/{id}")
}

/// Download path for a stored blob; the whole path is one encoded segment.
#[must_use]
pub fn file_path(blob_path: &str) -> String {
    format!("{FILES_PATH}/{}", encode_uri_component(blob_path))
}

/// Percent-encode everything except the `encodeURIComponent` unreserved set.
#[must_use]
pub fn encode_uri_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// A file picked for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Only `image/*` content types are accepted for asset images.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Every backend call the UI makes.
///
/// Futures are not required to be `Send`; the browser runs them on a
/// single-threaded executor.
pub trait AssetApi {
    async fn list_assets(&self, query: &AssetQuery) -> Result<Vec<Asset>, ApiError>;
    async fn get_asset(&self, id: i64) -> Result<Asset, ApiError>;
    async fn create_asset(&self, payload: &AssetPayload) -> Result<Asset, ApiError>;
    async fn update_asset(&self, id: i64, payload: &AssetPayload) -> Result<Asset, ApiError>;
    async fn delete_asset(&self, id: i64) -> Result<(), ApiError>;
    async fn asset_history(&self, id: i64) -> Result<Vec<HistoryEntry>, ApiError>;

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;
    async fn create_category(&self, payload: &CategoryPayload) -> Result<Category, ApiError>;
    async fn update_category(&self, id: i64, payload: &CategoryPayload) -> Result<Category, ApiError>;
    async fn delete_category(&self, id: i64) -> Result<(), ApiError>;

    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError>;

    /// Store a file and return the blob path to reference it by.
    async fn upload_file(&self, file: &UploadFile) -> Result<UploadedFile, ApiError>;
}
