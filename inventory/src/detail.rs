//! Asset detail loading and image upload sequencing.
//!
//! DESIGN
//! ======
//! The asset record and its history are fetched concurrently and only
//! rendered once both succeed. Image upload is strictly sequential:
//! store the file, then write the returned path onto the asset. The
//! subsequent refresh goes through the same ticketed load as a mount, so a
//! slow refresh cannot overwrite a drawer that has moved on to another id.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use futures::future::try_join;

use crate::api::{ApiError, AssetApi, UploadFile};
use crate::form::FormError;
use crate::format::{format_date_or, format_money_or, format_timestamp, or_placeholder};
use crate::model::{Asset, AssetPayload, HistoryEntry};
use crate::request::{Request, Ticket};

/// Alert text for a rejected (non-image) file.
pub const NOT_AN_IMAGE_ALERT: &str = "Please select an image file";
/// Alert text for any failure during the upload sequence.
pub const UPLOAD_FAILED_ALERT: &str = "Failed to upload image";

/// Everything the detail drawer renders.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetDetail {
    pub asset: Asset,
    pub history: Vec<HistoryEntry>,
}

/// Failure of the image upload sequence.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("file is not an image")]
    NotAnImage,
    #[error("cannot rebuild asset payload: {0}")]
    Payload(#[from] FormError),
    #[error("upload request failed: {0}")]
    Api(#[from] ApiError),
}

impl UploadError {
    /// Message shown in the blocking alert.
    #[must_use]
    pub fn alert_message(&self) -> &'static str {
        match self {
            Self::NotAnImage => NOT_AN_IMAGE_ALERT,
            Self::Payload(_) | Self::Api(_) => UPLOAD_FAILED_ALERT,
        }
    }
}

/// Fetch an asset and its history concurrently.
///
/// # Errors
///
/// Returns the first [`ApiError`] of either request.
pub async fn load_detail<A: AssetApi>(api: &A, asset_id: i64) -> Result<AssetDetail, ApiError> {
    let (asset, history) = try_join(api.get_asset(asset_id), api.asset_history(asset_id)).await?;
    Ok(AssetDetail { asset, history })
}

/// Upload `file` and attach the stored path to `asset`.
///
/// Nothing is sent when the file is not an image. The caller is expected to
/// refresh the detail view after success.
///
/// # Errors
///
/// Returns [`UploadError`] when validation, the upload, or the asset update
/// fails. On error the backend asset is unchanged unless the update itself
/// partially applied server-side.
pub async fn upload_image<A: AssetApi>(api: &A, asset: &Asset, file: &UploadFile) -> Result<Asset, UploadError> {
    if !file.is_image() {
        return Err(UploadError::NotAnImage);
    }
    let payload = AssetPayload::from_asset(asset)?;
    let stored = api.upload_file(file).await?;
    let updated = api.update_asset(asset.id, &payload.with_image_path(stored.blob_path)).await?;
    Ok(updated)
}

/// Drawer state: which asset is shown, its load state, and upload progress.
#[derive(Clone, Debug)]
pub struct DetailView {
    asset_id: i64,
    load: Request<AssetDetail>,
    uploading: bool,
}

impl DetailView {
    #[must_use]
    pub fn new(asset_id: i64) -> Self {
        Self { asset_id, load: Request::new(), uploading: false }
    }

    #[must_use]
    pub fn asset_id(&self) -> i64 {
        self.asset_id
    }

    /// Loaded detail; `None` while loading or after a failed load.
    #[must_use]
    pub fn detail(&self) -> Option<&AssetDetail> {
        self.load.value()
    }

    #[must_use]
    pub fn load_state(&self) -> &crate::request::RequestState<AssetDetail> {
        self.load.state()
    }

    /// The drawer renders only once a load has succeeded.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.load.value().is_some()
    }

    /// Point the drawer at `asset_id` and start loading it.
    pub fn open(&mut self, asset_id: i64) -> Ticket {
        self.asset_id = asset_id;
        self.uploading = false;
        self.load.start()
    }

    /// Re-fetch the asset the drawer currently points at, keeping the old
    /// detail on screen. Load the returned id, not the one that triggered
    /// the refresh; the drawer may have moved on since.
    pub fn refresh(&mut self) -> (Ticket, i64) {
        (self.load.refresh(), self.asset_id)
    }

    /// Apply a load result; stale tickets are ignored.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<AssetDetail, ApiError>) -> bool {
        self.load.finish(ticket, result)
    }

    /// Load (or reload) the current asset through `api`.
    ///
    /// # Errors
    ///
    /// Returns the load failure after recording it in the view state.
    pub async fn load_with<A: AssetApi>(&mut self, api: &A) -> Result<(), ApiError> {
        let ticket = self.load.start();
        let result = load_detail(api, self.asset_id).await;
        let outcome = result.as_ref().map(|_| ()).map_err(ApiError::clone);
        self.finish_load(ticket, result);
        outcome
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn set_uploading(&mut self, uploading: bool) {
        self.uploading = uploading;
    }

    /// Label of the upload button for the current state.
    #[must_use]
    pub fn upload_label(&self) -> &'static str {
        if self.uploading {
            return "Uploading...";
        }
        match self.detail() {
            Some(detail) if detail.asset.image_path.is_some() => "Change Image",
            _ => "Upload Image",
        }
    }
}

/// Display strings for the drawer's summary and info sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailSummary {
    pub serial: String,
    pub status: String,
    pub status_class: String,
    pub purchase_price: String,
    pub current_value: String,
    pub purchase_date: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub assigned_to: String,
}

impl DetailSummary {
    #[must_use]
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            serial: format!("Serial: {}", or_placeholder(asset.serial_number.as_deref(), "N/A")),
            status: asset.status.to_string(),
            status_class: asset.status.css_class(),
            purchase_price: format_money_or(asset.purchase_price, "N/A"),
            current_value: format_money_or(asset.current_value, "N/A"),
            purchase_date: format_date_or(asset.purchase_date.as_deref(), "N/A"),
            category: or_placeholder(asset.category_name(), "Uncategorized"),
            description: or_placeholder(asset.description.as_deref(), "No description provided"),
            location: or_placeholder(asset.location.as_deref(), "Not specified"),
            assigned_to: or_placeholder(asset.assigned_to.as_deref(), "Unassigned"),
        }
    }
}

/// One line of the activity history list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: i64,
    pub action: String,
    pub action_class: String,
    pub details: String,
    pub time: String,
}

impl HistoryRow {
    #[must_use]
    pub fn from_entry(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id,
            action: entry.action.clone(),
            action_class: entry.action.to_lowercase(),
            details: or_placeholder(entry.details.as_deref(), "No details"),
            time: format_timestamp(&entry.timestamp).unwrap_or_default(),
        }
    }
}
