//! Backend DTOs for assets, categories, history, and the dashboard summary.
//!
//! DESIGN
//! ======
//! These types mirror the REST payloads one-to-one. Optional backend columns
//! stay `Option` so each renderer picks its own placeholder text, and
//! aggregate fields default to zero/empty so a partial summary still renders.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::form::FormError;

/// Lifecycle status of an asset.
///
/// The backend stores status as free text, so unknown values are preserved
/// verbatim in [`AssetStatus::Other`] instead of failing deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AssetStatus {
    #[default]
    Active,
    Maintenance,
    Retired,
    Other(String),
}

impl AssetStatus {
    /// Statuses offered by the status filter and the asset form.
    pub const SELECTABLE: [AssetStatus; 3] = [AssetStatus::Active, AssetStatus::Maintenance, AssetStatus::Retired];

    /// Parse a wire value. Matching is exact and case-sensitive.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Active" => Self::Active,
            "Maintenance" => Self::Maintenance,
            "Retired" => Self::Retired,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Maintenance => "Maintenance",
            Self::Retired => "Retired",
            Self::Other(raw) => raw,
        }
    }

    /// Lowercased modifier used for status badges.
    #[must_use]
    pub fn css_class(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AssetStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AssetStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// A grouping label for assets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A tracked physical item as returned by `/api/assets`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    /// ISO 8601 date (`YYYY-MM-DD`).
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub purchase_price: Option<f64>,
    #[serde(default)]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub status: AssetStatus,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Storage path of the uploaded image, if any.
    #[serde(default)]
    pub image_path: Option<String>,
    /// Embedded category record.
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Asset {
    /// Category id from the flat column, falling back to the embedded record.
    #[must_use]
    pub fn effective_category_id(&self) -> Option<i64> {
        self.category_id.or_else(|| self.category.as_ref().map(|c| c.id))
    }

    /// Name of the embedded category, if the backend included one.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}

/// An audit-log entry for an asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    #[serde(default)]
    pub asset_id: i64,
    /// Action verb such as `CREATE` or `UPDATE`.
    pub action: String,
    #[serde(default)]
    pub details: Option<String>,
    /// ISO 8601 timestamp.
    pub timestamp: String,
}

/// Asset count for one category on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: i64,
}

/// Asset count for one status on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: AssetStatus,
    pub count: i64,
}

/// Aggregated metrics computed server-side for the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_assets: i64,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub active_assets: i64,
    #[serde(default)]
    pub maintenance_due: i64,
    #[serde(default)]
    pub category_distribution: Vec<CategoryCount>,
    #[serde(default)]
    pub status_distribution: Vec<StatusCount>,
    #[serde(default)]
    pub recent_activities: Vec<HistoryEntry>,
}

/// Response of `POST /api/files/upload`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub blob_path: String,
}

/// Request body for creating or updating an asset.
///
/// Text fields are carried verbatim; the form layer decides what to send.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetPayload {
    pub name: String,
    pub description: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_price: Option<f64>,
    pub current_value: Option<f64>,
    pub status: AssetStatus,
    pub location: Option<String>,
    pub category_id: i64,
    pub assigned_to: Option<String>,
    pub image_path: Option<String>,
}

impl AssetPayload {
    /// Rebuild a full update body from a loaded asset.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Required`] when the asset carries no category id.
    pub fn from_asset(asset: &Asset) -> Result<Self, FormError> {
        let category_id = asset.effective_category_id().ok_or(FormError::Required("category"))?;
        Ok(Self {
            name: asset.name.clone(),
            description: asset.description.clone(),
            serial_number: asset.serial_number.clone(),
            purchase_date: asset.purchase_date.clone(),
            purchase_price: asset.purchase_price,
            current_value: asset.current_value,
            status: asset.status.clone(),
            location: asset.location.clone(),
            category_id,
            assigned_to: asset.assigned_to.clone(),
            image_path: asset.image_path.clone(),
        })
    }

    #[must_use]
    pub fn with_image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }
}

/// Request body for creating or updating a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
}
