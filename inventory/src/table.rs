//! Column definitions and row view models for entity tables.
//!
//! The table component renders whatever [`Column`]s and [`TableRow`]s it is
//! handed; turning domain records into cells happens here so the rules are
//! shared by the browser table and the CLI listing.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::format::{format_date_or, format_money, initials, or_placeholder};
use crate::model::{Asset, AssetStatus, Category};

pub const SEARCH_PLACEHOLDER: &str = "Search assets...";
pub const ALL_STATUS_LABEL: &str = "All Status";
pub const EMPTY_TABLE_MESSAGE: &str = "No assets found";

/// A table column header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

/// Columns of the assets table, in display order.
pub const ASSET_COLUMNS: [Column; 7] = [
    Column { key: "name", label: "Asset" },
    Column { key: "category", label: "Category" },
    Column { key: "status", label: "Status" },
    Column { key: "location", label: "Location" },
    Column { key: "assigned_to", label: "Assigned To" },
    Column { key: "current_value", label: "Value" },
    Column { key: "purchase_date", label: "Purchase Date" },
];

/// Rendered content of one table cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// Avatar initials with a title and a muted subtitle.
    Identity { avatar: String, title: String, subtitle: String },
    /// Status pill; `class` is the modifier suffix.
    Badge { text: String, class: String },
    Money(String),
}

impl Cell {
    /// Plain-text rendering, used by terminal output.
    #[must_use]
    pub fn plain(&self) -> String {
        match self {
            Self::Text(text) | Self::Money(text) => text.clone(),
            Self::Identity { title, subtitle, .. } => format!("{title} ({subtitle})"),
            Self::Badge { text, .. } => text.clone(),
        }
    }
}

/// One table row keyed by record id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub id: i64,
    pub cells: Vec<Cell>,
}

/// Option of the status filter select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusOption {
    pub label: String,
    pub value: String,
}

/// Selectable statuses; the "All Status" empty option is rendered separately.
#[must_use]
pub fn status_options() -> Vec<StatusOption> {
    AssetStatus::SELECTABLE
        .iter()
        .map(|status| StatusOption { label: status.to_string(), value: status.to_string() })
        .collect()
}

/// Cells for one asset, matching [`ASSET_COLUMNS`].
#[must_use]
pub fn asset_row(asset: &Asset) -> TableRow {
    let cells = vec![
        Cell::Identity {
            avatar: initials(&asset.name),
            title: asset.name.clone(),
            subtitle: or_placeholder(asset.serial_number.as_deref(), "No serial number"),
        },
        Cell::Text(or_placeholder(asset.category_name(), "Uncategorized")),
        Cell::Badge { text: asset.status.to_string(), class: asset.status.css_class() },
        Cell::Text(or_placeholder(asset.location.as_deref(), "Not specified")),
        Cell::Text(or_placeholder(asset.assigned_to.as_deref(), "Unassigned")),
        Cell::Money(format_money(asset.current_value.unwrap_or(0.0))),
        Cell::Text(format_date_or(asset.purchase_date.as_deref(), "N/A")),
    ];
    TableRow { id: asset.id, cells }
}

/// Display strings for a categories table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created: String,
}

impl CategoryRow {
    #[must_use]
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            description: or_placeholder(category.description.as_deref(), "No description"),
            created: format_date_or(category.created_at.as_deref(), "N/A"),
        }
    }
}
