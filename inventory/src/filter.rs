//! Client-side asset filtering over an already-loaded list.
//!
//! A record is kept when the search text is a case-insensitive substring of
//! its name or serial number AND the status filter is empty or equal to the
//! record's status. Input order is preserved.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::model::Asset;

/// Search text plus status selection driving the assets table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetFilter {
    /// Free-text search; empty matches everything.
    pub search: String,
    /// Exact status value; empty means "All Status".
    pub status: String,
}

impl AssetFilter {
    #[must_use]
    pub fn new(search: impl Into<String>, status: impl Into<String>) -> Self {
        Self { search: search.into(), status: status.into() }
    }

    /// True when neither the search nor the status narrows the list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.status.is_empty()
    }

    /// Whether a single asset passes both predicates.
    #[must_use]
    pub fn matches(&self, asset: &Asset) -> bool {
        let needle = self.search.to_lowercase();
        matches_search(asset, &needle) && self.matches_status(asset)
    }

    /// Filtered copy of `assets`, preserving order.
    #[must_use]
    pub fn apply(&self, assets: &[Asset]) -> Vec<Asset> {
        let needle = self.search.to_lowercase();
        assets
            .iter()
            .filter(|asset| matches_search(asset, &needle) && self.matches_status(asset))
            .cloned()
            .collect()
    }

    fn matches_status(&self, asset: &Asset) -> bool {
        self.status.is_empty() || asset.status.as_str() == self.status
    }
}

/// Filter `assets` by `search` and `status`.
#[must_use]
pub fn filter_assets(assets: &[Asset], search: &str, status: &str) -> Vec<Asset> {
    AssetFilter::new(search, status).apply(assets)
}

/// `needle` must already be lowercased.
fn matches_search(asset: &Asset, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if asset.name.to_lowercase().contains(needle) {
        return true;
    }
    asset
        .serial_number
        .as_deref()
        .is_some_and(|serial| serial.to_lowercase().contains(needle))
}
