//! Page-level view models for the assets and categories screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its list, filter, selection, and form state. State
//! transitions are plain synchronous methods; the async helpers at the
//! bottom only talk to [`AssetApi`] so a reactive front-end can await them
//! without holding a borrow on the page across the await point.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use crate::api::{ApiError, AssetApi, AssetQuery};
use crate::filter::AssetFilter;
use crate::form::{AssetForm, CategoryForm, FormError};
use crate::model::{Asset, Category};
use crate::request::{RequestTracker, Ticket};
use crate::table::{CategoryRow, TableRow, asset_row};

pub const CREATE_ASSET_FAILED_ALERT: &str = "Failed to create asset";
pub const UPDATE_ASSET_FAILED_ALERT: &str = "Failed to update asset";
pub const DELETE_ASSET_FAILED_ALERT: &str = "Failed to delete asset";
pub const SAVE_CATEGORY_FAILED_ALERT: &str = "Failed to save category";
pub const DELETE_CATEGORY_FAILED_ALERT: &str = "Failed to delete category";
pub const DELETE_CATEGORY_CONFIRM: &str = "Are you sure you want to delete this category?";
pub const DELETE_ASSET_CONFIRM: &str = "Are you sure you want to delete this asset?";

/// Why a form save did not go through.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Rejected(#[from] ApiError),
}

/// State of the assets page.
#[derive(Clone, Debug)]
pub struct AssetsPage {
    assets: Vec<Asset>,
    loading: bool,
    list: RequestTracker,
    filter: AssetFilter,
    selected: Option<i64>,
    form: Option<AssetForm>,
}

impl Default for AssetsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetsPage {
    /// Fresh page; reports loading until the first list response lands.
    #[must_use]
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            loading: true,
            list: RequestTracker::default(),
            filter: AssetFilter::default(),
            selected: None,
            form: None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn start_load(&mut self) -> Ticket {
        self.list.begin()
    }

    /// Apply a list response. A failure keeps the previous list; the caller
    /// only logs it.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Vec<Asset>, ApiError>) -> bool {
        if !self.list.is_current(ticket) {
            return false;
        }
        self.loading = false;
        if let Ok(assets) = result {
            self.assets = assets;
        }
        true
    }

    #[must_use]
    pub fn filter(&self) -> &AssetFilter {
        &self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_status_filter(&mut self, status: impl Into<String>) {
        self.filter.status = status.into();
    }

    /// Assets passing the current filter, recomputed on every call.
    #[must_use]
    pub fn visible_assets(&self) -> Vec<Asset> {
        self.filter.apply(&self.assets)
    }

    #[must_use]
    pub fn visible_rows(&self) -> Vec<TableRow> {
        self.visible_assets().iter().map(asset_row).collect()
    }

    #[must_use]
    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn select(&mut self, asset_id: i64) {
        self.selected = Some(asset_id);
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn form(&self) -> Option<&AssetForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut AssetForm> {
        self.form.as_mut()
    }

    #[must_use]
    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn open_create_form(&mut self) {
        self.form = Some(AssetForm::new());
    }

    /// Open the form prefilled from `asset`, closing the detail drawer.
    pub fn open_edit_form(&mut self, asset: &Asset) {
        self.selected = None;
        self.form = Some(AssetForm::edit(asset));
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// After a delete the drawer for that asset must not stay open.
    pub fn forget(&mut self, asset_id: i64) {
        self.assets.retain(|a| a.id != asset_id);
        if self.selected == Some(asset_id) {
            self.selected = None;
        }
    }
}

/// Alert text for a failed asset save in the given mode.
#[must_use]
pub fn asset_save_alert(editing: bool) -> &'static str {
    if editing { UPDATE_ASSET_FAILED_ALERT } else { CREATE_ASSET_FAILED_ALERT }
}

/// Fetch the full asset list (no server-side narrowing).
///
/// # Errors
///
/// Propagates the [`ApiError`] of the list request.
pub async fn load_assets<A: AssetApi>(api: &A) -> Result<Vec<Asset>, ApiError> {
    api.list_assets(&AssetQuery::default()).await
}

/// Create or update depending on the form mode.
///
/// # Errors
///
/// Returns [`SaveError::Invalid`] without any request when the form does
/// not normalize, or [`SaveError::Rejected`] when the backend refuses.
pub async fn save_asset<A: AssetApi>(api: &A, form: &AssetForm) -> Result<Asset, SaveError> {
    let payload = form.submit()?;
    let saved = match form.editing_id() {
        Some(id) => api.update_asset(id, &payload).await?,
        None => api.create_asset(&payload).await?,
    };
    Ok(saved)
}

/// State of the categories page.
#[derive(Clone, Debug)]
pub struct CategoriesPage {
    categories: Vec<Category>,
    loading: bool,
    list: RequestTracker,
    form: Option<CategoryForm>,
}

impl Default for CategoriesPage {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoriesPage {
    #[must_use]
    pub fn new() -> Self {
        Self { categories: Vec::new(), loading: true, list: RequestTracker::default(), form: None }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn rows(&self) -> Vec<CategoryRow> {
        self.categories.iter().map(CategoryRow::from_category).collect()
    }

    pub fn start_load(&mut self) -> Ticket {
        self.list.begin()
    }

    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Vec<Category>, ApiError>) -> bool {
        if !self.list.is_current(ticket) {
            return false;
        }
        self.loading = false;
        if let Ok(categories) = result {
            self.categories = categories;
        }
        true
    }

    #[must_use]
    pub fn form(&self) -> Option<&CategoryForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut CategoryForm> {
        self.form.as_mut()
    }

    pub fn open_create(&mut self) {
        self.form = Some(CategoryForm::new());
    }

    /// Open the inline form for `id`; unknown ids are ignored.
    pub fn open_edit(&mut self, id: i64) {
        if let Some(category) = self.categories.iter().find(|c| c.id == id) {
            self.form = Some(CategoryForm::edit(category));
        }
    }

    /// Close the inline form and drop its contents.
    pub fn close_form(&mut self) {
        self.form = None;
    }
}

/// Create or update a category depending on the form mode.
///
/// # Errors
///
/// Same contract as [`save_asset`].
pub async fn save_category<A: AssetApi>(api: &A, form: &CategoryForm) -> Result<Category, SaveError> {
    let payload = form.submit()?;
    let saved = match form.editing_id() {
        Some(id) => api.update_category(id, &payload).await?,
        None => api.create_category(&payload).await?,
    };
    Ok(saved)
}
