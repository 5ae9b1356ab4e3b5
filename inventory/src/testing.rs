//! Test fixtures and an in-memory [`AssetApi`] fake.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::api::{ApiError, AssetApi, AssetQuery, UploadFile};
use crate::model::{
    Asset, AssetPayload, AssetStatus, Category, CategoryPayload, DashboardSummary, HistoryEntry, UploadedFile,
};

pub fn category(id: i64, name: &str) -> Category {
    Category { id, name: name.to_owned(), description: None, created_at: Some("2024-01-01T00:00:00".to_owned()) }
}

pub fn asset(id: i64, name: &str, serial: Option<&str>, status: AssetStatus) -> Asset {
    Asset {
        id,
        name: name.to_owned(),
        description: None,
        serial_number: serial.map(ToOwned::to_owned),
        purchase_date: None,
        purchase_price: None,
        current_value: None,
        status,
        location: None,
        category_id: Some(1),
        assigned_to: None,
        image_path: None,
        category: Some(category(1, "General")),
        created_at: None,
        updated_at: None,
    }
}

pub fn history(id: i64, asset_id: i64, action: &str) -> HistoryEntry {
    HistoryEntry {
        id,
        asset_id,
        action: action.to_owned(),
        details: Some(format!("{action} #{id}")),
        timestamp: "2024-03-05T14:07:00".to_owned(),
    }
}

pub fn image_file() -> UploadFile {
    UploadFile { file_name: "photo.png".to_owned(), content_type: "image/png".to_owned(), bytes: vec![1, 2, 3] }
}

fn server_error() -> ApiError {
    ApiError::Status { status: 500, body: "boom".to_owned() }
}

/// In-memory backend recording every call it receives.
#[derive(Default)]
pub struct FakeApi {
    pub assets: RefCell<Vec<Asset>>,
    pub categories: RefCell<Vec<Category>>,
    pub history: RefCell<Vec<HistoryEntry>>,
    pub summary: RefCell<DashboardSummary>,
    pub calls: RefCell<Vec<String>>,
    pub updates: RefCell<Vec<(i64, AssetPayload)>>,
    /// Call names (e.g. `"get_asset"`) that should fail with a 500.
    pub failing: RefCell<Vec<&'static str>>,
    pub upload_paths: RefCell<VecDeque<String>>,
}

impl FakeApi {
    pub fn with_assets(assets: Vec<Asset>) -> Self {
        let api = Self::default();
        *api.assets.borrow_mut() = assets;
        api
    }

    pub fn fail(&self, call: &'static str) {
        self.failing.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &'static str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call.to_owned());
        if self.failing.borrow().contains(&call) { Err(server_error()) } else { Ok(()) }
    }

    fn find(&self, id: i64) -> Result<Asset, ApiError> {
        self.assets
            .borrow()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(ApiError::Status { status: 404, body: "Asset not found".to_owned() })
    }
}

impl AssetApi for FakeApi {
    async fn list_assets(&self, query: &AssetQuery) -> Result<Vec<Asset>, ApiError> {
        self.record("list_assets")?;
        Ok(self
            .assets
            .borrow()
            .iter()
            .filter(|a| query.status.as_deref().is_none_or(|s| a.status.as_str() == s))
            .filter(|a| query.category_id.is_none_or(|c| a.effective_category_id() == Some(c)))
            .cloned()
            .collect())
    }

    async fn get_asset(&self, id: i64) -> Result<Asset, ApiError> {
        self.record("get_asset")?;
        self.find(id)
    }

    async fn create_asset(&self, payload: &AssetPayload) -> Result<Asset, ApiError> {
        self.record("create_asset")?;
        let id = self.assets.borrow().iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let mut created = asset(id, &payload.name, payload.serial_number.as_deref(), payload.status.clone());
        created.category_id = Some(payload.category_id);
        self.assets.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_asset(&self, id: i64, payload: &AssetPayload) -> Result<Asset, ApiError> {
        self.record("update_asset")?;
        self.updates.borrow_mut().push((id, payload.clone()));
        let mut assets = self.assets.borrow_mut();
        let existing = assets
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ApiError::Status { status: 404, body: "Asset not found".to_owned() })?;
        existing.name.clone_from(&payload.name);
        existing.status = payload.status.clone();
        existing.image_path.clone_from(&payload.image_path);
        Ok(existing.clone())
    }

    async fn delete_asset(&self, id: i64) -> Result<(), ApiError> {
        self.record("delete_asset")?;
        self.assets.borrow_mut().retain(|a| a.id != id);
        Ok(())
    }

    async fn asset_history(&self, id: i64) -> Result<Vec<HistoryEntry>, ApiError> {
        self.record("asset_history")?;
        Ok(self.history.borrow().iter().filter(|h| h.asset_id == id).cloned().collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.record("list_categories")?;
        Ok(self.categories.borrow().clone())
    }

    async fn create_category(&self, payload: &CategoryPayload) -> Result<Category, ApiError> {
        self.record("create_category")?;
        let id = self.categories.borrow().iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let created = Category {
            id,
            name: payload.name.clone(),
            description: Some(payload.description.clone()),
            created_at: None,
        };
        self.categories.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_category(&self, id: i64, payload: &CategoryPayload) -> Result<Category, ApiError> {
        self.record("update_category")?;
        let mut categories = self.categories.borrow_mut();
        let existing = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ApiError::Status { status: 404, body: "Category not found".to_owned() })?;
        existing.name.clone_from(&payload.name);
        existing.description = Some(payload.description.clone());
        Ok(existing.clone())
    }

    async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.record("delete_category")?;
        self.categories.borrow_mut().retain(|c| c.id != id);
        Ok(())
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.record("dashboard_summary")?;
        Ok(self.summary.borrow().clone())
    }

    async fn upload_file(&self, file: &UploadFile) -> Result<UploadedFile, ApiError> {
        self.record("upload_file")?;
        let blob_path = self
            .upload_paths
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| format!("default_user/default_app/images/{}", file.file_name));
        Ok(UploadedFile { blob_path })
    }
}
