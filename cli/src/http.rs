//! [`AssetApi`] over `reqwest`.
//!
//! ERROR HANDLING
//! ==============
//! Connection failures map to `ApiError::Transport`, non-2xx responses to
//! `ApiError::Status` with the raw body, and unreadable JSON to
//! `ApiError::Decode`. Nothing is retried.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use inventory::api::{
    ASSETS_PATH, CATEGORIES_PATH, DASHBOARD_SUMMARY_PATH, FILE_UPLOAD_PATH, UPLOAD_FIELD, asset_history_path,
    asset_path, category_path,
};
use inventory::model::{
    Asset, AssetPayload, Category, CategoryPayload, DashboardSummary, HistoryEntry, UploadedFile,
};
use inventory::{ApiConfig, ApiError, AssetApi, AssetQuery, UploadFile};
use reqwest::Response;

/// Served by the asset API itself; `/healthz` only exists on the UI host.
pub const PING_PATH: &str = "/";

fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status: status.as_u16(), body })
}

async fn read_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = check_status(resp).await?;
    resp.json::<T>().await.map_err(|err| ApiError::Decode(err.to_string()))
}

pub struct ReqwestApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ReqwestApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let resp = self.client.get(&url).send().await.map_err(transport_error)?;
        read_json(resp).await
    }

    async fn post<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.config.url(path);
        tracing::debug!(%url, "POST");
        let resp = self.client.post(&url).json(body).send().await.map_err(transport_error)?;
        read_json(resp).await
    }

    async fn put<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.config.url(path);
        tracing::debug!(%url, "PUT");
        let resp = self.client.put(&url).json(body).send().await.map_err(transport_error)?;
        read_json(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.config.url(path);
        tracing::debug!(%url, "DELETE");
        let resp = self.client.delete(&url).send().await.map_err(transport_error)?;
        check_status(resp).await.map(|_| ())
    }

    /// Liveness probe against the API root, which answers with its run status.
    pub async fn ping(&self) -> Result<(), ApiError> {
        let url = self.config.url(PING_PATH);
        let resp = self.client.get(&url).send().await.map_err(transport_error)?;
        check_status(resp).await.map(|_| ())
    }
}

impl AssetApi for ReqwestApi {
    async fn list_assets(&self, query: &AssetQuery) -> Result<Vec<Asset>, ApiError> {
        self.get(self.config.assets_url(query)).await
    }

    async fn get_asset(&self, id: i64) -> Result<Asset, ApiError> {
        self.get(self.config.url(&asset_path(id))).await
    }

    async fn create_asset(&self, payload: &AssetPayload) -> Result<Asset, ApiError> {
        self.post(ASSETS_PATH, payload).await
    }

    async fn update_asset(&self, id: i64, payload: &AssetPayload) -> Result<Asset, ApiError> {
        self.put(&asset_path(id), payload).await
    }

    async fn delete_asset(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&asset_path(id)).await
    }

    async fn asset_history(&self, id: i64) -> Result<Vec<HistoryEntry>, ApiError> {
        self.get(self.config.url(&asset_history_path(id))).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get(self.config.url(CATEGORIES_PATH)).await
    }

    async fn create_category(&self, payload: &CategoryPayload) -> Result<Category, ApiError> {
        self.post(CATEGORIES_PATH, payload).await
    }

    async fn update_category(&self, id: i64, payload: &CategoryPayload) -> Result<Category, ApiError> {
        self.put(&category_path(id), payload).await
    }

    async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&category_path(id)).await
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get(self.config.url(DASHBOARD_SUMMARY_PATH)).await
    }

    async fn upload_file(&self, file: &UploadFile) -> Result<UploadedFile, ApiError> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(transport_error)?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);
        let url = self.config.url(FILE_UPLOAD_PATH);
        tracing::debug!(%url, bytes = file.bytes.len(), "POST multipart");
        let resp = self.client.post(&url).multipart(form).send().await.map_err(transport_error)?;
        read_json(resp).await
    }
}

/// Best-effort content type from a file extension.
pub fn content_type_for(file_name: &str) -> String {
    mime_guess::from_path(file_name).first_or_octet_stream().to_string()
}
