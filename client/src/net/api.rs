//! Browser implementation of [`AssetApi`].
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! pages only fetch after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures are mapped into [`ApiError`] so
//! pages can log or alert without caring which layer failed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use inventory::api::{FILE_UPLOAD_PATH, UPLOAD_FIELD};
use inventory::api::{
    ASSETS_PATH, ApiConfig, ApiError, AssetApi, AssetQuery, CATEGORIES_PATH, DASHBOARD_SUMMARY_PATH, UploadFile,
    asset_history_path, asset_path, category_path,
};
use inventory::model::{
    Asset, AssetPayload, Category, CategoryPayload, DashboardSummary, HistoryEntry, UploadedFile,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Decode(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: String) -> ApiError {
    ApiError::Status { status, body }
}

/// HTTP verb of a request carrying a JSON body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WriteMethod {
    Post,
    Put,
}

/// [`AssetApi`] over browser `fetch`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Base URL baked in at build time from `ASSET_API_URL`; unset means
    /// same-origin.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(ApiConfig::from_value(option_env!("ASSET_API_URL")))
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `src` for an `<img>` showing a stored file.
    #[must_use]
    pub fn image_src(&self, blob_path: &str) -> String {
        self.config.file_url(blob_path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&url).send().await.map_err(transport_error)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: WriteMethod,
        url: String,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = match method {
                WriteMethod::Post => gloo_net::http::Request::post(&url),
                WriteMethod::Put => gloo_net::http::Request::put(&url),
            };
            let resp = builder
                .json(body)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, url, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete(&self, url: String) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&url).send().await.map_err(transport_error)?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(status_error(resp.status(), body));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(resp.status(), body));
    }
    resp.json::<T>().await.map_err(decode_error)
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
    transport_error(format!("{err:?}"))
}

/// Wrap the picked bytes back into a `multipart/form-data` body.
#[cfg(feature = "hydrate")]
fn upload_form(file: &UploadFile) -> Result<web_sys::FormData, ApiError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(file.bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &file.file_name).map_err(js_error)?;
    Ok(form)
}

impl AssetApi for HttpApi {
    async fn list_assets(&self, query: &AssetQuery) -> Result<Vec<Asset>, ApiError> {
        self.get_json(self.config.assets_url(query)).await
    }

    async fn get_asset(&self, id: i64) -> Result<Asset, ApiError> {
        self.get_json(self.config.url(&asset_path(id))).await
    }

    async fn create_asset(&self, payload: &AssetPayload) -> Result<Asset, ApiError> {
        self.send_json(WriteMethod::Post, self.config.url(ASSETS_PATH), payload).await
    }

    async fn update_asset(&self, id: i64, payload: &AssetPayload) -> Result<Asset, ApiError> {
        self.send_json(WriteMethod::Put, self.config.url(&asset_path(id)), payload).await
    }

    async fn delete_asset(&self, id: i64) -> Result<(), ApiError> {
        self.delete(self.config.url(&asset_path(id))).await
    }

    async fn asset_history(&self, id: i64) -> Result<Vec<HistoryEntry>, ApiError> {
        self.get_json(self.config.url(&asset_history_path(id))).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(self.config.url(CATEGORIES_PATH)).await
    }

    async fn create_category(&self, payload: &CategoryPayload) -> Result<Category, ApiError> {
        self.send_json(WriteMethod::Post, self.config.url(CATEGORIES_PATH), payload).await
    }

    async fn update_category(&self, id: i64, payload: &CategoryPayload) -> Result<Category, ApiError> {
        self.send_json(WriteMethod::Put, self.config.url(&category_path(id)), payload).await
    }

    async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.delete(self.config.url(&category_path(id))).await
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get_json(self.config.url(DASHBOARD_SUMMARY_PATH)).await
    }

    async fn upload_file(&self, file: &UploadFile) -> Result<UploadedFile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = upload_form(file)?;
            let resp = gloo_net::http::Request::post(&self.config.url(FILE_UPLOAD_PATH))
                .body(form)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = file;
            Err(ApiError::Unavailable)
        }
    }
}

/// Read the first file picked in an `<input type="file">`.
///
/// Returns `None` when nothing was picked or the bytes cannot be read.
#[cfg(feature = "hydrate")]
pub async fn read_picked_file(input: &web_sys::HtmlInputElement) -> Option<UploadFile> {
    let file = input.files()?.get(0)?;
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await.ok()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Some(UploadFile { file_name: file.name(), content_type: file.type_(), bytes })
}
