//! Command execution against any [`AssetApi`].
//!
//! DESIGN
//! ======
//! Each command drives the same `inventory` operations the browser pages
//! use (`save_asset`, `load_detail`, `upload_image`, the asset filter) and
//! returns the text to print, so output and sequencing stay identical.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::path::Path;

use inventory::dashboard::DashboardView;
use inventory::detail::{HistoryRow, load_detail, upload_image};
use inventory::form::{AssetForm, CategoryForm};
use inventory::pages::{save_asset, save_category};
use inventory::{AssetApi, AssetFilter, AssetQuery, UploadFile};

use crate::CliError;
use crate::args::{AssetsCommand, CategoriesCommand, ListArgs};
use crate::http::content_type_for;
use crate::render;

fn json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub async fn run_assets<A: AssetApi>(api: &A, command: AssetsCommand) -> Result<String, CliError> {
    match command {
        AssetsCommand::List(list) => list_assets(api, list).await,
        AssetsCommand::Show { id, json: as_json } => {
            let detail = load_detail(api, id).await?;
            if as_json {
                return json(&serde_json::json!({ "asset": detail.asset, "history": detail.history }));
            }
            Ok(render::asset_detail(&detail))
        }
        AssetsCommand::Create(fields) => {
            let mut form = AssetForm::new();
            if fields.category_id.is_none() {
                form.apply_categories(&api.list_categories().await?);
            }
            fields.apply_to(&mut form);
            let saved = save_asset(api, &form).await?;
            tracing::info!(id = saved.id, "asset created");
            Ok(format!("created asset #{} {}\n", saved.id, saved.name))
        }
        AssetsCommand::Update { id, fields } => {
            let current = api.get_asset(id).await?;
            let mut form = AssetForm::edit(&current);
            fields.apply_to(&mut form);
            let saved = save_asset(api, &form).await?;
            tracing::info!(id = saved.id, "asset updated");
            Ok(format!("updated asset #{} {}\n", saved.id, saved.name))
        }
        AssetsCommand::Delete { id } => {
            api.delete_asset(id).await?;
            Ok(format!("deleted asset #{id}\n"))
        }
        AssetsCommand::History { id } => {
            let history = api.asset_history(id).await?;
            let rows: Vec<HistoryRow> = history.iter().map(HistoryRow::from_entry).collect();
            Ok(render::history_lines(&rows))
        }
        AssetsCommand::UploadImage { id, file, content_type } => upload(api, id, &file, content_type).await,
    }
}

async fn list_assets<A: AssetApi>(api: &A, list: ListArgs) -> Result<String, CliError> {
    let query = AssetQuery { status: list.status.clone(), category_id: list.category_id };
    let assets = api.list_assets(&query).await?;
    let filter = AssetFilter::new(list.search, list.status.unwrap_or_default());
    let visible = filter.apply(&assets);
    if list.json {
        return json(&visible);
    }
    Ok(render::assets_table(&visible))
}

async fn upload<A: AssetApi>(
    api: &A,
    id: i64,
    path: &Path,
    content_type: Option<String>,
) -> Result<String, CliError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CliError::ReadFile { path: path.display().to_string(), source })?;
    let file_name = path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
    let content_type = content_type.unwrap_or_else(|| content_type_for(&file_name));
    let file = UploadFile { file_name, content_type, bytes };

    let asset = api.get_asset(id).await?;
    let updated = upload_image(api, &asset, &file).await?;
    tracing::info!(id, image = ?updated.image_path, "image attached");
    Ok(format!("uploaded image for asset #{id}: {}\n", updated.image_path.unwrap_or_default()))
}

pub async fn run_categories<A: AssetApi>(api: &A, command: CategoriesCommand) -> Result<String, CliError> {
    match command {
        CategoriesCommand::List { json: as_json } => {
            let categories = api.list_categories().await?;
            if as_json {
                return json(&categories);
            }
            Ok(render::categories_table(&categories))
        }
        CategoriesCommand::Create { name, description } => {
            let mut form = CategoryForm::new();
            form.name = name;
            form.description = description;
            let saved = save_category(api, &form).await?;
            Ok(format!("created category #{} {}\n", saved.id, saved.name))
        }
        CategoriesCommand::Update { id, name, description } => {
            let categories = api.list_categories().await?;
            let current = categories.iter().find(|c| c.id == id).ok_or(CliError::UnknownCategory(id))?;
            let mut form = CategoryForm::edit(current);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(description) = description {
                form.description = description;
            }
            let saved = save_category(api, &form).await?;
            Ok(format!("updated category #{} {}\n", saved.id, saved.name))
        }
        CategoriesCommand::Delete { id } => {
            api.delete_category(id).await?;
            Ok(format!("deleted category #{id}\n"))
        }
    }
}

pub async fn run_dashboard<A: AssetApi>(api: &A, as_json: bool) -> Result<String, CliError> {
    let summary = api.dashboard_summary().await?;
    if as_json {
        return json(&summary);
    }
    Ok(render::dashboard(&DashboardView::from_summary(Some(&summary))))
}
