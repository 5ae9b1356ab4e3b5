use super::*;
use inventory::model::AssetStatus;
use inventory::testing::{FakeApi, asset, category, history};

use crate::args::AssetFields;

fn fixture() -> FakeApi {
    let api = FakeApi::with_assets(vec![
        asset(1, "Laptop A", Some("SN1"), AssetStatus::Active),
        asset(2, "Laptop B", None, AssetStatus::Retired),
        asset(3, "Desk", Some("D-1"), AssetStatus::Active),
    ]);
    *api.categories.borrow_mut() = vec![category(5, "Laptops"), category(6, "Furniture")];
    api
}

// =============================================================================
// assets list
// =============================================================================

#[tokio::test]
async fn list_applies_search_locally() {
    let api = fixture();
    let list = ListArgs { search: "LAPTOP".to_owned(), ..ListArgs::default() };

    let out = run_assets(&api, AssetsCommand::List(list)).await.expect("list should succeed");

    assert!(out.contains("Laptop A"));
    assert!(out.contains("Laptop B"));
    assert!(!out.contains("Desk"));
}

#[tokio::test]
async fn list_status_narrows_result() {
    let api = fixture();
    let list = ListArgs { search: "laptop".to_owned(), status: Some("Retired".to_owned()), ..ListArgs::default() };

    let out = run_assets(&api, AssetsCommand::List(list)).await.expect("list should succeed");

    assert!(out.contains("Laptop B"));
    assert!(!out.contains("Laptop A"));
}

#[tokio::test]
async fn list_json_is_parseable() {
    let api = fixture();
    let list = ListArgs { json: true, ..ListArgs::default() };

    let out = run_assets(&api, AssetsCommand::List(list)).await.expect("list should succeed");
    let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid json");

    assert_eq!(parsed.as_array().map(Vec::len), Some(3));
}

// =============================================================================
// create / update
// =============================================================================

#[tokio::test]
async fn create_defaults_category_to_first_loaded() {
    let api = fixture();
    let fields = AssetFields { name: Some("Monitor".to_owned()), ..AssetFields::default() };

    let out = run_assets(&api, AssetsCommand::Create(fields)).await.expect("create should succeed");

    assert_eq!(out, "created asset #4 Monitor\n");
    let created = api.assets.borrow().iter().find(|a| a.id == 4).cloned().expect("stored");
    assert_eq!(created.category_id, Some(5));
}

#[tokio::test]
async fn create_without_name_is_rejected_before_any_write() {
    let api = fixture();

    let err = run_assets(&api, AssetsCommand::Create(AssetFields::default())).await.unwrap_err();

    assert!(matches!(err, CliError::Save(_)));
    assert!(!api.calls().contains(&"create_asset".to_owned()));
}

#[tokio::test]
async fn update_keeps_unspecified_fields() {
    let api = fixture();
    let fields = AssetFields { status: Some("Maintenance".to_owned()), ..AssetFields::default() };

    run_assets(&api, AssetsCommand::Update { id: 1, fields }).await.expect("update should succeed");

    let updates = api.updates.borrow();
    let (id, payload) = updates.last().expect("one update");
    assert_eq!(*id, 1);
    assert_eq!(payload.name, "Laptop A");
    assert_eq!(payload.serial_number.as_deref(), Some("SN1"));
    assert_eq!(payload.status, AssetStatus::Maintenance);
}

// =============================================================================
// show / history / upload
// =============================================================================

#[tokio::test]
async fn show_loads_asset_and_history() {
    let api = fixture();
    api.history.borrow_mut().push(history(9, 1, "CREATE"));

    let out = run_assets(&api, AssetsCommand::Show { id: 1, json: false }).await.expect("show should succeed");

    assert!(out.starts_with("Laptop A (#1)"));
    assert!(out.contains("CREATE"));
    let calls = api.calls();
    assert!(calls.contains(&"get_asset".to_owned()));
    assert!(calls.contains(&"asset_history".to_owned()));
}

#[tokio::test]
async fn show_fails_when_history_fails() {
    let api = fixture();
    api.fail("asset_history");

    let err = run_assets(&api, AssetsCommand::Show { id: 1, json: false }).await.unwrap_err();

    assert!(matches!(err, CliError::Api(_)));
}

#[tokio::test]
async fn upload_rejects_non_image_without_requests() {
    let api = fixture();
    let path = std::env::temp_dir().join(format!("asset-cli-{}.txt", std::process::id()));
    std::fs::write(&path, b"not an image").expect("write temp file");

    let command = AssetsCommand::UploadImage { id: 1, file: path.clone(), content_type: None };
    let err = run_assets(&api, command).await.unwrap_err();
    let _ = std::fs::remove_file(&path);

    assert!(matches!(err, CliError::Upload(inventory::detail::UploadError::NotAnImage)));
    assert!(!api.calls().contains(&"upload_file".to_owned()));
}

#[tokio::test]
async fn upload_attaches_stored_path() {
    let api = fixture();
    api.upload_paths.borrow_mut().push_back("images/photo.png".to_owned());
    let path = std::env::temp_dir().join(format!("asset-cli-{}.png", std::process::id()));
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).expect("write temp file");

    let command = AssetsCommand::UploadImage { id: 1, file: path.clone(), content_type: None };
    let out = run_assets(&api, command).await.expect("upload should succeed");
    let _ = std::fs::remove_file(&path);

    assert_eq!(out, "uploaded image for asset #1: images/photo.png\n");
    let calls = api.calls();
    let upload = calls.iter().position(|c| c == "upload_file").expect("uploaded");
    let update = calls.iter().position(|c| c == "update_asset").expect("updated");
    assert!(upload < update);
}

#[tokio::test]
async fn missing_upload_file_reports_path() {
    let api = fixture();
    let command =
        AssetsCommand::UploadImage { id: 1, file: "/nonexistent/asset.png".into(), content_type: None };

    let err = run_assets(&api, command).await.unwrap_err();

    assert!(err.to_string().starts_with("cannot read /nonexistent/asset.png"));
}

// =============================================================================
// categories / dashboard
// =============================================================================

#[tokio::test]
async fn category_update_of_unknown_id_fails() {
    let api = fixture();
    let command = CategoriesCommand::Update { id: 99, name: Some("X".to_owned()), description: None };

    let err = run_categories(&api, command).await.unwrap_err();

    assert!(matches!(err, CliError::UnknownCategory(99)));
}

#[tokio::test]
async fn category_update_keeps_description_when_not_given() {
    let api = fixture();
    api.categories.borrow_mut()[0].description = Some("Portable".to_owned());
    let command = CategoriesCommand::Update { id: 5, name: Some("Notebooks".to_owned()), description: None };

    run_categories(&api, command).await.expect("update should succeed");

    let stored = api.categories.borrow()[0].clone();
    assert_eq!(stored.name, "Notebooks");
    assert_eq!(stored.description.as_deref(), Some("Portable"));
}

#[tokio::test]
async fn dashboard_prints_zero_kpis_for_empty_summary() {
    let api = fixture();

    let out = run_dashboard(&api, false).await.expect("dashboard should succeed");

    assert!(out.starts_with("Total Assets     0\n"));
}
