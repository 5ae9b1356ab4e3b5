use super::*;

#[test]
fn status_parse_is_case_sensitive() {
    assert_eq!(AssetStatus::parse("Active"), AssetStatus::Active);
    assert_eq!(AssetStatus::parse("active"), AssetStatus::Other("active".to_owned()));
}

#[test]
fn status_css_class_is_lowercase() {
    assert_eq!(AssetStatus::Maintenance.css_class(), "maintenance");
    assert_eq!(AssetStatus::Other("On Loan".to_owned()).css_class(), "on loan");
}

#[test]
fn status_serializes_as_plain_string() {
    let json = serde_json::to_value(AssetStatus::Retired).unwrap();
    assert_eq!(json, serde_json::json!("Retired"));
}

#[test]
fn asset_deserializes_backend_response() {
    let asset: Asset = serde_json::from_value(serde_json::json!({
        "id": 7,
        "name": "Laptop A",
        "description": null,
        "serial_number": "SN1",
        "purchase_date": "2024-01-15",
        "purchase_price": 1200.5,
        "current_value": 900.0,
        "status": "Maintenance",
        "location": "HQ",
        "category_id": 3,
        "assigned_to": null,
        "image_path": null,
        "created_at": "2024-01-15T10:30:00.123456",
        "updated_at": "2024-01-16T08:00:00",
        "category": {
            "id": 3,
            "name": "Laptops",
            "description": null,
            "created_at": "2024-01-01T00:00:00"
        }
    }))
    .unwrap();

    assert_eq!(asset.id, 7);
    assert_eq!(asset.status, AssetStatus::Maintenance);
    assert_eq!(asset.category_name(), Some("Laptops"));
    assert_eq!(asset.purchase_price, Some(1200.5));
}

#[test]
fn asset_tolerates_missing_optional_fields() {
    let asset: Asset = serde_json::from_value(serde_json::json!({ "id": 1, "name": "Bare" })).unwrap();
    assert_eq!(asset.status, AssetStatus::Active);
    assert_eq!(asset.serial_number, None);
    assert_eq!(asset.effective_category_id(), None);
}

#[test]
fn effective_category_id_falls_back_to_embedded_category() {
    let mut asset = crate::testing::asset(1, "Desk", None, AssetStatus::Active);
    asset.category_id = None;
    asset.category = Some(crate::testing::category(9, "Furniture"));
    assert_eq!(asset.effective_category_id(), Some(9));
}

#[test]
fn dashboard_summary_defaults_missing_fields() {
    let summary: DashboardSummary = serde_json::from_value(serde_json::json!({ "total_assets": 4 })).unwrap();
    assert_eq!(summary.total_assets, 4);
    assert_eq!(summary.total_value, 0.0);
    assert!(summary.recent_activities.is_empty());
}

#[test]
fn payload_from_asset_keeps_nulls_and_image_path() {
    let mut asset = crate::testing::asset(2, "Printer", Some("PR-9"), AssetStatus::Retired);
    asset.image_path = Some("u/a/images/old.png".to_owned());
    let payload = AssetPayload::from_asset(&asset).unwrap();

    assert_eq!(payload.category_id, 1);
    assert_eq!(payload.description, None);
    assert_eq!(payload.image_path.as_deref(), Some("u/a/images/old.png"));

    let replaced = payload.with_image_path("u/a/images/new.png");
    assert_eq!(replaced.image_path.as_deref(), Some("u/a/images/new.png"));
}

#[test]
fn payload_from_asset_without_category_is_rejected() {
    let mut asset = crate::testing::asset(2, "Printer", None, AssetStatus::Active);
    asset.category_id = None;
    assert_eq!(AssetPayload::from_asset(&asset), Err(FormError::Required("category")));
}
