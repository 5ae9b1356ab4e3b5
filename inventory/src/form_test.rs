use super::*;
use crate::testing::{asset, category};

fn filled() -> AssetForm {
    let mut form = AssetForm::new();
    form.set(AssetField::Name, "Laptop A");
    form.set(AssetField::CategoryId, "3");
    form
}

// =============================================================
// AssetForm submit normalization
// =============================================================

#[test]
fn submit_coerces_numeric_fields() {
    let mut form = filled();
    form.set(AssetField::PurchasePrice, "12.5");
    form.set(AssetField::CurrentValue, "10");

    let payload = form.submit().unwrap();
    assert_eq!(payload.category_id, 3);
    assert_eq!(payload.purchase_price, Some(12.5));
    assert_eq!(payload.current_value, Some(10.0));

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["category_id"], serde_json::json!(3));
    assert_eq!(json["purchase_price"], serde_json::json!(12.5));
}

#[test]
fn submit_blank_money_becomes_null() {
    let payload = filled().submit().unwrap();
    assert_eq!(payload.purchase_price, None);
    assert_eq!(payload.current_value, None);

    let json = serde_json::to_value(&payload).unwrap();
    assert!(json["purchase_price"].is_null());
    assert!(json["current_value"].is_null());
}

#[test]
fn submit_passes_text_fields_verbatim() {
    let mut form = filled();
    form.set(AssetField::SerialNumber, "  SN-1 ");
    form.set(AssetField::Location, "");
    form.set(AssetField::Description, "Spare unit");

    let payload = form.submit().unwrap();
    assert_eq!(payload.serial_number.as_deref(), Some("  SN-1 "));
    assert_eq!(payload.location.as_deref(), Some(""));
    assert_eq!(payload.description.as_deref(), Some("Spare unit"));
    assert_eq!(payload.status, AssetStatus::Active);
}

#[test]
fn submit_requires_name_and_category() {
    let mut form = AssetForm::new();
    form.set(AssetField::CategoryId, "1");
    assert_eq!(form.submit(), Err(FormError::Required("name")));

    let mut form = AssetForm::new();
    form.set(AssetField::Name, "Desk");
    assert_eq!(form.submit(), Err(FormError::Required("category")));
}

#[test]
fn submit_rejects_unparsable_numbers() {
    let mut form = filled();
    form.set(AssetField::PurchasePrice, "twelve");
    assert_eq!(
        form.submit(),
        Err(FormError::InvalidNumber { field: "purchase_price", value: "twelve".to_owned() })
    );

    let mut form = filled();
    form.set(AssetField::CategoryId, "abc");
    assert!(matches!(form.submit(), Err(FormError::InvalidNumber { field: "category_id", .. })));
}

#[test]
fn submit_rejects_non_finite_money() {
    let mut form = filled();
    form.set(AssetField::CurrentValue, "inf");
    assert!(matches!(form.submit(), Err(FormError::InvalidNumber { field: "current_value", .. })));
}

// =============================================================
// AssetForm modes
// =============================================================

#[test]
fn create_mode_defaults() {
    let form = AssetForm::new();
    assert!(!form.is_editing());
    assert_eq!(form.status, "Active");
    assert_eq!(form.title(), "Add New Asset");
    assert_eq!(form.submit_label(), "Create Asset");
}

#[test]
fn create_mode_preselects_first_category() {
    let mut form = AssetForm::new();
    form.apply_categories(&[category(4, "Vehicles"), category(5, "Tools")]);
    assert_eq!(form.category_id, "4");

    form.set(AssetField::CategoryId, "5");
    form.apply_categories(&[category(4, "Vehicles")]);
    assert_eq!(form.category_id, "5");
}

#[test]
fn edit_mode_prefills_and_keeps_category() {
    let mut source = asset(8, "Forklift", Some("FL-1"), AssetStatus::Maintenance);
    source.purchase_price = Some(15000.0);
    source.current_value = Some(12000.75);
    source.image_path = Some("u/a/images/f.png".to_owned());

    let mut form = AssetForm::edit(&source);
    form.apply_categories(&[category(99, "Other")]);

    assert_eq!(form.editing_id(), Some(8));
    assert_eq!(form.category_id, "1");
    assert_eq!(form.purchase_price, "15000");
    assert_eq!(form.current_value, "12000.75");
    assert_eq!(form.get(AssetField::Status), "Maintenance");
    assert_eq!(form.title(), "Edit Asset");

    let payload = form.submit().unwrap();
    assert_eq!(payload.image_path.as_deref(), Some("u/a/images/f.png"));
    assert_eq!(payload.purchase_price, Some(15000.0));
}

#[test]
fn field_keys_match_wire_names() {
    assert_eq!(AssetField::CategoryId.key(), "category_id");
    assert_eq!(AssetField::AssignedTo.key(), "assigned_to");
}

// =============================================================
// CategoryForm
// =============================================================

#[test]
fn category_form_create_and_edit() {
    let mut form = CategoryForm::new();
    assert_eq!(form.heading(), "New Category");
    assert_eq!(form.submit(), Err(FormError::Required("name")));

    form.name = "Vehicles".to_owned();
    let payload = form.submit().unwrap();
    assert_eq!(payload, CategoryPayload { name: "Vehicles".to_owned(), description: String::new() });

    let editing = CategoryForm::edit(&category(2, "Tools"));
    assert_eq!(editing.editing_id(), Some(2));
    assert_eq!(editing.heading(), "Edit Category");
    assert_eq!(editing.submit_label(), "Update");
}
