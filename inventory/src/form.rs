//! Controlled form state for assets and categories.
//!
//! Inputs are held as the raw strings the user typed. Normalization happens
//! only on submit: `category_id` becomes an integer, the two money fields
//! become floats (or `null` when blank), and everything else is passed
//! through verbatim.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::model::{Asset, AssetPayload, AssetStatus, Category, CategoryPayload};

/// Reason a form could not be submitted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be a number, got `{value}`")]
    InvalidNumber { field: &'static str, value: String },
}

/// Editable fields of the asset form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetField {
    Name,
    SerialNumber,
    CategoryId,
    Status,
    PurchaseDate,
    PurchasePrice,
    CurrentValue,
    Location,
    AssignedTo,
    Description,
}

impl AssetField {
    /// Wire/field name, also used as the HTML input name.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::SerialNumber => "serial_number",
            Self::CategoryId => "category_id",
            Self::Status => "status",
            Self::PurchaseDate => "purchase_date",
            Self::PurchasePrice => "purchase_price",
            Self::CurrentValue => "current_value",
            Self::Location => "location",
            Self::AssignedTo => "assigned_to",
            Self::Description => "description",
        }
    }
}

/// Raw input state of the create/edit asset form.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetForm {
    pub name: String,
    pub description: String,
    pub serial_number: String,
    pub purchase_date: String,
    pub purchase_price: String,
    pub current_value: String,
    pub status: String,
    pub location: String,
    pub category_id: String,
    pub assigned_to: String,
    editing: Option<i64>,
    image_path: Option<String>,
}

impl Default for AssetForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetForm {
    /// Empty form in create mode.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            serial_number: String::new(),
            purchase_date: String::new(),
            purchase_price: String::new(),
            current_value: String::new(),
            status: AssetStatus::Active.as_str().to_owned(),
            location: String::new(),
            category_id: String::new(),
            assigned_to: String::new(),
            editing: None,
            image_path: None,
        }
    }

    /// Form prefilled from an existing asset, in edit mode.
    #[must_use]
    pub fn edit(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            description: asset.description.clone().unwrap_or_default(),
            serial_number: asset.serial_number.clone().unwrap_or_default(),
            purchase_date: asset.purchase_date.clone().unwrap_or_default(),
            purchase_price: asset.purchase_price.map(|v| v.to_string()).unwrap_or_default(),
            current_value: asset.current_value.map(|v| v.to_string()).unwrap_or_default(),
            status: asset.status.as_str().to_owned(),
            location: asset.location.clone().unwrap_or_default(),
            category_id: asset.effective_category_id().map(|id| id.to_string()).unwrap_or_default(),
            assigned_to: asset.assigned_to.clone().unwrap_or_default(),
            editing: Some(asset.id),
            image_path: asset.image_path.clone(),
        }
    }

    /// Id of the asset being edited, `None` in create mode.
    #[must_use]
    pub fn editing_id(&self) -> Option<i64> {
        self.editing
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.is_editing() { "Edit Asset" } else { "Add New Asset" }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update Asset" } else { "Create Asset" }
    }

    #[must_use]
    pub fn get(&self, field: AssetField) -> &str {
        match field {
            AssetField::Name => &self.name,
            AssetField::SerialNumber => &self.serial_number,
            AssetField::CategoryId => &self.category_id,
            AssetField::Status => &self.status,
            AssetField::PurchaseDate => &self.purchase_date,
            AssetField::PurchasePrice => &self.purchase_price,
            AssetField::CurrentValue => &self.current_value,
            AssetField::Location => &self.location,
            AssetField::AssignedTo => &self.assigned_to,
            AssetField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: AssetField, value: impl Into<String>) {
        let value = value.into();
        match field {
            AssetField::Name => self.name = value,
            AssetField::SerialNumber => self.serial_number = value,
            AssetField::CategoryId => self.category_id = value,
            AssetField::Status => self.status = value,
            AssetField::PurchaseDate => self.purchase_date = value,
            AssetField::PurchasePrice => self.purchase_price = value,
            AssetField::CurrentValue => self.current_value = value,
            AssetField::Location => self.location = value,
            AssetField::AssignedTo => self.assigned_to = value,
            AssetField::Description => self.description = value,
        }
    }

    /// Preselect the first category once the select options arrive.
    ///
    /// Only applies in create mode and only while no category is chosen.
    pub fn apply_categories(&mut self, categories: &[Category]) {
        if self.is_editing() || !self.category_id.is_empty() {
            return;
        }
        if let Some(first) = categories.first() {
            self.category_id = first.id.to_string();
        }
    }

    /// Normalize the raw inputs into a request body.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Required`] when name or category is blank and
    /// [`FormError::InvalidNumber`] when a numeric field does not parse.
    pub fn submit(&self) -> Result<AssetPayload, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Required("name"));
        }
        if self.category_id.trim().is_empty() {
            return Err(FormError::Required("category"));
        }
        let category_id = self.category_id.trim().parse::<i64>().map_err(|_| FormError::InvalidNumber {
            field: "category_id",
            value: self.category_id.clone(),
        })?;

        Ok(AssetPayload {
            name: self.name.clone(),
            description: Some(self.description.clone()),
            serial_number: Some(self.serial_number.clone()),
            purchase_date: Some(self.purchase_date.clone()),
            purchase_price: parse_money("purchase_price", &self.purchase_price)?,
            current_value: parse_money("current_value", &self.current_value)?,
            status: AssetStatus::parse(&self.status),
            location: Some(self.location.clone()),
            category_id,
            assigned_to: Some(self.assigned_to.clone()),
            image_path: self.image_path.clone(),
        })
    }
}

fn parse_money(field: &'static str, raw: &str) -> Result<Option<f64>, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(FormError::InvalidNumber { field, value: raw.to_owned() }),
    }
}

/// Raw input state of the inline category form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
    editing: Option<i64>,
}

impl CategoryForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn edit(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            editing: Some(category.id),
        }
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<i64> {
        self.editing
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        if self.editing.is_some() { "Edit Category" } else { "New Category" }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() { "Update" } else { "Create" }
    }

    /// # Errors
    ///
    /// Returns [`FormError::Required`] when the name is blank.
    pub fn submit(&self) -> Result<CategoryPayload, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Required("name"));
        }
        Ok(CategoryPayload { name: self.name.clone(), description: self.description.clone() })
    }
}
