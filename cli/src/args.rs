//! Command-line surface.

#[cfg(test)]
#[path = "args_test.rs"]
mod args_test;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use inventory::form::{AssetField, AssetForm};

#[derive(Parser, Debug)]
#[command(name = "asset-cli", about = "Asset management API command-line client")]
pub struct Cli {
    /// API base URL. Must be absolute; the CLI has no same-origin.
    #[arg(long, env = "ASSET_API_URL", default_value = "http://127.0.0.1:8000")]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that the API root answers.
    Ping,
    #[command(subcommand)]
    Assets(AssetsCommand),
    #[command(subcommand)]
    Categories(CategoriesCommand),
    /// KPI values, distributions, and recent activity.
    Dashboard {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AssetsCommand {
    List(ListArgs),
    Show {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    Create(AssetFields),
    Update {
        id: i64,
        #[command(flatten)]
        fields: AssetFields,
    },
    Delete {
        id: i64,
    },
    History {
        id: i64,
    },
    /// Upload an image file and attach it to the asset.
    UploadImage {
        id: i64,
        file: PathBuf,
        /// Override the content type guessed from the extension.
        #[arg(long)]
        content_type: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive match on name or serial number.
    #[arg(long, default_value = "")]
    pub search: String,
    /// Exact status; sent to the server and re-applied locally.
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub category_id: Option<i64>,
    #[arg(long)]
    pub json: bool,
}

/// Asset form fields as flags. Unset flags leave the form value untouched.
#[derive(Args, Debug, Default)]
pub struct AssetFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub serial_number: Option<String>,
    #[arg(long)]
    pub category_id: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    /// `YYYY-MM-DD`.
    #[arg(long)]
    pub purchase_date: Option<String>,
    #[arg(long)]
    pub purchase_price: Option<String>,
    #[arg(long)]
    pub current_value: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub assigned_to: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

impl AssetFields {
    fn pairs(&self) -> [(AssetField, Option<&String>); 10] {
        [
            (AssetField::Name, self.name.as_ref()),
            (AssetField::SerialNumber, self.serial_number.as_ref()),
            (AssetField::CategoryId, self.category_id.as_ref()),
            (AssetField::Status, self.status.as_ref()),
            (AssetField::PurchaseDate, self.purchase_date.as_ref()),
            (AssetField::PurchasePrice, self.purchase_price.as_ref()),
            (AssetField::CurrentValue, self.current_value.as_ref()),
            (AssetField::Location, self.location.as_ref()),
            (AssetField::AssignedTo, self.assigned_to.as_ref()),
            (AssetField::Description, self.description.as_ref()),
        ]
    }

    /// Write every provided flag into `form`.
    pub fn apply_to(&self, form: &mut AssetForm) {
        for (field, value) in self.pairs() {
            if let Some(value) = value {
                form.set(field, value.as_str());
            }
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum CategoriesCommand {
    List {
        #[arg(long)]
        json: bool,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        id: i64,
    },
}
