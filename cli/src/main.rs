mod args;
mod commands;
mod http;
mod render;

use clap::Parser;
use inventory::ApiConfig;
use inventory::detail::UploadError;
use inventory::pages::SaveError;

use crate::args::{Cli, Command};
use crate::http::ReqwestApi;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("missing API base URL; pass --api-url or set ASSET_API_URL")]
    MissingBaseUrl,
    #[error(transparent)]
    Api(#[from] inventory::ApiError),
    #[error(transparent)]
    Save(#[from] SaveError),
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error("no category with id {0}")]
    UnknownCategory(i64),
    #[error("cannot read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = ApiConfig::new(&cli.api_url);
    if config.is_same_origin() {
        return Err(CliError::MissingBaseUrl);
    }
    tracing::debug!(base_url = config.base_url(), "using API");
    let api = ReqwestApi::new(config);

    let output = match cli.command {
        Command::Ping => {
            api.ping().await?;
            "ok\n".to_owned()
        }
        Command::Assets(command) => commands::run_assets(&api, command).await?,
        Command::Categories(command) => commands::run_categories(&api, command).await?,
        Command::Dashboard { json } => commands::run_dashboard(&api, json).await?,
    };
    print!("{output}");
    Ok(())
}
