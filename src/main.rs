mod config;
mod routes;

use config::HostConfig;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env().expect("invalid host configuration");
    let app = routes::leptos_app(&config).expect("leptos app init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "asset-admin listening");
    axum::serve(listener, app).await.expect("server failed");
}
