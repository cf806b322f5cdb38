mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv = dotenvy::dotenv();
    let config = ServerConfig::from_env()?;
    init_tracing(&config)?;

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, ".env present but unreadable"),
    }

    let (app, leptos_options) = routes::app()?;
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, site_root = %leptos_options.site_root, "crm dashboard listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

fn init_tracing(config: &ServerConfig) -> Result<(), ServerError> {
    let filter = EnvFilter::try_new(&config.log_filter).map_err(|e| ServerError::Logging(e.to_string()))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.log_json { builder.json().try_init() } else { builder.try_init() };
    result.map_err(|e| ServerError::Logging(e.to_string()))
}
