mod error;
mod routes;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use campushub_core::config::HubConfig;
use campushub_core::directory::Directory;
use campushub_core::session::{FileSessionStore, SessionBackend};

pub struct AppState {
    pub directory: Directory,
    pub sessions: SessionBackend,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "campushub_web=info,campushub_core=info".parse().unwrap()
            }),
        )
        .init();

    let config =
        HubConfig::load(Some(Path::new("."))).unwrap_or_else(|_| HubConfig::default_config());

    let sessions = SessionBackend::File(FileSessionStore::new(config.session_path()?));
    let directory = Directory::seeded();

    let state = Arc::new(AppState {
        directory,
        sessions,
    });

    let app = routes::router()
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.web.host, config.web.port);
    tracing::info!("campushub-web listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
