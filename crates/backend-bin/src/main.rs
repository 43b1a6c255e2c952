use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use gatekey_backend_lib::{config::Settings, router, storage::FlatFileStore, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Fails fast when the signing secret is absent.
    let settings = Settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = FlatFileStore::new(&settings.data_dir)?;

    let bind_addr = settings.bind_addr;
    let state = Arc::new(AppState::new(store, settings));
    let app = router::create_router(state);

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!(%bind_addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
