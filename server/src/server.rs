use crate::env::Env;
use crate::http::{build_cors, get_version_info};
use crate::state::AppState;
use anyhow::Context;
use axum::Router;
use log::{info, warn};
use tokio::signal;
use upcheck_common::version::LATEST;

pub async fn start(config: Env) -> anyhow::Result<()> {
    info!("running server on {} mode", config.mode);

    let state = AppState::new(&LATEST).context("failed to render version info")?;
    let app = router(state);

    let host = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&host)
        .await
        .with_context(|| format!("failed to bind {host}"))?;
    info!("listening on: {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Every method and path lands on the version info handler.
pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .fallback(get_version_info)
        .layer(build_cors())
        .with_state(state)
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("ctrl+c pressed, shutting down"),
        Err(err) => {
            warn!("failed to listen for shutdown signal: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
