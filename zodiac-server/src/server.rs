use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use zodiac_core::{PlantService, ZodiacConfig};

use crate::assets::AssetRoot;
use crate::http::{build_router, HttpState};

/// Start the HTTP server on the configured address.
/// Gracefully shuts down when the broadcast shutdown signal fires.
pub async fn start_http_server(
    service: PlantService,
    config: ZodiacConfig,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<()> {
    let addr = config.bind_address();
    let assets = AssetRoot::from_config(&config.assets)?;
    tracing::info!(dir = %assets.dir.display(), "serving static assets");

    let state = Arc::new(HttpState { service, assets });
    let app = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Zodiac plants API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
            tracing::info!("HTTP server shutting down...");
        })
        .await?;

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
