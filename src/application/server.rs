use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::application::routes::app_router;
use crate::application::state::{AppState, AppStateConfig};
use crate::infrastructure::seed;

pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub news_api_url: String,
    pub news_api_key: String,
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::new(AppStateConfig {
        news_api_url: config.news_api_url,
        news_api_key: config.news_api_key,
    });

    seed_stores(&state).await?;

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_address))?;

    let app = app_router(state);

    info!(address = %config.bind_address, "starting HTTP server");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server terminated unexpectedly")?;

    info!("server shutdown complete");

    Ok(())
}

/// Load the fallback set into any store that starts empty, so pages have
/// content before the first remote fetch (or forever, with no API key).
pub async fn seed_stores(state: &AppState) -> anyhow::Result<()> {
    if state.article_repo.count().await? == 0 {
        let articles = state
            .article_repo
            .insert_many(seed::demo_articles())
            .await
            .context("failed to seed articles")?;
        info!(count = articles.len(), "seeded demo articles");
    }

    if state.magazine_repo.count().await? == 0 {
        let magazines = seed::demo_magazines();
        let count = magazines.len();
        for magazine in magazines {
            state
                .magazine_repo
                .insert(magazine)
                .await
                .context("failed to seed magazines")?;
        }
        info!(count, "seeded demo magazines");
    }

    Ok(())
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if signal handlers fail
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
