mod config;
mod content;
mod dictionary;
mod handler;
mod internationalization;
mod locale;
mod page;
mod resolver;

use std::sync::Arc;

use eyre::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Config, dictionary::DictionaryStore, handler::AppState};

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(tracing_error::ErrorLayer::default())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::try_from_env()?;

    let dictionaries = DictionaryStore::embedded()?;
    dictionaries.ensure_complete()?;
    tracing::info!(default_locale = %config.default_locale, "loaded translation tables");

    let router = handler::create_router(AppState {
        dictionaries: Arc::new(dictionaries),
        default_locale: config.default_locale,
        preference_max_age: config.preference_max_age(),
        public_url: config.public_url.clone(),
    });

    let listen_addr = &config.listen_addr;
    tracing::info!(%listen_addr, "starting http server...");
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind `{listen_addr}`"))?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
