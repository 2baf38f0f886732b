// Framework bootstrap for the dungeon master API.

use crate::frameworks::config::ServerConfig;
use crate::interface_adapters::catalog::FileScenarioCatalog;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::io::Result;
use std::sync::Arc;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Serve on an already-bound listener. Tests bind an ephemeral port and call
// this directly.
pub async fn run(listener: tokio::net::TcpListener, config: ServerConfig) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(build_state(&config).await);

    tracing::info!(
        %address,
        scenarios_path = %config.scenarios_path.display(),
        spa_enabled = config.static_index_path.is_some(),
        "listening"
    );

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let config = ServerConfig::load().map_err(|e| {
        tracing::error!(error = %e, "failed to load configuration");
        std::io::Error::other(e.to_string())
    })?;
    let address = config.socket_addr();

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, config).await
}

async fn build_state(config: &ServerConfig) -> Arc<AppState> {
    let catalog = FileScenarioCatalog::new(config.scenarios_path.clone());
    match catalog.summary().await {
        Ok(summary) => {
            tracing::info!(
                total = summary.total,
                predefined = summary.predefined,
                "scenario catalog loaded"
            );
        }
        // Not fatal: /api/scenarios answers 500 until the file is fixed.
        Err(err) => {
            tracing::warn!(error = %err, "scenario catalog unavailable");
        }
    }

    Arc::new(AppState {
        catalog: Arc::new(catalog),
        static_index_path: config.static_index_path.clone(),
    })
}
