use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clima_api::config::{self, AppEnv, ServerConfig};
use clima_api::router::build_app_router;
use clima_api::state::AppState;
use clima_core::WeatherService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = config::load_env_files();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid configuration")?;

    // --- Tracing ---
    init_tracing(&config);

    match &env_file {
        Some(path) => tracing::info!(path = %path.display(), "Loaded environment file"),
        None => tracing::info!("No environment file found, using process environment"),
    }
    tracing::info!(
        host = %config.host,
        port = config.port,
        app_env = %config.app_env,
        base_url = %config.weather.base_url(),
        debug = config.weather.debug(),
        "Loaded server configuration"
    );

    // --- App state ---
    let service = WeatherService::from_config(&config.weather)
        .context("Failed to build weather client")?;
    let state = AppState::new(service);

    let app = build_app_router(state, &config);

    // --- Start server ---
    let ip = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST address '{}'", config.host))?;
    let addr = SocketAddr::new(ip, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `LOG_LEVEL` applies to our crates and
/// the HTTP middleware. Production logs are emitted as JSON lines.
fn init_tracing(config: &ServerConfig) {
    let level = &config.log_level;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "clima_api={level},clima_core={level},tower_http={level}"
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.app_env == AppEnv::Production {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for SIGINT or SIGTERM (on Unix) to initiate graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
