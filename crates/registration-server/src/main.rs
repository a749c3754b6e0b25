use anyhow::{Context, Result};
use registration_forms::{FormValidator, RegistrationConfig};
use registration_server::{app, build_sink, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let mut config = RegistrationConfig::load_default().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {:#}, using defaults", e);
        RegistrationConfig::default()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    if let Ok(host) = std::env::var("HOST") {
        config.server.host = host;
    }
    if let Ok(port) = std::env::var("PORT") {
        config.server.port = port
            .parse()
            .with_context(|| format!("PORT is not a valid port: {:?}", port))?;
    }

    let sink = build_sink(&config)?;
    info!(sink = ?config.submissions.sink, "submission sink ready");

    let state = AppState::new(&config, FormValidator::new(), sink);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
