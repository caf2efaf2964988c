//! LegalCloud Advisor host: identity API plus server-side rendering of the
//! Leptos client.

mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server exited with error");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::ServerConfig::from_env()?;
    let port = config.port;
    tracing::info!(
        port,
        cookie_secure = config.cookie_secure,
        seed_demo_accounts = config.seed_demo_accounts,
        "configuration loaded"
    );

    let state = state::AppState::new(config);
    spawn_session_sweeper(state.clone());

    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "legalcloud listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Periodically drop expired sessions so abandoned logins don't accumulate.
fn spawn_session_sweeper(state: state::AppState) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(15 * 60));
        loop {
            interval.tick().await;
            let removed = state
                .identity
                .write()
                .await
                .purge_expired(time::OffsetDateTime::now_utc());
            if removed > 0 {
                tracing::debug!(removed, "expired sessions purged");
            }
        }
    })
}
