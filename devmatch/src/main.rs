use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devmatch::api::{create_router, AppState};
use devmatch::cache::SystemClock;
use devmatch::config::Config;
use devmatch::db::{Database, LibSqlBackend, ProfileStore};
use devmatch::github::GitHubClient;
use devmatch::models::UserProfile;

#[derive(Parser)]
#[command(name = "devmatch")]
#[command(about = "Developer compatibility scoring service")]
struct Args {
    /// JSON file with an array of user profiles to upsert before serving
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Seconds between embedded-replica syncs (remote databases with a local path only)
    #[arg(long, default_value_t = 60)]
    sync_interval_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devmatch=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    if config.server.api_keys.is_empty() {
        tracing::warn!("DEVMATCH_API_KEYS is not set; match endpoints will answer 401");
    }
    if config.github.token.is_none() {
        tracing::warn!("GITHUB_TOKEN is not set; GitHub calls use the unauthenticated rate limit");
    }

    tracing::info!("Initializing database...");
    let database = Database::new(&config.database).await?;
    let store: Arc<dyn ProfileStore> = Arc::new(LibSqlBackend::new(database.clone()));

    if let Some(path) = &args.seed {
        let count = seed_profiles(store.as_ref(), path).await?;
        tracing::info!(count, path = %path.display(), "Seeded profiles");
    }

    let github = GitHubClient::new(&config.github)?;
    let state = AppState::new(
        config.clone(),
        store,
        Arc::new(github),
        Arc::new(SystemClock),
    );

    let cancel_token = CancellationToken::new();

    if config.database.local_path.is_some() {
        tracing::info!(
            "Starting replica sync... (interval={}s)",
            args.sync_interval_secs
        );
        let token = cancel_token.child_token();
        let interval = tokio::time::Duration::from_secs(args.sync_interval_secs.max(1));
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        tracing::info!("Replica sync shutting down...");
                        break;
                    }
                    _ = tokio::time::sleep(interval) => {
                        if let Err(e) = database.sync().await {
                            tracing::error!("Replica sync error: {}", e);
                        }
                    }
                }
            }
        });
    }

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("DevMatch starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token))
        .await?;

    Ok(())
}

async fn seed_profiles(store: &dyn ProfileStore, path: &Path) -> anyhow::Result<usize> {
    let raw = tokio::fs::read_to_string(path).await?;
    let profiles: Vec<UserProfile> = serde_json::from_str(&raw)?;
    for profile in &profiles {
        store.upsert_profile(profile).await?;
    }
    Ok(profiles.len())
}

async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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

    tracing::info!("Shutdown signal received, cancelling background tasks...");
    cancel_token.cancel();
}
