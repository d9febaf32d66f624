use my_journal::application::auth::refresh_tokens::RefreshTokenStore;
use my_journal::infrastructure;
use my_journal::infrastructure::config::AppConfig;
use my_journal::infrastructure::db::DbPool;
use my_journal::infrastructure::repositories::refresh_tokens::PostgresRefreshTokenRepository;
use my_journal::infrastructure::state::AppState;
use my_journal::presentation;

use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::future::Future;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env()?;
    run_with_signal(config).await
}

async fn run_with_signal(config: AppConfig) -> anyhow::Result<()> {
    run(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run<F>(config: AppConfig, shutdown_signal: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    // tests may call this more than once
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "my_journal=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    let (listener, app, state) = bootstrap(config).await?;

    let purge = tokio::spawn(purge_refresh_tokens(
        state.pool.clone(),
        state.config.refresh_token_ttl(),
        Duration::from_secs(state.config.refresh_token_purge_interval_secs),
    ));

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await;

    purge.abort();
    served?;

    Ok(())
}

async fn bootstrap(
    config: AppConfig,
) -> anyhow::Result<(tokio::net::TcpListener, axum::Router, AppState)> {
    let pool = infrastructure::db::create_pool(&config.database_url).await?;

    infrastructure::db::migrate(&pool).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(pool, config);
    let app = presentation::router::app(state.clone())?;

    tracing::debug!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    Ok((listener, app, state))
}

/// Periodically deletes expired refresh tokens.
async fn purge_refresh_tokens(pool: DbPool, ttl: time::Duration, every: Duration) {
    let store = RefreshTokenStore::new(Arc::new(PostgresRefreshTokenRepository::new(pool)), ttl);
    let mut interval = tokio::time::interval(every);

    loop {
        interval.tick().await;
        match store.purge_expired().await {
            Ok(0) => {}
            Ok(purged) => tracing::info!(purged, "Purged expired refresh tokens"),
            Err(e) => tracing::error!("Refresh token purge failed: {}", e),
        }
    }
}
