use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use starboard::migration::{Migrator, MigratorTrait};
use starboard::store::PostgresStore;
use starboard::{app, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(10)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(3600));
    let db = Database::connect(options).await?;
    tracing::info!(
        max_connections = config.max_connections,
        "database connection pool configured"
    );

    Migrator::up(&db, None).await?;
    tracing::info!("schema migrations applied");

    let store = Arc::new(PostgresStore::new(db));
    let router = app::build(store.clone(), store);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "listening");
    axum::serve(listener, router).await?;

    Ok(())
}
