use anyhow::Context;
use tracing::info;

use crate::app::{build_router, AppState};
use crate::config::AppConfig;
use crate::database::{DatabaseManager, Stores};

/// Build the stores for the configured backend and serve until the process stops.
pub async fn handle(mut config: AppConfig, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(port) = port {
        config.server.port = port;
    }
    info!("Starting Fishlog API in {:?} mode", config.environment);

    let stores = match config.database.url {
        Some(_) => {
            let pool = DatabaseManager::connect(&config.database).await?;
            if config.database.run_migrations {
                DatabaseManager::migrate(&pool).await?;
            }
            Stores::postgres(pool)
        }
        None => {
            info!("DATABASE_URL not set, using in-memory storage");
            Stores::in_memory()
        }
    };

    let bind_addr = config.server.bind_address();
    let state = AppState::new(config, stores).context("invalid security configuration")?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("Fishlog API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
