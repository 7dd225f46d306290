use std::error::Error;
use std::sync::Arc;

use duty_tracker::adapters::http::{app_router, AppState};
use duty_tracker::adapters::postgres::{
    self, PostgresDutyLogRepository, PostgresDutyRepository, PostgresDutyTypeRepository,
};
use duty_tracker::config::{AppConfig, StorageBackend};
use duty_tracker::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_tracing(&config.server)?;

    let state = match config.storage {
        StorageBackend::Postgres => {
            tracing::info!(database = %config.database.redacted_url(), "Connecting to database");
            let pool = postgres::connect(&config.database).await?;
            if config.database.run_migrations {
                postgres::run_migrations(&pool).await?;
                tracing::info!("Database migrations applied");
            }
            AppState::new(
                Arc::new(PostgresDutyRepository::new(pool.clone())),
                Arc::new(PostgresDutyTypeRepository::new(pool.clone())),
                Arc::new(PostgresDutyLogRepository::new(pool)),
            )
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            AppState::in_memory()
        }
    };

    let app = app_router(&state, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        storage = ?config.storage,
        "Duty tracker listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
