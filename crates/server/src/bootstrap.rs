use bimquote_core::config::{AppConfig, ConfigError};
use bimquote_db::{connect_lazy_with_settings, connect_with_settings, migrations, DbPool};
use thiserror::Error;
use tracing::{error, info};

pub struct Application {
    pub config: AppConfig,
    /// `None` when no usable database URL was configured. Requests that
    /// touch the store then fail with a service-unavailable result; the
    /// process itself keeps serving.
    pub db_pool: Option<DbPool>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database migration failed: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(event_name = "system.bootstrap.start", "starting application bootstrap");

    let url = config.database.url.trim().to_string();
    if url.is_empty() {
        error!(
            event_name = "system.bootstrap.database_unconfigured",
            "no database URL configured; store connectivity disabled"
        );
        return Ok(Application { config, db_pool: None });
    }

    let db_pool = match connect_with_settings(
        &url,
        config.database.max_connections,
        config.database.timeout_secs,
    )
    .await
    {
        Ok(pool) => {
            info!(
                event_name = "system.bootstrap.database_connected",
                "database connection established"
            );
            migrations::run_pending(&pool).await.map_err(BootstrapError::Migration)?;
            info!(
                event_name = "system.bootstrap.migrations_applied",
                "database migrations applied"
            );
            pool
        }
        Err(connect_error) => {
            // Degraded start: connections are retried lazily per request and
            // surface as service-unavailable results until the store recovers.
            error!(
                event_name = "system.bootstrap.database_unavailable",
                error = %connect_error,
                "database connection failed; continuing with lazy connections"
            );
            match connect_lazy_with_settings(
                &url,
                config.database.max_connections,
                config.database.timeout_secs,
            ) {
                Ok(pool) => pool,
                Err(lazy_error) => {
                    error!(
                        event_name = "system.bootstrap.database_unconfigured",
                        error = %lazy_error,
                        "database URL unusable; store connectivity disabled"
                    );
                    return Ok(Application { config, db_pool: None });
                }
            }
        }
    };

    Ok(Application { config, db_pool: Some(db_pool) })
}
