use impulse_dns_domain::config::DatabaseConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// Opens the connection pool to the database exposing the `api` schema.
///
/// The schema and its stored procedures are owned by the database; nothing
/// is migrated from here.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database pool ready"
    );

    Ok(pool)
}
