use impulse_dns_domain::config::DatabaseConfig;
use impulse_dns_infrastructure::database::create_pool;
use sqlx::PgPool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<PgPool> {
    info!("Connecting to DNS backend database");

    let pool = create_pool(cfg).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Database initialized successfully (max_connections={}, min_connections={})",
        cfg.max_connections, cfg.min_connections,
    );

    Ok(pool)
}
