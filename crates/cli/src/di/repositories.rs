use impulse_dns_application::ports::DnsApiRepository;
use impulse_dns_infrastructure::repositories::PgDnsApiRepository;
use sqlx::PgPool;
use std::sync::Arc;

pub struct Repositories {
    pub dns_api: Arc<dyn DnsApiRepository>,
}

impl Repositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            dns_api: Arc::new(PgDnsApiRepository::new(pool)),
        }
    }
}
