use impulse_dns_domain::{DnsZone, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::DnsApiRepository;
use crate::services::{expect_non_empty, expect_single};

pub struct GetZonesUseCase {
    repo: Arc<dyn DnsApiRepository>,
}

impl GetZonesUseCase {
    pub fn new(repo: Arc<dyn DnsApiRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self, username: Option<&str>) -> Result<Vec<DnsZone>, DomainError> {
        let zones = self.repo.get_zones(username).await?;
        expect_non_empty(zones, || {
            "You do not have access to any DNS zones. This could be a problem. \
             Talk to your administrator."
                .to_string()
        })
    }

    #[instrument(skip(self))]
    pub async fn get(&self, zone: &str) -> Result<DnsZone, DomainError> {
        let rows = self.repo.get_zone(zone).await?;
        expect_single(
            rows,
            || format!("DNS zone {} not found", zone),
            || {
                "Multiple zones found? This is a database error. \
                 Contact your system administrator"
                    .to_string()
            },
        )
    }
}
