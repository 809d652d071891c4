use impulse_dns_domain::{AddressFamily, DomainError};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::DnsApiRepository;

pub struct ResolveHostnameUseCase {
    repo: Arc<dyn DnsApiRepository>,
}

impl ResolveHostnameUseCase {
    pub fn new(repo: Arc<dyn DnsApiRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn resolve(
        &self,
        hostname: &str,
        zone: &str,
        family: AddressFamily,
    ) -> Result<Option<IpAddr>, DomainError> {
        let address = self.repo.resolve(hostname, zone, family).await?;
        debug!(hostname, zone, %family, resolved = ?address, "Hostname resolved");
        Ok(address)
    }

    /// True only when the backend predicate is exactly true; NULL is false.
    #[instrument(skip(self))]
    pub async fn check(&self, hostname: &str, zone: &str) -> Result<bool, DomainError> {
        let valid = self.repo.check_hostname(hostname, zone).await?;
        Ok(valid == Some(true))
    }
}
