use impulse_dns_domain::{DomainError, RecordType};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::DnsApiRepository;

/// Removal does not check that the record existed; whatever the backend
/// does for a missing record is what the caller gets.
pub struct RemoveDnsRecordUseCase {
    repo: Arc<dyn DnsApiRepository>,
}

impl RemoveDnsRecordUseCase {
    pub fn new(repo: Arc<dyn DnsApiRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn address(&self, address: IpAddr) -> Result<(), DomainError> {
        self.repo.remove_address(address).await?;
        info!(address = %address, "DNS address record removed");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn nameserver(&self, hostname: &str, zone: &str) -> Result<(), DomainError> {
        self.repo.remove_nameserver(hostname, zone).await?;
        info!(hostname, zone, "DNS nameserver removed");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn mailserver(&self, hostname: &str, zone: &str) -> Result<(), DomainError> {
        self.repo.remove_mailserver(hostname, zone).await?;
        info!(hostname, zone, "DNS mailserver removed");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn cname(&self, alias: &str, hostname: &str, zone: &str) -> Result<(), DomainError> {
        self.repo.remove_cname(alias, hostname, zone).await?;
        info!(alias, hostname, zone, "DNS CNAME removed");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn srv(&self, alias: &str, hostname: &str, zone: &str) -> Result<(), DomainError> {
        self.repo.remove_srv(alias, hostname, zone).await?;
        info!(alias, hostname, zone, "DNS SRV record removed");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn text(
        &self,
        hostname: &str,
        zone: &str,
        record_type: RecordType,
    ) -> Result<(), DomainError> {
        self.repo.remove_text(hostname, zone, record_type).await?;
        info!(hostname, zone, %record_type, "DNS text record removed");
        Ok(())
    }
}
