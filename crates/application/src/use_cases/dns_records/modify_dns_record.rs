use impulse_dns_domain::{DomainError, RecordType};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::DnsApiRepository;

/// Single-field updates. Field names and values go to the backend as-is;
/// the backend decides which fields exist and what values are legal.
pub struct ModifyDnsRecordUseCase {
    repo: Arc<dyn DnsApiRepository>,
}

impl ModifyDnsRecordUseCase {
    pub fn new(repo: Arc<dyn DnsApiRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, value))]
    pub async fn address(
        &self,
        address: IpAddr,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.repo.modify_address(address, field, value).await?;
        info!(address = %address, field, "DNS address record modified");
        Ok(())
    }

    #[instrument(skip(self, value))]
    pub async fn nameserver(
        &self,
        hostname: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.repo.modify_nameserver(hostname, zone, field, value).await?;
        info!(hostname, zone, field, "DNS nameserver modified");
        Ok(())
    }

    #[instrument(skip(self, value))]
    pub async fn mailserver(
        &self,
        hostname: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.repo.modify_mailserver(hostname, zone, field, value).await?;
        info!(hostname, zone, field, "DNS mailserver modified");
        Ok(())
    }

    #[instrument(skip(self, value))]
    pub async fn cname(
        &self,
        alias: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.repo.modify_cname(alias, zone, field, value).await?;
        info!(alias, zone, field, "DNS CNAME modified");
        Ok(())
    }

    #[instrument(skip(self, value))]
    pub async fn srv(
        &self,
        alias: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.repo.modify_srv(alias, zone, field, value).await?;
        info!(alias, zone, field, "DNS SRV record modified");
        Ok(())
    }

    #[instrument(skip(self, value))]
    pub async fn text(
        &self,
        hostname: &str,
        zone: &str,
        record_type: RecordType,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.repo
            .modify_text(hostname, zone, record_type, field, value)
            .await?;
        info!(hostname, zone, %record_type, field, "DNS text record modified");
        Ok(())
    }
}
