use impulse_dns_domain::{
    AddressRecord, DomainError, MxRecord, NsRecord, PointerRecord, TextRecord,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::instrument;

use crate::ports::DnsApiRepository;
use crate::services::{expect_non_empty, expect_single};

pub struct GetDnsRecordsUseCase {
    repo: Arc<dyn DnsApiRepository>,
}

impl GetDnsRecordsUseCase {
    pub fn new(repo: Arc<dyn DnsApiRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn address(&self, address: IpAddr) -> Result<AddressRecord, DomainError> {
        let rows = self.repo.get_address_records(address).await?;
        expect_single(
            rows,
            || format!("Could not locate DNS address record for address {}", address),
            || {
                "Multiple address records detected. This indicates a database error. \
                 Contact your system administrator."
                    .to_string()
            },
        )
    }

    #[instrument(skip(self))]
    pub async fn pointers(&self, address: IpAddr) -> Result<Vec<PointerRecord>, DomainError> {
        let rows = self.repo.get_pointer_records(address).await?;
        expect_non_empty(rows, || {
            format!("No pointer records found for address {}", address)
        })
    }

    #[instrument(skip(self))]
    pub async fn texts(&self, address: IpAddr) -> Result<Vec<TextRecord>, DomainError> {
        let rows = self.repo.get_text_records(address).await?;
        expect_non_empty(rows, || format!("No text records found for address {}", address))
    }

    #[instrument(skip(self))]
    pub async fn nameservers(&self, address: IpAddr) -> Result<Vec<NsRecord>, DomainError> {
        let rows = self.repo.get_ns_records(address).await?;
        expect_non_empty(rows, || format!("No NS records found for address {}", address))
    }

    #[instrument(skip(self))]
    pub async fn mailserver(&self, address: IpAddr) -> Result<MxRecord, DomainError> {
        let rows = self.repo.get_mx_records(address).await?;
        expect_single(
            rows,
            || format!("Could not locate a DNS MX record for address {}", address),
            || {
                "Multiple MX records detected. This indicates a database error. \
                 Contact your administrator."
                    .to_string()
            },
        )
    }
}
