use impulse_dns_domain::{
    AddressFamily, AddressRecord, DomainError, MxRecord, NewAddressRecord, NewCname,
    NewMailserver, NewNameserver, NewSrv, NewText, NsRecord, PointerRecord, RecordType,
    TextRecord,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::GetDnsRecordsUseCase;
use crate::ports::DnsApiRepository;

/// Creates records and reads them back.
///
/// Every create issues one backend write and one follow-up read. Records
/// keyed by hostname are located by resolving `hostname.zone` to an IPv4
/// address and filtering the rows for that address. When the hostname
/// does not resolve, or no row matches the new record, the create returns
/// `Ok(None)` even though the backend write went through; callers have to
/// treat that as a failure to confirm the record.
pub struct CreateDnsRecordUseCase {
    repo: Arc<dyn DnsApiRepository>,
    records: GetDnsRecordsUseCase,
}

impl CreateDnsRecordUseCase {
    pub fn new(repo: Arc<dyn DnsApiRepository>) -> Self {
        Self {
            records: GetDnsRecordsUseCase::new(repo.clone()),
            repo,
        }
    }

    #[instrument(skip(self))]
    pub async fn address(&self, record: NewAddressRecord) -> Result<AddressRecord, DomainError> {
        self.repo.create_address(&record).await?;

        info!(
            address = %record.address,
            hostname = %record.hostname,
            zone = %record.zone,
            "DNS address record created"
        );

        self.records.address(record.address).await
    }

    #[instrument(skip(self))]
    pub async fn nameserver(&self, record: NewNameserver) -> Result<Option<NsRecord>, DomainError> {
        self.repo.create_nameserver(&record).await?;
        info!(hostname = %record.hostname, zone = %record.zone, "DNS nameserver created");

        let Some(address) = self.resolve_quietly(&record.hostname, &record.zone).await else {
            return Ok(None);
        };

        let found = self
            .records
            .nameservers(address)
            .await?
            .into_iter()
            .find(|ns| ns.isprimary == record.isprimary);

        Ok(self.confirm(found, RecordType::NS, &record.hostname, &record.zone))
    }

    #[instrument(skip(self))]
    pub async fn mailserver(&self, record: NewMailserver) -> Result<Option<MxRecord>, DomainError> {
        self.repo.create_mailserver(&record).await?;
        info!(hostname = %record.hostname, zone = %record.zone, "DNS mailserver created");

        let Some(address) = self.resolve_quietly(&record.hostname, &record.zone).await else {
            return Ok(None);
        };

        self.records.mailserver(address).await.map(Some)
    }

    #[instrument(skip(self))]
    pub async fn cname(&self, record: NewCname) -> Result<Option<PointerRecord>, DomainError> {
        self.repo.create_cname(&record).await?;
        info!(
            alias = %record.alias,
            hostname = %record.hostname,
            zone = %record.zone,
            "DNS CNAME created"
        );

        self.find_pointer(&record.alias, &record.hostname, &record.zone, RecordType::CNAME)
            .await
    }

    #[instrument(skip(self))]
    pub async fn srv(&self, record: NewSrv) -> Result<Option<PointerRecord>, DomainError> {
        self.repo.create_srv(&record).await?;
        info!(
            alias = %record.alias,
            hostname = %record.hostname,
            zone = %record.zone,
            port = record.port,
            "DNS SRV record created"
        );

        self.find_pointer(&record.alias, &record.hostname, &record.zone, RecordType::SRV)
            .await
    }

    #[instrument(skip(self))]
    pub async fn text(&self, record: NewText) -> Result<Option<TextRecord>, DomainError> {
        self.repo.create_text(&record).await?;
        info!(
            hostname = %record.hostname,
            zone = %record.zone,
            record_type = %record.record_type,
            "DNS text record created"
        );

        let Some(address) = self.resolve_quietly(&record.hostname, &record.zone).await else {
            return Ok(None);
        };

        let found = self
            .records
            .texts(address)
            .await?
            .into_iter()
            .find(|txt| txt.matches(&record.text, record.record_type));

        Ok(self.confirm(found, record.record_type, &record.hostname, &record.zone))
    }

    async fn find_pointer(
        &self,
        alias: &str,
        hostname: &str,
        zone: &str,
        record_type: RecordType,
    ) -> Result<Option<PointerRecord>, DomainError> {
        let Some(address) = self.resolve_quietly(hostname, zone).await else {
            return Ok(None);
        };

        let found = self
            .records
            .pointers(address)
            .await?
            .into_iter()
            .find(|ptr| ptr.matches(alias, record_type));

        Ok(self.confirm(found, record_type, hostname, zone))
    }

    // Resolve failures are not surfaced from the create flows; they only
    // mean the new record cannot be read back.
    async fn resolve_quietly(&self, hostname: &str, zone: &str) -> Option<IpAddr> {
        match self.repo.resolve(hostname, zone, AddressFamily::V4).await {
            Ok(Some(address)) => Some(address),
            Ok(None) => {
                warn!(hostname, zone, "Created record's host did not resolve");
                None
            }
            Err(e) => {
                warn!(error = %e, hostname, zone, "Resolve failed after create");
                None
            }
        }
    }

    fn confirm<T>(
        &self,
        found: Option<T>,
        record_type: RecordType,
        hostname: &str,
        zone: &str,
    ) -> Option<T> {
        if found.is_none() {
            warn!(
                %record_type,
                hostname,
                zone,
                "Created record not found among resolved records"
            );
        }
        found
    }
}
