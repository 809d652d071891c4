use async_trait::async_trait;
use impulse_dns_domain::{
    AddressFamily, AddressRecord, DnsKey, DnsZone, DomainError, MxRecord, NewAddressRecord,
    NewCname, NewMailserver, NewNameserver, NewSrv, NewText, NsRecord, PointerRecord, RecordType,
    TextRecord,
};
use std::net::IpAddr;

/// Stored-procedure API of the DNS backend.
///
/// Reads hand back every row the backend produced, in backend order, already
/// mapped to typed entities. Deciding whether zero or several rows is an
/// error is left to the caller. Writes succeed when the backend raised no
/// error; the backend procedures are transactional.
#[async_trait]
pub trait DnsApiRepository: Send + Sync {
    async fn create_address(&self, record: &NewAddressRecord) -> Result<(), DomainError>;

    async fn create_nameserver(&self, record: &NewNameserver) -> Result<(), DomainError>;

    async fn create_mailserver(&self, record: &NewMailserver) -> Result<(), DomainError>;

    async fn create_cname(&self, record: &NewCname) -> Result<(), DomainError>;

    async fn create_srv(&self, record: &NewSrv) -> Result<(), DomainError>;

    async fn create_text(&self, record: &NewText) -> Result<(), DomainError>;

    async fn get_address_records(&self, address: IpAddr)
        -> Result<Vec<AddressRecord>, DomainError>;

    async fn get_pointer_records(&self, address: IpAddr)
        -> Result<Vec<PointerRecord>, DomainError>;

    async fn get_text_records(&self, address: IpAddr) -> Result<Vec<TextRecord>, DomainError>;

    async fn get_ns_records(&self, address: IpAddr) -> Result<Vec<NsRecord>, DomainError>;

    async fn get_mx_records(&self, address: IpAddr) -> Result<Vec<MxRecord>, DomainError>;

    async fn get_record_types(&self) -> Result<Vec<String>, DomainError>;

    /// `None` lets the backend scope the listing to the session user.
    async fn get_zones(&self, username: Option<&str>) -> Result<Vec<DnsZone>, DomainError>;

    async fn get_zone(&self, zone: &str) -> Result<Vec<DnsZone>, DomainError>;

    async fn get_keys(&self, username: Option<&str>) -> Result<Vec<DnsKey>, DomainError>;

    async fn get_key(&self, keyname: &str) -> Result<Vec<DnsKey>, DomainError>;

    async fn remove_address(&self, address: IpAddr) -> Result<(), DomainError>;

    async fn remove_nameserver(&self, hostname: &str, zone: &str) -> Result<(), DomainError>;

    async fn remove_mailserver(&self, hostname: &str, zone: &str) -> Result<(), DomainError>;

    async fn remove_cname(&self, alias: &str, hostname: &str, zone: &str)
        -> Result<(), DomainError>;

    async fn remove_srv(&self, alias: &str, hostname: &str, zone: &str) -> Result<(), DomainError>;

    async fn remove_text(
        &self,
        hostname: &str,
        zone: &str,
        record_type: RecordType,
    ) -> Result<(), DomainError>;

    async fn modify_address(
        &self,
        address: IpAddr,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError>;

    async fn modify_nameserver(
        &self,
        hostname: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError>;

    async fn modify_mailserver(
        &self,
        hostname: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError>;

    async fn modify_cname(
        &self,
        alias: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError>;

    async fn modify_srv(
        &self,
        alias: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError>;

    async fn modify_text(
        &self,
        hostname: &str,
        zone: &str,
        record_type: RecordType,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError>;

    async fn resolve(
        &self,
        hostname: &str,
        zone: &str,
        family: AddressFamily,
    ) -> Result<Option<IpAddr>, DomainError>;

    /// Raw value of the backend predicate; NULL comes back as `None`.
    async fn check_hostname(&self, hostname: &str, zone: &str)
        -> Result<Option<bool>, DomainError>;
}
