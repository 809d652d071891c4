#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use impulse_dns_application::ports::DnsApiRepository;
use impulse_dns_domain::{
    AddressFamily, AddressRecord, AuditInfo, DnsKey, DnsZone, DomainError, MxRecord,
    NewAddressRecord, NewCname, NewMailserver, NewNameserver, NewSrv, NewText, NsRecord,
    PointerRecord, RecordType, TextRecord,
};
use std::net::IpAddr;
use std::sync::Arc;
use tokio::sync::Mutex;

pub fn audit() -> AuditInfo {
    let ts = NaiveDate::from_ymd_opt(2013, 5, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    AuditInfo::new(ts, ts, "admin")
}

pub fn address_record(address: &str, hostname: &str) -> AddressRecord {
    AddressRecord {
        hostname: hostname.to_string(),
        zone: "example.com".to_string(),
        address: address.parse().unwrap(),
        record_type: RecordType::A,
        ttl: 3600,
        owner: "admin".to_string(),
        audit: audit(),
    }
}

pub fn pointer_record(address: &str, alias: &str, record_type: RecordType) -> PointerRecord {
    PointerRecord {
        hostname: "web".to_string(),
        zone: "example.com".to_string(),
        address: address.parse().unwrap(),
        record_type,
        ttl: 3600,
        owner: "admin".to_string(),
        alias: alias.to_string(),
        extra: None,
        audit: audit(),
    }
}

pub fn zone(name: &str) -> DnsZone {
    DnsZone {
        zone: name.to_string(),
        keyname: format!("{}-key", name),
        forward: true,
        shared: false,
        owner: "admin".to_string(),
        comment: None,
        audit: audit(),
    }
}

/// Canned backend rows. Writes are recorded but never change what reads
/// return, so every response in a test is fixed up front.
#[derive(Default)]
pub struct StubRows {
    pub addresses: Vec<AddressRecord>,
    pub pointers: Vec<PointerRecord>,
    pub texts: Vec<TextRecord>,
    pub nameservers: Vec<NsRecord>,
    pub mailservers: Vec<MxRecord>,
    pub zones: Vec<DnsZone>,
    pub keys: Vec<DnsKey>,
    pub record_types: Vec<String>,
    pub resolved: Option<IpAddr>,
    pub hostname_valid: Option<bool>,
    pub fail_with: Option<DomainError>,
    pub writes: Vec<String>,
}

#[derive(Clone, Default)]
pub struct StubDnsApiRepository {
    rows: Arc<Mutex<StubRows>>,
}

impl StubDnsApiRepository {
    pub fn new(rows: StubRows) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }

    pub async fn writes(&self) -> Vec<String> {
        self.rows.lock().await.writes.clone()
    }

    async fn read<T: Clone>(
        &self,
        select: impl FnOnce(&StubRows) -> Vec<T>,
    ) -> Result<Vec<T>, DomainError> {
        let rows = self.rows.lock().await;
        if let Some(err) = rows.fail_with.clone() {
            return Err(err);
        }
        Ok(select(&rows))
    }

    async fn write(&self, call: String) -> Result<(), DomainError> {
        let mut rows = self.rows.lock().await;
        if let Some(err) = rows.fail_with.clone() {
            return Err(err);
        }
        rows.writes.push(call);
        Ok(())
    }
}

fn at<T: Clone>(records: &[T], address: IpAddr, of: impl Fn(&T) -> IpAddr) -> Vec<T> {
    records
        .iter()
        .filter(|r| of(r) == address)
        .cloned()
        .collect()
}

#[async_trait]
impl DnsApiRepository for StubDnsApiRepository {
    async fn create_address(&self, record: &NewAddressRecord) -> Result<(), DomainError> {
        self.write(format!("create_dns_address({})", record.address))
            .await
    }

    async fn create_nameserver(&self, record: &NewNameserver) -> Result<(), DomainError> {
        self.write(format!("create_dns_nameserver({})", record.hostname))
            .await
    }

    async fn create_mailserver(&self, record: &NewMailserver) -> Result<(), DomainError> {
        self.write(format!("create_dns_mailserver({})", record.hostname))
            .await
    }

    async fn create_cname(&self, record: &NewCname) -> Result<(), DomainError> {
        self.write(format!("create_dns_cname({})", record.alias)).await
    }

    async fn create_srv(&self, record: &NewSrv) -> Result<(), DomainError> {
        self.write(format!("create_dns_srv({})", record.alias)).await
    }

    async fn create_text(&self, record: &NewText) -> Result<(), DomainError> {
        self.write(format!("create_dns_text({})", record.record_type))
            .await
    }

    async fn get_address_records(
        &self,
        address: IpAddr,
    ) -> Result<Vec<AddressRecord>, DomainError> {
        self.read(|r| at(&r.addresses, address, |x| x.address)).await
    }

    async fn get_pointer_records(
        &self,
        address: IpAddr,
    ) -> Result<Vec<PointerRecord>, DomainError> {
        self.read(|r| at(&r.pointers, address, |x| x.address)).await
    }

    async fn get_text_records(&self, address: IpAddr) -> Result<Vec<TextRecord>, DomainError> {
        self.read(|r| at(&r.texts, address, |x| x.address)).await
    }

    async fn get_ns_records(&self, address: IpAddr) -> Result<Vec<NsRecord>, DomainError> {
        self.read(|r| at(&r.nameservers, address, |x| x.address))
            .await
    }

    async fn get_mx_records(&self, address: IpAddr) -> Result<Vec<MxRecord>, DomainError> {
        self.read(|r| at(&r.mailservers, address, |x| x.address))
            .await
    }

    async fn get_record_types(&self) -> Result<Vec<String>, DomainError> {
        self.read(|r| r.record_types.clone()).await
    }

    async fn get_zones(&self, username: Option<&str>) -> Result<Vec<DnsZone>, DomainError> {
        self.read(|r| {
            r.zones
                .iter()
                .filter(|z| username.map_or(true, |u| z.owner == u))
                .cloned()
                .collect()
        })
        .await
    }

    async fn get_zone(&self, zone: &str) -> Result<Vec<DnsZone>, DomainError> {
        self.read(|r| r.zones.iter().filter(|z| z.zone == zone).cloned().collect())
            .await
    }

    async fn get_keys(&self, _username: Option<&str>) -> Result<Vec<DnsKey>, DomainError> {
        self.read(|r| r.keys.clone()).await
    }

    async fn get_key(&self, keyname: &str) -> Result<Vec<DnsKey>, DomainError> {
        self.read(|r| {
            r.keys
                .iter()
                .filter(|k| k.keyname == keyname)
                .cloned()
                .collect()
        })
        .await
    }

    async fn remove_address(&self, address: IpAddr) -> Result<(), DomainError> {
        self.write(format!("remove_dns_address({})", address)).await
    }

    async fn remove_nameserver(&self, hostname: &str, zone: &str) -> Result<(), DomainError> {
        self.write(format!("remove_dns_nameserver({},{})", hostname, zone))
            .await
    }

    async fn remove_mailserver(&self, hostname: &str, zone: &str) -> Result<(), DomainError> {
        self.write(format!("remove_dns_mailserver({},{})", hostname, zone))
            .await
    }

    async fn remove_cname(
        &self,
        alias: &str,
        hostname: &str,
        zone: &str,
    ) -> Result<(), DomainError> {
        self.write(format!("remove_dns_cname({},{},{})", alias, hostname, zone))
            .await
    }

    async fn remove_srv(&self, alias: &str, hostname: &str, zone: &str) -> Result<(), DomainError> {
        self.write(format!("remove_dns_srv({},{},{})", alias, hostname, zone))
            .await
    }

    async fn remove_text(
        &self,
        hostname: &str,
        zone: &str,
        record_type: RecordType,
    ) -> Result<(), DomainError> {
        self.write(format!(
            "remove_dns_text({},{},{})",
            hostname, zone, record_type
        ))
        .await
    }

    async fn modify_address(
        &self,
        address: IpAddr,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.write(format!("modify_dns_address({},{},{})", address, field, value))
            .await
    }

    async fn modify_nameserver(
        &self,
        hostname: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.write(format!(
            "modify_dns_nameserver({},{},{},{})",
            hostname, zone, field, value
        ))
        .await
    }

    async fn modify_mailserver(
        &self,
        hostname: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.write(format!(
            "modify_dns_mailserver({},{},{},{})",
            hostname, zone, field, value
        ))
        .await
    }

    async fn modify_cname(
        &self,
        alias: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.write(format!("modify_dns_cname({},{},{},{})", alias, zone, field, value))
            .await
    }

    async fn modify_srv(
        &self,
        alias: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.write(format!("modify_dns_srv({},{},{},{})", alias, zone, field, value))
            .await
    }

    async fn modify_text(
        &self,
        hostname: &str,
        zone: &str,
        record_type: RecordType,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.write(format!(
            "modify_dns_text({},{},{},{},{})",
            hostname, zone, record_type, field, value
        ))
        .await
    }

    async fn resolve(
        &self,
        _hostname: &str,
        _zone: &str,
        _family: AddressFamily,
    ) -> Result<Option<IpAddr>, DomainError> {
        let rows = self.rows.lock().await;
        if let Some(err) = rows.fail_with.clone() {
            return Err(err);
        }
        Ok(rows.resolved)
    }

    async fn check_hostname(
        &self,
        _hostname: &str,
        _zone: &str,
    ) -> Result<Option<bool>, DomainError> {
        let rows = self.rows.lock().await;
        if let Some(err) = rows.fail_with.clone() {
            return Err(err);
        }
        Ok(rows.hostname_valid)
    }
}
