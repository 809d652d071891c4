#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use impulse_dns_application::ports::DnsApiRepository;
use impulse_dns_domain::{
    AddressFamily, AddressRecord, AuditInfo, DnsKey, DnsZone, DomainError, MxRecord,
    NewAddressRecord, NewCname, NewMailserver, NewNameserver, NewSrv, NewText, NsRecord,
    PointerRecord, RecordType, TextRecord,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockWriteGuard};

pub fn audit() -> AuditInfo {
    let ts = NaiveDate::from_ymd_opt(2012, 3, 14)
        .unwrap()
        .and_hms_opt(9, 26, 53)
        .unwrap();
    AuditInfo::new(ts, ts, "admin")
}

pub fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

pub fn address_record(address: &str, hostname: &str, zone: &str) -> AddressRecord {
    let address = ip(address);
    AddressRecord {
        hostname: hostname.to_string(),
        zone: zone.to_string(),
        address,
        record_type: match AddressFamily::of(&address) {
            AddressFamily::V4 => RecordType::A,
            AddressFamily::V6 => RecordType::AAAA,
        },
        ttl: 3600,
        owner: "admin".to_string(),
        audit: audit(),
    }
}

pub fn ns_record(address: &str, hostname: &str, isprimary: bool) -> NsRecord {
    NsRecord {
        hostname: hostname.to_string(),
        zone: "example.com".to_string(),
        address: ip(address),
        record_type: RecordType::NS,
        ttl: 3600,
        owner: "admin".to_string(),
        isprimary,
        audit: audit(),
    }
}

pub fn mx_record(address: &str, hostname: &str, preference: i32) -> MxRecord {
    MxRecord {
        hostname: hostname.to_string(),
        zone: "example.com".to_string(),
        address: ip(address),
        record_type: RecordType::MX,
        ttl: 3600,
        owner: "admin".to_string(),
        preference,
        audit: audit(),
    }
}

pub fn pointer_record(address: &str, alias: &str, record_type: RecordType) -> PointerRecord {
    PointerRecord {
        hostname: "web".to_string(),
        zone: "example.com".to_string(),
        address: ip(address),
        record_type,
        ttl: 3600,
        owner: "admin".to_string(),
        alias: alias.to_string(),
        extra: None,
        audit: audit(),
    }
}

pub fn text_record(address: &str, text: &str, record_type: RecordType) -> TextRecord {
    TextRecord {
        hostname: "web".to_string(),
        zone: "example.com".to_string(),
        address: ip(address),
        record_type,
        ttl: 3600,
        owner: "admin".to_string(),
        text: text.to_string(),
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

pub fn key(name: &str) -> DnsKey {
    DnsKey {
        keyname: name.to_string(),
        key: "c2VjcmV0".to_string(),
        owner: "admin".to_string(),
        comment: Some("test key".to_string()),
        audit: audit(),
    }
}

#[derive(Default)]
struct MockState {
    addresses: Vec<AddressRecord>,
    pointers: Vec<PointerRecord>,
    texts: Vec<TextRecord>,
    nameservers: Vec<NsRecord>,
    mailservers: Vec<MxRecord>,
    zones: Vec<DnsZone>,
    keys: Vec<DnsKey>,
    record_types: Vec<String>,
    resolutions: HashMap<(String, String), IpAddr>,
    resolve_overrides: HashMap<(String, String), IpAddr>,
    hostname_checks: HashMap<(String, String), Option<bool>>,
    fail_with: Option<DomainError>,
    resolve_error: Option<DomainError>,
    calls: Vec<String>,
}

/// In-memory stand-in for the stored-procedure API. Creates register the
/// record under the address its host resolves to, the way the backend
/// joins records to addresses.
#[derive(Clone, Default)]
pub struct MockDnsApiRepository {
    state: Arc<RwLock<MockState>>,
}

impl MockDnsApiRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_address(&self, record: AddressRecord) {
        let mut state = self.state.write().await;
        state
            .resolutions
            .insert((record.hostname.clone(), record.zone.clone()), record.address);
        state.addresses.push(record);
    }

    pub async fn add_pointer(&self, record: PointerRecord) {
        self.state.write().await.pointers.push(record);
    }

    pub async fn add_text(&self, record: TextRecord) {
        self.state.write().await.texts.push(record);
    }

    pub async fn add_nameserver(&self, record: NsRecord) {
        self.state.write().await.nameservers.push(record);
    }

    pub async fn add_mailserver(&self, record: MxRecord) {
        self.state.write().await.mailservers.push(record);
    }

    pub async fn add_zone(&self, zone: DnsZone) {
        self.state.write().await.zones.push(zone);
    }

    pub async fn add_key(&self, key: DnsKey) {
        self.state.write().await.keys.push(key);
    }

    pub async fn set_record_types(&self, types: &[&str]) {
        self.state.write().await.record_types = types.iter().map(|t| t.to_string()).collect();
    }

    pub async fn set_resolution(&self, hostname: &str, zone: &str, address: &str) {
        self.state
            .write()
            .await
            .resolutions
            .insert((hostname.to_string(), zone.to_string()), ip(address));
    }

    /// Makes `resolve` answer `address` without moving records created for
    /// the host, so a follow-up lookup lands on a different address.
    pub async fn set_resolve_override(&self, hostname: &str, zone: &str, address: &str) {
        self.state
            .write()
            .await
            .resolve_overrides
            .insert((hostname.to_string(), zone.to_string()), ip(address));
    }

    pub async fn set_hostname_check(&self, hostname: &str, zone: &str, value: Option<bool>) {
        self.state
            .write()
            .await
            .hostname_checks
            .insert((hostname.to_string(), zone.to_string()), value);
    }

    /// Every subsequent call fails with `err`.
    pub async fn set_should_fail(&self, err: Option<DomainError>) {
        self.state.write().await.fail_with = err;
    }

    pub async fn set_resolve_error(&self, err: Option<DomainError>) {
        self.state.write().await.resolve_error = err;
    }

    pub async fn calls(&self) -> Vec<String> {
        self.state.read().await.calls.clone()
    }

    pub async fn address_count(&self) -> usize {
        self.state.read().await.addresses.len()
    }

    async fn enter(&self, call: String) -> Result<RwLockWriteGuard<'_, MockState>, DomainError> {
        let mut state = self.state.write().await;
        state.calls.push(call);
        if let Some(err) = state.fail_with.clone() {
            return Err(err);
        }
        Ok(state)
    }
}

fn lookup(state: &MockState, hostname: &str, zone: &str) -> Result<IpAddr, DomainError> {
    state
        .resolutions
        .get(&(hostname.to_string(), zone.to_string()))
        .copied()
        .ok_or_else(|| DomainError::DatabaseError(format!("Host {}.{} not found", hostname, zone)))
}

#[async_trait]
impl DnsApiRepository for MockDnsApiRepository {
    async fn create_address(&self, record: &NewAddressRecord) -> Result<(), DomainError> {
        let mut state = self.enter("create_dns_address".into()).await?;
        if state.addresses.iter().any(|a| a.address == record.address) {
            return Err(DomainError::DatabaseError(
                "duplicate key value violates unique constraint".into(),
            ));
        }
        let mut created = address_record(
            &record.address.to_string(),
            &record.hostname,
            &record.zone,
        );
        created.ttl = record.ttl;
        created.owner = record.owner.clone();
        state
            .resolutions
            .insert((record.hostname.clone(), record.zone.clone()), record.address);
        state.addresses.push(created);
        Ok(())
    }

    async fn create_nameserver(&self, record: &NewNameserver) -> Result<(), DomainError> {
        let mut state = self.enter("create_dns_nameserver".into()).await?;
        let address = lookup(&state, &record.hostname, &record.zone)?;
        state.nameservers.push(NsRecord {
            hostname: record.hostname.clone(),
            zone: record.zone.clone(),
            address,
            record_type: RecordType::NS,
            ttl: record.ttl,
            owner: record.owner.clone(),
            isprimary: record.isprimary,
            audit: audit(),
        });
        Ok(())
    }

    async fn create_mailserver(&self, record: &NewMailserver) -> Result<(), DomainError> {
        let mut state = self.enter("create_dns_mailserver".into()).await?;
        let address = lookup(&state, &record.hostname, &record.zone)?;
        state.mailservers.push(MxRecord {
            hostname: record.hostname.clone(),
            zone: record.zone.clone(),
            address,
            record_type: RecordType::MX,
            ttl: record.ttl,
            owner: record.owner.clone(),
            preference: record.preference,
            audit: audit(),
        });
        Ok(())
    }

    async fn create_cname(&self, record: &NewCname) -> Result<(), DomainError> {
        let mut state = self.enter("create_dns_cname".into()).await?;
        let address = lookup(&state, &record.hostname, &record.zone)?;
        state.pointers.push(PointerRecord {
            hostname: record.hostname.clone(),
            zone: record.zone.clone(),
            address,
            record_type: RecordType::CNAME,
            ttl: record.ttl,
            owner: record.owner.clone(),
            alias: record.alias.clone(),
            extra: None,
            audit: audit(),
        });
        Ok(())
    }

    async fn create_srv(&self, record: &NewSrv) -> Result<(), DomainError> {
        let mut state = self.enter("create_dns_srv".into()).await?;
        let address = lookup(&state, &record.hostname, &record.zone)?;
        state.pointers.push(PointerRecord {
            hostname: record.hostname.clone(),
            zone: record.zone.clone(),
            address,
            record_type: RecordType::SRV,
            ttl: record.ttl,
            owner: record.owner.clone(),
            alias: record.alias.clone(),
            extra: Some(format!("{} {} {}", record.priority, record.weight, record.port)),
            audit: audit(),
        });
        Ok(())
    }

    async fn create_text(&self, record: &NewText) -> Result<(), DomainError> {
        let mut state = self.enter("create_dns_text".into()).await?;
        let address = lookup(&state, &record.hostname, &record.zone)?;
        state.texts.push(TextRecord {
            hostname: record.hostname.clone(),
            zone: record.zone.clone(),
            address,
            record_type: record.record_type,
            ttl: record.ttl,
            owner: record.owner.clone(),
            text: record.text.clone(),
            audit: audit(),
        });
        Ok(())
    }

    async fn get_address_records(
        &self,
        address: IpAddr,
    ) -> Result<Vec<AddressRecord>, DomainError> {
        let state = self.enter("get_dns_a".into()).await?;
        Ok(state
            .addresses
            .iter()
            .filter(|r| r.address == address)
            .cloned()
            .collect())
    }

    async fn get_pointer_records(
        &self,
        address: IpAddr,
    ) -> Result<Vec<PointerRecord>, DomainError> {
        let state = self.enter("get_dns_pointers".into()).await?;
        Ok(state
            .pointers
            .iter()
            .filter(|r| r.address == address)
            .cloned()
            .collect())
    }

    async fn get_text_records(&self, address: IpAddr) -> Result<Vec<TextRecord>, DomainError> {
        let state = self.enter("get_dns_text".into()).await?;
        Ok(state
            .texts
            .iter()
            .filter(|r| r.address == address)
            .cloned()
            .collect())
    }

    async fn get_ns_records(&self, address: IpAddr) -> Result<Vec<NsRecord>, DomainError> {
        let state = self.enter("get_dns_ns".into()).await?;
        Ok(state
            .nameservers
            .iter()
            .filter(|r| r.address == address)
            .cloned()
            .collect())
    }

    async fn get_mx_records(&self, address: IpAddr) -> Result<Vec<MxRecord>, DomainError> {
        let state = self.enter("get_dns_mx".into()).await?;
        Ok(state
            .mailservers
            .iter()
            .filter(|r| r.address == address)
            .cloned()
            .collect())
    }

    async fn get_record_types(&self) -> Result<Vec<String>, DomainError> {
        let state = self.enter("get_record_types".into()).await?;
        Ok(state.record_types.clone())
    }

    async fn get_zones(&self, username: Option<&str>) -> Result<Vec<DnsZone>, DomainError> {
        let state = self.enter("get_dns_zones".into()).await?;
        Ok(state
            .zones
            .iter()
            .filter(|z| username.map_or(true, |u| z.owner == u))
            .cloned()
            .collect())
    }

    async fn get_zone(&self, zone: &str) -> Result<Vec<DnsZone>, DomainError> {
        let state = self.enter("get_dns_zone".into()).await?;
        Ok(state.zones.iter().filter(|z| z.zone == zone).cloned().collect())
    }

    async fn get_keys(&self, username: Option<&str>) -> Result<Vec<DnsKey>, DomainError> {
        let state = self.enter("get_dns_keys".into()).await?;
        Ok(state
            .keys
            .iter()
            .filter(|k| username.map_or(true, |u| k.owner == u))
            .cloned()
            .collect())
    }

    async fn get_key(&self, keyname: &str) -> Result<Vec<DnsKey>, DomainError> {
        let state = self.enter("get_dns_key".into()).await?;
        Ok(state
            .keys
            .iter()
            .filter(|k| k.keyname == keyname)
            .cloned()
            .collect())
    }

    async fn remove_address(&self, address: IpAddr) -> Result<(), DomainError> {
        let mut state = self.enter("remove_dns_address".into()).await?;
        state.addresses.retain(|r| r.address != address);
        Ok(())
    }

    async fn remove_nameserver(&self, hostname: &str, zone: &str) -> Result<(), DomainError> {
        let mut state = self.enter("remove_dns_nameserver".into()).await?;
        state
            .nameservers
            .retain(|r| !(r.hostname == hostname && r.zone == zone));
        Ok(())
    }

    async fn remove_mailserver(&self, hostname: &str, zone: &str) -> Result<(), DomainError> {
        let mut state = self.enter("remove_dns_mailserver".into()).await?;
        state
            .mailservers
            .retain(|r| !(r.hostname == hostname && r.zone == zone));
        Ok(())
    }

    async fn remove_cname(
        &self,
        alias: &str,
        hostname: &str,
        zone: &str,
    ) -> Result<(), DomainError> {
        let mut state = self.enter("remove_dns_cname".into()).await?;
        state.pointers.retain(|r| {
            !(r.record_type == RecordType::CNAME
                && r.alias == alias
                && r.hostname == hostname
                && r.zone == zone)
        });
        Ok(())
    }

    async fn remove_srv(&self, alias: &str, hostname: &str, zone: &str) -> Result<(), DomainError> {
        let mut state = self.enter("remove_dns_srv".into()).await?;
        state.pointers.retain(|r| {
            !(r.record_type == RecordType::SRV
                && r.alias == alias
                && r.hostname == hostname
                && r.zone == zone)
        });
        Ok(())
    }

    async fn remove_text(
        &self,
        hostname: &str,
        zone: &str,
        record_type: RecordType,
    ) -> Result<(), DomainError> {
        let mut state = self.enter("remove_dns_text".into()).await?;
        state.texts.retain(|r| {
            !(r.record_type == record_type && r.hostname == hostname && r.zone == zone)
        });
        Ok(())
    }

    async fn modify_address(
        &self,
        address: IpAddr,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        let mut state = self
            .enter(format!("modify_dns_address({},{},{})", address, field, value))
            .await?;
        if field == "ttl" {
            let ttl = value
                .parse()
                .map_err(|_| DomainError::DatabaseError(format!("invalid ttl {}", value)))?;
            for record in state.addresses.iter_mut().filter(|r| r.address == address) {
                record.ttl = ttl;
            }
        }
        Ok(())
    }

    async fn modify_nameserver(
        &self,
        hostname: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.enter(format!(
            "modify_dns_nameserver({},{},{},{})",
            hostname, zone, field, value
        ))
        .await?;
        Ok(())
    }

    async fn modify_mailserver(
        &self,
        hostname: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.enter(format!(
            "modify_dns_mailserver({},{},{},{})",
            hostname, zone, field, value
        ))
        .await?;
        Ok(())
    }

    async fn modify_cname(
        &self,
        alias: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.enter(format!("modify_dns_cname({},{},{},{})", alias, zone, field, value))
            .await?;
        Ok(())
    }

    async fn modify_srv(
        &self,
        alias: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.enter(format!("modify_dns_srv({},{},{},{})", alias, zone, field, value))
            .await?;
        Ok(())
    }

    async fn modify_text(
        &self,
        hostname: &str,
        zone: &str,
        record_type: RecordType,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.enter(format!(
            "modify_dns_text({},{},{},{},{})",
            hostname, zone, record_type, field, value
        ))
        .await?;
        Ok(())
    }

    async fn resolve(
        &self,
        hostname: &str,
        zone: &str,
        _family: AddressFamily,
    ) -> Result<Option<IpAddr>, DomainError> {
        let state = self.enter("dns_resolve".into()).await?;
        if let Some(err) = &state.resolve_error {
            return Err(err.clone());
        }
        let key = (hostname.to_string(), zone.to_string());
        Ok(state
            .resolve_overrides
            .get(&key)
            .or_else(|| state.resolutions.get(&key))
            .copied())
    }

    async fn check_hostname(
        &self,
        hostname: &str,
        zone: &str,
    ) -> Result<Option<bool>, DomainError> {
        let state = self.enter("check_dns_hostname".into()).await?;
        Ok(state
            .hostname_checks
            .get(&(hostname.to_string(), zone.to_string()))
            .copied()
            .unwrap_or(None))
    }
}
