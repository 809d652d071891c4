use chrono::NaiveDateTime;
use impulse_dns_domain::{
    AddressRecord, AuditInfo, DnsKey, DnsZone, DomainError, MxRecord, NsRecord, PointerRecord,
    RecordType, TextRecord,
};
use std::net::IpAddr;

/// hostname, zone, address, type, ttl, owner, date_created, date_modified, last_modifier
pub type AddressRow = (
    String,
    String,
    String,
    String,
    i32,
    String,
    NaiveDateTime,
    NaiveDateTime,
    String,
);

/// Address columns with alias and extra between owner and the audit columns.
pub type PointerRow = (
    String,
    String,
    String,
    String,
    i32,
    String,
    String,
    Option<String>,
    NaiveDateTime,
    NaiveDateTime,
    String,
);

pub type TextRow = (
    String,
    String,
    String,
    String,
    i32,
    String,
    String,
    NaiveDateTime,
    NaiveDateTime,
    String,
);

pub type NsRow = (
    String,
    String,
    String,
    String,
    i32,
    String,
    bool,
    NaiveDateTime,
    NaiveDateTime,
    String,
);

pub type MxRow = (
    String,
    String,
    String,
    String,
    i32,
    String,
    i32,
    NaiveDateTime,
    NaiveDateTime,
    String,
);

/// zone, keyname, forward, shared, owner, comment, date_created, date_modified, last_modifier
pub type ZoneRow = (
    String,
    String,
    bool,
    bool,
    String,
    Option<String>,
    NaiveDateTime,
    NaiveDateTime,
    String,
);

/// keyname, key, owner, comment, date_created, date_modified, last_modifier
pub type KeyRow = (
    String,
    String,
    String,
    Option<String>,
    NaiveDateTime,
    NaiveDateTime,
    String,
);

pub(crate) const ADDRESS_SELECT: &str = "SELECT hostname, zone, host(address) AS address, type, ttl, owner,
            date_created::timestamp AS date_created,
            date_modified::timestamp AS date_modified,
            last_modifier
     FROM api.get_dns_a($1::inet)";

pub(crate) const POINTER_SELECT: &str = "SELECT hostname, zone, host(address) AS address, type, ttl, owner,
            alias, extra,
            date_created::timestamp AS date_created,
            date_modified::timestamp AS date_modified,
            last_modifier
     FROM api.get_dns_pointers($1::inet)";

pub(crate) const TEXT_SELECT: &str = "SELECT hostname, zone, host(address) AS address, type, ttl, owner,
            text,
            date_created::timestamp AS date_created,
            date_modified::timestamp AS date_modified,
            last_modifier
     FROM api.get_dns_text($1::inet)";

pub(crate) const NS_SELECT: &str = "SELECT hostname, zone, host(address) AS address, type, ttl, owner,
            isprimary,
            date_created::timestamp AS date_created,
            date_modified::timestamp AS date_modified,
            last_modifier
     FROM api.get_dns_ns($1::inet)";

pub(crate) const MX_SELECT: &str = "SELECT hostname, zone, host(address) AS address, type, ttl, owner,
            preference,
            date_created::timestamp AS date_created,
            date_modified::timestamp AS date_modified,
            last_modifier
     FROM api.get_dns_mx($1::inet)";

pub(crate) const ZONES_SELECT: &str = "SELECT zone, keyname, forward, shared, owner, comment,
            date_created::timestamp AS date_created,
            date_modified::timestamp AS date_modified,
            last_modifier
     FROM api.get_dns_zones($1)";

pub(crate) const ZONE_SELECT: &str = "SELECT zone, keyname, forward, shared, owner, comment,
            date_created::timestamp AS date_created,
            date_modified::timestamp AS date_modified,
            last_modifier
     FROM api.get_dns_zone($1)";

pub(crate) const KEYS_SELECT: &str = "SELECT keyname, key, owner, comment,
            date_created::timestamp AS date_created,
            date_modified::timestamp AS date_modified,
            last_modifier
     FROM api.get_dns_keys($1)";

pub(crate) const KEY_SELECT: &str = "SELECT keyname, key, owner, comment,
            date_created::timestamp AS date_created,
            date_modified::timestamp AS date_modified,
            last_modifier
     FROM api.get_dns_key($1)";

fn parse_address(raw: &str) -> Result<IpAddr, DomainError> {
    raw.parse()
        .map_err(|_| DomainError::InvalidRow(format!("unparsable address '{}'", raw)))
}

/// Backend rows must carry the canonical spelling; discriminator matches
/// compare the type exactly.
fn parse_type(raw: &str) -> Result<RecordType, DomainError> {
    raw.parse::<RecordType>()
        .ok()
        .filter(|record_type| record_type.as_str() == raw)
        .ok_or_else(|| DomainError::InvalidRow(format!("unknown record type '{}'", raw)))
}

fn parse_ttl(raw: i32) -> Result<u32, DomainError> {
    u32::try_from(raw).map_err(|_| DomainError::InvalidRow(format!("negative ttl {}", raw)))
}

pub fn row_to_address(row: AddressRow) -> Result<AddressRecord, DomainError> {
    let (hostname, zone, address, record_type, ttl, owner, created, modified, modifier) = row;

    Ok(AddressRecord {
        hostname,
        zone,
        address: parse_address(&address)?,
        record_type: parse_type(&record_type)?,
        ttl: parse_ttl(ttl)?,
        owner,
        audit: AuditInfo::new(created, modified, modifier),
    })
}

pub fn row_to_pointer(row: PointerRow) -> Result<PointerRecord, DomainError> {
    let (
        hostname,
        zone,
        address,
        record_type,
        ttl,
        owner,
        alias,
        extra,
        created,
        modified,
        modifier,
    ) = row;

    Ok(PointerRecord {
        hostname,
        zone,
        address: parse_address(&address)?,
        record_type: parse_type(&record_type)?,
        ttl: parse_ttl(ttl)?,
        owner,
        alias,
        extra,
        audit: AuditInfo::new(created, modified, modifier),
    })
}

pub fn row_to_text(row: TextRow) -> Result<TextRecord, DomainError> {
    let (hostname, zone, address, record_type, ttl, owner, text, created, modified, modifier) =
        row;

    Ok(TextRecord {
        hostname,
        zone,
        address: parse_address(&address)?,
        record_type: parse_type(&record_type)?,
        ttl: parse_ttl(ttl)?,
        owner,
        text,
        audit: AuditInfo::new(created, modified, modifier),
    })
}

pub fn row_to_ns(row: NsRow) -> Result<NsRecord, DomainError> {
    let (hostname, zone, address, record_type, ttl, owner, isprimary, created, modified, modifier) =
        row;

    Ok(NsRecord {
        hostname,
        zone,
        address: parse_address(&address)?,
        record_type: parse_type(&record_type)?,
        ttl: parse_ttl(ttl)?,
        owner,
        isprimary,
        audit: AuditInfo::new(created, modified, modifier),
    })
}

pub fn row_to_mx(row: MxRow) -> Result<MxRecord, DomainError> {
    let (hostname, zone, address, record_type, ttl, owner, preference, created, modified, modifier) =
        row;

    Ok(MxRecord {
        hostname,
        zone,
        address: parse_address(&address)?,
        record_type: parse_type(&record_type)?,
        ttl: parse_ttl(ttl)?,
        owner,
        preference,
        audit: AuditInfo::new(created, modified, modifier),
    })
}

pub fn row_to_zone(row: ZoneRow) -> DnsZone {
    let (zone, keyname, forward, shared, owner, comment, created, modified, modifier) = row;

    DnsZone {
        zone,
        keyname,
        forward,
        shared,
        owner,
        comment,
        audit: AuditInfo::new(created, modified, modifier),
    }
}

pub fn row_to_key(row: KeyRow) -> DnsKey {
    let (keyname, key, owner, comment, created, modified, modifier) = row;

    DnsKey {
        keyname,
        key,
        owner,
        comment,
        audit: AuditInfo::new(created, modified, modifier),
    }
}

/// Maps every row, failing on the first one that does not fit its entity.
pub fn map_rows<R, T>(
    rows: Vec<R>,
    mapper: fn(R) -> Result<T, DomainError>,
) -> Result<Vec<T>, DomainError> {
    rows.into_iter().map(mapper).collect()
}
