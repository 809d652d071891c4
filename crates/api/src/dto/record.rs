use impulse_dns_domain::{
    AddressRecord, AuditInfo, MxRecord, NsRecord, PointerRecord, TextRecord,
};
use serde::Serialize;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize, Debug, Clone)]
pub struct AuditResponse {
    pub date_created: String,
    pub date_modified: String,
    pub last_modifier: String,
}

impl From<AuditInfo> for AuditResponse {
    fn from(audit: AuditInfo) -> Self {
        Self {
            date_created: audit.date_created.format(TIMESTAMP_FORMAT).to_string(),
            date_modified: audit.date_modified.format(TIMESTAMP_FORMAT).to_string(),
            last_modifier: audit.last_modifier,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct AddressRecordResponse {
    pub hostname: String,
    pub zone: String,
    pub fqdn: String,
    pub address: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    pub owner: String,
    #[serde(flatten)]
    pub audit: AuditResponse,
}

impl From<AddressRecord> for AddressRecordResponse {
    fn from(record: AddressRecord) -> Self {
        Self {
            fqdn: record.fqdn(),
            hostname: record.hostname,
            zone: record.zone,
            address: record.address.to_string(),
            record_type: record.record_type.to_string(),
            ttl: record.ttl,
            owner: record.owner,
            audit: record.audit.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct PointerRecordResponse {
    pub alias: String,
    pub hostname: String,
    pub zone: String,
    pub address: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    pub owner: String,
    pub extra: Option<String>,
    #[serde(flatten)]
    pub audit: AuditResponse,
}

impl From<PointerRecord> for PointerRecordResponse {
    fn from(record: PointerRecord) -> Self {
        Self {
            alias: record.alias,
            hostname: record.hostname,
            zone: record.zone,
            address: record.address.to_string(),
            record_type: record.record_type.to_string(),
            ttl: record.ttl,
            owner: record.owner,
            extra: record.extra,
            audit: record.audit.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct TextRecordResponse {
    pub hostname: String,
    pub zone: String,
    pub address: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub text: String,
    pub ttl: u32,
    pub owner: String,
    #[serde(flatten)]
    pub audit: AuditResponse,
}

impl From<TextRecord> for TextRecordResponse {
    fn from(record: TextRecord) -> Self {
        Self {
            hostname: record.hostname,
            zone: record.zone,
            address: record.address.to_string(),
            record_type: record.record_type.to_string(),
            text: record.text,
            ttl: record.ttl,
            owner: record.owner,
            audit: record.audit.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct NsRecordResponse {
    pub hostname: String,
    pub zone: String,
    pub address: String,
    pub isprimary: bool,
    pub ttl: u32,
    pub owner: String,
    #[serde(flatten)]
    pub audit: AuditResponse,
}

impl From<NsRecord> for NsRecordResponse {
    fn from(record: NsRecord) -> Self {
        Self {
            hostname: record.hostname,
            zone: record.zone,
            address: record.address.to_string(),
            isprimary: record.isprimary,
            ttl: record.ttl,
            owner: record.owner,
            audit: record.audit.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct MxRecordResponse {
    pub hostname: String,
    pub zone: String,
    pub address: String,
    pub preference: i32,
    pub ttl: u32,
    pub owner: String,
    #[serde(flatten)]
    pub audit: AuditResponse,
}

impl From<MxRecord> for MxRecordResponse {
    fn from(record: MxRecord) -> Self {
        Self {
            hostname: record.hostname,
            zone: record.zone,
            address: record.address.to_string(),
            preference: record.preference,
            ttl: record.ttl,
            owner: record.owner,
            audit: record.audit.into(),
        }
    }
}
