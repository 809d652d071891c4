use super::{AuditInfo, RecordType};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// CNAME or SRV entry pointing at a host. `alias` plus `record_type`
/// tells entries returned for the same address apart; `extra` carries the
/// SRV priority/weight/port tuple as the backend formats it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerRecord {
    pub hostname: String,
    pub zone: String,
    pub address: IpAddr,
    pub record_type: RecordType,
    pub ttl: u32,
    pub owner: String,
    pub alias: String,
    pub extra: Option<String>,
    pub audit: AuditInfo,
}

impl PointerRecord {
    pub fn matches(&self, alias: &str, record_type: RecordType) -> bool {
        self.alias == alias && self.record_type == record_type
    }
}
