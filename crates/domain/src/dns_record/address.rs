use super::{AuditInfo, RecordType};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// One A/AAAA binding. The backend keeps at most one per address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub hostname: String,
    pub zone: String,
    pub address: IpAddr,
    pub record_type: RecordType,
    pub ttl: u32,
    pub owner: String,
    pub audit: AuditInfo,
}

impl AddressRecord {
    /// Fully qualified name, `hostname.zone`.
    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.hostname, self.zone)
    }
}
