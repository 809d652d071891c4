use super::{AuditInfo, RecordType};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MxRecord {
    pub hostname: String,
    pub zone: String,
    pub address: IpAddr,
    pub record_type: RecordType,
    pub ttl: u32,
    pub owner: String,
    pub preference: i32,
    pub audit: AuditInfo,
}
