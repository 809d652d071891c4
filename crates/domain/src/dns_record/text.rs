use super::{AuditInfo, RecordType};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub hostname: String,
    pub zone: String,
    pub address: IpAddr,
    pub record_type: RecordType,
    pub ttl: u32,
    pub owner: String,
    pub text: String,
    pub audit: AuditInfo,
}

impl TextRecord {
    pub fn matches(&self, text: &str, record_type: RecordType) -> bool {
        self.text == text && self.record_type == record_type
    }
}
