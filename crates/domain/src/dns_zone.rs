use crate::AuditInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsZone {
    pub zone: String,
    pub keyname: String,
    pub forward: bool,
    pub shared: bool,
    pub owner: String,
    pub comment: Option<String>,
    pub audit: AuditInfo,
}
