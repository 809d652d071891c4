use impulse_dns_domain::{DnsKey, DnsZone};
use serde::{Deserialize, Serialize};

use super::AuditResponse;

#[derive(Deserialize, Debug, Default)]
pub struct OwnerQuery {
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ZoneResponse {
    pub zone: String,
    pub keyname: String,
    pub forward: bool,
    pub shared: bool,
    pub owner: String,
    pub comment: Option<String>,
    #[serde(flatten)]
    pub audit: AuditResponse,
}

impl From<DnsZone> for ZoneResponse {
    fn from(zone: DnsZone) -> Self {
        Self {
            zone: zone.zone,
            keyname: zone.keyname,
            forward: zone.forward,
            shared: zone.shared,
            owner: zone.owner,
            comment: zone.comment,
            audit: zone.audit.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct KeyResponse {
    pub keyname: String,
    pub key: String,
    pub owner: String,
    pub comment: Option<String>,
    #[serde(flatten)]
    pub audit: AuditResponse,
}

impl From<DnsKey> for KeyResponse {
    fn from(key: DnsKey) -> Self {
        Self {
            keyname: key.keyname,
            key: key.key,
            owner: key.owner,
            comment: key.comment,
            audit: key.audit.into(),
        }
    }
}
