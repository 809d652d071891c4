use crate::AuditInfo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// DNSSEC/TSIG key used to sign zone updates.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsKey {
    pub keyname: String,
    pub key: String,
    pub owner: String,
    pub comment: Option<String>,
    pub audit: AuditInfo,
}

// Key material stays out of logs.
impl fmt::Debug for DnsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnsKey")
            .field("keyname", &self.keyname)
            .field("key", &"<redacted>")
            .field("owner", &self.owner)
            .field("comment", &self.comment)
            .field("audit", &self.audit)
            .finish()
    }
}
