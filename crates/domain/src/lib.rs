//! Impulse DNS Domain Layer
pub mod address_family;
pub mod config;
pub mod dns_key;
pub mod dns_record;
pub mod dns_zone;
pub mod errors;
pub mod firewall;

pub use address_family::AddressFamily;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_key::DnsKey;
pub use dns_record::{
    AddressRecord, AuditInfo, MxRecord, NewAddressRecord, NewCname, NewMailserver, NewNameserver,
    NewSrv, NewText, NsRecord, PointerRecord, RecordType, TextRecord,
};
pub use dns_zone::DnsZone;
pub use errors::DomainError;
pub use firewall::{FirewallGrid, FirewallRule, RuleState, Transport};
