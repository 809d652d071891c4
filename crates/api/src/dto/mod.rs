pub mod firewall;
pub mod record;
pub mod record_request;
pub mod utility;
pub mod zone;

pub use firewall::{FirewallGridRequest, FirewallRuleDto};
pub use record::{
    AddressRecordResponse, AuditResponse, MxRecordResponse, NsRecordResponse,
    PointerRecordResponse, TextRecordResponse,
};
pub use record_request::{
    CreateAddressRequest, CreateCnameRequest, CreateMailserverRequest, CreateNameserverRequest,
    CreateSrvRequest, CreateTextRequest, ModifyRequest, PointerHostQuery,
};
pub use utility::{
    HealthResponse, HostnameCheckQuery, HostnameCheckResponse, RecordTypesResponse, ResolveQuery,
    ResolveResponse,
};
pub use zone::{KeyResponse, OwnerQuery, ZoneResponse};

use crate::errors::ApiError;
use impulse_dns_domain::{DomainError, RecordType};
use std::net::IpAddr;

pub(crate) fn parse_address(raw: &str) -> Result<IpAddr, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError(DomainError::InvalidIpAddress(raw.to_string())))
}

pub(crate) fn parse_text_type(raw: &str) -> Result<RecordType, ApiError> {
    let record_type: RecordType = raw.parse()?;
    if !record_type.is_text() {
        return Err(ApiError(DomainError::InvalidRecordType(raw.to_string())));
    }
    Ok(record_type)
}
