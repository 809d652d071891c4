pub mod dns_records;
pub mod keys;
pub mod zones;

// Re-export use cases
pub use dns_records::{
    CreateDnsRecordUseCase, GetDnsRecordsUseCase, GetRecordTypesUseCase, ModifyDnsRecordUseCase,
    RemoveDnsRecordUseCase, ResolveHostnameUseCase,
};
pub use keys::GetKeysUseCase;
pub use zones::GetZonesUseCase;
