mod create_dns_record;
mod get_dns_records;
mod get_record_types;
mod modify_dns_record;
mod remove_dns_record;
mod resolve_hostname;

pub use create_dns_record::CreateDnsRecordUseCase;
pub use get_dns_records::GetDnsRecordsUseCase;
pub use get_record_types::GetRecordTypesUseCase;
pub use modify_dns_record::ModifyDnsRecordUseCase;
pub use remove_dns_record::RemoveDnsRecordUseCase;
pub use resolve_hostname::ResolveHostnameUseCase;
