pub mod dns_api_repository;
pub mod dns_row_mapper;

pub use dns_api_repository::PgDnsApiRepository;
