mod dns_api_repository;

pub use dns_api_repository::DnsApiRepository;
