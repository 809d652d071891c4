use impulse_dns_domain::DomainError;
use std::sync::Arc;
use tracing::{error, instrument};

use crate::ports::DnsApiRepository;

pub struct GetRecordTypesUseCase {
    repo: Arc<dyn DnsApiRepository>,
}

impl GetRecordTypesUseCase {
    pub fn new(repo: Arc<dyn DnsApiRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<String>, DomainError> {
        let types = self.repo.get_record_types().await?;
        if types.is_empty() {
            error!("Backend reports no DNS record types");
            return Err(DomainError::NoRecordTypes);
        }
        Ok(types)
    }
}
