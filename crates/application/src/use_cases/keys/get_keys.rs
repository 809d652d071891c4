use impulse_dns_domain::{DnsKey, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::DnsApiRepository;
use crate::services::{expect_non_empty, expect_single};

pub struct GetKeysUseCase {
    repo: Arc<dyn DnsApiRepository>,
}

impl GetKeysUseCase {
    pub fn new(repo: Arc<dyn DnsApiRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self, username: Option<&str>) -> Result<Vec<DnsKey>, DomainError> {
        let keys = self.repo.get_keys(username).await?;
        expect_non_empty(keys, || {
            "You do not have access to any DNS keys. This could be a problem. \
             Talk to your administrator."
                .to_string()
        })
    }

    #[instrument(skip(self))]
    pub async fn get(&self, keyname: &str) -> Result<DnsKey, DomainError> {
        let rows = self.repo.get_key(keyname).await?;
        expect_single(
            rows,
            || format!("DNS key {} not found", keyname),
            || {
                "Multiple keys found? This is a database error. \
                 Contact your system administrator"
                    .to_string()
            },
        )
    }
}
