//! Row-count classification shared by every lookup.
//!
//! Zero rows is a recoverable miss. Several rows where the backend keeps
//! at most one is an integrity violation and is logged as such.

use impulse_dns_domain::DomainError;
use tracing::error;

pub fn expect_single<T>(
    mut rows: Vec<T>,
    not_found: impl FnOnce() -> String,
    ambiguous: impl FnOnce() -> String,
) -> Result<T, DomainError> {
    match rows.len() {
        0 => Err(DomainError::NotFound(not_found())),
        1 => Ok(rows.remove(0)),
        count => {
            let message = ambiguous();
            error!(rows = count, "{}", message);
            Err(DomainError::AmbiguousResult(message))
        }
    }
}

pub fn expect_non_empty<T>(
    rows: Vec<T>,
    not_found: impl FnOnce() -> String,
) -> Result<Vec<T>, DomainError> {
    if rows.is_empty() {
        Err(DomainError::NotFound(not_found()))
    } else {
        Ok(rows)
    }
}
