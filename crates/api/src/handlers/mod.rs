pub mod addresses;
pub mod firewall;
pub mod mailservers;
pub mod nameservers;
pub mod pointers;
pub mod texts;
pub mod utility;
pub mod zones;

pub use utility::health_check;

use axum::{http::StatusCode, Json};
use impulse_dns_domain::DomainError;

use crate::errors::ApiError;

/// A create whose follow-up lookup found nothing still wrote to the backend,
/// so the miss is reported instead of an empty success.
pub(crate) fn created<T, R>(
    found: Option<T>,
    what: &str,
) -> Result<(StatusCode, Json<R>), ApiError>
where
    R: From<T>,
{
    found
        .map(|record| (StatusCode::CREATED, Json(R::from(record))))
        .ok_or_else(|| {
            ApiError(DomainError::NotFound(format!(
                "{} was created but could not be located",
                what
            )))
        })
}
