use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use impulse_dns_domain::DomainError;
use serde_json::json;
use tracing::error;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,

            DomainError::InvalidIpAddress(_)
            | DomainError::InvalidRecordType(_)
            | DomainError::InvalidAddressFamily(_)
            | DomainError::InvalidTtl(_) => StatusCode::BAD_REQUEST,

            DomainError::AmbiguousResult(_)
            | DomainError::NoRecordTypes
            | DomainError::InvalidRow(_)
            | DomainError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if self.0.is_integrity_violation() {
            error!(error = %self.0, "Backend data integrity problem; administrator attention required");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
