use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The backend rejected or failed to execute a call.
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A lookup that can match at most one row matched several. This is a
    /// data-integrity defect in the backend, not a user error.
    #[error("Ambiguous result: {0}")]
    AmbiguousResult(String),

    #[error("No DNS record types found. This is a big problem. Talk to your administrator.")]
    NoRecordTypes,

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid address family: {0} (expected 4 or 6)")]
    InvalidAddressFamily(i32),

    #[error("TTL out of range: {0}")]
    InvalidTtl(u32),

    #[error("Malformed backend row: {0}")]
    InvalidRow(String),
}

impl DomainError {
    /// Conditions an administrator has to look at, as opposed to ordinary
    /// lookup misses or rejected input.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            DomainError::AmbiguousResult(_) | DomainError::NoRecordTypes | DomainError::InvalidRow(_)
        )
    }
}
