use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// IP family passed to the backend resolver, encoded as 4 or 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "i32", into = "i32")]
pub enum AddressFamily {
    #[default]
    V4,
    V6,
}

impl AddressFamily {
    pub fn as_i32(&self) -> i32 {
        match self {
            AddressFamily::V4 => 4,
            AddressFamily::V6 => 6,
        }
    }

    pub fn of(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }
}

impl TryFrom<i32> for AddressFamily {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(AddressFamily::V4),
            6 => Ok(AddressFamily::V6),
            other => Err(DomainError::InvalidAddressFamily(other)),
        }
    }
}

impl From<AddressFamily> for i32 {
    fn from(family: AddressFamily) -> Self {
        family.as_i32()
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}
