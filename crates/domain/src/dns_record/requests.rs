//! Argument sets for the backend create procedures.
//!
//! Field validation (hostname syntax, zone membership, uniqueness) is the
//! backend's job; these only carry the values through.

use super::RecordType;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAddressRecord {
    pub address: IpAddr,
    pub hostname: String,
    pub zone: String,
    pub ttl: u32,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNameserver {
    pub hostname: String,
    pub zone: String,
    pub isprimary: bool,
    pub ttl: u32,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMailserver {
    pub hostname: String,
    pub zone: String,
    pub preference: i32,
    pub ttl: u32,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCname {
    pub alias: String,
    pub hostname: String,
    pub zone: String,
    pub ttl: u32,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSrv {
    pub alias: String,
    pub hostname: String,
    pub zone: String,
    pub priority: i32,
    pub weight: i32,
    pub port: i32,
    pub ttl: u32,
    pub owner: String,
}

/// TXT or SPF entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewText {
    pub hostname: String,
    pub zone: String,
    pub text: String,
    pub record_type: RecordType,
    pub ttl: u32,
    pub owner: String,
}
