use impulse_dns_domain::{
    NewCname, NewMailserver, NewNameserver, NewSrv, NewText,
};
use serde::Deserialize;

use super::parse_text_type;
use crate::errors::ApiError;

#[derive(Deserialize, Debug)]
pub struct CreateAddressRequest {
    pub address: String,
    pub hostname: String,
    pub zone: String,
    pub ttl: u32,
    pub owner: String,
}

#[derive(Deserialize, Debug)]
pub struct CreateNameserverRequest {
    pub hostname: String,
    pub zone: String,
    #[serde(default)]
    pub isprimary: bool,
    pub ttl: u32,
    pub owner: String,
}

impl From<CreateNameserverRequest> for NewNameserver {
    fn from(req: CreateNameserverRequest) -> Self {
        Self {
            hostname: req.hostname,
            zone: req.zone,
            isprimary: req.isprimary,
            ttl: req.ttl,
            owner: req.owner,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct CreateMailserverRequest {
    pub hostname: String,
    pub zone: String,
    pub preference: i32,
    pub ttl: u32,
    pub owner: String,
}

impl From<CreateMailserverRequest> for NewMailserver {
    fn from(req: CreateMailserverRequest) -> Self {
        Self {
            hostname: req.hostname,
            zone: req.zone,
            preference: req.preference,
            ttl: req.ttl,
            owner: req.owner,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct CreateCnameRequest {
    pub alias: String,
    pub hostname: String,
    pub zone: String,
    pub ttl: u32,
    pub owner: String,
}

impl From<CreateCnameRequest> for NewCname {
    fn from(req: CreateCnameRequest) -> Self {
        Self {
            alias: req.alias,
            hostname: req.hostname,
            zone: req.zone,
            ttl: req.ttl,
            owner: req.owner,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct CreateSrvRequest {
    pub alias: String,
    pub hostname: String,
    pub zone: String,
    pub priority: i32,
    pub weight: i32,
    pub port: i32,
    pub ttl: u32,
    pub owner: String,
}

impl From<CreateSrvRequest> for NewSrv {
    fn from(req: CreateSrvRequest) -> Self {
        Self {
            alias: req.alias,
            hostname: req.hostname,
            zone: req.zone,
            priority: req.priority,
            weight: req.weight,
            port: req.port,
            ttl: req.ttl,
            owner: req.owner,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct CreateTextRequest {
    pub hostname: String,
    pub zone: String,
    pub text: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    pub owner: String,
}

impl TryFrom<CreateTextRequest> for NewText {
    type Error = ApiError;

    fn try_from(req: CreateTextRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            record_type: parse_text_type(&req.record_type)?,
            hostname: req.hostname,
            zone: req.zone,
            text: req.text,
            ttl: req.ttl,
            owner: req.owner,
        })
    }
}

/// Single-field update; both parts go to the backend unchecked.
#[derive(Deserialize, Debug)]
pub struct ModifyRequest {
    pub field: String,
    pub value: String,
}

/// CNAME and SRV removal also names the host the alias points at.
#[derive(Deserialize, Debug)]
pub struct PointerHostQuery {
    pub hostname: String,
}
