use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize, Debug)]
pub struct RecordTypesResponse {
    pub record_types: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct ResolveQuery {
    pub hostname: String,
    pub zone: String,
    #[serde(default = "default_family")]
    pub family: i32,
}

fn default_family() -> i32 {
    4
}

#[derive(Serialize, Debug)]
pub struct ResolveResponse {
    pub hostname: String,
    pub zone: String,
    pub family: i32,
    pub address: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct HostnameCheckQuery {
    pub hostname: String,
    pub zone: String,
}

#[derive(Serialize, Debug)]
pub struct HostnameCheckResponse {
    pub hostname: String,
    pub zone: String,
    pub valid: bool,
}
