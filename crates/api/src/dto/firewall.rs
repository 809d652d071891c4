use impulse_dns_domain::{FirewallRule, Transport};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct FirewallRuleDto {
    pub port: u16,
    pub transport: Transport,
    #[serde(default)]
    pub deny: Option<bool>,
}

impl From<FirewallRuleDto> for FirewallRule {
    fn from(dto: FirewallRuleDto) -> Self {
        Self {
            port: dto.port,
            transport: dto.transport,
            deny: dto.deny,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct FirewallGridRequest {
    pub address: String,
    #[serde(default)]
    pub rules: Vec<FirewallRuleDto>,
    #[serde(default)]
    pub default_deny: Option<bool>,
}
