//! Layout of the per-address firewall rule grid.
//!
//! Rules render as a fixed-width grid of port cells followed by a single
//! row summarising the default policy. The backend reports the deny flag
//! as a nullable boolean; only an exact `true` or `false` counts as a
//! decision, anything else is shown as unknown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

pub const CELLS_PER_ROW: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Transport {
    Tcp,
    Udp,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Tcp => "TCP",
            Transport::Udp => "UDP",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallRule {
    pub port: u16,
    pub transport: Transport,
    pub deny: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleState {
    Deny,
    Allow,
    Unknown,
}

impl RuleState {
    pub fn from_flag(deny: Option<bool>) -> Self {
        match deny {
            Some(true) => RuleState::Deny,
            Some(false) => RuleState::Allow,
            None => RuleState::Unknown,
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            RuleState::Deny => "deny",
            RuleState::Allow => "allow",
            RuleState::Unknown => "unknown",
        }
    }

    pub fn port_class(&self) -> String {
        format!("firewall_rule_port_box_{}", self.suffix())
    }

    pub fn default_class(&self) -> String {
        format!("firewall_rule_default_box_{}", self.suffix())
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            RuleState::Deny => "Deny all",
            RuleState::Allow => "Allow all",
            RuleState::Unknown => "No default action",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub port: u16,
    pub state: RuleState,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallGrid {
    pub rows: Vec<Vec<GridCell>>,
    pub default_policy: RuleState,
}

impl FirewallGrid {
    pub fn build(address: IpAddr, rules: &[FirewallRule], default_deny: Option<bool>) -> Self {
        let rows = rules
            .chunks(CELLS_PER_ROW)
            .map(|chunk| {
                chunk
                    .iter()
                    .map(|rule| GridCell {
                        port: rule.port,
                        state: RuleState::from_flag(rule.deny),
                        href: format!(
                            "/rules/view/{}/{}/{}/",
                            address, rule.transport, rule.port
                        ),
                    })
                    .collect()
            })
            .collect();

        Self {
            rows,
            default_policy: RuleState::from_flag(default_deny),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn render_html(&self) -> String {
        let mut html = String::from(
            "<div class=\"item_container\">\n<table class=\"item_information_area_table\">\n",
        );

        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!(
                    "<td class=\"{}\"><a href=\"{}\">{}</a></td>",
                    cell.state.port_class(),
                    cell.href,
                    cell.port
                ));
            }
            html.push_str("</tr>\n");
        }

        html.push_str(&format!(
            "<tr><td class=\"{}\" colspan=\"{}\">{}</td></tr>\n",
            self.default_policy.default_class(),
            CELLS_PER_ROW,
            self.default_policy.default_message()
        ));
        html.push_str("</table>\n</div>\n");
        html
    }
}
