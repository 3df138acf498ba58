//! Validation rules for builder graphs.
//!
//! Per-device rules run first, in device order, followed by the global
//! rules. Issue ids are derived from the rule and the device id, so running
//! validation twice on the same graph yields the same id set. A device id
//! listed more than once is checked only for its first entry, so each
//! `(rule, device)` pair yields at most one issue.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use topolab_core::graph::Adjacency;
use topolab_core::types::{Connection, Device, DeviceId, DeviceType};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        f.write_str(s)
    }
}

/// Category of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    Spof,
    Redundancy,
    Performance,
    Cost,
    BestPractice,
}

/// The rule that produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// A non-switch, non-router device carrying more than three links.
    OverloadedDevice,
    IsolatedDevice,
    /// A server or router with a single link.
    SingleConnection,
    HubUsage,
    MissingFirewall,
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::OverloadedDevice,
        Rule::IsolatedDevice,
        Rule::SingleConnection,
        Rule::HubUsage,
        Rule::MissingFirewall,
    ];

    pub fn severity(&self) -> Severity {
        match self {
            Rule::OverloadedDevice => Severity::Error,
            Rule::IsolatedDevice | Rule::SingleConnection | Rule::MissingFirewall => {
                Severity::Warning
            }
            Rule::HubUsage => Severity::Info,
        }
    }

    pub fn kind(&self) -> IssueKind {
        match self {
            Rule::OverloadedDevice => IssueKind::Spof,
            Rule::IsolatedDevice | Rule::SingleConnection => IssueKind::Redundancy,
            Rule::HubUsage | Rule::MissingFirewall => IssueKind::BestPractice,
        }
    }

    fn issue_id(&self, device: Option<&DeviceId>) -> String {
        match (self, device) {
            (Rule::OverloadedDevice, Some(id)) => format!("spof-{}", id),
            (Rule::IsolatedDevice, Some(id)) => format!("isolated-{}", id),
            (Rule::SingleConnection, Some(id)) => format!("single-conn-{}", id),
            (Rule::HubUsage, _) => "hub-warning".to_string(),
            (Rule::MissingFirewall, _) => "no-firewall".to_string(),
            (rule, None) => format!("{:?}", rule).to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub id: String,
    pub severity: Severity,
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<DeviceId>,
    pub rule: Rule,
}

impl ValidationIssue {
    fn new(rule: Rule, device_id: Option<DeviceId>, message: String) -> Self {
        Self {
            id: rule.issue_id(device_id.as_ref()),
            severity: rule.severity(),
            kind: rule.kind(),
            message,
            device_id,
            rule,
        }
    }
}

/// Issue counts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl ValidationSummary {
    pub fn from_issues(issues: &[ValidationIssue]) -> Self {
        issues.iter().fold(Self::default(), |mut acc, issue| {
            match issue.severity {
                Severity::Error => acc.errors += 1,
                Severity::Warning => acc.warnings += 1,
                Severity::Info => acc.infos += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.infos
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

/// Run every rule against the graph.
pub fn validate(devices: &[Device], connections: &[Connection]) -> Vec<ValidationIssue> {
    validate_adjacency(&Adjacency::build(devices, connections))
}

pub fn validate_adjacency(adjacency: &Adjacency<'_>) -> Vec<ValidationIssue> {
    let devices = adjacency.devices();
    let mut issues = Vec::new();
    let mut seen = HashSet::with_capacity(devices.len());

    for device in devices {
        if !seen.insert(&device.id) {
            debug!(device = %device.id, "skipping duplicate device id");
            continue;
        }
        let degree = adjacency.degree(&device.id);

        if degree > 3 && !matches!(device.device_type, DeviceType::Switch | DeviceType::Router) {
            issues.push(ValidationIssue::new(
                Rule::OverloadedDevice,
                Some(device.id.clone()),
                format!(
                    "{} is a single point of failure with {} connections",
                    device.label, degree
                ),
            ));
        }

        if degree == 0 && devices.len() > 1 {
            issues.push(ValidationIssue::new(
                Rule::IsolatedDevice,
                Some(device.id.clone()),
                format!("{} is not connected to the network", device.label),
            ));
        }

        if degree == 1 && matches!(device.device_type, DeviceType::Server | DeviceType::Router) {
            issues.push(ValidationIssue::new(
                Rule::SingleConnection,
                Some(device.id.clone()),
                format!("{} lacks redundant connections", device.label),
            ));
        }
    }

    let has = |t: DeviceType| devices.iter().any(|d| d.device_type == t);

    if has(DeviceType::Hub) {
        issues.push(ValidationIssue::new(
            Rule::HubUsage,
            None,
            "Hubs create collision domains - consider using switches instead".to_string(),
        ));
    }

    if has(DeviceType::Router) && !has(DeviceType::Firewall) && devices.len() > 3 {
        issues.push(ValidationIssue::new(
            Rule::MissingFirewall,
            None,
            "Consider adding a firewall for network security".to_string(),
        ));
    }

    debug!(devices = devices.len(), issues = issues.len(), "validated topology");
    issues
}
