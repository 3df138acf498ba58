//! Qualitative characteristics of the topology archetypes.
//!
//! These are plain data: levels are closed enums and the cable formula is a
//! tag evaluated by [`CableFormula::for_nodes`], so a definition serializes
//! to JSON without embedded behaviour.

use crate::types::{Archetype, Connection, Device};
use serde::{Deserialize, Serialize};

/// How well a topology survives device or link failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FaultToleranceLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// How far a topology grows before it needs redesign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalabilityLevel {
    Low,
    Medium,
    High,
}

/// Initial outlay for a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Ongoing maintenance burden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceLevel {
    Low,
    Medium,
    High,
}

/// Closed-form cable count for an archetype sized at `n` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CableFormula {
    /// `n(n-1)/2`
    Mesh,
    /// `n` leaves, the hub is not counted.
    Star,
    /// `ceil(n/2) * floor(n/2)`, half the nodes as spines.
    SpineAndLeaf,
    /// `ceil(1.5n)`
    ThreeTier,
    /// `n` WAN links.
    HubAndSpoke,
    /// `floor(n/2)` dedicated pairs.
    PointToPoint,
    /// `n` access uplinks into the collapsed core.
    CollapsedCore,
}

impl CableFormula {
    /// Cable count for `n` nodes, saturating at `u64::MAX`.
    pub fn for_nodes(&self, n: u64) -> u64 {
        match self {
            CableFormula::Mesh => {
                // halve the even factor first so exact results never overflow
                let m = n.saturating_sub(1);
                if n % 2 == 0 {
                    (n / 2).saturating_mul(m)
                } else {
                    n.saturating_mul(m / 2)
                }
            }
            CableFormula::Star | CableFormula::HubAndSpoke | CableFormula::CollapsedCore => n,
            CableFormula::SpineAndLeaf => n.div_ceil(2).saturating_mul(n / 2),
            CableFormula::ThreeTier => n.saturating_add(n.div_ceil(2)),
            CableFormula::PointToPoint => n / 2,
        }
    }

    /// The formula used for an archetype, if it has a closed form.
    pub fn for_archetype(archetype: Archetype) -> Option<CableFormula> {
        match archetype {
            Archetype::Mesh => Some(CableFormula::Mesh),
            Archetype::Star => Some(CableFormula::Star),
            Archetype::SpineAndLeaf => Some(CableFormula::SpineAndLeaf),
            Archetype::ThreeTier => Some(CableFormula::ThreeTier),
            Archetype::HubAndSpoke => Some(CableFormula::HubAndSpoke),
            Archetype::PointToPoint => Some(CableFormula::PointToPoint),
            Archetype::CollapsedCore => Some(CableFormula::CollapsedCore),
            Archetype::Hybrid => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CableRequirements {
    pub formula: String,
    pub example: String,
    pub rule: CableFormula,
}

impl CableRequirements {
    pub fn for_nodes(&self, n: u64) -> u64 {
        self.rule.for_nodes(n)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultTolerance {
    pub level: FaultToleranceLevel,
    pub single_point_of_failure: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scalability {
    pub level: ScalabilityLevel,
    /// `None` means unlimited.
    pub max_nodes: Option<u32>,
    pub limitations: Vec<String>,
}

/// Percentage split of total cost of ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostShare {
    pub hardware: u8,
    pub cabling: u8,
    pub installation: u8,
    pub maintenance: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostProfile {
    pub initial: CostLevel,
    pub maintenance: MaintenanceLevel,
    pub breakdown: CostShare,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficFlow {
    /// Percentage of client-server traffic.
    pub north_south: u8,
    /// Percentage of server-server traffic.
    pub east_west: u8,
    pub bottlenecks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyCharacteristics {
    pub cable_requirements: CableRequirements,
    pub fault_tolerance: FaultTolerance,
    pub scalability: Scalability,
    pub cost: CostProfile,
    pub traffic_flow: TrafficFlow,
}

/// A reference topology with its sample graph and characteristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyDefinition {
    pub id: Archetype,
    pub name: String,
    pub description: String,
    pub devices: Vec<Device>,
    pub connections: Vec<Connection>,
    pub characteristics: TopologyCharacteristics,
    #[serde(default)]
    pub use_cases: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cable_formulas() {
        assert_eq!(CableFormula::Mesh.for_nodes(4), 6);
        assert_eq!(CableFormula::Mesh.for_nodes(0), 0);
        assert_eq!(CableFormula::Mesh.for_nodes(1), 0);
        assert_eq!(CableFormula::Star.for_nodes(4), 4);
        assert_eq!(CableFormula::SpineAndLeaf.for_nodes(5), 6);
        assert_eq!(CableFormula::SpineAndLeaf.for_nodes(4), 4);
        assert_eq!(CableFormula::ThreeTier.for_nodes(8), 12);
        assert_eq!(CableFormula::ThreeTier.for_nodes(5), 8);
        assert_eq!(CableFormula::HubAndSpoke.for_nodes(4), 4);
        assert_eq!(CableFormula::PointToPoint.for_nodes(5), 2);
    }

    #[test]
    fn cable_formulas_do_not_overflow() {
        assert_eq!(CableFormula::Mesh.for_nodes(5), 10);
        assert_eq!(
            CableFormula::Mesh.for_nodes(5_000_000_000),
            12_499_999_997_500_000_000
        );
        assert_eq!(CableFormula::Mesh.for_nodes(u64::MAX), u64::MAX);
        assert_eq!(
            CableFormula::ThreeTier.for_nodes(u64::MAX / 2),
            13_835_058_055_282_163_711
        );
        assert_eq!(CableFormula::ThreeTier.for_nodes(u64::MAX), u64::MAX);
        assert_eq!(CableFormula::SpineAndLeaf.for_nodes(u64::MAX), u64::MAX);
    }

    #[test]
    fn hybrid_has_no_closed_form() {
        assert_eq!(CableFormula::for_archetype(Archetype::Hybrid), None);
        assert_eq!(
            CableFormula::for_archetype(Archetype::SpineAndLeaf),
            Some(CableFormula::SpineAndLeaf)
        );
    }

    #[test]
    fn levels_use_kebab_case() {
        let json = serde_json::to_string(&FaultToleranceLevel::VeryHigh).unwrap();
        assert_eq!(json, "\"very-high\"");
        let level: CostLevel = serde_json::from_str("\"very-high\"").unwrap();
        assert_eq!(level, CostLevel::VeryHigh);
    }
}
