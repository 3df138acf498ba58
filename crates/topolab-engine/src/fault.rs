//! Fault and redundancy analysis.
//!
//! SPOF detection is a per-device degree check, not a cut-vertex search:
//! a non-host device hanging off a single link is flagged, and the devices
//! "affected" by a failure are approximated by its direct neighbors.
//!
//! `critical_paths` in [`RedundancyMetrics`] lists every single-link device
//! regardless of type, so a host can appear there without being a SPOF.

use serde::Serialize;
use topolab_core::characteristics::TopologyDefinition;
use topolab_core::graph::Adjacency;
use topolab_core::types::{Connection, Device, DeviceId, DeviceType};

/// Severity of losing a device, derived from how many links it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Impact {
    Critical,
    High,
    Low,
}

impl Impact {
    fn for_degree(degree: usize) -> Self {
        match degree {
            1 => Impact::Critical,
            2 => Impact::High,
            _ => Impact::Low,
        }
    }
}

/// Single-point-of-failure assessment of one device.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpofAnalysis {
    pub node_id: DeviceId,
    pub label: String,
    pub is_spof: bool,
    pub impact: Impact,
    pub affected_nodes: Vec<DeviceId>,
    /// Number of links into the device.
    pub redundancy: usize,
}

/// Aggregate redundancy percentages for a whole topology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedundancyMetrics {
    /// Edges beyond a spanning tree, as a percentage of the tree size.
    pub path_redundancy: u32,
    /// Edges tagged `redundant`, as a percentage of all edges.
    pub link_redundancy: u32,
    pub overall_redundancy: u32,
    pub critical_paths: Vec<String>,
}

/// One [`SpofAnalysis`] per device, in device order.
pub fn analyze_spof(devices: &[Device], connections: &[Connection]) -> Vec<SpofAnalysis> {
    analyze_spof_adjacency(&Adjacency::build(devices, connections))
}

pub fn analyze_spof_adjacency(adjacency: &Adjacency<'_>) -> Vec<SpofAnalysis> {
    adjacency
        .devices()
        .iter()
        .map(|device| {
            let redundancy = adjacency.degree(&device.id);
            SpofAnalysis {
                node_id: device.id.clone(),
                label: device.label.clone(),
                is_spof: redundancy == 1 && device.device_type != DeviceType::Host,
                impact: Impact::for_degree(redundancy),
                affected_nodes: adjacency.neighbors(&device.id).to_vec(),
                redundancy,
            }
        })
        .collect()
}

/// Redundancy metrics for an archetype definition.
pub fn analyze_redundancy(topology: &TopologyDefinition) -> RedundancyMetrics {
    analyze_redundancy_of(&topology.devices, &topology.connections)
}

/// Redundancy metrics for a raw device/connection list.
pub fn analyze_redundancy_of(devices: &[Device], connections: &[Connection]) -> RedundancyMetrics {
    analyze_redundancy_adjacency(&Adjacency::build(devices, connections))
}

pub fn analyze_redundancy_adjacency(adjacency: &Adjacency<'_>) -> RedundancyMetrics {
    let node_count = adjacency.node_count();
    let edge_count = adjacency.edge_count();

    let path_redundancy = if node_count > 1 && edge_count > node_count - 1 {
        let min_connectivity = (node_count - 1) as f64;
        (edge_count as f64 - min_connectivity) / min_connectivity * 100.0
    } else {
        0.0
    };

    let redundant_links = adjacency
        .valid_connections()
        .iter()
        .filter(|c| c.is_redundant())
        .count();
    let link_redundancy = if edge_count > 0 {
        redundant_links as f64 / edge_count as f64 * 100.0
    } else {
        0.0
    };

    // Averaged before rounding.
    let overall_redundancy = (path_redundancy + link_redundancy) / 2.0;

    let critical_paths = adjacency
        .devices()
        .iter()
        .filter(|d| adjacency.degree(&d.id) == 1)
        .map(|d| format!("{} (1 connection)", d.label))
        .collect();

    RedundancyMetrics {
        path_redundancy: round_percent(path_redundancy),
        link_redundancy: round_percent(link_redundancy),
        overall_redundancy: round_percent(overall_redundancy),
        critical_paths,
    }
}

fn round_percent(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}
