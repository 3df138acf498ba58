//! Cost totals, comparison scores and cable estimates.

use serde::{Deserialize, Serialize};
use topolab_core::characteristics::{
    CableFormula, CostLevel, FaultToleranceLevel, ScalabilityLevel, TopologyCharacteristics,
    TopologyDefinition,
};
use topolab_core::graph::Adjacency;
use topolab_core::types::{Archetype, Connection, Device};
use tracing::debug;

/// Summed cost of a topology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub devices: f64,
    pub connections: f64,
    pub total: f64,
}

/// Sum device and connection costs.
///
/// Every connection in the list is counted, including ones whose endpoints
/// are missing: the cable was still bought.
pub fn calculate_cost(devices: &[Device], connections: &[Connection]) -> CostBreakdown {
    let devices: f64 = devices.iter().map(|d| d.cost).sum();
    let connections: f64 = connections.iter().map(|c| c.cost).sum();
    CostBreakdown {
        devices,
        connections,
        total: devices + connections,
    }
}

/// Qualitative axes mapped onto 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonScores {
    pub fault_tolerance: u32,
    pub scalability: u32,
    /// Higher is cheaper.
    pub cost: u32,
    pub performance: u32,
    /// Higher is simpler.
    pub complexity: u32,
}

impl ComparisonScores {
    /// Axis names paired with their values, in display order.
    pub fn axes(&self) -> [(&'static str, u32); 5] {
        [
            ("faultTolerance", self.fault_tolerance),
            ("scalability", self.scalability),
            ("cost", self.cost),
            ("performance", self.performance),
            ("complexity", self.complexity),
        ]
    }
}

pub fn score_comparison(characteristics: &TopologyCharacteristics) -> ComparisonScores {
    let fault_tolerance = match characteristics.fault_tolerance.level {
        FaultToleranceLevel::VeryHigh => 100,
        FaultToleranceLevel::High => 75,
        FaultToleranceLevel::Medium => 50,
        FaultToleranceLevel::Low => 25,
    };
    let scalability = match characteristics.scalability.level {
        ScalabilityLevel::High => 90,
        ScalabilityLevel::Medium => 60,
        ScalabilityLevel::Low => 30,
    };
    let cost = match characteristics.cost.initial {
        CostLevel::Low => 90,
        CostLevel::Medium => 60,
        CostLevel::High => 30,
        CostLevel::VeryHigh => 10,
    };
    let bottlenecks = characteristics.traffic_flow.bottlenecks.len();
    let performance = 100u32.saturating_sub(20u32.saturating_mul(bottlenecks.min(5) as u32));
    let complexity = if characteristics.scalability.limitations.len() < 3 {
        80
    } else {
        40
    };

    ComparisonScores {
        fault_tolerance,
        scalability,
        cost,
        performance,
        complexity,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonMetrics {
    pub topology: Archetype,
    pub scores: ComparisonScores,
    pub node_count: usize,
    pub edge_count: usize,
    /// Edges per node, 0 for an empty topology.
    pub avg_path_length: f64,
}

pub fn comparison_metrics(definition: &TopologyDefinition) -> ComparisonMetrics {
    let adjacency = Adjacency::build(&definition.devices, &definition.connections);
    let node_count = adjacency.node_count();
    let edge_count = adjacency.edge_count();
    let avg_path_length = if node_count == 0 {
        0.0
    } else {
        edge_count as f64 / node_count as f64
    };

    ComparisonMetrics {
        topology: definition.id,
        scores: score_comparison(&definition.characteristics),
        node_count,
        edge_count,
        avg_path_length,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CompareConfig {
    /// Most archetypes compared side by side; older selections fall off.
    #[serde(default = "default_max_selected")]
    pub max_selected: usize,
}

fn default_max_selected() -> usize {
    3
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            max_selected: default_max_selected(),
        }
    }
}

/// Archetypes picked for side-by-side comparison.
///
/// Picking an archetype that is already selected removes it. Picking a new
/// one when the selection is full drops the oldest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    picked: Vec<Archetype>,
    max: usize,
}

impl Selection {
    pub fn new(config: &CompareConfig) -> Self {
        Self {
            picked: Vec::with_capacity(config.max_selected),
            max: config.max_selected,
        }
    }

    /// Star and mesh, the selection a comparison starts from.
    pub fn starter(config: &CompareConfig) -> Self {
        let mut selection = Self::new(config);
        selection.toggle(Archetype::Star);
        selection.toggle(Archetype::Mesh);
        selection
    }

    pub fn toggle(&mut self, archetype: Archetype) {
        if let Some(pos) = self.picked.iter().position(|a| *a == archetype) {
            self.picked.remove(pos);
            return;
        }
        self.picked.push(archetype);
        if self.picked.len() > self.max {
            let excess = self.picked.len() - self.max;
            self.picked.drain(..excess);
        }
    }

    pub fn contains(&self, archetype: Archetype) -> bool {
        self.picked.contains(&archetype)
    }

    pub fn as_slice(&self) -> &[Archetype] {
        &self.picked
    }

    pub fn len(&self) -> usize {
        self.picked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }
}

/// Metrics for every selected definition, in definition order.
///
/// Selected archetypes without a definition are left out.
pub fn compare(definitions: &[TopologyDefinition], selection: &Selection) -> Vec<ComparisonMetrics> {
    let metrics: Vec<_> = definitions
        .iter()
        .filter(|d| selection.contains(d.id))
        .map(comparison_metrics)
        .collect();
    debug!(selected = selection.len(), compared = metrics.len(), "compared topologies");
    metrics
}

/// Cables needed to build `archetype` with `nodes` nodes, if it has a closed form.
pub fn cables_for(archetype: Archetype, nodes: u64) -> Option<u64> {
    CableFormula::for_archetype(archetype).map(|formula| formula.for_nodes(nodes))
}
