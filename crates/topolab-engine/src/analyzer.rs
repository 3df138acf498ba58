//! Analyzer — runs every analysis over one graph and bundles the results.

use crate::classify::classify_adjacency;
use crate::draft::TopologyDraft;
use crate::fault::{analyze_redundancy_adjacency, analyze_spof_adjacency, RedundancyMetrics, SpofAnalysis};
use crate::metrics::{
    cables_for, calculate_cost, compare, CompareConfig, ComparisonMetrics, CostBreakdown, Selection,
};
use crate::validate::{validate_adjacency, ValidationIssue, ValidationSummary};
use serde::Serialize;
use std::sync::Arc;
use topolab_core::catalog::Catalog;
use topolab_core::error::Result;
use topolab_core::graph::Adjacency;
use topolab_core::types::{Archetype, Connection, DetectedTopology, Device};
use tracing::debug;

/// Everything the engine derives from a single graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyReport {
    pub detected_type: DetectedTopology,
    pub device_count: usize,
    pub connection_count: usize,
    /// Connections dropped for referencing a missing device.
    pub skipped_connections: usize,
    pub component_count: usize,
    pub spof: Vec<SpofAnalysis>,
    pub redundancy: RedundancyMetrics,
    pub issues: Vec<ValidationIssue>,
    pub summary: ValidationSummary,
    pub cost: CostBreakdown,
}

impl TopologyReport {
    /// Devices flagged as single points of failure.
    pub fn spof_devices(&self) -> impl Iterator<Item = &SpofAnalysis> {
        self.spof.iter().filter(|s| s.is_spof)
    }
}

/// Entry point bundling the catalog with the analysis functions.
#[derive(Debug, Clone)]
pub struct Analyzer {
    catalog: Arc<Catalog>,
    compare: CompareConfig,
}

impl Analyzer {
    pub fn new(catalog: Arc<Catalog>, compare: CompareConfig) -> Self {
        Self { catalog, compare }
    }

    /// An analyzer over the built-in catalog with default settings.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(Catalog::builtin()?), CompareConfig::default()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn compare_config(&self) -> &CompareConfig {
        &self.compare
    }

    /// Analyze a graph. Never fails: dangling connections are skipped.
    pub fn analyze(&self, devices: &[Device], connections: &[Connection]) -> TopologyReport {
        let adjacency = Adjacency::build(devices, connections);
        let issues = validate_adjacency(&adjacency);

        let report = TopologyReport {
            detected_type: classify_adjacency(&adjacency),
            device_count: adjacency.node_count(),
            connection_count: adjacency.edge_count(),
            skipped_connections: adjacency.skipped_count(),
            component_count: adjacency.component_count(),
            spof: analyze_spof_adjacency(&adjacency),
            redundancy: analyze_redundancy_adjacency(&adjacency),
            summary: ValidationSummary::from_issues(&issues),
            issues,
            cost: calculate_cost(devices, connections),
        };

        debug!(
            detected = %report.detected_type,
            devices = report.device_count,
            issues = report.issues.len(),
            "analyzed topology"
        );
        report
    }

    /// Analyze one of the catalog's archetype definitions.
    pub fn analyze_archetype(&self, archetype: Archetype) -> Option<TopologyReport> {
        self.catalog
            .definition(archetype)
            .map(|d| self.analyze(&d.devices, &d.connections))
    }

    /// Compare archetypes picked in order, keeping only the most recent picks.
    pub fn compare<I>(&self, picks: I) -> Vec<ComparisonMetrics>
    where
        I: IntoIterator<Item = Archetype>,
    {
        let mut selection = Selection::new(&self.compare);
        for archetype in picks {
            selection.toggle(archetype);
        }
        compare(&self.catalog.definitions, &selection)
    }

    pub fn cables(&self, archetype: Archetype, nodes: u64) -> Option<u64> {
        cables_for(archetype, nodes)
    }

    /// A fresh draft priced from the catalog.
    pub fn draft(&self) -> TopologyDraft {
        TopologyDraft::new(self.catalog.prices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topolab_core::types::{ConnectionType, DeviceType};

    #[test]
    fn report_bundles_every_analysis() {
        let analyzer = Analyzer::builtin().unwrap();
        let mut draft = analyzer.draft();
        let sw = draft.add_device(DeviceType::Switch);
        let srv = draft.add_device(DeviceType::Server);
        let ws = draft.add_device(DeviceType::Workstation);
        draft.connect(&sw, &srv, ConnectionType::Ethernet, 10.0).unwrap();
        draft.connect(&sw, &ws, ConnectionType::Ethernet, 5.0).unwrap();

        let report = analyzer.analyze(draft.devices(), draft.connections());
        assert_eq!(report.detected_type, DetectedTopology::Star);
        assert_eq!(report.device_count, 3);
        assert_eq!(report.connection_count, 2);
        assert_eq!(report.component_count, 1);
        assert_eq!(report.cost.devices, 3300.0);
        assert_eq!(report.cost.connections, 30.0);
        assert_eq!(report.summary.warnings, 1);
        assert_eq!(report.issues[0].id, format!("single-conn-{}", srv));
        // Server and workstation hang off one link each.
        assert_eq!(report.spof_devices().count(), 2);
    }

    #[test]
    fn dangling_connections_are_reported_not_fatal() {
        let analyzer = Analyzer::builtin().unwrap();
        let devices = vec![
            Device::new("a", DeviceType::Switch, "A"),
            Device::new("b", DeviceType::Switch, "B"),
        ];
        let connections = vec![
            Connection::new("c1", "a", "b"),
            Connection::new("c2", "a", "nowhere").with_cost(15.0),
        ];
        let report = analyzer.analyze(&devices, &connections);
        assert_eq!(report.connection_count, 1);
        assert_eq!(report.skipped_connections, 1);
        assert_eq!(report.cost.connections, 15.0);
    }

    #[test]
    fn archetype_reports_use_catalog_definitions() {
        let analyzer = Analyzer::builtin().unwrap();
        let mesh = analyzer.analyze_archetype(Archetype::Mesh).unwrap();
        assert_eq!(mesh.detected_type, DetectedTopology::Mesh);
        assert_eq!(mesh.redundancy.path_redundancy, 100);
        assert!(analyzer.analyze_archetype(Archetype::Hybrid).is_none());
    }

    #[test]
    fn compare_respects_configured_limit() {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let analyzer = Analyzer::new(catalog, CompareConfig { max_selected: 2 });
        let metrics = analyzer.compare([Archetype::Mesh, Archetype::Star, Archetype::ThreeTier]);
        let picked: Vec<_> = metrics.iter().map(|m| m.topology).collect();
        assert_eq!(picked, vec![Archetype::Star, Archetype::ThreeTier]);
    }

    #[test]
    fn analyzer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Analyzer>();
        assert_send_sync::<TopologyReport>();
        assert_send_sync::<TopologyDraft>();
    }
}
