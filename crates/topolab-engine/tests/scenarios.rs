//! End-to-end scenarios over hand-built graphs and the built-in catalog.

use topolab_core::catalog::Catalog;
use topolab_core::characteristics::CableFormula;
use topolab_core::types::*;
use topolab_engine::fault::{analyze_redundancy, analyze_redundancy_of, analyze_spof, Impact};
use topolab_engine::validate::{IssueKind, Severity};
use topolab_engine::{classify, validate, Analyzer};

fn switches(ids: &[&str]) -> Vec<Device> {
    ids.iter()
        .map(|id| Device::new(*id, DeviceType::Switch, format!("Switch {}", id)))
        .collect()
}

#[test]
fn four_switches_fully_meshed() {
    let devices = switches(&["a", "b", "c", "d"]);
    let mut connections = Vec::new();
    for (i, a) in devices.iter().enumerate() {
        for b in &devices[i + 1..] {
            connections.push(Connection::new(
                format!("{}-{}", a.id, b.id),
                a.id.clone(),
                b.id.clone(),
            ));
        }
    }

    assert_eq!(connections.len(), 6);
    assert_eq!(classify(&devices, &connections), DetectedTopology::Mesh);
    assert_eq!(CableFormula::Mesh.for_nodes(4), 6);
    assert!(analyze_spof(&devices, &connections).iter().all(|s| !s.is_spof));
}

#[test]
fn switch_hub_with_two_hosts() {
    let devices = vec![
        Device::new("hub", DeviceType::Switch, "Hub"),
        Device::new("leaf1", DeviceType::Host, "Leaf 1"),
        Device::new("leaf2", DeviceType::Host, "Leaf 2"),
    ];
    let connections = vec![
        Connection::new("e1", "hub", "leaf1"),
        Connection::new("e2", "hub", "leaf2"),
    ];

    assert_eq!(classify(&devices, &connections), DetectedTopology::Star);

    let spof = analyze_spof(&devices, &connections);
    let hub = &spof[0];
    assert_eq!(hub.redundancy, 2);
    assert!(!hub.is_spof);
    for leaf in &spof[1..] {
        assert_eq!(leaf.redundancy, 1);
        assert_eq!(leaf.impact, Impact::Critical);
        assert!(!leaf.is_spof);
    }

    // Hosts are not SPOFs, yet they still show up as critical paths.
    let metrics = analyze_redundancy_of(&devices, &connections);
    assert_eq!(metrics.critical_paths.len(), 2);
}

#[test]
fn edgeless_graph_has_no_redundancy_and_no_critical_paths() {
    let devices = switches(&["a", "b", "c"]);
    let metrics = analyze_redundancy_of(&devices, &[]);
    assert_eq!(metrics.path_redundancy, 0);
    assert_eq!(metrics.link_redundancy, 0);
    assert_eq!(metrics.overall_redundancy, 0);
    assert!(metrics.critical_paths.is_empty());
    assert_eq!(classify(&devices, &[]), DetectedTopology::Custom);
}

#[test]
fn long_line_is_a_bus() {
    let devices = switches(&["a", "b", "c", "d"]);
    let connections = vec![
        Connection::new("e1", "a", "b"),
        Connection::new("e2", "b", "c"),
        Connection::new("e3", "c", "d"),
    ];
    assert_eq!(classify(&devices, &connections), DetectedTopology::Bus);
}

#[test]
fn three_device_line_hits_the_star_rule_first() {
    let devices = switches(&["a", "b", "c"]);
    let connections = vec![Connection::new("e1", "a", "b"), Connection::new("e2", "b", "c")];
    assert_eq!(classify(&devices, &connections), DetectedTopology::Star);
}

#[test]
fn server_with_one_connection_is_warned_once() {
    let devices = vec![
        Device::new("sw", DeviceType::Switch, "Access Switch"),
        Device::new("srv", DeviceType::Server, "File Server"),
    ];
    let connections = vec![Connection::new("e1", "sw", "srv")];

    let issues = validate(&devices, &connections);
    let server_issues: Vec<_> = issues
        .iter()
        .filter(|i| i.device_id == Some(DeviceId::from("srv")))
        .collect();
    assert_eq!(server_issues.len(), 1);
    assert_eq!(server_issues[0].severity, Severity::Warning);
    assert_eq!(server_issues[0].kind, IssueKind::Redundancy);
    assert_eq!(server_issues[0].message, "File Server lacks redundant connections");
}

#[test]
fn catalog_archetypes_classify_and_score() {
    let catalog = Catalog::builtin().unwrap();

    let mesh = catalog.definition(Archetype::Mesh).unwrap();
    assert_eq!(classify(&mesh.devices, &mesh.connections), DetectedTopology::Mesh);
    assert_eq!(analyze_redundancy(mesh).path_redundancy, 100);

    let star = catalog.definition(Archetype::Star).unwrap();
    assert_eq!(classify(&star.devices, &star.connections), DetectedTopology::Star);
    let star_metrics = analyze_redundancy(star);
    assert_eq!(star_metrics.overall_redundancy, 0);
    assert_eq!(star_metrics.critical_paths.len(), 4);

    let three_tier = catalog.definition(Archetype::ThreeTier).unwrap();
    let metrics = analyze_redundancy(three_tier);
    // 8 nodes, 9 links, one tagged redundant.
    assert_eq!(metrics.path_redundancy, 29);
    assert_eq!(metrics.link_redundancy, 11);
    assert_eq!(metrics.overall_redundancy, 20);
}

#[test]
fn every_template_analyzes_cleanly() {
    let analyzer = Analyzer::builtin().unwrap();
    for template in &analyzer.catalog().templates {
        let report = analyzer.analyze(&template.devices, &template.connections);
        assert_eq!(report.skipped_connections, 0, "template {}", template.id);
        assert_eq!(report.component_count, 1, "template {}", template.id);
        assert!(report.cost.total > 0.0);
    }
}

#[test]
fn draft_round_trip_through_export() {
    let analyzer = Analyzer::builtin().unwrap();
    let mut draft = analyzer.draft();
    let router = draft.add_device(DeviceType::Router);
    let firewall = draft.add_device(DeviceType::Firewall);
    draft
        .connect(&router, &firewall, ConnectionType::Fiber, 4.0)
        .unwrap();

    let export = draft.export("edge");
    let json = export.to_json_pretty().unwrap();
    let back = topolab_engine::export::TopologyExport::from_json_str(&json).unwrap();

    assert_eq!(back.name, "edge");
    assert_eq!(back.devices, draft.devices());
    assert_eq!(back.cost.total, 500.0 + 800.0 + 20.0);
}
