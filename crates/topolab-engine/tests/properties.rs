//! Property tests: the analyses depend on the graph, not on list order.

use proptest::prelude::*;
use std::collections::BTreeSet;
use topolab_core::types::{Connection, Device, DeviceType};
use topolab_engine::fault::{analyze_redundancy_of, analyze_spof};
use topolab_engine::{calculate_cost, classify, validate};

fn graph() -> impl Strategy<Value = (Vec<Device>, Vec<Connection>)> {
    (1usize..10).prop_flat_map(|n| {
        let devices = prop::collection::vec((0..DeviceType::ALL.len(), 0u32..3000), n);
        let edges = prop::collection::vec((0..n + 1, 0..n + 1, 0u32..500), 0..24);
        (devices, edges).prop_map(|(devices, edges)| {
            let devices: Vec<Device> = devices
                .into_iter()
                .enumerate()
                .map(|(i, (t, cost))| {
                    Device::new(format!("d{}", i), DeviceType::ALL[t], format!("Device {}", i))
                        .with_cost(cost as f64)
                })
                .collect();
            // Index `n` points past the device list, producing dangling edges.
            let connections = edges
                .into_iter()
                .enumerate()
                .map(|(i, (a, b, cost))| {
                    Connection::new(format!("c{}", i), format!("d{}", a), format!("d{}", b))
                        .with_cost(cost as f64)
                })
                .collect();
            (devices, connections)
        })
    })
}

fn shuffled() -> impl Strategy<Value = (Vec<Device>, Vec<Connection>, Vec<Connection>)> {
    graph().prop_flat_map(|(devices, connections)| {
        let reordered = Just(connections.clone()).prop_shuffle();
        (Just(devices), Just(connections), reordered)
    })
}

fn issue_ids(devices: &[Device], connections: &[Connection]) -> BTreeSet<String> {
    validate(devices, connections).into_iter().map(|i| i.id).collect()
}

proptest! {
    #[test]
    fn cost_is_order_independent((devices, connections) in graph(), seed in any::<u64>()) {
        let mut devices_rev = devices.clone();
        devices_rev.rotate_left((seed as usize) % devices.len().max(1));
        let mut connections_rev = connections.clone();
        connections_rev.reverse();

        let a = calculate_cost(&devices, &connections);
        let b = calculate_cost(&devices_rev, &connections_rev);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.total, a.devices + a.connections);
    }

    #[test]
    fn classification_ignores_connection_order((devices, original, reordered) in shuffled()) {
        prop_assert_eq!(classify(&devices, &original), classify(&devices, &reordered));
    }

    #[test]
    fn validation_is_idempotent((devices, connections) in graph()) {
        let first = issue_ids(&devices, &connections);
        let second = issue_ids(&devices, &connections);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn validation_ids_ignore_connection_order((devices, original, reordered) in shuffled()) {
        prop_assert_eq!(issue_ids(&devices, &original), issue_ids(&devices, &reordered));
    }

    #[test]
    fn spof_covers_every_device_once((devices, connections) in graph()) {
        let spof = analyze_spof(&devices, &connections);
        prop_assert_eq!(spof.len(), devices.len());
        for (analysis, device) in spof.iter().zip(&devices) {
            prop_assert_eq!(&analysis.node_id, &device.id);
            prop_assert_eq!(analysis.affected_nodes.len(), analysis.redundancy);
        }
    }

    #[test]
    fn redundancy_is_always_defined((devices, connections) in graph()) {
        let metrics = analyze_redundancy_of(&devices, &connections);
        prop_assert!(metrics.link_redundancy <= 100);
        prop_assert!(metrics.overall_redundancy <= metrics.path_redundancy.max(metrics.link_redundancy));
    }
}
