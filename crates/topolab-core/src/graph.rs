//! Graph model — degree, neighbor and component facts derived from a
//! device/connection list.
//!
//! Facts are computed once per analysis call in O(n + e) and then queried
//! in O(1). Connections whose endpoints are not in the device list are
//! skipped, never reported as errors. Self-loops count once toward degree
//! and list the device once among its own neighbors.

use crate::types::{Connection, Device, DeviceId};
use petgraph::unionfind::UnionFind;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Derived facts for a single device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeFacts {
    pub degree: usize,
    pub neighbor_ids: Vec<DeviceId>,
}

/// Precomputed adjacency over a borrowed device/connection list.
#[derive(Debug)]
pub struct Adjacency<'a> {
    devices: &'a [Device],
    facts: HashMap<DeviceId, NodeFacts>,
    valid: Vec<&'a Connection>,
    skipped: usize,
    components: Vec<usize>,
    component_count: usize,
}

impl<'a> Adjacency<'a> {
    /// Build the adjacency facts for `devices`, ignoring dangling connections.
    pub fn build(devices: &'a [Device], connections: &'a [Connection]) -> Self {
        let mut index: HashMap<&DeviceId, usize> = HashMap::with_capacity(devices.len());
        let mut facts: HashMap<DeviceId, NodeFacts> = HashMap::with_capacity(devices.len());
        for (i, device) in devices.iter().enumerate() {
            index.entry(&device.id).or_insert(i);
            facts.entry(device.id.clone()).or_default();
        }

        let mut valid = Vec::with_capacity(connections.len());
        let mut skipped = 0;
        let mut union = UnionFind::<usize>::new(devices.len());

        for conn in connections {
            let (Some(&a), Some(&b)) = (index.get(&conn.source_id), index.get(&conn.target_id)) else {
                debug!(
                    connection = %conn.id,
                    source = %conn.source_id,
                    target = %conn.target_id,
                    "skipping connection with unknown endpoint"
                );
                skipped += 1;
                continue;
            };

            if conn.is_self_loop() {
                if let Some(f) = facts.get_mut(&conn.source_id) {
                    f.degree += 1;
                    f.neighbor_ids.push(conn.source_id.clone());
                }
            } else {
                if let Some(f) = facts.get_mut(&conn.source_id) {
                    f.degree += 1;
                    f.neighbor_ids.push(conn.target_id.clone());
                }
                if let Some(f) = facts.get_mut(&conn.target_id) {
                    f.degree += 1;
                    f.neighbor_ids.push(conn.source_id.clone());
                }
                union.union(a, b);
            }
            valid.push(conn);
        }

        // Relabel union-find roots as 0..k in device order.
        let mut labels: HashMap<usize, usize> = HashMap::new();
        let components: Vec<usize> = (0..devices.len())
            .map(|i| {
                let root = union.find(index[&devices[i].id]);
                let next = labels.len();
                *labels.entry(root).or_insert(next)
            })
            .collect();
        let component_count = labels.len();

        Self {
            devices,
            facts,
            valid,
            skipped,
            components,
            component_count,
        }
    }

    /// Number of connections incident to `id` (0 for unknown devices).
    pub fn degree(&self, id: &DeviceId) -> usize {
        self.facts.get(id).map_or(0, |f| f.degree)
    }

    /// Devices reachable from `id` over exactly one connection.
    pub fn neighbors(&self, id: &DeviceId) -> &[DeviceId] {
        self.facts
            .get(id)
            .map(|f| f.neighbor_ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_isolated(&self, id: &DeviceId) -> bool {
        self.degree(id) == 0
    }

    pub fn facts(&self, id: &DeviceId) -> Option<&NodeFacts> {
        self.facts.get(id)
    }

    /// Degree of every device, in device-list order.
    pub fn degrees(&self) -> Vec<usize> {
        self.devices.iter().map(|d| self.degree(&d.id)).collect()
    }

    /// The devices this adjacency was built from.
    pub fn devices(&self) -> &'a [Device] {
        self.devices
    }

    /// Connections whose endpoints both exist.
    pub fn valid_connections(&self) -> &[&'a Connection] {
        &self.valid
    }

    pub fn node_count(&self) -> usize {
        self.devices.len()
    }

    /// Number of valid connections.
    pub fn edge_count(&self) -> usize {
        self.valid.len()
    }

    /// Number of connections dropped for referencing a missing device.
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    /// Number of connected components; isolated devices count individually.
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Component label (0-based, numbered in device order) for `id`.
    pub fn component_of(&self, id: &DeviceId) -> Option<usize> {
        self.devices
            .iter()
            .position(|d| &d.id == id)
            .map(|i| self.components[i])
    }

    /// Consume into the plain `id -> facts` map.
    pub fn into_map(self) -> HashMap<DeviceId, NodeFacts> {
        self.facts
    }
}

/// Build the `id -> {degree, neighborIds}` map for a device/connection list.
pub fn build_adjacency(devices: &[Device], connections: &[Connection]) -> HashMap<DeviceId, NodeFacts> {
    Adjacency::build(devices, connections).into_map()
}
