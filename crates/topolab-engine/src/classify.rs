//! Topology classifier — names the shape of a device/connection graph.
//!
//! The rules are necessary-condition checks on edge and degree counts,
//! evaluated in a fixed priority order (first match wins). They do not
//! prove the shape: two disjoint triangles satisfy the ring rule, and a
//! single link beside a separate triangle satisfies the bus rule.

use topolab_core::graph::Adjacency;
use topolab_core::types::{Connection, DetectedTopology, Device};
use tracing::debug;

/// Classify the graph formed by `devices` and `connections`.
pub fn classify(devices: &[Device], connections: &[Connection]) -> DetectedTopology {
    classify_adjacency(&Adjacency::build(devices, connections))
}

/// Classify from precomputed adjacency facts.
pub fn classify_adjacency(adjacency: &Adjacency<'_>) -> DetectedTopology {
    let n = adjacency.node_count();
    if n < 2 {
        return DetectedTopology::Custom;
    }

    let e = adjacency.edge_count();
    let degrees = adjacency.degrees();
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let central_count = degrees.iter().filter(|&&d| d == max_degree).count();

    let detected = if central_count == 1 && max_degree == n - 1 && e == n - 1 {
        DetectedTopology::Star
    } else if e == n * (n - 1) / 2 {
        DetectedTopology::Mesh
    } else if e == n && degrees.iter().all(|&d| d == 2) {
        DetectedTopology::Ring
    } else if e == n - 1 && degrees.iter().filter(|&&d| d == 1).count() == 2 {
        DetectedTopology::Bus
    } else if e > 0 {
        DetectedTopology::Hybrid
    } else {
        DetectedTopology::Custom
    };

    debug!(nodes = n, edges = e, max_degree, central_count, %detected, "classified topology");
    detected
}
