//! # Topolab Engine
//!
//! Pure analysis functions over a device/connection graph.
//!
//! Every function borrows its inputs, builds the adjacency facts once and
//! returns plain values. None of them fail: connections pointing at missing
//! devices are skipped and divisions by zero yield 0.
//!
//! - [`classify`] names the shape (star, mesh, ring, bus, hybrid, custom)
//! - [`fault`] flags single points of failure and scores redundancy
//! - [`validate`] runs the fixed rule set
//! - [`metrics`] sums cost, scores archetypes and estimates cabling
//!
//! [`draft::TopologyDraft`] and [`export::TopologyExport`] cover editing and
//! saving a graph; [`analyzer::Analyzer`] ties it together over a catalog.

pub mod classify;
pub mod fault;
pub mod validate;
pub mod metrics;
pub mod export;
pub mod draft;
pub mod analyzer;

pub use analyzer::{Analyzer, TopologyReport};
pub use classify::classify;
pub use fault::{analyze_redundancy, analyze_redundancy_of, analyze_spof};
pub use metrics::{calculate_cost, compare, comparison_metrics, score_comparison};
pub use validate::validate;
