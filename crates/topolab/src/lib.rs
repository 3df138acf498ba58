//! # Topolab
//!
//! Analysis engine for small network topologies: the kind a student sketches
//! while learning why a star differs from a mesh.
//!
//! Given a list of devices and the connections between them, Topolab names
//! the shape, finds single points of failure, scores redundancy, runs a set
//! of best-practice rules and totals the cost.
//!
//! ## Quick Start
//!
//! ```rust
//! use topolab::prelude::*;
//!
//! let analyzer = Analyzer::builtin().unwrap();
//!
//! // Build a small office
//! let mut draft = analyzer.draft();
//! let router = draft.add_device(DeviceType::Router);
//! let switch = draft.add_device(DeviceType::Switch);
//! let server = draft.add_device(DeviceType::Server);
//! draft.connect(&router, &switch, ConnectionType::Ethernet, 5.0).unwrap();
//! draft.connect(&switch, &server, ConnectionType::Ethernet, 20.0).unwrap();
//!
//! let report = analyzer.analyze(draft.devices(), draft.connections());
//! assert_eq!(report.detected_type, DetectedTopology::Star);
//!
//! for issue in &report.issues {
//!     println!("[{}] {}", issue.severity, issue.message);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`topolab_core`] - Shared types, graph model, archetype characteristics, catalog
//! - [`topolab_engine`] - Classifier, fault analysis, validation, metrics, drafts
//!
//! ## Classification
//!
//! Shapes are matched by edge and degree counts in a fixed order, first
//! match wins:
//!
//! | Shape | Condition (n devices, e valid links) |
//! |-------|--------------------------------------|
//! | custom | fewer than 2 devices, or no links |
//! | star | one device of degree n-1 and e = n-1 |
//! | mesh | e = n(n-1)/2 |
//! | ring | e = n and every degree is 2 |
//! | bus | e = n-1 and exactly two degree-1 devices |
//! | hybrid | anything else with links |
//!
//! These are necessary conditions only. Two disjoint triangles match `ring`.
//!
//! ## Comparing archetypes
//!
//! ```rust
//! use topolab::prelude::*;
//!
//! let analyzer = Analyzer::builtin().unwrap();
//! let metrics = analyzer.compare([Archetype::Star, Archetype::Mesh]);
//! for m in &metrics {
//!     println!("{}: fault tolerance {}", m.topology, m.scores.fault_tolerance);
//! }
//! assert_eq!(analyzer.cables(Archetype::Mesh, 4), Some(6));
//! ```

// Re-export both crates
pub use topolab_core as core;
pub use topolab_engine as engine;

/// Prelude module for convenient imports.
///
/// ```rust
/// use topolab::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use topolab_core::prelude::*;

    // Analyses
    pub use topolab_engine::classify::classify;
    pub use topolab_engine::fault::{
        analyze_redundancy, analyze_redundancy_of, analyze_spof, Impact, RedundancyMetrics,
        SpofAnalysis,
    };
    pub use topolab_engine::validate::{
        validate, IssueKind, Rule, Severity, ValidationIssue, ValidationSummary,
    };
    pub use topolab_engine::metrics::{
        cables_for, calculate_cost, compare, comparison_metrics, score_comparison,
        CompareConfig, ComparisonMetrics, ComparisonScores, CostBreakdown, Selection,
    };

    // Editing and saving
    pub use topolab_engine::draft::TopologyDraft;
    pub use topolab_engine::export::{GraphDocument, TopologyExport};

    // Facade
    pub use topolab_engine::analyzer::{Analyzer, TopologyReport};
}
