//! Topolab Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use topolab_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    Archetype, Connection, ConnectionId, ConnectionType, DetectedTopology, Device, DeviceId,
    DeviceType, Position,
};

// Re-export the graph model
pub use crate::graph::{build_adjacency, Adjacency, NodeFacts};

// Re-export archetype characteristics
pub use crate::characteristics::{
    CableFormula, CableRequirements, CostLevel, CostProfile, CostShare, FaultTolerance,
    FaultToleranceLevel, MaintenanceLevel, Scalability, ScalabilityLevel,
    TopologyCharacteristics, TopologyDefinition, TrafficFlow,
};

// Re-export catalog data
pub use crate::catalog::{
    BuilderTemplate, Catalog, ComparisonEntry, ConnectionRates, DevicePrices, PriceList,
};

// Re-export error types
pub use crate::error::{GraphError, Result, TopoError};
