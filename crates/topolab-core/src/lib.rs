//! # Topolab Core
//!
//! Core types, graph model and catalog data for Topolab.
//!
//! This crate holds everything the analysis engine reads but does not
//! compute:
//!
//! - **Types**: devices, connections, topology shapes and archetypes
//! - **Graph model**: degree, neighbor and component facts ([`graph::Adjacency`])
//! - **Characteristics**: qualitative levels and cable formulas of each archetype
//! - **Catalog**: prices, archetype definitions, comparison matrix, templates
//!
//! ## Quick Start
//!
//! ```rust
//! use topolab_core::prelude::*;
//!
//! let devices = vec![
//!     Device::new("a", DeviceType::Switch, "Switch A"),
//!     Device::new("b", DeviceType::Host, "Host B"),
//! ];
//! let connections = vec![Connection::new("c1", "a", "b")];
//!
//! let adjacency = Adjacency::build(&devices, &connections);
//! assert_eq!(adjacency.degree(&DeviceId::from("a")), 1);
//! ```

pub mod types;
pub mod graph;
pub mod characteristics;
pub mod catalog;
pub mod error;
pub mod prelude;
