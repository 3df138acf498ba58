//! Export document — the JSON shape a builder graph is saved as.

use crate::classify::classify;
use crate::metrics::{calculate_cost, CostBreakdown};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use topolab_core::error::Result;
use topolab_core::types::{Connection, DetectedTopology, Device};

/// A saved topology with its classification and cost at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyExport {
    pub name: String,
    pub devices: Vec<Device>,
    pub connections: Vec<Connection>,
    pub detected_type: DetectedTopology,
    pub cost: CostBreakdown,
    pub created: DateTime<Utc>,
}

impl TopologyExport {
    /// Snapshot a graph, stamping it with the current time.
    pub fn new(name: impl Into<String>, devices: Vec<Device>, connections: Vec<Connection>) -> Self {
        Self::at(name, devices, connections, Utc::now())
    }

    pub fn at(
        name: impl Into<String>,
        devices: Vec<Device>,
        connections: Vec<Connection>,
        created: DateTime<Utc>,
    ) -> Self {
        let detected_type = classify(&devices, &connections);
        let cost = calculate_cost(&devices, &connections);
        Self {
            name: name.into(),
            devices,
            connections,
            detected_type,
            cost,
            created,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Any document carrying a device and connection list.
///
/// Accepts full exports as well as bare `{devices, connections}` files;
/// other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub devices: Vec<Device>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl GraphDocument {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use topolab_core::error::TopoError;
    use topolab_core::types::DeviceType;

    fn sample() -> TopologyExport {
        let devices = vec![
            Device::new("d1", DeviceType::Switch, "Switch 1").with_cost(300.0),
            Device::new("d2", DeviceType::Workstation, "Workstation 2").with_cost(1000.0),
        ];
        let connections = vec![Connection::new("c1", "d1", "d2").with_cost(20.0)];
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        TopologyExport::at("lab", devices, connections, created)
    }

    #[test]
    fn export_carries_classification_and_cost() {
        let export = sample();
        assert_eq!(export.detected_type, DetectedTopology::Mesh);
        assert_eq!(export.cost.total, 1320.0);
    }

    #[test]
    fn export_round_trips_through_json() {
        let export = sample();
        let json = export.to_json_pretty().unwrap();
        assert!(json.contains("\"detectedType\": \"mesh\""));
        assert!(json.contains("\"created\": \"2024-03-01T12:00:00Z\""));
        assert!(json.contains("\"sourceId\": \"d1\""));

        let back = TopologyExport::from_json_str(&json).unwrap();
        assert_eq!(back, export);
    }

    #[test]
    fn unknown_device_type_is_a_serialization_error() {
        let json = r#"{ "devices": [ { "id": "x", "type": "mainframe", "label": "X" } ] }"#;
        let err = GraphDocument::from_json_str(json).unwrap_err();
        assert!(matches!(err, TopoError::Serialization(_)));
    }

    #[test]
    fn bare_graph_documents_parse() {
        let json = r#"{
            "devices": [
                { "id": "a", "type": "router", "label": "A" },
                { "id": "b", "type": "switch", "label": "B", "cost": 300 }
            ],
            "connections": [ { "id": "e1", "source": "a", "target": "b" } ]
        }"#;
        let doc = GraphDocument::from_json_str(json).unwrap();
        assert_eq!(doc.name, None);
        assert_eq!(doc.devices.len(), 2);
        assert_eq!(doc.devices[0].cost, 0.0);
        assert_eq!(doc.connections[0].target_id.as_str(), "b");
    }

    #[test]
    fn full_exports_parse_as_graph_documents() {
        let json = sample().to_json_pretty().unwrap();
        let doc = GraphDocument::from_json_str(&json).unwrap();
        assert_eq!(doc.name.as_deref(), Some("lab"));
        assert_eq!(doc.connections.len(), 1);
    }
}
