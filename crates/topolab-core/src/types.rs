//! Shared types used across the engine, the catalog and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a device (graph node), stable for the device's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(pub String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DeviceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier of a connection (graph edge).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(pub String);

impl ConnectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConnectionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ConnectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Kind of device placed in a topology.
///
/// `Host`, `Server` and `Workstation` are leaf devices; everything else is
/// infrastructure. `Core`, `Distribution` and `Access` are the layer roles
/// used by the hierarchical archetype definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceType {
    Router,
    Switch,
    Hub,
    Firewall,
    Server,
    Workstation,
    WirelessAp,
    Cloud,
    Host,
    Core,
    Distribution,
    Access,
}

impl DeviceType {
    /// Every device type, in palette order.
    pub const ALL: [DeviceType; 12] = [
        DeviceType::Router,
        DeviceType::Switch,
        DeviceType::Hub,
        DeviceType::Firewall,
        DeviceType::Server,
        DeviceType::Workstation,
        DeviceType::WirelessAp,
        DeviceType::Cloud,
        DeviceType::Host,
        DeviceType::Core,
        DeviceType::Distribution,
        DeviceType::Access,
    ];

    /// Whether this is an end device rather than network infrastructure.
    pub fn is_leaf(&self) -> bool {
        matches!(self, DeviceType::Host | DeviceType::Server | DeviceType::Workstation)
    }

    /// Human-readable name, used for generated device labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceType::Router => "Router",
            DeviceType::Switch => "Switch",
            DeviceType::Hub => "Hub",
            DeviceType::Firewall => "Firewall",
            DeviceType::Server => "Server",
            DeviceType::Workstation => "Workstation",
            DeviceType::WirelessAp => "Wireless AP",
            DeviceType::Cloud => "Cloud",
            DeviceType::Host => "Host",
            DeviceType::Core => "Core",
            DeviceType::Distribution => "Distribution",
            DeviceType::Access => "Access",
        }
    }
}

/// Kind of link between two devices.
///
/// Builder graphs use the physical media (`Ethernet`, `Fiber`, `Wireless`);
/// archetype definitions use the logical roles (`Primary`, `Redundant`,
/// `Uplink`, `Downlink`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionType {
    Ethernet,
    Fiber,
    Wireless,
    Primary,
    Redundant,
    Uplink,
    Downlink,
}

impl ConnectionType {
    /// Physical media carry a price; logical roles do not.
    pub fn is_physical(&self) -> bool {
        matches!(
            self,
            ConnectionType::Ethernet | ConnectionType::Fiber | ConnectionType::Wireless
        )
    }
}

/// A position on the design canvas. Never read by the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A device (graph node).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: DeviceId,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub label: String,
    /// Acquisition cost. Archetype definitions leave it out.
    #[serde(default)]
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Device {
    pub fn new(id: impl Into<DeviceId>, device_type: DeviceType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            device_type,
            label: label.into(),
            cost: 0.0,
            position: None,
        }
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

/// A connection (undirected graph edge).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: ConnectionId,
    #[serde(alias = "source")]
    pub source_id: DeviceId,
    #[serde(alias = "target")]
    pub target_id: DeviceId,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<ConnectionType>,
    /// Cable length in metres, when the link is physical.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default)]
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Connection {
    pub fn new(
        id: impl Into<ConnectionId>,
        source_id: impl Into<DeviceId>,
        target_id: impl Into<DeviceId>,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            connection_type: None,
            length: None,
            cost: 0.0,
            bandwidth: None,
            label: None,
        }
    }

    pub fn with_type(mut self, connection_type: ConnectionType) -> Self {
        self.connection_type = Some(connection_type);
        self
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Whether the link is explicitly tagged as a redundant path.
    pub fn is_redundant(&self) -> bool {
        self.connection_type == Some(ConnectionType::Redundant)
    }

    /// Whether `device` is one of the two endpoints.
    pub fn touches(&self, device: &DeviceId) -> bool {
        &self.source_id == device || &self.target_id == device
    }

    pub fn is_self_loop(&self) -> bool {
        self.source_id == self.target_id
    }
}

/// Shape names produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectedTopology {
    Star,
    Mesh,
    Ring,
    Bus,
    Hybrid,
    Custom,
}

impl fmt::Display for DetectedTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetectedTopology::Star => "star",
            DetectedTopology::Mesh => "mesh",
            DetectedTopology::Ring => "ring",
            DetectedTopology::Bus => "bus",
            DetectedTopology::Hybrid => "hybrid",
            DetectedTopology::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// The fixed set of named topology archetypes taught by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    Mesh,
    Hybrid,
    Star,
    HubAndSpoke,
    SpineAndLeaf,
    PointToPoint,
    ThreeTier,
    CollapsedCore,
}

impl Archetype {
    pub const ALL: [Archetype; 8] = [
        Archetype::Mesh,
        Archetype::Hybrid,
        Archetype::Star,
        Archetype::HubAndSpoke,
        Archetype::SpineAndLeaf,
        Archetype::PointToPoint,
        Archetype::ThreeTier,
        Archetype::CollapsedCore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Mesh => "mesh",
            Archetype::Hybrid => "hybrid",
            Archetype::Star => "star",
            Archetype::HubAndSpoke => "hub-and-spoke",
            Archetype::SpineAndLeaf => "spine-and-leaf",
            Archetype::PointToPoint => "point-to-point",
            Archetype::ThreeTier => "three-tier",
            Archetype::CollapsedCore => "collapsed-core",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Archetype::ALL
            .into_iter()
            .find(|a| a.as_str() == wanted)
            .ok_or_else(|| format!("unknown topology archetype: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_type_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&DeviceType::WirelessAp).unwrap();
        assert_eq!(json, "\"wireless-ap\"");
        let back: DeviceType = serde_json::from_str("\"wireless-ap\"").unwrap();
        assert_eq!(back, DeviceType::WirelessAp);
    }

    #[test]
    fn unknown_device_type_is_rejected() {
        let result: Result<DeviceType, _> = serde_json::from_str("\"toaster\"");
        assert!(result.is_err());
    }

    #[test]
    fn connection_accepts_definition_style_endpoints() {
        let json = r#"{"id":"e1","source":"n1","target":"n2","type":"redundant"}"#;
        let conn: Connection = serde_json::from_str(json).unwrap();
        assert_eq!(conn.source_id.as_str(), "n1");
        assert_eq!(conn.target_id.as_str(), "n2");
        assert!(conn.is_redundant());
        assert_eq!(conn.cost, 0.0);
    }

    #[test]
    fn connection_serializes_builder_field_names() {
        let conn = Connection::new("c1", "d1", "d2")
            .with_type(ConnectionType::Ethernet)
            .with_length(5.0)
            .with_cost(10.0);
        let value = serde_json::to_value(&conn).unwrap();
        assert_eq!(value["sourceId"], "d1");
        assert_eq!(value["targetId"], "d2");
        assert_eq!(value["type"], "ethernet");
        assert!(value.get("bandwidth").is_none());
    }

    #[test]
    fn leaf_types() {
        assert!(DeviceType::Host.is_leaf());
        assert!(DeviceType::Server.is_leaf());
        assert!(DeviceType::Workstation.is_leaf());
        assert!(!DeviceType::Router.is_leaf());
        assert!(!DeviceType::Access.is_leaf());
    }

    #[test]
    fn archetype_parses_its_display_name() {
        for archetype in Archetype::ALL {
            assert_eq!(archetype.to_string().parse::<Archetype>(), Ok(archetype));
        }
        assert!("ring".parse::<Archetype>().is_err());
    }
}
