//! Catalog — immutable lookup data handed to the engine at construction.
//!
//! Prices, archetype definitions, the comparison matrix and builder
//! templates live here rather than in module-level statics, so analyses can
//! be run against alternate tables.

use crate::characteristics::TopologyDefinition;
use crate::error::{Result, TopoError};
use crate::types::{Archetype, Connection, ConnectionType, Device, DeviceType};
use serde::{Deserialize, Serialize};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Unit price of each device type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DevicePrices {
    pub router: f64,
    pub switch: f64,
    pub hub: f64,
    pub firewall: f64,
    pub server: f64,
    pub workstation: f64,
    pub wireless_ap: f64,
    pub cloud: f64,
    pub host: f64,
    pub core: f64,
    pub distribution: f64,
    pub access: f64,
}

impl Default for DevicePrices {
    fn default() -> Self {
        Self {
            router: 500.0,
            switch: 300.0,
            hub: 100.0,
            firewall: 800.0,
            server: 2000.0,
            workstation: 1000.0,
            wireless_ap: 200.0,
            cloud: 0.0,
            host: 0.0,
            core: 0.0,
            distribution: 0.0,
            access: 0.0,
        }
    }
}

impl DevicePrices {
    pub fn price_of(&self, device_type: DeviceType) -> f64 {
        match device_type {
            DeviceType::Router => self.router,
            DeviceType::Switch => self.switch,
            DeviceType::Hub => self.hub,
            DeviceType::Firewall => self.firewall,
            DeviceType::Server => self.server,
            DeviceType::Workstation => self.workstation,
            DeviceType::WirelessAp => self.wireless_ap,
            DeviceType::Cloud => self.cloud,
            DeviceType::Host => self.host,
            DeviceType::Core => self.core,
            DeviceType::Distribution => self.distribution,
            DeviceType::Access => self.access,
        }
    }
}

/// Cabling rates: per metre for wired media, flat setup fee for wireless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ConnectionRates {
    pub ethernet_per_meter: f64,
    pub fiber_per_meter: f64,
    pub wireless_setup: f64,
}

impl Default for ConnectionRates {
    fn default() -> Self {
        Self {
            ethernet_per_meter: 2.0,
            fiber_per_meter: 5.0,
            wireless_setup: 50.0,
        }
    }
}

impl ConnectionRates {
    /// Cost of a link of `length` metres. Logical link roles are unpriced.
    pub fn cost_of(&self, connection_type: ConnectionType, length: f64) -> f64 {
        match connection_type {
            ConnectionType::Ethernet => self.ethernet_per_meter * length,
            ConnectionType::Fiber => self.fiber_per_meter * length,
            ConnectionType::Wireless => self.wireless_setup,
            ConnectionType::Primary
            | ConnectionType::Redundant
            | ConnectionType::Uplink
            | ConnectionType::Downlink => 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceList {
    pub devices: DevicePrices,
    pub connections: ConnectionRates,
}

impl PriceList {
    /// Reject negative prices; costs are non-negative by contract.
    pub fn validate(&self) -> Result<()> {
        let d = &self.devices;
        let device_prices = DeviceType::ALL.iter().map(|t| (t.display_name(), d.price_of(*t)));
        let c = &self.connections;
        let rates = [
            ("ethernet-per-meter", c.ethernet_per_meter),
            ("fiber-per-meter", c.fiber_per_meter),
            ("wireless-setup", c.wireless_setup),
        ];
        for (field, value) in device_prices.chain(rates) {
            if !value.is_finite() || value < 0.0 {
                return Err(TopoError::invalid_config(
                    field,
                    format!("price must be a non-negative number, got {}", value),
                ));
            }
        }
        Ok(())
    }
}

/// One row of the qualitative comparison matrix (scores on a 1-10 scale).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    pub topology: Archetype,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    /// 1 = most expensive, 10 = cheapest.
    pub cost_score: u8,
    /// 1 = least redundant, 10 = most redundant.
    pub redundancy_score: u8,
    pub scalability_score: u8,
    /// 1 = simplest, 10 = most complex.
    pub complexity: u8,
}

/// A ready-made builder graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub devices: Vec<Device>,
    pub connections: Vec<Connection>,
}

/// All lookup data the engine reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub prices: PriceList,
    #[serde(default)]
    pub definitions: Vec<TopologyDefinition>,
    #[serde(default)]
    pub comparison_matrix: Vec<ComparisonEntry>,
    #[serde(default)]
    pub templates: Vec<BuilderTemplate>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Parse and check an alternate catalog.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.check()?;
        Ok(catalog)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replace the price list, keeping the rest of the data.
    pub fn with_prices(mut self, prices: PriceList) -> Result<Self> {
        prices.validate()?;
        self.prices = prices;
        Ok(self)
    }

    pub fn definition(&self, archetype: Archetype) -> Option<&TopologyDefinition> {
        self.definitions.iter().find(|d| d.id == archetype)
    }

    pub fn comparison(&self, archetype: Archetype) -> Option<&ComparisonEntry> {
        self.comparison_matrix.iter().find(|c| c.topology == archetype)
    }

    pub fn template(&self, id: &str) -> Option<&BuilderTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    fn check(&self) -> Result<()> {
        self.prices.validate()?;

        for (i, def) in self.definitions.iter().enumerate() {
            if self.definitions[..i].iter().any(|d| d.id == def.id) {
                return Err(TopoError::Catalog(format!(
                    "duplicate definition for {}",
                    def.id
                )));
            }
        }
        for (i, template) in self.templates.iter().enumerate() {
            if self.templates[..i].iter().any(|t| t.id == template.id) {
                return Err(TopoError::Catalog(format!(
                    "duplicate template id {}",
                    template.id
                )));
            }
        }
        for entry in &self.comparison_matrix {
            let scores = [
                entry.cost_score,
                entry.redundancy_score,
                entry.scalability_score,
                entry.complexity,
            ];
            if scores.iter().any(|s| !(1..=10).contains(s)) {
                return Err(TopoError::Catalog(format!(
                    "comparison scores for {} must be within 1-10",
                    entry.topology
                )));
            }
        }
        Ok(())
    }
}
