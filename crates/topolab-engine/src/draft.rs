//! Builder draft — an editable topology with linear undo/redo history.
//!
//! Every mutation pushes a full snapshot and discards anything that was
//! undone before it. Graphs are small, so snapshots are plain clones.

use crate::export::TopologyExport;
use std::collections::HashSet;
use topolab_core::catalog::{BuilderTemplate, PriceList};
use topolab_core::error::{GraphError, Result, TopoError};
use topolab_core::types::{
    Connection, ConnectionId, ConnectionType, Device, DeviceId, DeviceType, Position,
};
use tracing::debug;

const GRID_ORIGIN_X: f64 = 300.0;
const GRID_ORIGIN_Y: f64 = 200.0;
const GRID_STEP_X: f64 = 80.0;
const GRID_STEP_Y: f64 = 100.0;
const GRID_ROW_WIDTH: f64 = 400.0;
const DEVICES_PER_ROW: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
struct Snapshot {
    devices: Vec<Device>,
    connections: Vec<Connection>,
}

#[derive(Debug, Clone)]
pub struct TopologyDraft {
    prices: PriceList,
    current: Snapshot,
    history: Vec<Snapshot>,
    cursor: usize,
    // Id counters only move forward, so removed ids are never handed out again.
    next_device: usize,
    next_connection: usize,
}

impl Default for TopologyDraft {
    fn default() -> Self {
        Self::new(PriceList::default())
    }
}

impl TopologyDraft {
    /// An empty draft priced with `prices`.
    pub fn new(prices: PriceList) -> Self {
        Self {
            prices,
            current: Snapshot::default(),
            history: vec![Snapshot::default()],
            cursor: 0,
            next_device: 0,
            next_connection: 0,
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.current.devices
    }

    pub fn connections(&self) -> &[Connection] {
        &self.current.connections
    }

    pub fn device(&self, id: &DeviceId) -> Option<&Device> {
        self.current.devices.iter().find(|d| &d.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.current.devices.is_empty() && self.current.connections.is_empty()
    }

    /// Add a device of `device_type`, priced and labelled from its type and
    /// laid out on the next free grid slot.
    pub fn add_device(&mut self, device_type: DeviceType) -> DeviceId {
        let count = self.current.devices.len();
        let id = self.fresh_device_id();
        let label = format!("{} {}", device_type.display_name(), count + 1);
        let position = Position::new(
            GRID_ORIGIN_X + (count as f64 * GRID_STEP_X) % GRID_ROW_WIDTH,
            GRID_ORIGIN_Y + (count / DEVICES_PER_ROW) as f64 * GRID_STEP_Y,
        );
        let device = Device::new(id.clone(), device_type, label)
            .with_cost(self.prices.devices.price_of(device_type))
            .with_position(position);

        debug!(device = %id, kind = device_type.display_name(), "added device");
        self.current.devices.push(device);
        self.commit();
        id
    }

    /// Link two existing devices with a cable of `length` metres.
    ///
    /// `length` must be finite and non-negative.
    pub fn connect(
        &mut self,
        source: &DeviceId,
        target: &DeviceId,
        connection_type: ConnectionType,
        length: f64,
    ) -> Result<ConnectionId> {
        for endpoint in [source, target] {
            if self.device(endpoint).is_none() {
                return Err(TopoError::device_not_found(endpoint.as_str()));
            }
        }
        if !length.is_finite() || length < 0.0 {
            return Err(TopoError::invalid_config(
                "length",
                format!("cable length must be a non-negative number, got {}", length),
            ));
        }

        let id = self.fresh_connection_id();
        let connection = Connection::new(id.clone(), source.clone(), target.clone())
            .with_type(connection_type)
            .with_length(length)
            .with_cost(self.prices.connections.cost_of(connection_type, length));

        debug!(connection = %id, %source, %target, "connected devices");
        self.current.connections.push(connection);
        self.commit();
        Ok(id)
    }

    /// Remove a device together with every connection touching it.
    pub fn remove_device(&mut self, id: &DeviceId) -> Result<Device> {
        let pos = self
            .current
            .devices
            .iter()
            .position(|d| &d.id == id)
            .ok_or_else(|| TopoError::device_not_found(id.as_str()))?;

        let device = self.current.devices.remove(pos);
        let before = self.current.connections.len();
        self.current.connections.retain(|c| !c.touches(id));

        debug!(
            device = %id,
            dropped_connections = before - self.current.connections.len(),
            "removed device"
        );
        self.commit();
        Ok(device)
    }

    pub fn remove_connection(&mut self, id: &ConnectionId) -> Result<Connection> {
        let pos = self
            .current
            .connections
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| TopoError::connection_not_found(id.as_str()))?;

        let connection = self.current.connections.remove(pos);
        self.commit();
        Ok(connection)
    }

    /// Replace the whole draft with a template's graph.
    pub fn load_template(&mut self, template: &BuilderTemplate) -> Result<()> {
        let mut seen = HashSet::with_capacity(template.devices.len());
        for device in &template.devices {
            if !seen.insert(&device.id) {
                return Err(GraphError::DuplicateDevice(device.id.to_string()).into());
            }
        }

        self.current = Snapshot {
            devices: template.devices.clone(),
            connections: template.connections.clone(),
        };
        debug!(template = %template.id, "loaded template");
        self.commit();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.current = Snapshot::default();
        self.commit();
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Step back one mutation. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        self.current = self.history[self.cursor].clone();
        true
    }

    /// Re-apply the last undone mutation.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        self.current = self.history[self.cursor].clone();
        true
    }

    /// Snapshot the draft as an export document.
    pub fn export(&self, name: impl Into<String>) -> TopologyExport {
        TopologyExport::new(
            name,
            self.current.devices.clone(),
            self.current.connections.clone(),
        )
    }

    fn commit(&mut self) {
        self.history.truncate(self.cursor + 1);
        self.history.push(self.current.clone());
        self.cursor = self.history.len() - 1;
    }

    // Ids are `d<n>`/`c<n>`, skipping any already used by a loaded template.
    fn fresh_device_id(&mut self) -> DeviceId {
        loop {
            self.next_device += 1;
            let id = DeviceId::new(format!("d{}", self.next_device));
            if self.device(&id).is_none() {
                return id;
            }
        }
    }

    fn fresh_connection_id(&mut self) -> ConnectionId {
        loop {
            self.next_connection += 1;
            let id = ConnectionId::new(format!("c{}", self.next_connection));
            if !self.current.connections.iter().any(|c| c.id == id) {
                return id;
            }
        }
    }
}
