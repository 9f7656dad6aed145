//! Battery record type.
//!
//! The typed row contract for battery tables: callers hand over named fields
//! instead of an arbitrary frame-shaped value.

use serde::{Deserialize, Serialize};

use crate::core::constants::IDENTIFIER_SEPARATOR;
use crate::core::format::format_float;

/// One battery placement candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    pub bus: String,
    pub voltage: f64,
    pub connectors: i64,
}

impl Battery {
    /// Create a new battery record
    pub fn new(bus: impl Into<String>, voltage: f64, connectors: i64) -> Self {
        Self {
            bus: bus.into(),
            voltage,
            connectors,
        }
    }

    /// Composite identifier `bus;voltage;connectors`
    pub fn identifier(&self) -> String {
        compose_identifier(&self.bus, self.voltage, self.connectors)
    }
}

/// Join the three battery fields into a composite identifier.
pub(crate) fn compose_identifier(bus: &str, voltage: f64, connectors: i64) -> String {
    format!(
        "{bus}{sep}{voltage}{sep}{connectors}",
        bus = bus,
        sep = IDENTIFIER_SEPARATOR,
        voltage = format_float(voltage),
        connectors = connectors,
    )
}

/// Borrowed view of a single table row, including its derived identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryRow<'a> {
    pub bus: &'a str,
    pub voltage: f64,
    pub connectors: i64,
    pub identifier: &'a str,
}

impl BatteryRow<'_> {
    /// Copy the row out into an owned record
    pub fn to_battery(&self) -> Battery {
        Battery::new(self.bus, self.voltage, self.connectors)
    }
}
