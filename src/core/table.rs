//! Battery table.
//!
//! A [`BatteryTable`] owns three typed columns (`bus`, `voltage`,
//! `connectors`) plus the derived `identifier` column. The columns are checked
//! against the fixed battery schema exactly once, when the table is built, and
//! the table is immutable afterwards: identifiers can never drift from the
//! fields they are derived from.
//!
//! # Example
//!
//! ```
//! use stowage::BatteryTable;
//!
//! let table = BatteryTable::new(vec!["a", "b"], vec![0.8, 1.5], vec![1, 2]).unwrap();
//! assert_eq!(table.identifiers(), ["a;0.8;1", "b;1.5;2"]);
//!
//! let variables = table.to_variable_map().unwrap();
//! assert_eq!(variables["b;1.5;2"].y, 2);
//! ```

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::core::config::Config;
use crate::core::constants::{BATTERY_SCHEMA, BUS, CONNECTORS, IDENTIFIER, VOLTAGE};
use crate::core::domain::{compose_identifier, Battery, BatteryRow, KeyPolicy, LpVariable};
use crate::core::frame::{Column, Frame};
use crate::error::{DuplicateKeyError, Result, SchemaError};

/// Schema-checked table of battery records.
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryTable {
    bus: Vec<String>,
    voltage: Vec<f64>,
    connectors: Vec<i64>,
    identifier: Vec<String>,
}

impl BatteryTable {
    /// Build a table from column arrays.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::LengthMismatch` if the columns differ in length.
    pub fn new<S: Into<String>>(
        bus: Vec<S>,
        voltage: Vec<f64>,
        connectors: Vec<i64>,
    ) -> Result<Self> {
        let bus: Vec<String> = bus.into_iter().map(Into::into).collect();

        for (column, len) in [(VOLTAGE, voltage.len()), (CONNECTORS, connectors.len())] {
            if len != bus.len() {
                debug!(column, expected = bus.len(), actual = len, "column length mismatch");
                return Err(SchemaError::LengthMismatch {
                    column: column.to_string(),
                    expected: bus.len(),
                    actual: len,
                }
                .into());
            }
        }

        Ok(Self::derive(bus, voltage, connectors))
    }

    /// Build a one-row table.
    ///
    /// Equivalent to [`BatteryTable::new`] with singleton arrays.
    pub fn single(bus: impl Into<String>, voltage: f64, connectors: i64) -> Self {
        Self::derive(vec![bus.into()], vec![voltage], vec![connectors])
    }

    /// Build a table from typed records, in iteration order.
    pub fn from_rows(rows: impl IntoIterator<Item = Battery>) -> Self {
        let mut bus = Vec::new();
        let mut voltage = Vec::new();
        let mut connectors = Vec::new();

        for row in rows {
            bus.push(row.bus);
            voltage.push(row.voltage);
            connectors.push(row.connectors);
        }

        Self::derive(bus, voltage, connectors)
    }

    /// Build a table from an untyped frame, checking it against the schema.
    ///
    /// The frame must hold exactly the `bus` (string), `voltage` (float64) and
    /// `connectors` (int64) columns, all of the same length. Column order does
    /// not matter. An `identifier` column is rejected like any other unknown
    /// column since identifiers are always derived. An empty column matches
    /// any expected dtype, so an empty document loads as an empty table.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::TypeMismatch`, `MissingColumn`, `UnexpectedColumn`
    /// or `LengthMismatch` describing the first problem found.
    pub fn from_frame(frame: Frame) -> Result<Self> {
        let mut bus = None;
        let mut voltage = None;
        let mut connectors = None;

        for (name, column) in frame.into_columns() {
            match (name.as_str(), column) {
                (BUS, Column::String(values)) => bus = Some(values),
                (VOLTAGE, Column::Float64(values)) => voltage = Some(values),
                (CONNECTORS, Column::Int64(values)) => connectors = Some(values),
                // an empty document array carries no dtype of its own
                (BUS, column) if column.is_empty() => bus = Some(Vec::new()),
                (VOLTAGE, column) if column.is_empty() => voltage = Some(Vec::new()),
                (CONNECTORS, column) if column.is_empty() => connectors = Some(Vec::new()),
                (name, column) => {
                    let err = schema_violation(name, &column);
                    debug!(error = %err, "frame rejected");
                    return Err(err.into());
                }
            }
        }

        let bus = bus.ok_or_else(|| SchemaError::MissingColumn(BUS.to_string()))?;
        let voltage = voltage.ok_or_else(|| SchemaError::MissingColumn(VOLTAGE.to_string()))?;
        let connectors =
            connectors.ok_or_else(|| SchemaError::MissingColumn(CONNECTORS.to_string()))?;

        Self::new(bus, voltage, connectors)
    }

    /// Compute the identifier column. Lengths must already agree.
    fn derive(bus: Vec<String>, voltage: Vec<f64>, connectors: Vec<i64>) -> Self {
        let identifier: Vec<String> = bus
            .iter()
            .zip(&voltage)
            .zip(&connectors)
            .map(|((b, v), c)| compose_identifier(b, *v, *c))
            .collect();

        debug!(rows = identifier.len(), "battery table built");

        Self {
            bus,
            voltage,
            connectors,
            identifier,
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.identifier.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.identifier.is_empty()
    }

    pub fn bus(&self) -> &[String] {
        &self.bus
    }

    pub fn voltage(&self) -> &[f64] {
        &self.voltage
    }

    pub fn connectors(&self) -> &[i64] {
        &self.connectors
    }

    /// Derived identifiers, one per row
    pub fn identifiers(&self) -> &[String] {
        &self.identifier
    }

    /// Row at `index`, if any
    pub fn get(&self, index: usize) -> Option<BatteryRow<'_>> {
        Some(BatteryRow {
            bus: self.bus.get(index)?,
            voltage: *self.voltage.get(index)?,
            connectors: *self.connectors.get(index)?,
            identifier: self.identifier.get(index)?,
        })
    }

    /// Iterate rows in order
    pub fn rows(&self) -> impl Iterator<Item = BatteryRow<'_>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Copy the table into a frame, including the identifier column
    pub fn to_frame(&self) -> Frame {
        Frame::new()
            .with_column(BUS, self.bus.clone())
            .with_column(VOLTAGE, self.voltage.clone())
            .with_column(CONNECTORS, self.connectors.clone())
            .with_column(IDENTIFIER, self.identifier.clone())
    }

    /// Project rows into an identifier -> variable map.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKeyError` if two rows share an identifier.
    pub fn to_variable_map(&self) -> Result<BTreeMap<String, LpVariable>> {
        self.to_variable_map_with(KeyPolicy::Reject)
    }

    /// Project rows using an explicit duplicate policy.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKeyError` only under `KeyPolicy::Reject`.
    pub fn to_variable_map_with(&self, policy: KeyPolicy) -> Result<BTreeMap<String, LpVariable>> {
        generate_variables(self.rows(), policy)
    }

    /// Project rows using the duplicate policy from settings.
    ///
    /// # Errors
    ///
    /// Same as [`BatteryTable::to_variable_map_with`].
    pub fn to_variable_map_configured(
        &self,
        config: &Config,
    ) -> Result<BTreeMap<String, LpVariable>> {
        self.to_variable_map_with(config.table.duplicate_keys)
    }
}

/// Map each row's identifier to an [`LpVariable`] of its voltage and
/// connector count.
///
/// # Errors
///
/// Returns `DuplicateKeyError` if two rows share an identifier and `policy`
/// is `KeyPolicy::Reject`.
pub fn generate_variables<'a>(
    rows: impl IntoIterator<Item = BatteryRow<'a>>,
    policy: KeyPolicy,
) -> Result<BTreeMap<String, LpVariable>> {
    let mut seen: BTreeMap<String, (usize, LpVariable)> = BTreeMap::new();

    for (index, row) in rows.into_iter().enumerate() {
        let variable = LpVariable::new(row.voltage, row.connectors);

        match seen.entry(row.identifier.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert((index, variable));
            }
            Entry::Occupied(mut slot) => match policy {
                KeyPolicy::Reject => {
                    let err = DuplicateKeyError {
                        identifier: slot.key().clone(),
                        first_row: slot.get().0,
                        second_row: index,
                    };
                    debug!(error = %err, "projection rejected");
                    return Err(err.into());
                }
                KeyPolicy::KeepFirst => {
                    trace!(identifier = row.identifier, row = index, "duplicate skipped");
                }
                KeyPolicy::KeepLast => {
                    trace!(identifier = row.identifier, row = index, "duplicate overwrites");
                    slot.insert((index, variable));
                }
            },
        }
    }

    debug!(variables = seen.len(), %policy, "generated variables");

    Ok(seen
        .into_iter()
        .map(|(identifier, (_, variable))| (identifier, variable))
        .collect())
}

fn schema_violation(name: &str, column: &Column) -> SchemaError {
    match BATTERY_SCHEMA.iter().find(|(n, _)| *n == name) {
        Some((_, expected)) => SchemaError::TypeMismatch {
            column: name.to_string(),
            expected: *expected,
            actual: column.dtype(),
        },
        None => SchemaError::UnexpectedColumn(name.to_string()),
    }
}
