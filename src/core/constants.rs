//! Constants used throughout stowage.
//!
//! Centralizes separators, column names and environment variable names.

use crate::core::frame::DType;

/// Separator joining the parts of a composite identifier.
pub const IDENTIFIER_SEPARATOR: &str = ";";

/// Character repeated once per password character in masked output.
pub const MASK_CHAR: char = '*';

/// Bus column name.
pub const BUS: &str = "bus";

/// Voltage column name.
pub const VOLTAGE: &str = "voltage";

/// Connectors column name.
pub const CONNECTORS: &str = "connectors";

/// Derived identifier column name.
pub const IDENTIFIER: &str = "identifier";

/// Expected battery table schema, in column order.
pub const BATTERY_SCHEMA: &[(&str, DType)] = &[
    (BUS, DType::String),
    (VOLTAGE, DType::Float64),
    (CONNECTORS, DType::Int64),
];

/// Settings file name (stowage.toml).
pub const CONFIG_FILE: &str = "stowage.toml";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "STOWAGE_LOG";
