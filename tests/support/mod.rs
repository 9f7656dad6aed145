//! Test support utilities for stowage integration tests.
//!
//! Provides fixture paths and the standard sample data.

#![allow(dead_code)]

use std::path::PathBuf;

use stowage::BatteryTable;

/// Bus names used by the standard sample table.
pub const SAMPLE_BUS: [&str; 3] = ["a", "b", "c"];

/// Voltages used by the standard sample table.
pub const SAMPLE_VOLTAGE: [f64; 3] = [0.8, 1.5, 3.1];

/// Connector counts used by the standard sample table.
pub const SAMPLE_CONNECTORS: [i64; 3] = [1, 2, 5];

/// Path to a file under `tests/fixtures/`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The standard three-row sample table.
pub fn sample_table() -> BatteryTable {
    BatteryTable::new(
        SAMPLE_BUS.to_vec(),
        SAMPLE_VOLTAGE.to_vec(),
        SAMPLE_CONNECTORS.to_vec(),
    )
    .expect("sample table is valid")
}
