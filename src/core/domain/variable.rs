//! Projection value object.

use serde::{Deserialize, Serialize};

/// Lightweight optimisation variable derived from a battery row.
///
/// `x` carries the voltage, `y` the connector count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LpVariable {
    pub x: f64,
    pub y: i64,
}

impl LpVariable {
    pub fn new(x: f64, y: i64) -> Self {
        Self { x, y }
    }
}
