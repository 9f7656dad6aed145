//! Stowage - schema-checked battery tables and a masked secret store.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── error             # Error types (schema, duplicate key, config)
//! ├── logging           # tracing subscriber setup
//! └── core/             # Core library components
//!     ├── config        # stowage.toml settings
//!     ├── constants     # Column names, separator, mask character
//!     ├── domain/       # Battery, LpVariable, KeyPolicy
//!     ├── format        # Canonical float formatting
//!     ├── frame         # Untyped named columns, TOML/JSON loading
//!     ├── table         # BatteryTable: validation, identifiers, projection
//!     ├── secret        # Secret trait, GenericSecret, DbSecret
//!     └── store         # SecretStore and generated add_* methods
//! ```
//!
//! # Features
//!
//! - Battery tables validated against a fixed schema at construction
//! - Composite `bus;voltage;connectors` identifiers derived once per table
//! - Projection to identifier-keyed variables with an explicit duplicate policy
//! - Secret store with one generated `add_*` method per secret variant
//! - Passwords masked in every `Display` and `Debug` rendering

pub mod core;
pub mod error;
pub mod logging;

pub use crate::core::config::Config;
pub use crate::core::domain::{Battery, BatteryRow, KeyPolicy, LpVariable};
pub use crate::core::frame::{Column, DType, Frame};
pub use crate::core::secret::{DbSecret, GenericSecret, Secret};
pub use crate::core::store::SecretStore;
pub use crate::core::table::BatteryTable;
pub use crate::error::{ConfigError, DuplicateKeyError, Error, Result, SchemaError};
