//! Core library components.
//!
//! Battery tables and the secret store, plus the frame, formatting and
//! settings code they share.

pub mod config;
pub mod constants;
pub mod domain;
pub mod format;
pub mod frame;
pub mod secret;
pub mod store;
pub mod table;
