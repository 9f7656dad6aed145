//! Domain types.

mod battery;
mod policy;
mod variable;

pub use battery::{Battery, BatteryRow};
pub(crate) use battery::compose_identifier;
pub use policy::KeyPolicy;
pub use variable::LpVariable;
