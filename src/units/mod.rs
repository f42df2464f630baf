mod global;
mod lookup;
mod model;
mod registry;

pub use global::get_registry;
pub use model::{QuantityKind, UnitEntry};
pub use registry::{LoadError, UnitsRegistry};
