mod describe;
mod lookup;
mod normalize;

pub use describe::describe;
pub use lookup::lookup;
pub use normalize::normalize_unit;
