pub mod quantity;
pub mod unit;

pub use quantity::*;
pub use unit::*;
