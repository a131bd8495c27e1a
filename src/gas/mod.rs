pub mod gas_mix;
pub mod standard_gases;

pub use gas_mix::{AIR_NAME, Gas, GasCategory, OXYGEN_NAME, partial_pressure};
pub use standard_gases::{STANDARD_GASES, StandardGas, StandardGases};
