pub mod constants;
pub mod error;
pub mod math_utils;
pub mod pressure_utils;
pub mod water;
pub mod depth_converter;
pub mod gas;
pub mod deco;
pub mod calculators;
pub mod config;

pub use calculators::{AltitudeCalculator, NitroxCalculator};
pub use config::EnvironmentConfig;
pub use deco::{Compartment, Tissue, Tissues, ZHL16C_COMPARTMENTS};
pub use depth_converter::DepthConverter;
pub use error::{PhysicsError, Result};
pub use gas::{Gas, GasCategory, StandardGases};
pub use water::WaterType;
