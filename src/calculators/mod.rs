pub mod altitude_calculator;
pub mod nitrox_calculator;

pub use altitude_calculator::AltitudeCalculator;
pub use nitrox_calculator::NitroxCalculator;
